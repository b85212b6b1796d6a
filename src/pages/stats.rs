//! Statistics Page
//!
//! Monitoring indicators as cards with proportional bars.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use super::{LoadState, LOADING_TEXT};
use crate::api;
use crate::models::{StatBlock, StatsSnapshot};

const FAILURE_MESSAGE: &str =
    "Lo lamentamos, no hemos podido cargar este contenido, por favor intentelo más tarde.";

/// Share of each indicator's case count over the three combined, in percent
pub fn distribution(stats: &StatsSnapshot) -> [f64; 3] {
    let counts = [stats.on_time.casos, stats.overdue.casos, stats.without_collaboration.casos];
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return [0.0; 3];
    }
    counts.map(|c| f64::from(c) * 100.0 / f64::from(total))
}

fn bar_style(percent: f64) -> String {
    format!("width: {:.1}%", percent)
}

#[component]
fn StatCard(title: &'static str, tone: &'static str, block: StatBlock) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{}", tone)>
            <h3 class="stat-title">{title}</h3>
            <p class="stat-percent">{format!("{:.1}%", block.percent())}</p>
            <p class="stat-cases">{format!("{} de {} casos", block.casos, block.total_casos)}</p>
            <p class="stat-rest">{format!("Resto: {:.1}%", block.remainder())}</p>
            <div class="stat-bar">
                <div class="stat-bar-fill" style=bar_style(block.percent())></div>
            </div>
        </div>
    }
}

#[component]
pub fn StatsPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<StatsSnapshot>::Loading);

    let load = move || {
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::obtain_stats().await;
            if let Err(e) = &result {
                warn!("[STATS] Could not load indicators: {}", e);
            }
            state.try_set(LoadState::from_result(result));
        });
    };
    Effect::new(move |_| load());

    view! {
        <section class="page">
            <h2 class="page-title">"Estadísticas"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(_) => view! {
                    <div class="error-panel">
                        <p class="error-message">{FAILURE_MESSAGE}</p>
                        <button type="button" class="error-action-btn" on:click=move |_| load()>
                            "Reintentar"
                        </button>
                    </div>
                }
                .into_any(),
                LoadState::Ready(stats) => {
                    let [on_time, overdue, missing] = distribution(&stats);
                    view! {
                        <div class="stat-grid">
                            <StatCard title="En Término" tone="green" block=stats.on_time />
                            <StatCard title="Fuera de Plazo" tone="red" block=stats.overdue />
                            <StatCard title="Sin Colaboración" tone="yellow" block=stats.without_collaboration />
                        </div>
                        <div class="stat-distribution">
                            <h3 class="stat-title">"Distribución de casos"</h3>
                            <div class="stat-stack">
                                <div class="stat-stack-green" style=bar_style(on_time)></div>
                                <div class="stat-stack-red" style=bar_style(overdue)></div>
                                <div class="stat-stack-yellow" style=bar_style(missing)></div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(casos: u32) -> StatBlock {
        StatBlock {
            total_casos: 10,
            casos,
            promedio_porcentaje: f64::from(casos) * 10.0,
        }
    }

    #[test]
    fn test_distribution_shares() {
        let stats = StatsSnapshot {
            on_time: block(2),
            overdue: block(1),
            without_collaboration: block(1),
        };
        assert_eq!(distribution(&stats), [50.0, 25.0, 25.0]);
    }

    #[test]
    fn test_distribution_without_cases() {
        assert_eq!(distribution(&StatsSnapshot::default()), [0.0; 3]);
    }

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style(37.5), "width: 37.5%");
    }
}
