//! Observations Page
//!
//! Observations the board raised against the organization's projects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use super::{LoadState, LOADING_TEXT};
use crate::api;
use crate::components::{ErrorPanel, ResultBanner};
use crate::error::Banner;
use crate::listing::mark_resolved;
use crate::models::{Observation, ObservationStatus};

const EMPTY_MESSAGE: &str = "No se encontraron observaciones asociadas a tus proyectos.";

#[component]
pub fn ObservationsPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Observation>>::Loading);
    let banner = RwSignal::new(None::<Banner>);

    let load = move || {
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_observations_by_user().await;
            state.try_set(LoadState::from_result(result));
        });
    };
    Effect::new(move |_| load());

    let resolve = move |id: u32| {
        spawn_local(async move {
            match api::resolve_observation(id).await {
                Ok(()) => {
                    info!("[OBSERVATIONS] Observation {} resolved", id);
                    state.try_update(|s| {
                        if let Some(list) = s.ready_mut() {
                            mark_resolved(list, id);
                        }
                    });
                    banner.try_set(Some(Banner::success("La observación fue marcada como resuelta.")));
                }
                Err(e) => {
                    banner.try_set(Some(Banner::from_error(
                        &e,
                        "resolver observaciones",
                        "No se pudo resolver la observación.",
                    )));
                }
            }
        });
    };

    view! {
        <section class="page">
            <h2 class="page-title">"Observaciones"</h2>
            <ResultBanner banner=banner failure_title="Ha ocurrido un error resolviendo la observación." />
            {move || match state.get() {
                LoadState::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(error) => view! {
                    <ErrorPanel error=error not_found_message=EMPTY_MESSAGE on_retry=Callback::new(move |_| load()) />
                }
                .into_any(),
                LoadState::Ready(list) if list.is_empty() => {
                    view! { <p class="empty">{EMPTY_MESSAGE}</p> }.into_any()
                }
                LoadState::Ready(list) => view! {
                    <ul class="observation-list">
                        {list.into_iter().map(|obs| {
                            let id = obs.id;
                            let resolved = obs.status == ObservationStatus::Resolved;
                            view! {
                                <li class="observation-item">
                                    <div class="observation-head">
                                        <h4>{obs.name}</h4>
                                        <span class=obs.status.badge_class()>{obs.status.label()}</span>
                                    </div>
                                    {obs.project_name.map(|p| view! { <p class="observation-project">{p}</p> })}
                                    {obs.description.map(|d| view! { <p class="observation-description">{d}</p> })}
                                    <Show when=move || !resolved>
                                        <button type="button" class="outline-btn" on:click=move |_| resolve(id)>
                                            "Marcar como resuelta"
                                        </button>
                                    </Show>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
