//! Contributed Stages Page
//!
//! In-progress stages the organization committed to, each finishable.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use super::{LoadState, LOADING_TEXT};
use crate::api;
use crate::components::{ConfirmButton, ErrorPanel, ResultBanner, StageCard};
use crate::error::Banner;
use crate::listing::remove_stage;
use crate::models::Stage;

const EMPTY_MESSAGE: &str = "No hay etapas en progreso.";

#[component]
pub fn OwnedStagesPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Stage>>::Loading);
    let banner = RwSignal::new(None::<Banner>);

    let load = move || {
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_in_progress_stages().await;
            state.try_set(LoadState::from_result(result));
        });
    };
    Effect::new(move |_| load());

    let finish = move |id: u32| {
        spawn_local(async move {
            match api::finish_stage(id).await {
                Ok(()) => {
                    info!("[STAGES] Stage {} finished", id);
                    state.try_update(|s| {
                        if let Some(list) = s.ready_mut() {
                            remove_stage(list, id);
                        }
                    });
                    banner.try_set(Some(Banner::success("La etapa fue finalizada.")));
                }
                Err(e) => {
                    banner.try_set(Some(Banner::from_error(&e, "finalizar etapas", "No se pudo finalizar la etapa.")));
                }
            }
        });
    };

    view! {
        <section class="page">
            <h2 class="page-title">"Mis Contribuciones"</h2>
            <ResultBanner banner=banner failure_title="Ha ocurrido un error finalizando la etapa." />
            {move || match state.get() {
                LoadState::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(error) => view! {
                    <ErrorPanel error=error not_found_message=EMPTY_MESSAGE on_retry=Callback::new(move |_| load()) />
                }
                .into_any(),
                LoadState::Ready(stages) if stages.is_empty() => {
                    view! { <p class="empty">{EMPTY_MESSAGE}</p> }.into_any()
                }
                LoadState::Ready(stages) => view! {
                    <div class="stage-grid">
                        {stages.into_iter().map(|stage| {
                            let id = stage.id;
                            view! {
                                <StageCard stage=stage>
                                    <ConfirmButton
                                        label="Finalizar Etapa"
                                        button_class="primary-btn"
                                        on_confirm=Callback::new(move |_| finish(id))
                                    />
                                </StageCard>
                            }
                        }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
