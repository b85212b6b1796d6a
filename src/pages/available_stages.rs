//! Available Stages Page
//!
//! Stages still waiting for a contribution, grouped by project.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use super::{LoadState, LOADING_TEXT};
use crate::api;
use crate::components::{ConfirmButton, ErrorPanel, ResultBanner, StageCard};
use crate::error::Banner;
use crate::listing::{group_by_project, remove_stage};
use crate::models::Stage;

const EMPTY_MESSAGE: &str = "No hay etapas a las que contribuir aún.";

#[component]
pub fn AvailableStagesPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Stage>>::Loading);
    let banner = RwSignal::new(None::<Banner>);

    let load = move || {
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_available_stages().await;
            state.try_set(LoadState::from_result(result));
        });
    };
    Effect::new(move |_| load());

    let cover = move |id: u32| {
        spawn_local(async move {
            match api::cover_stage(id).await {
                Ok(()) => {
                    info!("[STAGES] Stage {} covered", id);
                    state.try_update(|s| {
                        if let Some(list) = s.ready_mut() {
                            remove_stage(list, id);
                        }
                    });
                    banner.try_set(Some(Banner::success("Contribución registrada con éxito.")));
                }
                Err(e) => {
                    banner.try_set(Some(Banner::from_error(
                        &e,
                        "cubrir etapas",
                        "No se pudo registrar la contribución.",
                    )));
                }
            }
        });
    };

    view! {
        <section class="page">
            <h2 class="page-title">"Etapas Disponibles"</h2>
            <ResultBanner banner=banner failure_title="Ha ocurrido un error confirmando la contribución." />
            {move || match state.get() {
                LoadState::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(error) => view! {
                    <ErrorPanel error=error not_found_message=EMPTY_MESSAGE on_retry=Callback::new(move |_| load()) />
                }
                .into_any(),
                LoadState::Ready(stages) if stages.is_empty() => {
                    view! { <p class="empty">{EMPTY_MESSAGE}</p> }.into_any()
                }
                LoadState::Ready(stages) => group_by_project(&stages)
                    .into_iter()
                    .map(|group| view! {
                        <div class="project-group">
                            <h3 class="project-group-title">{format!("Proyecto #{}", group.project_id)}</h3>
                            <div class="stage-grid">
                                {group.stages.into_iter().map(|stage| {
                                    let id = stage.id;
                                    view! {
                                        <StageCard stage=stage>
                                            <ConfirmButton
                                                label="Cubrir Contribución"
                                                button_class="primary-btn"
                                                on_confirm=Callback::new(move |_| cover(id))
                                            />
                                        </StageCard>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
