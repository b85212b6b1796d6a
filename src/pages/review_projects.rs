//! Projects Under Review Page
//!
//! Board view: every submitted project with its stages. Observations are
//! raised per project and the round is closed with "Concluir Observaciones".

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use super::{LoadState, LOADING_TEXT};
use crate::api;
use crate::components::{ErrorPanel, ObservationDialog, ResultBanner, StageCard};
use crate::error::Banner;
use crate::listing::sort_project_stages;
use crate::models::Project;

const EMPTY_MESSAGE: &str = "No hay proyectos para revisar.";

#[component]
pub fn ReviewProjectsPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Project>>::Loading);
    let banner = RwSignal::new(None::<Banner>);
    let (finalizing, set_finalizing) = signal(false);

    let load = move || {
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_projects_with_stages().await.map(|mut projects| {
                sort_project_stages(&mut projects);
                projects
            });
            state.try_set(LoadState::from_result(result));
        });
    };
    Effect::new(move |_| load());

    let finalize = move |_| {
        set_finalizing.set(true);
        spawn_local(async move {
            let next = match api::finalize_review().await {
                Ok(message) => {
                    info!("[REVIEW] Review round closed");
                    Banner::success(message.unwrap_or_else(|| "Las observaciones fueron enviadas.".to_string()))
                }
                Err(e) => Banner::from_error(&e, "concluir la revisión", "No se pudo concluir la revisión."),
            };
            banner.try_set(Some(next));
            set_finalizing.try_set(false);
        });
    };

    view! {
        <section class="page">
            <div class="page-head">
                <h2 class="page-title">"Proyectos"</h2>
                <button type="button" class="primary-btn" disabled=move || finalizing.get() on:click=finalize>
                    "Concluir Observaciones"
                </button>
            </div>
            <ResultBanner banner=banner failure_title="Ha ocurrido un error concluyendo la revisión." />
            {move || match state.get() {
                LoadState::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(error) => view! {
                    <ErrorPanel error=error not_found_message=EMPTY_MESSAGE on_retry=Callback::new(move |_| load()) />
                }
                .into_any(),
                LoadState::Ready(projects) if projects.is_empty() => {
                    view! { <p class="empty">{EMPTY_MESSAGE}</p> }.into_any()
                }
                LoadState::Ready(projects) => projects
                    .into_iter()
                    .map(|project| view! {
                        <article class="project-card">
                            <div class="project-head">
                                <h3 class="project-name">{project.name}</h3>
                                <ObservationDialog project_id=project.id />
                            </div>
                            <p class="project-description">{project.description}</p>
                            <div class="stage-grid">
                                {project.stages.into_iter().map(|stage| view! { <StageCard stage=stage /> }).collect_view()}
                            </div>
                        </article>
                    })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
