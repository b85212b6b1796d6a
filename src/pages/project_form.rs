//! Submit Project Page
//!
//! Project title, description and a dynamic list of task groups. On submit
//! the field values are read from the form element, validated into a
//! [`ProjectPayload`](crate::models::ProjectPayload) and posted.

use chrono::{Local, Utc};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info, warn};
use web_sys::{FormData, HtmlFormElement};

use crate::api;
use crate::components::{AppendButton, RemoveButton, ResultBanner, TaskGroup, TextArea};
use crate::error::{ApiError, Banner};
use crate::tasks::{build_payload, FormValues, TaskId, TaskList, DEFAULT_TASK, PROJECT_DESCRIPTION, PROJECT_TITLE};

const SUCCESS_MESSAGE: &str = "Proyecto creado exitosamente!";
const FAILURE_MESSAGE: &str = "Error en la petición";

/// Failure banner for a rejected submit: the server's text when it sent one
fn submit_failure(err: &ApiError) -> Banner {
    if err.message.trim().is_empty() {
        Banner::failure(FAILURE_MESSAGE)
    } else {
        Banner::failure(err.message.clone())
    }
}

/// Read every named field the pipeline needs; absent fields are skipped
fn read_form_values(form: &HtmlFormElement, names: &[String]) -> Option<FormValues> {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            error!("[FORM] Could not read form data: {:?}", e);
            return None;
        }
    };
    let mut values = FormValues::new();
    for name in names {
        if let Some(value) = data.get(name).as_string() {
            values.insert(name.clone(), value);
        }
    }
    Some(values)
}

#[component]
pub fn ProjectFormPage() -> impl IntoView {
    let tasks = RwSignal::new(TaskList::new());
    // Bumped after a successful submit so the form renders from scratch
    let generation = RwSignal::new(0u32);
    let banner = RwSignal::new(None::<Banner>);
    let (pending, set_pending) = signal(false);
    let form_ref = NodeRef::<html::Form>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let list = tasks.get_untracked();
        let Some(values) = read_form_values(&form, &list.field_names()) else {
            banner.set(Some(Banner::failure(FAILURE_MESSAGE)));
            return;
        };
        let payload = match build_payload(&values, &list, &Local, Utc::now()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("[FORM] Rejected before sending: {}", e);
                banner.set(Some(Banner::failure(e.to_string())));
                return;
            }
        };

        info!("[FORM] Submitting project {:?} with {} stages", payload.name, payload.stages.len());
        set_pending.set(true);
        spawn_local(async move {
            match api::create_project(&payload).await {
                Ok(()) => {
                    banner.try_set(Some(Banner::success(SUCCESS_MESSAGE)));
                    tasks.try_update(|t| t.clear());
                    generation.try_update(|g| *g += 1);
                }
                Err(e) => {
                    error!("[FORM] Project was not created: {}", e);
                    banner.try_set(Some(submit_failure(&e)));
                }
            }
            set_pending.try_set(false);
        });
    };

    let append = Callback::new(move |_| {
        tasks.update(|t| {
            let id = t.append();
            info!("[FORM] Appended task {} ({} groups)", id, t.len());
        });
    });

    view! {
        <section class="page">
            <h2 class="page-title">"Presentar Proyecto"</h2>
            <ResultBanner banner=banner failure_title="Ha ocurrido un error creando el proyecto." />
            {move || {
                generation.track();
                view! {
                    <form class="project-form" node_ref=form_ref on:submit=submit>
                        <input
                            class="field-input title-input"
                            type="text"
                            name=PROJECT_TITLE
                            placeholder="Nombre del Proyecto"
                            required
                        />
                        <TextArea label=PROJECT_DESCRIPTION scope=DEFAULT_TASK.get() optional=true />
                        <div class="task-grid">
                            <TaskGroup task=DEFAULT_TASK />
                            <For
                                each=move || tasks.with(|t| t.extra().to_vec())
                                key=|id: &TaskId| *id
                                children=move |id: TaskId| view! {
                                    <TaskGroup task=id>
                                        <RemoveButton on_click=Callback::new(move |_| {
                                            tasks.update(|t| {
                                                t.remove(id);
                                            });
                                        }) />
                                    </TaskGroup>
                                }
                            />
                            <AppendButton on_click=append />
                        </div>
                        <button type="submit" class="primary-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "Enviando..." } else { "Presentar Proyecto" }}
                        </button>
                    </form>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiErrorKind, NETWORK_MESSAGE};

    #[test]
    fn test_submit_failure_message() {
        let server = ApiError::from_status(400, Some("El nombre ya existe"), false);
        assert_eq!(submit_failure(&server).message, "El nombre ya existe");
        assert_eq!(submit_failure(&ApiError::network()).message, NETWORK_MESSAGE);
        let blank = ApiError::new(ApiErrorKind::UnknownError, " ");
        assert_eq!(submit_failure(&blank).message, FAILURE_MESSAGE);
    }
}
