//! Observation Dialog Component
//!
//! Button + modal form a board member uses to raise an observation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::api;
use crate::components::{TextArea, TextInput};

const NAME_LABEL: &str = "Nombre";
const DESCRIPTION_LABEL: &str = "Descripción";

#[component]
pub fn ObservationDialog(project_id: u32) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (message, set_message) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let (n, d) = (name.get_untracked(), description.get_untracked());
        set_pending.set(true);
        spawn_local(async move {
            match api::add_observation(project_id, &n, &d).await {
                Ok(()) => {
                    info!("[REVIEW] Observation added to project {}", project_id);
                    name.try_set(String::new());
                    description.try_set(String::new());
                    set_message.try_set(None);
                    set_open.try_set(false);
                }
                Err(e) => {
                    let text = if e.message.trim().is_empty() {
                        "Ocurrió un error inesperado".to_string()
                    } else {
                        e.message
                    };
                    set_message.try_set(Some(text));
                }
            }
            set_pending.try_set(false);
        });
    };

    view! {
        <button type="button" class="outline-btn" on:click=move |_| set_open.update(|o| *o = !*o)>
            "Agregar Observación"
        </button>
        <Show when=move || open.get()>
            <div class="modal">
                <div class="modal-card">
                    <h3 class="modal-title">"Observación"</h3>
                    <form class="modal-form" on:submit=submit>
                        <TextInput
                            label=NAME_LABEL
                            scope=0
                            on_input=Callback::new(move |v: String| name.set(v))
                        />
                        <TextArea
                            label=DESCRIPTION_LABEL
                            scope=0
                            on_input=Callback::new(move |v: String| description.set(v))
                        />
                        {move || message.get().map(|m| view! { <div class="inline-error">{m}</div> })}
                        <button type="submit" class="outline-btn" disabled=move || pending.get()>
                            "Agregar Observación"
                        </button>
                    </form>
                </div>
                <button type="button" class="modal-backdrop" on:click=move |_| set_open.set(false)></button>
            </div>
        </Show>
    }
}
