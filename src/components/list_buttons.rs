//! Append / Remove Buttons
//!
//! Affordances of the dynamic task list.

use leptos::prelude::*;

/// Card-sized "+" button that appends a task group
#[component]
pub fn AppendButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button type="button" class="append-btn" title="Agregar tarea" on:click=move |_| on_click.run(())>
            <span class="append-btn-icon">"+"</span>
        </button>
    }
}

/// Corner "×" button that removes its task group
#[component]
pub fn RemoveButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button type="button" class="remove-btn" title="Quitar tarea" on:click=move |_| on_click.run(())>
            "×"
        </button>
    }
}
