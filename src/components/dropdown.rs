//! Dropdown Component
//!
//! Click-to-open option list backed by a hidden input, so the chosen value
//! travels with the form like any other field.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::tasks::field_name;

/// Dropdown selector
///
/// # Arguments
/// * `label` - text shown until something is picked, and field name prefix
/// * `options` - `(value, text)` pairs
/// * `on_select` - called with the chosen value
#[component]
pub fn Dropdown(
    #[prop(into)] label: String,
    scope: u32,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (selected, set_selected) = signal::<Option<(&'static str, &'static str)>>(None);
    let container = NodeRef::<html::Div>::new();

    // Close when clicking anywhere outside
    let handle = window_event_listener(ev::mousedown, move |ev| {
        let Some(el) = container.get_untracked() else { return };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| el.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            set_is_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let name = field_name(&label, scope);
    let placeholder = label.clone();

    view! {
        <div class="dropdown" node_ref=container>
            <input type="hidden" name=name prop:value=move || selected.get().map(|(v, _)| v).unwrap_or_default() />
            <div class="dropdown-header" on:click=move |_| set_is_open.update(|o| *o = !*o)>
                {move || selected.get().map(|(_, text)| text.to_string()).unwrap_or_else(|| placeholder.clone())}
                <span class=move || if is_open.get() { "dropdown-caret open" } else { "dropdown-caret" }></span>
            </div>
            <Show when=move || is_open.get()>
                <ul class="dropdown-list">
                    {options.iter().map(|&(value, text)| {
                        view! {
                            <li
                                class="dropdown-option"
                                on:click=move |_| {
                                    set_selected.set(Some((value, text)));
                                    set_is_open.set(false);
                                    if let Some(cb) = on_select {
                                        cb.run(value.to_string());
                                    }
                                }
                            >
                                {text}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
