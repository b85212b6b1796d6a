//! Text Input Component
//!
//! Single-line input named `<label><scope>`.

use leptos::prelude::*;

use crate::tasks::field_name;

/// Labelled text input
///
/// # Arguments
/// * `label` - placeholder and field name prefix
/// * `scope` - identity appended to the field name
/// * `input_type` - HTML input type, "text" when omitted
/// * `on_input` - called with the new value on every keystroke
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    scope: u32,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let name = field_name(&label, scope);
    view! {
        <input
            class="field-input"
            placeholder=label
            name=name.clone()
            id=name
            type=input_type.unwrap_or_else(|| "text".to_string())
            required
            on:input=move |ev| {
                if let Some(cb) = on_input {
                    cb.run(event_target_value(&ev));
                }
            }
        />
    }
}
