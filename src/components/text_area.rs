//! Text Area Component

use leptos::prelude::*;

use crate::tasks::field_name;

/// Multi-line input named `<label><scope>`; `optional` drops `required`
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    scope: u32,
    #[prop(optional)] optional: bool,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let name = field_name(&label, scope);
    view! {
        <textarea
            class="field-textarea"
            placeholder=label
            name=name.clone()
            id=name
            required=!optional
            on:input=move |ev| {
                if let Some(cb) = on_input {
                    cb.run(event_target_value(&ev));
                }
            }
        ></textarea>
    }
}
