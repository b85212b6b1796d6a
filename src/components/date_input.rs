//! Date Input Component
//!
//! Controlled `<input type="date">`; the caller owns the value so it can
//! enforce range rules across several inputs.

use leptos::prelude::*;

use crate::tasks::field_name;

#[component]
pub fn DateInput(
    #[prop(into)] label: String,
    scope: u32,
    /// Current value, `YYYY-MM-DD` or empty
    #[prop(into)]
    value: Signal<String>,
    /// Earliest selectable date, `YYYY-MM-DD`
    #[prop(optional, into)]
    min: Option<Signal<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let name = field_name(&label, scope);
    view! {
        <label class="field-label" for=name.clone()>{label}</label>
        <input
            class="field-input field-date"
            type="date"
            name=name.clone()
            id=name
            required
            min=move || min.map(|m| m.get()).filter(|m| !m.is_empty())
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
