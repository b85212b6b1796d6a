//! Circle Checkbox Component

use leptos::prelude::*;

use crate::tasks::field_name;

/// Round checkbox; the form carries `<label><scope>=on` only while checked
#[component]
pub fn CircleCheckbox(
    #[prop(into)] label: String,
    scope: u32,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let name = field_name(&label, scope);
    view! {
        <div class="circle-checkbox">
            <label class="field-label small" for=name.clone()>{label}</label>
            <input
                class="circle-checkbox-input"
                type="checkbox"
                name=name.clone()
                id=name
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </div>
    }
}
