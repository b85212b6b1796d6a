//! Confirm Button Component
//!
//! Covering or finishing a stage cannot be undone from this client, so the
//! action asks once more inline before it runs.

use leptos::prelude::*;

/// Action button with an inline "¿Confirmar?" step
///
/// # Arguments
/// * `label` - action text, e.g. "Cubrir Contribución"
/// * `button_class` - CSS class of the action button
/// * `on_confirm` - runs the action after ✓
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    let answer = move |confirmed: bool| {
        set_asking.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        {move || {
            if asking.get() {
                view! {
                    <span class="confirm">
                        <span class="confirm-text">"¿Confirmar?"</span>
                        <button type="button" class="confirm-btn" title="Confirmar" on:click=move |_| answer(true)>
                            "✓"
                        </button>
                        <button type="button" class="cancel-btn" title="Cancelar" on:click=move |_| answer(false)>
                            "✗"
                        </button>
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <button type="button" class=button_class.clone() on:click=move |_| set_asking.set(true)>
                        {label.clone()}
                    </button>
                }
                .into_any()
            }
        }}
    }
}
