//! Error Panel Component
//!
//! Full-page replacement shown when a page's initial fetch fails.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::error::{ApiError, ErrorAction};
use crate::routes::Route;

#[component]
pub fn ErrorPanel(
    error: ApiError,
    /// Message for `NOT_FOUND`, which means "nothing to list" on every page
    not_found_message: &'static str,
    on_retry: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let display = error.display(not_found_message);

    view! {
        <div class="error-panel">
            <h3 class="error-title">{display.title}</h3>
            <p class="error-message">{display.message}</p>
            {display.action.map(|action| view! {
                <button
                    type="button"
                    class="error-action-btn"
                    on:click=move |_| match action {
                        ErrorAction::Login => ctx.navigate(Route::Login.path()),
                        ErrorAction::Retry => on_retry.run(()),
                    }
                >
                    {action.label()}
                </button>
            })}
        </div>
    }
}
