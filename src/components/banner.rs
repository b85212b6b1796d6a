//! Result Banner Component
//!
//! Modal notice shown after a user action, dismissed with "Aceptar".

use leptos::prelude::*;

use crate::error::Banner;

const SUCCESS_TITLE: &str = "Operación exitosa.";

/// Result banner
///
/// # Arguments
/// * `banner` - banner to show; `None` hides it
/// * `failure_title` - heading used for failures on this page
#[component]
pub fn ResultBanner(banner: RwSignal<Option<Banner>>, #[prop(into)] failure_title: String) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            let success = b.is_success();
            let title = if success { SUCCESS_TITLE.to_string() } else { failure_title.clone() };
            view! {
                <div class="banner-backdrop"></div>
                <div class=if success { "banner banner-success" } else { "banner banner-failure" } role="alert">
                    <span class="banner-icon">{if success { "✓" } else { "✗" }}</span>
                    <div class="banner-body">
                        <h3 class="banner-title">{title}</h3>
                        <p class="banner-message">{b.message}</p>
                        <button type="button" class="banner-btn" on:click=move |_| banner.set(None)>
                            "Aceptar"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
