//! Not Found Page
//!
//! Shown for unknown paths and for pages the session may not open.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    view! {
        <section class="page not-found">
            <h2 class="page-title">"Página no encontrada"</h2>
            <button type="button" class="outline-btn" on:click=move |_| ctx.navigate(Route::Landing.path())>
                "Volver al inicio"
            </button>
        </section>
    }
}
