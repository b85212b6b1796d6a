//! Landing Page

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::{menu_entries, Route};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="page landing">
            <div class="hero">
                <h1 class="hero-title">"ProjPlanning"</h1>
                <p class="hero-text">
                    "Planificá proyectos comunitarios por etapas y coordiná las contribuciones de otras organizaciones."
                </p>
            </div>
            {move || {
                let state = ctx.permissions();
                if state.is_signed_in() {
                    menu_entries(&state)
                        .into_iter()
                        .map(|def| {
                            let path = def.path;
                            view! {
                                <button type="button" class="landing-card" on:click=move |_| ctx.navigate(path)>
                                    {def.title}
                                </button>
                            }
                        })
                        .collect_view()
                        .into_any()
                } else {
                    view! {
                        <button type="button" class="primary-btn" on:click=move |_| ctx.navigate(Route::Login.path())>
                            "Iniciar Sesión"
                        </button>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
