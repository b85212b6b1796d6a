//! Header Component
//!
//! Brand, permission-filtered menu and session controls.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::{menu_entries, Route};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let entries = move || menu_entries(&ctx.permissions());
    let logged_in = move || ctx.permissions().is_signed_in();

    view! {
        <header class="app-header">
            <a class="brand" href="/" on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(Route::Landing.path());
            }>
                "Proj"<span class="brand-arrow">"🠀"</span>"Planning"
            </a>
            <nav class="app-menu">
                {move || entries().into_iter().map(|def| {
                    let path = def.path;
                    let active = move || ctx.path.get() == path;
                    view! {
                        <a
                            href=path
                            class=move || if active() { "menu-item active" } else { "menu-item" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(path);
                            }
                        >
                            {def.title}
                        </a>
                    }
                }).collect_view()}
            </nav>
            <div class="session-controls">
                {move || ctx.username().map(|u| view! { <span class="session-user">{u}</span> })}
                <Show
                    when=logged_in
                    fallback=move || view! {
                        <button type="button" class="menu-item" on:click=move |_| ctx.navigate(Route::Login.path())>
                            "Ingresar"
                        </button>
                    }
                >
                    <button type="button" class="menu-item" on:click=move |_| ctx.logout()>
                        "Cerrar Sesión"
                    </button>
                </Show>
            </div>
        </header>
    }
}
