//! ProjPlanning Frontend App
//!
//! Root component: session store, location signal, header/footer and the
//! page for the current route.

use std::sync::Arc;

use console_logger::RollingBuffer;
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::components::{Footer, Header};
use crate::context::{current_location_path, AppContext};
use crate::pages::{
    AvailableStagesPage, LandingPage, LoginPage, NotFoundPage, ObservationsPage, OwnedStagesPage, ProjectFormPage,
    ReviewProjectsPage, StatsPage,
};
use crate::routes::Route;
use crate::store::SessionState;

fn render_route(route: Route) -> AnyView {
    match route {
        Route::Landing => view! { <LandingPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::ReviewProjects => view! { <ReviewProjectsPage /> }.into_any(),
        Route::NewProject => view! { <ProjectFormPage /> }.into_any(),
        Route::Observations => view! { <ObservationsPage /> }.into_any(),
        Route::AvailableStages => view! { <AvailableStagesPage /> }.into_any(),
        Route::OwnedStages => view! { <OwnedStagesPage /> }.into_any(),
        Route::Stats => view! { <StatsPage /> }.into_any(),
    }
}

/// Root component. `log` is the buffer filled by the console logger, absent
/// when the logger could not be installed.
#[component]
pub fn App(log: Option<Arc<RollingBuffer>>) -> impl IntoView {
    let session = Store::new(SessionState::default());
    let ctx = AppContext::new(signal(current_location_path()), session);

    // Provide context to all children
    provide_context(session);
    provide_context(ctx);
    if let Some(buffer) = log {
        provide_context(buffer);
    }

    // Permissions are fetched once per page load and again after login
    ctx.refresh_permissions();

    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_location());
    on_cleanup(move || popstate.remove());

    // Re-render only when the resolved page changes, not on every store write.
    // Guarded pages stay closed until permissions arrive.
    let page = Memo::new(move |_| {
        let state = ctx.permissions();
        ctx.route().filter(|route| route.is_allowed(&state))
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || {
                    let resolved = page.get();
                    debug!("[ROUTER] Rendering {:?}", resolved);
                    match resolved {
                        Some(route) => render_route(route),
                        None => view! { <NotFoundPage /> }.into_any(),
                    }
                }}
            </main>
            <Footer />
        </div>
    }
}
