//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::api;
use crate::context::AppContext;
use crate::error::{ApiError, ApiErrorKind};
use crate::routes::Route;
use crate::store::{store_set_username, use_session_store};

const CONNECTION_MESSAGE: &str = "Error de conexión con el servidor";

/// Message under the form after a rejected login
pub fn login_failure_message(err: &ApiError) -> String {
    match err.kind {
        ApiErrorKind::NetworkError => CONNECTION_MESSAGE.to_string(),
        _ if err.message.trim().is_empty() => CONNECTION_MESSAGE.to_string(),
        _ => err.message.clone(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session_store();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (pending, set_pending) = signal(false);
    let (failure, set_failure) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        set_pending.set(true);
        set_failure.set(None);
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(()) => {
                    info!("[SESSION] Logged in as {}", user);
                    store_set_username(&session, Some(user));
                    ctx.refresh_permissions();
                    ctx.navigate(Route::Landing.path());
                }
                Err(e) => {
                    warn!("[SESSION] Login rejected: {}", e);
                    set_failure.try_set(Some(login_failure_message(&e)));
                }
            }
            set_pending.try_set(false);
        });
    };

    view! {
        <section class="page login-page">
            <form class="login-card" on:submit=submit>
                <h2 class="page-title">"Iniciar Sesión"</h2>
                <label class="field-label" for="username">"Usuario"</label>
                <input
                    id="username"
                    class="field-input"
                    type="text"
                    autocomplete="username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label class="field-label" for="password">"Contraseña"</label>
                <input
                    id="password"
                    class="field-input"
                    type="password"
                    autocomplete="current-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || failure.get().map(|m| view! { <div class="inline-error">{m}</div> })}
                <button type="submit" class="primary-btn" disabled=move || pending.get()>
                    {move || if pending.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_message() {
        let rejected = ApiError::from_status(401, Some("Credenciales inválidas"), false);
        assert_eq!(login_failure_message(&rejected), "Credenciales inválidas");
        assert_eq!(login_failure_message(&ApiError::network()), CONNECTION_MESSAGE);
        let blank = ApiError::new(ApiErrorKind::UnknownError, "");
        assert_eq!(login_failure_message(&blank), CONNECTION_MESSAGE);
    }
}
