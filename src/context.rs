//! Application Context
//!
//! Session and navigation handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::config;
use crate::routes::{PermissionSet, PermissionState, Route};
use crate::store::{store_clear_session, store_set_permissions, SessionStateStoreFields, SessionStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current location path - read
    pub path: ReadSignal<String>,
    /// Current location path - write
    set_path: WriteSignal<String>,
    /// Session store (permissions, user)
    pub session: SessionStore,
}

impl AppContext {
    pub fn new(path: (ReadSignal<String>, WriteSignal<String>), session: SessionStore) -> Self {
        Self {
            path: path.0,
            set_path: path.1,
            session,
        }
    }

    /// Route matching the current path, if any
    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.path.get())
    }

    pub fn permissions(&self) -> PermissionState {
        self.session.permissions().get()
    }

    pub fn username(&self) -> Option<String> {
        self.session.username().get()
    }

    /// Push a history entry and switch page
    pub fn navigate(&self, path: &str) {
        info!("[ROUTER] Navigating to {}", path);
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                error!("[ROUTER] pushState failed: {:?}", e);
            }
        }
        self.set_path.set(path.to_string());
    }

    /// Re-read the path after a browser back/forward
    pub fn sync_location(&self) {
        self.set_path.set(current_location_path());
    }

    /// Fetch the permission set; a failure leaves the session closed
    pub fn refresh_permissions(&self) {
        let session = self.session;
        store_set_permissions(&session, PermissionState::Unknown);
        spawn_local(async move {
            let state = match api::fetch_permissions().await {
                Ok(tags) => {
                    info!("[SESSION] Permissions: {:?}", tags);
                    let set = PermissionSet::from_tags(&tags);
                    if set.is_empty() {
                        warn!("[SESSION] No known permission in {:?}", tags);
                    }
                    PermissionState::Granted(set)
                }
                Err(e) => {
                    error!("[SESSION] Permission check failed: {}", e);
                    PermissionState::Denied
                }
            };
            store_set_permissions(&session, state);
        });
    }

    /// Drop local session state and cookies, then go to `/`
    pub fn logout(&self) {
        info!("[SESSION] Logging out");
        store_clear_session(&self.session);
        expire_session_cookies();
        self.navigate(Route::Landing.path());
    }
}

/// `document.cookie` assignment that expires `name`
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name)
}

fn expire_session_cookies() {
    let Some(document) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    for name in config::SESSION_COOKIES {
        if let Err(e) = document.set_cookie(&expired_cookie(name)) {
            error!("[SESSION] Could not expire cookie {}: {:?}", name, e);
        }
    }
}

/// `location.pathname` of the window, `/` when unavailable
pub fn current_location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_cookie() {
        assert_eq!(
            expired_cookie("JSESSIONID"),
            "JSESSIONID=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }
}
