//! Session Store
//!
//! Uses Leptos reactive_stores for the session-wide state: permission tags
//! and the logged-in user. Created by the root component and handed down
//! through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::PermissionState;

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Permission tags of the current session
    pub permissions: PermissionState,
    /// Name used on the last successful login
    pub username: Option<String>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_permissions(store: &SessionStore, permissions: PermissionState) {
    store.permissions().set(permissions);
}

pub fn store_set_username(store: &SessionStore, username: Option<String>) {
    store.username().set(username);
}

/// Back to the state of a fresh page load
pub fn store_clear_session(store: &SessionStore) {
    store.permissions().set(PermissionState::Unknown);
    store.username().set(None);
}
