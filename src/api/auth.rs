//! Session Calls
//!
//! Login and permission lookup.

use serde::{Deserialize, Serialize};

use super::{Ack, Call};
use crate::error::ApiError;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

/// `{permissions: [...]}` on success, `{no_permissions: ...}` otherwise
#[derive(Debug, Default, Deserialize)]
struct PermissionsBody {
    #[serde(default)]
    permissions: Vec<String>,
}

// ========================
// Calls
// ========================

/// Opens a session; the backend answers with the session cookies
pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    Call::post("/bonita/v1/login")
        .json(&LoginArgs { username, password })?
        .send::<Option<Ack>>()
        .await
        .map(|_| ())
}

/// Permission tags of the current session
pub async fn fetch_permissions() -> Result<Vec<String>, ApiError> {
    let body = Call::get("/bonita/v1/permissions")
        .send::<Option<PermissionsBody>>()
        .await?;
    Ok(body.unwrap_or_default().permissions)
}
