//! Backend API Client
//!
//! Async wrappers over the browser fetch API, organized by domain. Every
//! request carries the session cookies and resolves to `Result<T, ApiError>`.

mod auth;
mod observation;
mod project;
mod stage;
mod stats;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::config;
use crate::error::{ApiError, ApiErrorKind};

// Re-export all public items
pub use auth::*;
pub use observation::*;
pub use project::*;
pub use stage::*;
pub use stats::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body the backend attaches to error responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// `{ "message": ... }` acknowledgement sent by mutations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// One request to the backend
struct Call {
    method: Method,
    path: String,
    body: Option<String>,
    conflict_aware: bool,
}

impl Call {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            conflict_aware: false,
        }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ApiError::new(ApiErrorKind::UnknownError, e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Report 409 as `CONFLICT` instead of `UNKNOWN_ERROR`
    fn conflict_aware(mut self) -> Self {
        self.conflict_aware = true;
        self
    }

    async fn fetch(&self) -> Result<Response, ApiError> {
        let init = RequestInit::new();
        init.set_method(self.method.as_str());
        init.set_credentials(RequestCredentials::Include);
        if let Some(body) = &self.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&config::api_url(&self.path), &init)
            .map_err(|e| self.transport_error(e))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| self.transport_error(e))?;

        let window = web_sys::window().ok_or_else(ApiError::network)?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| self.transport_error(e))?;
        value.dyn_into::<Response>().map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, err: JsValue) -> ApiError {
        let detail = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .unwrap_or_else(|| format!("{:?}", err));
        error!("[API] {} {} unreachable: {}", self.method, self.path, detail);
        ApiError::network()
    }

    /// Send and decode the JSON response
    async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        debug!("[API] {} {}", self.method, self.path);
        let response = self.fetch().await?;

        // Empty or non-JSON bodies are read as null
        let body = match response.json() {
            Ok(promise) => JsFuture::from(promise).await.unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        };

        if !response.ok() {
            let server_message = serde_wasm_bindgen::from_value::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.text().map(str::to_string));
            let err = ApiError::from_status(response.status(), server_message.as_deref(), self.conflict_aware);
            warn!("[API] {} {} -> {}: {}", self.method, self.path, response.status(), err);
            return Err(err);
        }

        serde_wasm_bindgen::from_value(body).map_err(|e| {
            error!("[API] {} {} returned an unexpected body: {}", self.method, self.path, e);
            ApiError::decode(e)
        })
    }
}
