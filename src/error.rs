//! Error Types
//!
//! `ApiError` classifies HTTP outcomes into a closed set of kinds; pages turn
//! it into an [`ErrorDisplay`] (full-page error) or a [`Banner`] (result of a
//! user action). `FormError` covers local validation of the project form.

use std::fmt;

use thiserror::Error;

pub const NETWORK_MESSAGE: &str = "La conexión al servidor falló, por favor intentelo de nuevo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    SessionExpired,
    PermissionDenied,
    NetworkError,
    NotFound,
    Conflict,
    UnknownError,
}

impl ApiErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classified API failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// No response reached us
    pub fn network() -> Self {
        Self::new(ApiErrorKind::NetworkError, NETWORK_MESSAGE)
    }

    /// A 2xx response whose body did not match the expected shape
    pub fn decode(detail: impl fmt::Display) -> Self {
        Self::new(
            ApiErrorKind::UnknownError,
            format!("Respuesta inesperada del servidor: {}", detail),
        )
    }

    /// Map a non-2xx status to an error. `conflict_aware` is set only by the
    /// calls where 409 carries meaning (finishing a stage); elsewhere 409 is
    /// treated like any other unexpected status.
    pub fn from_status(status: u16, server_message: Option<&str>, conflict_aware: bool) -> Self {
        let server_message = server_message.map(str::trim).filter(|m| !m.is_empty());
        match status {
            401 => Self::new(
                ApiErrorKind::SessionExpired,
                server_message.unwrap_or("Sesión expirada o inválida"),
            ),
            403 => Self::new(
                ApiErrorKind::PermissionDenied,
                server_message.unwrap_or("Permisos insuficientes"),
            ),
            404 => Self::new(
                ApiErrorKind::NotFound,
                server_message.unwrap_or("Recurso no encontrado"),
            ),
            409 if conflict_aware => Self::new(
                ApiErrorKind::Conflict,
                server_message.unwrap_or("La etapa no puede finalizarse en su estado actual"),
            ),
            _ => Self::new(
                ApiErrorKind::UnknownError,
                match server_message {
                    Some(msg) => msg.to_string(),
                    None => format!("Error inesperado. Código: {}", status),
                },
            ),
        }
    }

    /// Full-page error for a failed fetch
    pub fn display(&self, not_found_message: &str) -> ErrorDisplay {
        match self.kind {
            ApiErrorKind::SessionExpired => ErrorDisplay {
                title: "Sesión expirada",
                message: "Tu sesión ha expirado. Por favor inicie sesión.".to_string(),
                action: Some(ErrorAction::Login),
            },
            ApiErrorKind::PermissionDenied => ErrorDisplay {
                title: "Acceso denegado",
                message: "Tus permisos actuales son insuficientes para visualizar esta página.".to_string(),
                action: None,
            },
            ApiErrorKind::NetworkError => ErrorDisplay {
                title: "Fallo al conectarse",
                message: self.message.clone(),
                action: Some(ErrorAction::Retry),
            },
            ApiErrorKind::NotFound => ErrorDisplay {
                title: "Not Found",
                message: not_found_message.to_string(),
                action: Some(ErrorAction::Retry),
            },
            ApiErrorKind::Conflict => ErrorDisplay {
                title: "Conflicto",
                message: self.message.clone(),
                action: Some(ErrorAction::Retry),
            },
            ApiErrorKind::UnknownError => ErrorDisplay {
                title: "Error",
                message: self.message.clone(),
                action: Some(ErrorAction::Retry),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Go to the login page
    Login,
    /// Run the same fetch again
    Retry,
}

impl ErrorAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Iniciar Sesión",
            Self::Retry => "Reintentar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub title: &'static str,
    pub message: String,
    pub action: Option<ErrorAction>,
}

// ========================
// Banners
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

/// Result notice shown after a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Failure,
            message: message.into(),
        }
    }

    /// Failure banner for a mutation. `denied_action` completes
    /// "No tiene permisos para ..."; `fallback` is used when the error
    /// carries no message.
    pub fn from_error(err: &ApiError, denied_action: &str, fallback: &str) -> Self {
        let message = match err.kind {
            ApiErrorKind::SessionExpired => {
                "La sesión ha expirado. Por favor, inicie sesión nuevamente.".to_string()
            }
            ApiErrorKind::PermissionDenied => format!("No tiene permisos para {}.", denied_action),
            ApiErrorKind::NetworkError => "Error de conexión. Por favor, inténtelo de nuevo.".to_string(),
            _ if !err.message.trim().is_empty() => err.message.clone(),
            _ => fallback.to_string(),
        };
        Self::failure(message)
    }

    pub fn is_success(&self) -> bool {
        self.kind == BannerKind::Success
    }
}

// ========================
// Form Validation
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Falta completar el campo \"{0}\"")]
    MissingField(String),

    #[error("La fecha \"{value}\" del campo \"{field}\" no es válida")]
    InvalidDate { field: String, value: String },

    #[error("Categoría desconocida: \"{0}\"")]
    UnknownCategory(String),

    #[error("La tarea \"{task}\" termina antes de comenzar")]
    EndBeforeStart { task: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, None, false).kind, ApiErrorKind::SessionExpired);
        assert_eq!(ApiError::from_status(401, None, true).kind, ApiErrorKind::SessionExpired);
        assert_eq!(ApiError::from_status(403, Some("x"), false).kind, ApiErrorKind::PermissionDenied);
        assert_eq!(ApiError::from_status(401, None, false).message, "Sesión expirada o inválida");
        assert_eq!(ApiError::from_status(404, None, false).kind, ApiErrorKind::NotFound);
        assert_eq!(ApiError::from_status(500, None, false).kind, ApiErrorKind::UnknownError);
        assert_eq!(ApiError::from_status(400, Some("ya cubierta"), false).message, "ya cubierta");
    }

    #[test]
    fn test_unexpected_status_prefers_server_text() {
        assert_eq!(ApiError::from_status(500, Some("Base de datos caída"), false).message, "Base de datos caída");
        assert_eq!(ApiError::from_status(500, Some("  "), false).message, "Error inesperado. Código: 500");
        assert_eq!(ApiError::from_status(502, None, false).message, "Error inesperado. Código: 502");
    }

    #[test]
    fn test_conflict_only_when_aware() {
        assert_eq!(ApiError::from_status(409, None, true).kind, ApiErrorKind::Conflict);
        let plain = ApiError::from_status(409, None, false);
        assert_eq!(plain.kind, ApiErrorKind::UnknownError);
        assert_eq!(plain.message, "Error inesperado. Código: 409");
    }

    #[test]
    fn test_display_actions() {
        let expired = ApiError::from_status(401, None, false).display("vacío");
        assert_eq!(expired.action, Some(ErrorAction::Login));
        assert_eq!(expired.action.unwrap().label(), "Iniciar Sesión");

        let denied = ApiError::from_status(403, None, false).display("vacío");
        assert_eq!(denied.action, None);

        let not_found = ApiError::from_status(404, None, false).display("No hay etapas a las que contribuir aún.");
        assert_eq!(not_found.message, "No hay etapas a las que contribuir aún.");
        assert_eq!(not_found.action, Some(ErrorAction::Retry));

        let network = ApiError::network().display("vacío");
        assert_eq!(network.title, "Fallo al conectarse");
        assert_eq!(network.message, NETWORK_MESSAGE);
    }

    #[test]
    fn test_banner_from_error() {
        let denied = ApiError::from_status(403, None, false);
        let banner = Banner::from_error(&denied, "resolver observaciones", "fallo");
        assert!(!banner.is_success());
        assert_eq!(banner.message, "No tiene permisos para resolver observaciones.");

        let blank = ApiError::new(ApiErrorKind::UnknownError, "  ");
        assert_eq!(Banner::from_error(&blank, "x", "fallo").message, "fallo");

        let server = ApiError::from_status(400, Some("La observación ya fue resuelta"), false);
        assert_eq!(Banner::from_error(&server, "x", "fallo").message, "La observación ya fue resuelta");
    }

    #[test]
    fn test_error_display_string() {
        let err = ApiError::from_status(404, Some("No hay etapas disponibles."), false);
        assert_eq!(err.to_string(), "NOT_FOUND: No hay etapas disponibles.");
    }
}
