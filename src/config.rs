//! Build-time Configuration
//!
//! Values are baked in at compile time with `option_env!`.

use tracing::Level;

/// API host used when `PROJPLANNING_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Session cookies set by the backend on login, expired on logout
pub const SESSION_COOKIES: &[&str] = &["JSESSIONID", "X-Bonita-API-Token", "bonita.tenant", "BOS_Locale"];

/// Lines kept by the in-memory log buffer shown in the footer
pub const LOG_BUFFER_LINES: usize = console_logger::DEFAULT_CAPACITY;

/// Base URL of the backend API, without trailing slash
pub fn api_base() -> &'static str {
    let base = option_env!("PROJPLANNING_API_BASE").unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/')
}

/// Absolute URL for an API path such as `/stage/v1/get_all_stages`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Log level from `PROJPLANNING_LOG_LEVEL` (default info)
pub fn log_level() -> Level {
    parse_level(option_env!("PROJPLANNING_LOG_LEVEL").unwrap_or("info"))
}

fn parse_level(raw: &str) -> Level {
    raw.trim().parse::<Level>().unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_path() {
        let url = api_url("/bonita/v1/login");
        assert!(url.ends_with("/bonita/v1/login"));
        assert!(!url.contains("//bonita"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" warn "), Level::WARN);
        assert_eq!(parse_level("1"), Level::ERROR);
        assert_eq!(parse_level("nonsense"), Level::INFO);
    }
}
