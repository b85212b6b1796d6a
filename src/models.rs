//! Frontend Models
//!
//! Data structures matching backend entities and request payloads.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Category of contribution a stage asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageRequest {
    Dinero,
    Materiales,
    ManoDeObra,
}

impl CoverageRequest {
    pub const ALL: [CoverageRequest; 3] = [Self::Materiales, Self::Dinero, Self::ManoDeObra];

    /// Wire code
    pub fn code(self) -> &'static str {
        match self {
            Self::Dinero => "DINERO",
            Self::Materiales => "MATERIALES",
            Self::ManoDeObra => "MANO_DE_OBRA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dinero => "Dinero",
            Self::Materiales => "Materiales",
            Self::ManoDeObra => "Mano de obra",
        }
    }

    /// Accepts either the wire code or the visible label
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(raw) || c.label().eq_ignore_ascii_case(raw))
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Dinero => "badge badge-purple",
            Self::Materiales => "badge badge-orange",
            Self::ManoDeObra => "badge badge-teal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageStatus {
    Pending,
    InProgress,
    Finished,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Progreso",
            Self::Finished => "Finalizada",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge-yellow",
            Self::InProgress => "badge badge-blue",
            Self::Finished => "badge badge-green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservationStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ObservationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Progreso",
            Self::Resolved => "Resuelta",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge-yellow",
            Self::InProgress => "badge badge-blue",
            Self::Resolved => "badge badge-green",
        }
    }
}

/// Stage data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: u32,
    pub id_project: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub coverage_request: CoverageRequest,
    #[serde(default)]
    pub requires_contribution: bool,
    pub status: StageStatus,
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub user_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

/// Observation raised by the board against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ObservationStatus,
    #[serde(default)]
    pub project_id: Option<u32>,
    #[serde(default)]
    pub project_name: Option<String>,
}

/// One monitoring indicator. The backend names the count field after the
/// indicator, so all three spellings land in `casos`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub total_casos: u32,
    #[serde(
        default,
        alias = "casos_en_termino",
        alias = "casos_fuera_plazo",
        alias = "casos_sin_colaboracion"
    )]
    pub casos: u32,
    #[serde(default)]
    pub promedio_porcentaje: f64,
}

impl StatBlock {
    pub fn percent(&self) -> f64 {
        self.promedio_porcentaje.clamp(0.0, 100.0)
    }

    /// Share not covered by this indicator
    pub fn remainder(&self) -> f64 {
        100.0 - self.percent()
    }
}

/// The three indicators shown on the stats page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    pub on_time: StatBlock,
    pub overdue: StatBlock,
    pub without_collaboration: StatBlock,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagePayload {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_request: Option<CoverageRequest>,
    pub requires_contribution: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub stages: Vec<StagePayload>,
}

/// Calendar date of a backend timestamp: RFC 3339, the RFC 1123 form Flask
/// emits, or a bare `YYYY-MM-DD`
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(&raw.replace("GMT", "+0000")).map(|d| d.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// `dd/mm/yyyy`, or "N/A"
pub fn display_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_backend_date) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_request_wire_codes() {
        assert_eq!(serde_json::to_string(&CoverageRequest::ManoDeObra).unwrap(), "\"MANO_DE_OBRA\"");
        assert_eq!(CoverageRequest::parse("dinero"), Some(CoverageRequest::Dinero));
        assert_eq!(CoverageRequest::parse("Mano de obra"), Some(CoverageRequest::ManoDeObra));
        assert_eq!(CoverageRequest::parse("Option 1"), None);
    }

    #[test]
    fn test_stage_deserializes_with_nulls() {
        let raw = r#"{
            "id": 4, "id_project": 2, "name": "Compra de semillas",
            "description": null, "start_date": null, "end_date": null,
            "coverage_request": "MATERIALES", "requires_contribution": true,
            "status": "IN_PROGRESS"
        }"#;
        let stage: Stage = serde_json::from_str(raw).unwrap();
        assert_eq!(stage.status, StageStatus::InProgress);
        assert_eq!(stage.coverage_request, CoverageRequest::Materiales);
        assert!(stage.description.is_none());
    }

    #[test]
    fn test_stat_block_aliases() {
        let on_time: StatBlock =
            serde_json::from_str(r#"{"total_casos": 8, "casos_en_termino": 6, "promedio_porcentaje": 75.0}"#).unwrap();
        assert_eq!(on_time.casos, 6);
        assert_eq!(on_time.remainder(), 25.0);

        let empty: StatBlock = serde_json::from_str(r#"{"message": "No hay casos completados aún"}"#).unwrap();
        assert_eq!(empty, StatBlock::default());
    }

    #[test]
    fn test_parse_backend_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10);
        assert_eq!(parse_backend_date("Fri, 10 Jan 2025 00:00:00 GMT"), expected);
        assert_eq!(parse_backend_date(" 2025-01-10 "), expected);
        assert_eq!(parse_backend_date(""), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(Some("2025-01-10T03:00:00.000Z")), "10/01/2025");
        assert_eq!(display_date(Some("Wed, 01 Jan 2025 00:00:00 GMT")), "01/01/2025");
        assert_eq!(display_date(Some("2025-03-05")), "05/03/2025");
        assert_eq!(display_date(None), "N/A");
        assert_eq!(display_date(Some("garbage")), "N/A");
    }
}
