//! Task Drafts
//!
//! State behind the "Presentar Proyecto" form: the per-task date range rule,
//! the list of appended task identities and the pipeline that turns the flat
//! form values into a [`ProjectPayload`].
//!
//! Every task field is named `<label><task id>` so that one flat collection
//! of form values holds all task groups side by side.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use tracing::warn;

use crate::error::FormError;
use crate::models::{CoverageRequest, ProjectPayload, StagePayload};

// ========================
// Field Names
// ========================

pub const PROJECT_TITLE: &str = "projectName";
pub const PROJECT_DESCRIPTION: &str = "Descripción";
pub const TASK_NAME: &str = "Nombre de Tarea";
pub const START_DATE: &str = "Fecha de Inicio";
pub const END_DATE: &str = "Fecha de Fin";
pub const REQUIRES_CONTRIBUTION: &str = "Requiere contribución:";
pub const CATEGORY: &str = "Categoría";

/// Identity-qualified field name, e.g. `Fecha de Inicio3`
pub fn field_name(label: &str, scope: u32) -> String {
    format!("{}{}", label, scope)
}

/// Input format of `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// ========================
// Task Identity
// ========================

/// Identity of one task group inside a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u32);

/// The task group that is always present
pub const DEFAULT_TASK: TaskId = TaskId(0);

impl TaskId {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_default(self) -> bool {
        self == DEFAULT_TASK
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ========================
// Draft
// ========================

/// Editable values of one task group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    pub requires_contribution: bool,
    pub coverage: Option<CoverageRequest>,
}

impl TaskDraft {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Lower bound offered by the end date input
    pub fn end_min(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Moving the start past the end drags the end along
    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.start = start;
        if let (Some(s), Some(e)) = (start, self.end) {
            if s > e {
                self.end = Some(s);
            }
        }
    }

    /// An end before the start is raised to the start
    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.end = match (self.start, end) {
            (Some(s), Some(e)) if e < s => Some(s),
            _ => end,
        };
    }
}

/// Parse the value of a date input; empty means unset
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string()).unwrap_or_default()
}

// ========================
// List Controller
// ========================

/// Appended task groups, in insertion order. Identities come from a counter
/// owned by the list and are never handed out twice, even after removal.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskList {
    next_id: u32,
    extra: Vec<TaskId>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            next_id: DEFAULT_TASK.0 + 1,
            extra: Vec::new(),
        }
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task group and return its identity
    pub fn append(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.extra.push(id);
        id
    }

    /// Remove an appended group; the default group and unknown ids are ignored
    pub fn remove(&mut self, id: TaskId) -> bool {
        if id.is_default() {
            return false;
        }
        let before = self.extra.len();
        self.extra.retain(|t| *t != id);
        self.extra.len() != before
    }

    /// Drop all appended groups. The counter keeps running.
    pub fn clear(&mut self) {
        self.extra.clear();
    }

    /// Appended identities only
    pub fn extra(&self) -> &[TaskId] {
        &self.extra
    }

    /// Default group first, then appended groups in order
    pub fn all(&self) -> impl Iterator<Item = TaskId> + '_ {
        std::iter::once(DEFAULT_TASK).chain(self.extra.iter().copied())
    }

    /// Number of task groups including the default one
    pub fn len(&self) -> usize {
        self.extra.len() + 1
    }

    /// Every field name the submit pipeline reads
    pub fn field_names(&self) -> Vec<String> {
        let mut names = vec![
            PROJECT_TITLE.to_string(),
            field_name(PROJECT_DESCRIPTION, DEFAULT_TASK.0),
        ];
        for id in self.all() {
            for label in [TASK_NAME, START_DATE, END_DATE, REQUIRES_CONTRIBUTION, CATEGORY] {
                names.push(field_name(label, id.0));
            }
        }
        names
    }
}

// ========================
// Submission Pipeline
// ========================

/// Flat name → value collection read from the submitted form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Trimmed value; blank counts as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Local midnight of `date` in `tz`, as a UTC instant with milliseconds
pub fn to_iso_instant<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> String {
    let midnight = date.and_time(NaiveTime::default());
    let instant = tz
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight));
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn read_date(values: &FormValues, label: &str, id: TaskId) -> Result<Option<NaiveDate>, FormError> {
    match values.get(&field_name(label, id.0)) {
        None => Ok(None),
        Some(raw) => parse_date_input(raw).map(Some).ok_or_else(|| FormError::InvalidDate {
            field: label.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn normalize_date<Tz: TimeZone>(date: Option<NaiveDate>, label: &str, id: TaskId, tz: &Tz, now: DateTime<Utc>) -> String {
    match date {
        Some(d) => to_iso_instant(d, tz),
        None => {
            warn!("[FORM] Task {} has no \"{}\", using current time", id, label);
            now.to_rfc3339_opts(SecondsFormat::Millis, true)
        }
    }
}

fn build_stage<Tz: TimeZone>(
    values: &FormValues,
    id: TaskId,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<StagePayload, FormError> {
    let name = values
        .get(&field_name(TASK_NAME, id.0))
        .ok_or_else(|| FormError::MissingField(TASK_NAME.to_string()))?
        .to_string();

    let start = read_date(values, START_DATE, id)?;
    let end = read_date(values, END_DATE, id)?;
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            return Err(FormError::EndBeforeStart { task: name });
        }
    }

    let requires_contribution = values.get(&field_name(REQUIRES_CONTRIBUTION, id.0)).is_some();
    let coverage_request = match values.get(&field_name(CATEGORY, id.0)) {
        None if requires_contribution => return Err(FormError::MissingField(CATEGORY.to_string())),
        None => None,
        Some(raw) => Some(CoverageRequest::parse(raw).ok_or_else(|| FormError::UnknownCategory(raw.to_string()))?),
    };

    Ok(StagePayload {
        name,
        start_date: normalize_date(start, START_DATE, id, tz, now),
        end_date: normalize_date(end, END_DATE, id, tz, now),
        description: String::new(),
        coverage_request,
        requires_contribution,
    })
}

/// Assemble the create-project request from the submitted form.
///
/// Dates are read as midnight in `tz`; a missing date falls back to `now`.
pub fn build_payload<Tz: TimeZone>(
    values: &FormValues,
    tasks: &TaskList,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<ProjectPayload, FormError> {
    let name = values
        .get(PROJECT_TITLE)
        .ok_or_else(|| FormError::MissingField("Título".to_string()))?
        .to_string();
    let description = values
        .get(&field_name(PROJECT_DESCRIPTION, DEFAULT_TASK.0))
        .unwrap_or_default()
        .to_string();

    let stages = tasks
        .all()
        .map(|id| build_stage(values, id, tz, now))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProjectPayload {
        name,
        description,
        stages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(raw: &str) -> NaiveDate {
        parse_date_input(raw).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
    }

    fn default_task_values() -> FormValues {
        [
            (PROJECT_TITLE.to_string(), "Reforestación Norte".to_string()),
            (field_name(PROJECT_DESCRIPTION, 0), "Plantación en la zona norte".to_string()),
            (field_name(TASK_NAME, 0), "Plantar árboles".to_string()),
            (field_name(START_DATE, 0), "2025-01-01".to_string()),
            (field_name(END_DATE, 0), "2025-01-10".to_string()),
            (field_name(CATEGORY, 0), "DINERO".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_start_after_end_drags_end() {
        let mut draft = TaskDraft::default();
        draft.set_end(Some(date("2025-01-05")));
        draft.set_start(Some(date("2025-01-09")));
        assert_eq!(draft.end(), Some(date("2025-01-09")));
        assert_eq!(draft.end_min(), Some(date("2025-01-09")));
    }

    #[test]
    fn test_start_before_end_leaves_end() {
        let mut draft = TaskDraft::default();
        draft.set_start(Some(date("2025-01-01")));
        draft.set_end(Some(date("2025-01-10")));
        draft.set_start(Some(date("2025-01-03")));
        assert_eq!(draft.end(), Some(date("2025-01-10")));

        draft.set_start(None);
        assert_eq!(draft.end(), Some(date("2025-01-10")));
    }

    #[test]
    fn test_end_cannot_precede_start() {
        let mut draft = TaskDraft::default();
        draft.set_start(Some(date("2025-02-01")));
        draft.set_end(Some(date("2025-01-15")));
        assert_eq!(draft.end(), Some(date("2025-02-01")));
    }

    #[test]
    fn test_append_yields_distinct_ids() {
        let mut list = TaskList::new();
        let ids: Vec<TaskId> = (0..5).map(|_| list.append()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
        assert!(ids.iter().all(|id| !id.is_default()));
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = TaskList::new();
        let ids: Vec<TaskId> = (0..4).map(|_| list.append()).collect();

        assert!(list.remove(ids[1]));
        assert_eq!(list.extra(), &[ids[0], ids[2], ids[3]]);

        assert!(!list.remove(ids[1]));
        assert!(!list.remove(DEFAULT_TASK));
        assert_eq!(list.extra().len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_remove_or_clear() {
        let mut list = TaskList::new();
        let first = list.append();
        list.remove(first);
        let second = list.append();
        list.clear();
        let third = list.append();
        assert!(first < second && second < third);
        assert_eq!(list.all().collect::<Vec<_>>(), vec![DEFAULT_TASK, third]);
    }

    #[test]
    fn test_payload_for_single_default_task() {
        let payload = build_payload(&default_task_values(), &TaskList::new(), &Utc, fixed_now()).unwrap();

        assert_eq!(payload.name, "Reforestación Norte");
        assert_eq!(payload.stages.len(), 1);
        let stage = &payload.stages[0];
        assert_eq!(stage.coverage_request, Some(CoverageRequest::Dinero));
        assert_eq!(stage.start_date, "2025-01-01T00:00:00.000Z");
        assert_eq!(stage.end_date, "2025-01-10T00:00:00.000Z");
        assert!(!stage.requires_contribution);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["stages"][0]["coverage_request"], "DINERO");
        assert_eq!(json["stages"][0]["description"], "");
    }

    #[test]
    fn test_dates_are_local_midnight() {
        let buenos_aires = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(to_iso_instant(date("2025-01-01"), &buenos_aires), "2025-01-01T03:00:00.000Z");
    }

    #[test]
    fn test_appended_tasks_follow_default() {
        let mut list = TaskList::new();
        let extra = list.append();
        let mut values = default_task_values();
        values.insert(field_name(TASK_NAME, extra.get()), "Comprar herramientas");
        values.insert(field_name(START_DATE, extra.get()), "2025-02-01");
        values.insert(field_name(END_DATE, extra.get()), "2025-02-03");
        values.insert(field_name(REQUIRES_CONTRIBUTION, extra.get()), "on");
        values.insert(field_name(CATEGORY, extra.get()), "Materiales");

        let payload = build_payload(&values, &list, &Utc, fixed_now()).unwrap();
        assert_eq!(payload.stages.len(), 2);
        assert_eq!(payload.stages[0].name, "Plantar árboles");
        assert_eq!(payload.stages[1].name, "Comprar herramientas");
        assert!(payload.stages[1].requires_contribution);
        assert_eq!(payload.stages[1].coverage_request, Some(CoverageRequest::Materiales));
    }

    #[test]
    fn test_missing_date_falls_back_to_now() {
        let mut values = default_task_values();
        values.insert(field_name(END_DATE, 0), "");
        let payload = build_payload(&values, &TaskList::new(), &Utc, fixed_now()).unwrap();
        assert_eq!(payload.stages[0].end_date, "2024-06-01T12:30:00.000Z");
    }

    #[test]
    fn test_category_omitted_without_contribution() {
        let mut values = default_task_values();
        values.insert(field_name(CATEGORY, 0), "");
        let payload = build_payload(&values, &TaskList::new(), &Utc, fixed_now()).unwrap();
        assert_eq!(payload.stages[0].coverage_request, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["stages"][0].get("coverage_request").is_none());
    }

    #[test]
    fn test_validation_errors() {
        let mut values = default_task_values();
        values.insert(PROJECT_TITLE, "   ");
        assert_eq!(
            build_payload(&values, &TaskList::new(), &Utc, fixed_now()),
            Err(FormError::MissingField("Título".to_string()))
        );

        let mut values = default_task_values();
        values.insert(field_name(CATEGORY, 0), "Option 1");
        assert_eq!(
            build_payload(&values, &TaskList::new(), &Utc, fixed_now()),
            Err(FormError::UnknownCategory("Option 1".to_string()))
        );

        let mut values = default_task_values();
        values.insert(field_name(START_DATE, 0), "2025-13-01");
        assert!(matches!(
            build_payload(&values, &TaskList::new(), &Utc, fixed_now()),
            Err(FormError::InvalidDate { .. })
        ));

        let mut values = default_task_values();
        values.insert(field_name(END_DATE, 0), "2024-12-31");
        assert_eq!(
            build_payload(&values, &TaskList::new(), &Utc, fixed_now()),
            Err(FormError::EndBeforeStart { task: "Plantar árboles".to_string() })
        );
    }

    #[test]
    fn test_contribution_needs_category() {
        let mut values = default_task_values();
        values.insert(field_name(REQUIRES_CONTRIBUTION, 0), "on");
        values.insert(field_name(CATEGORY, 0), "");
        assert_eq!(
            build_payload(&values, &TaskList::new(), &Utc, fixed_now()),
            Err(FormError::MissingField(CATEGORY.to_string()))
        );

        values.insert(field_name(CATEGORY, 0), "MANO_DE_OBRA");
        let payload = build_payload(&values, &TaskList::new(), &Utc, fixed_now()).unwrap();
        assert!(payload.stages[0].requires_contribution);
        assert_eq!(payload.stages[0].coverage_request, Some(CoverageRequest::ManoDeObra));
    }

    #[test]
    fn test_appended_task_missing_name() {
        let mut list = TaskList::new();
        list.append();
        assert_eq!(
            build_payload(&default_task_values(), &list, &Utc, fixed_now()),
            Err(FormError::MissingField(TASK_NAME.to_string()))
        );
    }

    #[test]
    fn test_field_names_cover_every_group() {
        let mut list = TaskList::new();
        let extra = list.append();
        let names = list.field_names();
        assert!(names.contains(&"Descripción0".to_string()));
        assert!(names.contains(&format!("Fecha de Fin{}", extra)));
        assert_eq!(names.len(), 2 + 2 * 5);
    }
}
