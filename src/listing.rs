//! Listing Utilities
//!
//! Pure helpers the list pages use to reshape and update what they show.

use std::collections::BTreeMap;

use crate::models::{parse_backend_date, Observation, ObservationStatus, Project, Stage};

/// Stages of one project, in the order the backend sent them
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStages {
    pub project_id: u32,
    pub stages: Vec<Stage>,
}

/// Group stages by project, ascending project id
pub fn group_by_project(stages: &[Stage]) -> Vec<ProjectStages> {
    let mut groups: BTreeMap<u32, Vec<Stage>> = BTreeMap::new();
    for stage in stages {
        groups.entry(stage.id_project).or_default().push(stage.clone());
    }
    groups
        .into_iter()
        .map(|(project_id, stages)| ProjectStages { project_id, stages })
        .collect()
}

/// Drop a stage after it was covered or finished. Returns whether it was present.
pub fn remove_stage(stages: &mut Vec<Stage>, id: u32) -> bool {
    let before = stages.len();
    stages.retain(|s| s.id != id);
    stages.len() != before
}

pub fn mark_resolved(observations: &mut [Observation], id: u32) -> bool {
    match observations.iter_mut().find(|o| o.id == id) {
        Some(obs) => {
            obs.status = ObservationStatus::Resolved;
            true
        }
        None => false,
    }
}

/// Projects with their stages sorted by start date. Stages without a
/// readable date go last, in backend order.
pub fn sort_project_stages(projects: &mut [Project]) {
    for project in projects.iter_mut() {
        project.stages.sort_by_key(|s| {
            let start = s.start_date.as_deref().and_then(parse_backend_date);
            (start.is_none(), start)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoverageRequest, StageStatus};

    fn make_stage(id: u32, id_project: u32, start: Option<&str>) -> Stage {
        Stage {
            id,
            id_project,
            name: format!("Etapa {}", id),
            description: None,
            start_date: start.map(str::to_string),
            end_date: None,
            coverage_request: CoverageRequest::Dinero,
            requires_contribution: true,
            status: StageStatus::Pending,
        }
    }

    fn make_observation(id: u32) -> Observation {
        Observation {
            id,
            name: format!("Obs {}", id),
            description: None,
            status: ObservationStatus::Pending,
            project_id: Some(1),
            project_name: None,
        }
    }

    #[test]
    fn test_group_by_project() {
        let stages = vec![make_stage(1, 7, None), make_stage(2, 3, None), make_stage(3, 7, None)];
        let groups = group_by_project(&stages);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].project_id, 3);
        assert_eq!(groups[1].project_id, 7);
        let ids: Vec<u32> = groups[1].stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_stage() {
        let mut stages = vec![make_stage(1, 1, None), make_stage(2, 1, None)];
        assert!(remove_stage(&mut stages, 1));
        assert!(!remove_stage(&mut stages, 1));
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].id, 2);
    }

    #[test]
    fn test_mark_resolved() {
        let mut list = vec![make_observation(1), make_observation(2)];
        assert!(mark_resolved(&mut list, 2));
        assert_eq!(list[1].status, ObservationStatus::Resolved);
        assert_eq!(list[0].status, ObservationStatus::Pending);
        assert!(!mark_resolved(&mut list, 9));
    }

    #[test]
    fn test_sort_project_stages() {
        let mut projects = vec![Project {
            id: 1,
            user_id: 1,
            name: "Huerta".to_string(),
            description: String::new(),
            stages: vec![
                make_stage(1, 1, None),
                make_stage(2, 1, Some("2025-03-01T03:00:00.000Z")),
                make_stage(3, 1, Some("2025-01-01T03:00:00.000Z")),
            ],
        }];
        sort_project_stages(&mut projects);
        let ids: Vec<u32> = projects[0].stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_project_stages_flask_dates() {
        let mut projects = vec![Project {
            id: 2,
            user_id: 1,
            name: "Comedor".to_string(),
            description: String::new(),
            stages: vec![
                make_stage(2, 2, Some("Fri, 10 Jan 2025 00:00:00 GMT")),
                make_stage(1, 2, Some("Wed, 01 Jan 2025 00:00:00 GMT")),
                make_stage(3, 2, Some("Mon, 03 Feb 2025 00:00:00 GMT")),
            ],
        }];
        sort_project_stages(&mut projects);
        let ids: Vec<u32> = projects[0].stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
