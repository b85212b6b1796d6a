//! Project Calls
//!
//! Project submission and the board review flow.

use serde::de::IgnoredAny;
use serde::Serialize;

use super::{Ack, Call};
use crate::error::ApiError;
use crate::models::{Project, ProjectPayload};

#[derive(Serialize)]
struct ObservationArgs<'a> {
    name: &'a str,
    description: &'a str,
}

pub async fn create_project(payload: &ProjectPayload) -> Result<(), ApiError> {
    Call::post("/project/v1/create_project")
        .json(payload)?
        .send::<Option<IgnoredAny>>()
        .await
        .map(|_| ())
}

pub async fn get_projects_with_stages() -> Result<Vec<Project>, ApiError> {
    Call::get("/project/v1/get_projects_with_stages").send().await
}

/// Board member raises an observation against a project
pub async fn add_observation(project_id: u32, name: &str, description: &str) -> Result<(), ApiError> {
    Call::post(format!("/project/v1/add_observation/{}", project_id))
        .json(&ObservationArgs { name, description })?
        .send::<Option<IgnoredAny>>()
        .await
        .map(|_| ())
}

/// Closes the current review round
pub async fn finalize_review() -> Result<Option<String>, ApiError> {
    let ack = Call::post("/project/v1/finalizar_revision")
        .send::<Option<Ack>>()
        .await?;
    Ok(ack.and_then(|a| a.message))
}
