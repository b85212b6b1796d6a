//! Observation Calls

use serde::de::IgnoredAny;

use super::Call;
use crate::error::ApiError;
use crate::models::Observation;

/// Observations raised against the current user's projects
pub async fn get_observations_by_user() -> Result<Vec<Observation>, ApiError> {
    Call::get("/project/v1/get_observations_by_user").send().await
}

/// Marks an observation as corrected
pub async fn resolve_observation(id: u32) -> Result<(), ApiError> {
    Call::patch(format!("/project/v1/upload_corrected_observation/{}", id))
        .send::<Option<IgnoredAny>>()
        .await
        .map(|_| ())
}
