//! Stage Calls
//!
//! Listing and contribution lifecycle of project stages.

use serde::de::IgnoredAny;

use super::Call;
use crate::error::ApiError;
use crate::models::Stage;

/// Pending stages that still ask for a contribution
pub async fn get_available_stages() -> Result<Vec<Stage>, ApiError> {
    Call::get("/stage/v1/get_all_stages").send().await
}

/// Stages the current organization covered and that are still running
pub async fn get_in_progress_stages() -> Result<Vec<Stage>, ApiError> {
    Call::get("/stage/v1/get_in_progress_stages").send().await
}

/// PENDING -> IN_PROGRESS
pub async fn cover_stage(id: u32) -> Result<(), ApiError> {
    Call::patch(format!("/stage/v1/cover_stage_by_id/{}", id))
        .send::<Option<IgnoredAny>>()
        .await
        .map(|_| ())
}

/// IN_PROGRESS -> FINISHED. A stage in any other state answers 409.
pub async fn finish_stage(id: u32) -> Result<(), ApiError> {
    Call::patch(format!("/stage/v1/finish_stage_by_id/{}", id))
        .conflict_aware()
        .send::<Option<IgnoredAny>>()
        .await
        .map(|_| ())
}
