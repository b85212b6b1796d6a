//! Monitoring Calls

use super::Call;
use crate::error::ApiError;
use crate::models::{StatBlock, StatsSnapshot};

/// Fetch the three indicators one after another
pub async fn obtain_stats() -> Result<StatsSnapshot, ApiError> {
    let on_time: StatBlock = Call::get("/monitor/v1/casos_exitosos_en_termino").send().await?;
    let overdue: StatBlock = Call::get("/monitor/v1/casos_fuera_de_plazo").send().await?;
    let without_collaboration: StatBlock = Call::get("/monitor/v1/casos_sin_colaboracion").send().await?;
    Ok(StatsSnapshot {
        on_time,
        overdue,
        without_collaboration,
    })
}
