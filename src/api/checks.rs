use serde::Deserialize;

use crate::api::{api_client, ApiError};
use crate::models::{Check, CheckSummary};

#[derive(Deserialize)]
struct CheckList {
    checks: Vec<Check>,
}

pub async fn list_checks() -> Result<Vec<Check>, ApiError> {
    let list: CheckList = api_client().get("/api/checks").await?;
    Ok(list.checks)
}

pub async fn check_summary(check_id: u64, window_hours: i64) -> Result<CheckSummary, ApiError> {
    api_client()
        .get(&format!("/api/checks/{}/summary?window_hours={}", check_id, window_hours))
        .await
}
