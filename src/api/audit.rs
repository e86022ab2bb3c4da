use crate::api::{api_client, ApiError};
use crate::models::{AuditLogPage, AuditLogQuery};

pub async fn get_audit_logs(query: &AuditLogQuery) -> Result<AuditLogPage, ApiError> {
    let mut path = format!(
        "/api/audit-logs?limit={}&offset={}&window_hours={}",
        query.limit, query.offset, query.window_hours
    );
    if let Some(action) = query.action.as_deref() {
        if !action.is_empty() {
            path.push_str(&format!("&action={}", action));
        }
    }
    api_client().get(&path).await
}

/// Distinct action names present in the org's log, for the filter dropdown.
pub async fn get_audit_actions() -> Result<Vec<String>, ApiError> {
    api_client().get("/api/audit-logs/actions").await
}
