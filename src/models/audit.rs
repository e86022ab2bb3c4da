use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLog {
    pub id: u64,
    pub action: String,
    pub user_email: Option<String>,
    pub details: Option<BTreeMap<String, Value>>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Flatten the details map for table display, `None` when empty.
    pub fn details_text(&self) -> Option<String> {
        let details = self.details.as_ref()?;
        if details.is_empty() {
            return None;
        }
        Some(
            details
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{}: {}", k, s),
                    other => format!("{}: {}", k, other),
                })
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogPage {
    pub audit_logs: Vec<AuditLog>,
    pub total: i64,
}

#[derive(Debug, Clone)]
pub struct AuditLogQuery {
    pub limit: i64,
    pub offset: i64,
    pub action: Option<String>,
    pub window_hours: i64,
}

impl Default for AuditLogQuery {
    fn default() -> Self {
        AuditLogQuery {
            limit: 50,
            offset: 0,
            action: None,
            window_hours: 168,
        }
    }
}

/// Human label and badge color for a known audit action.
pub fn action_display(action: &str) -> (&str, &'static str) {
    match action {
        "auth.login" => ("Login", "badge badge-green"),
        "auth.logout" => ("Logout", "badge badge-gray"),
        "auth.login_failed" => ("Login Failed", "badge badge-red"),
        "org.created" => ("Org Created", "badge badge-purple"),
        "org.updated" => ("Org Updated", "badge badge-blue"),
        "member.invited" => ("Member Invited", "badge badge-blue"),
        "member.joined" => ("Member Joined", "badge badge-green"),
        "member.removed" => ("Member Removed", "badge badge-red"),
        "member.role_changed" => ("Role Changed", "badge badge-yellow"),
        "member.invite_revoked" => ("Invite Revoked", "badge badge-red"),
        "apikey.created" => ("API Key Created", "badge badge-blue"),
        "apikey.deleted" => ("API Key Deleted", "badge badge-red"),
        "check.created" => ("Check Created", "badge badge-green"),
        "check.updated" => ("Check Updated", "badge badge-blue"),
        "check.deleted" => ("Check Deleted", "badge badge-red"),
        "settings.updated" => ("Settings Updated", "badge badge-blue"),
        other => (other, "badge badge-gray"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_text_joins_entries() {
        let mut details = BTreeMap::new();
        details.insert("email".to_string(), Value::String("a@x.com".to_string()));
        details.insert("role".to_string(), Value::String("member".to_string()));
        let log = AuditLog {
            id: 1,
            action: "member.joined".to_string(),
            user_email: None,
            details: Some(details),
            ip_address: None,
            created_at: Utc::now(),
        };
        assert_eq!(log.details_text().as_deref(), Some("email: a@x.com, role: member"));
    }

    #[test]
    fn details_text_empty_is_none() {
        let log = AuditLog {
            id: 1,
            action: "auth.login".to_string(),
            user_email: None,
            details: Some(BTreeMap::new()),
            ip_address: None,
            created_at: Utc::now(),
        };
        assert!(log.details_text().is_none());
    }

    #[test]
    fn unknown_action_falls_back_to_raw_name() {
        let (label, class) = action_display("billing.charged");
        assert_eq!(label, "billing.charged");
        assert_eq!(class, "badge badge-gray");
    }
}
