use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OrgRole;

/// Descriptive snapshot of a pending invitation, resolved once from the
/// opaque token at flow entry. Read-only for the rest of the flow; the
/// expiry shown here is advisory - the server re-checks at accept time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InviteInfo {
    pub org_name: String,
    pub org_slug: String,
    pub email: String,
    pub role: OrgRole,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInviteRequest {
    pub password: String,
}

/// Accepting an invite logs the new member in immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInviteResponse {
    pub token: String,
    pub user: super::UserIdentity,
}
