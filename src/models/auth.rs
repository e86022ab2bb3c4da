use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserIdentity,
}

/// The authenticated caller as reported by `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    pub id: u64,
    pub email: String,
    pub role: OrgRole,
    pub org_id: u64,
    pub org_name: Option<String>,
    pub org_slug: Option<String>,
}

impl UserIdentity {
    /// Route to this user's home dashboard, scoped by org when known.
    pub fn dashboard_route(&self) -> String {
        match self.org_slug.as_deref() {
            Some(slug) if !slug.is_empty() => format!("/org/{}/dashboard", slug),
            _ => "/dashboard".to_string(),
        }
    }
}

/// Permission level of a user within an organization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    Owner,
    Admin,
    Member,
}

impl OrgRole {
    pub fn can_manage_members(&self) -> bool {
        matches!(self, OrgRole::Owner | OrgRole::Admin)
    }

    pub fn can_manage_settings(&self) -> bool {
        matches!(self, OrgRole::Owner | OrgRole::Admin)
    }

    pub fn display_name(&self) -> &str {
        match self {
            OrgRole::Owner => "Owner",
            OrgRole::Admin => "Admin",
            OrgRole::Member => "Member",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_route_uses_org_slug() {
        let user = UserIdentity {
            id: 1,
            email: "a@x.com".to_string(),
            role: OrgRole::Member,
            org_id: 7,
            org_name: Some("Acme".to_string()),
            org_slug: Some("acme".to_string()),
        };
        assert_eq!(user.dashboard_route(), "/org/acme/dashboard");
    }

    #[test]
    fn dashboard_route_falls_back_without_slug() {
        let user = UserIdentity {
            id: 1,
            email: "a@x.com".to_string(),
            role: OrgRole::Member,
            org_id: 7,
            org_name: None,
            org_slug: None,
        };
        assert_eq!(user.dashboard_route(), "/dashboard");
    }

    #[test]
    fn role_permissions() {
        assert!(OrgRole::Owner.can_manage_members());
        assert!(OrgRole::Admin.can_manage_settings());
        assert!(!OrgRole::Member.can_manage_members());
        assert!(!OrgRole::Member.can_manage_settings());
    }
}
