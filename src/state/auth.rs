use dioxus::prelude::*;

use crate::models::UserIdentity;

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

#[derive(Clone, Default)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn can_manage_members(&self) -> bool {
        self.user.as_ref().map(|u| u.role.can_manage_members()).unwrap_or(false)
    }

    pub fn can_manage_settings(&self) -> bool {
        self.user.as_ref().map(|u| u.role.can_manage_settings()).unwrap_or(false)
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn org_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.org_name.as_deref())
    }
}

pub fn set_auth(user: UserIdentity, token: String) {
    let mut state = AUTH_STATE.write();
    state.user = Some(user);
    state.token = Some(token);
}

/// Replace the cached identity without touching the token, e.g. after
/// a best-effort `/api/auth/me` refresh.
pub fn set_user(user: UserIdentity) {
    AUTH_STATE.write().user = Some(user);
}

pub fn clear_auth() {
    let mut state = AUTH_STATE.write();
    state.user = None;
    state.token = None;
}
