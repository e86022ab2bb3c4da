use crate::api::ApiError;
use crate::models::{InviteInfo, UserIdentity};

use super::authority::Authority;
use super::credentials::CredentialInput;

/// Render-ready state of the redemption flow. Every transition is
/// triggered either by explicit user action or by the settlement of the
/// single network call the state permits; there are no timers and no
/// automatic retries.
#[derive(Debug, Clone, PartialEq)]
pub enum RedemptionState {
    /// Resolver call in flight. No user input accepted.
    Loading,
    /// The token could not be resolved. Terminal for this flow instance;
    /// the only affordance left is the link back to login.
    InvalidInvite { message: String },
    /// Form is interactive. Holds the last submit error, if any.
    ReadyToJoin { error: Option<String> },
    /// Accept call in flight. All submit affordances are disabled until
    /// it settles.
    Submitting,
    /// The authority accepted (token, password). Terminal; triggers
    /// session bootstrap and redirect.
    Joined,
}

/// Owns everything the invite page needs: the opaque token, the current
/// state, the resolved snapshot, and the transient credential input.
/// The methods below are the only mutation paths.
pub struct RedemptionFlow {
    token: String,
    state: RedemptionState,
    info: Option<InviteInfo>,
    input: CredentialInput,
}

impl RedemptionFlow {
    pub fn new(token: impl Into<String>) -> Self {
        RedemptionFlow {
            token: token.into(),
            state: RedemptionState::Loading,
            info: None,
            input: CredentialInput::default(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn state(&self) -> &RedemptionState {
        &self.state
    }

    /// Snapshot resolved at flow entry; never refreshed mid-flow.
    pub fn info(&self) -> Option<&InviteInfo> {
        self.info.as_ref()
    }

    pub fn input(&self) -> &CredentialInput {
        &self.input
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, RedemptionState::Submitting)
    }

    fn is_interactive(&self) -> bool {
        matches!(self.state, RedemptionState::ReadyToJoin { .. })
    }

    /// Apply the result of the one resolver call. A settlement arriving
    /// in any other state is stale and discarded.
    pub fn resolve_settled(&mut self, result: Result<InviteInfo, ApiError>) {
        if !matches!(self.state, RedemptionState::Loading) {
            return;
        }
        match result {
            Ok(info) => {
                self.info = Some(info);
                self.state = RedemptionState::ReadyToJoin { error: None };
            }
            Err(err) => {
                self.state = RedemptionState::InvalidInvite {
                    message: err.to_string(),
                };
            }
        }
    }

    /// Field edits are only accepted while the form is interactive.
    /// Values survive a failed submit untouched.
    pub fn set_password(&mut self, value: String) {
        if self.is_interactive() {
            self.input.password = value;
        }
    }

    pub fn set_confirm(&mut self, value: String) {
        if self.is_interactive() {
            self.input.confirm = value;
        }
    }

    pub fn submittable(&self) -> bool {
        self.is_interactive() && self.input.submittable(self.is_submitting())
    }

    /// Move to `Submitting` iff a submit is currently allowed. Returns
    /// whether the caller may issue the accept call - the gate that
    /// keeps a second click from racing a pending submission.
    pub fn begin_submit(&mut self) -> bool {
        if self.submittable() {
            self.state = RedemptionState::Submitting;
            true
        } else {
            false
        }
    }

    /// Apply the result of the accept call. On failure the form is
    /// re-enabled with the authority's message shown and the typed
    /// passwords retained; the token is kept so the user may retry.
    pub fn submit_settled(&mut self, result: Result<(), ApiError>) {
        if !matches!(self.state, RedemptionState::Submitting) {
            return;
        }
        match result {
            Ok(()) => self.state = RedemptionState::Joined,
            Err(err) => {
                self.state = RedemptionState::ReadyToJoin {
                    error: Some(err.to_string()),
                };
            }
        }
    }

    /// Destination after a successful join, from the slug captured at
    /// resolve time.
    pub fn dashboard_route(&self) -> String {
        match self.info.as_ref().map(|i| i.org_slug.as_str()) {
            Some(slug) if !slug.is_empty() => format!("/org/{}/dashboard", slug),
            _ => "/dashboard".to_string(),
        }
    }
}

/// Result of one accept attempt against the authority.
pub enum SubmitOutcome {
    /// The account was created. `identity` is the refreshed caller
    /// identity, or `None` when the best-effort refresh failed.
    Accepted { identity: Option<UserIdentity> },
    Rejected(ApiError),
}

/// Issue the accept call and, on success, bootstrap the session by
/// refreshing the caller's identity. The refresh is awaited before this
/// returns so the destination page never renders logged out, but its
/// failure is only logged - redemption has already succeeded and must
/// not be reported as failed.
pub async fn run_submit<A: Authority>(token: &str, password: &str, authority: &A) -> SubmitOutcome {
    if let Err(err) = authority.accept_invite(token, password).await {
        return SubmitOutcome::Rejected(err);
    }

    let identity = match authority.refresh_current_user().await {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!("identity refresh after join failed: {}", err);
            None
        }
    };

    SubmitOutcome::Accepted { identity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrgRole;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn acme_invite() -> InviteInfo {
        InviteInfo {
            org_name: "Acme".to_string(),
            org_slug: "acme".to_string(),
            email: "a@x.com".to_string(),
            role: OrgRole::Member,
            expires_at: Utc::now() + Duration::days(7),
        }
    }

    fn ready_flow() -> RedemptionFlow {
        let mut flow = RedemptionFlow::new("tok-1");
        flow.resolve_settled(Ok(acme_invite()));
        flow.set_password("longpass1".to_string());
        flow.set_confirm("longpass1".to_string());
        flow
    }

    struct MockAuthority {
        accept_result: Result<(), ApiError>,
        refresh_result: Result<UserIdentity, ApiError>,
        accept_calls: AtomicUsize,
        refresh_calls: AtomicUsize,
    }

    impl MockAuthority {
        fn new(accept_result: Result<(), ApiError>, refresh_result: Result<UserIdentity, ApiError>) -> Self {
            MockAuthority {
                accept_result,
                refresh_result,
                accept_calls: AtomicUsize::new(0),
                refresh_calls: AtomicUsize::new(0),
            }
        }
    }

    fn joined_identity() -> UserIdentity {
        UserIdentity {
            id: 9,
            email: "a@x.com".to_string(),
            role: OrgRole::Member,
            org_id: 3,
            org_name: Some("Acme".to_string()),
            org_slug: Some("acme".to_string()),
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Authority for MockAuthority {
        async fn invite_info(&self, _token: &str) -> Result<InviteInfo, ApiError> {
            Ok(acme_invite())
        }

        async fn accept_invite(&self, _token: &str, _password: &str) -> Result<(), ApiError> {
            self.accept_calls.fetch_add(1, Ordering::SeqCst);
            self.accept_result.clone()
        }

        async fn refresh_current_user(&self) -> Result<UserIdentity, ApiError> {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            self.refresh_result.clone()
        }
    }

    #[test]
    fn resolve_failure_is_terminal() {
        let mut flow = RedemptionFlow::new("bad-token");
        flow.resolve_settled(Err(ApiError::NotFound("invite not found".to_string())));

        assert_eq!(
            *flow.state(),
            RedemptionState::InvalidInvite {
                message: "invite not found".to_string()
            }
        );

        // No submit path exists from here, no matter what gets typed
        flow.set_password("longpass1".to_string());
        flow.set_confirm("longpass1".to_string());
        assert!(!flow.submittable());
        assert!(!flow.begin_submit());
        assert!(flow.input().password.is_empty());
    }

    #[test]
    fn resolve_success_enters_ready() {
        let mut flow = RedemptionFlow::new("tok-1");
        flow.resolve_settled(Ok(acme_invite()));

        assert_eq!(*flow.state(), RedemptionState::ReadyToJoin { error: None });
        assert_eq!(flow.info().unwrap().org_name, "Acme");
        assert_eq!(flow.info().unwrap().email, "a@x.com");
    }

    #[test]
    fn stale_resolve_settlement_is_discarded() {
        let mut flow = ready_flow();
        let before = flow.info().cloned();

        flow.resolve_settled(Err(ApiError::Network("timed out".to_string())));

        assert_eq!(*flow.state(), RedemptionState::ReadyToJoin { error: None });
        assert_eq!(flow.info().cloned(), before);
    }

    #[test]
    fn stale_submit_settlement_is_discarded() {
        let mut flow = ready_flow();
        flow.submit_settled(Ok(()));
        assert_eq!(*flow.state(), RedemptionState::ReadyToJoin { error: None });
    }

    #[test]
    fn begin_submit_gates_double_click() {
        let mut flow = ready_flow();

        assert!(flow.begin_submit());
        // Second click before settlement: no transition, no second call
        assert!(!flow.begin_submit());
        assert!(flow.is_submitting());
    }

    #[test]
    fn short_password_blocks_submit() {
        let mut flow = RedemptionFlow::new("tok-1");
        flow.resolve_settled(Ok(acme_invite()));
        flow.set_password("short".to_string());
        flow.set_confirm("short".to_string());

        assert!(!flow.submittable());
        assert!(!flow.begin_submit());
    }

    #[test]
    fn edits_ignored_while_submitting() {
        let mut flow = ready_flow();
        assert!(flow.begin_submit());

        flow.set_password("changed-now".to_string());
        assert_eq!(flow.input().password, "longpass1");
    }

    #[test]
    fn failed_submit_returns_to_ready_with_error_and_input() {
        let mut flow = ready_flow();
        assert!(flow.begin_submit());
        flow.submit_settled(Err(ApiError::Server("invite already accepted".to_string())));

        assert_eq!(
            *flow.state(),
            RedemptionState::ReadyToJoin {
                error: Some("invite already accepted".to_string())
            }
        );
        // Typed passwords retained, submit re-enabled
        assert_eq!(flow.input().password, "longpass1");
        assert_eq!(flow.input().confirm, "longpass1");
        assert!(flow.submittable());
    }

    #[test]
    fn dashboard_route_prefers_org_slug() {
        let flow = ready_flow();
        assert_eq!(flow.dashboard_route(), "/org/acme/dashboard");

        let mut no_slug = RedemptionFlow::new("tok-2");
        let mut info = acme_invite();
        info.org_slug = String::new();
        no_slug.resolve_settled(Ok(info));
        assert_eq!(no_slug.dashboard_route(), "/dashboard");

        let unresolved = RedemptionFlow::new("tok-3");
        assert_eq!(unresolved.dashboard_route(), "/dashboard");
    }

    #[tokio::test]
    async fn successful_join_refreshes_identity_once() {
        let mut flow = ready_flow();
        let authority = MockAuthority::new(Ok(()), Ok(joined_identity()));

        assert!(flow.begin_submit());
        let outcome = run_submit(flow.token(), "longpass1", &authority).await;

        match outcome {
            SubmitOutcome::Accepted { identity } => {
                assert_eq!(identity, Some(joined_identity()));
            }
            SubmitOutcome::Rejected(err) => panic!("unexpected rejection: {}", err),
        }
        assert_eq!(authority.accept_calls.load(Ordering::SeqCst), 1);
        assert_eq!(authority.refresh_calls.load(Ordering::SeqCst), 1);

        flow.submit_settled(Ok(()));
        assert_eq!(*flow.state(), RedemptionState::Joined);
        assert_eq!(flow.dashboard_route(), "/org/acme/dashboard");
    }

    #[tokio::test]
    async fn rapid_double_submit_issues_one_accept_call() {
        let mut flow = ready_flow();
        let authority = MockAuthority::new(Ok(()), Ok(joined_identity()));

        // The page issues the call only when the gate opens; the second
        // click finds the gate closed and issues nothing.
        for _ in 0..2 {
            if flow.begin_submit() {
                let _ = run_submit(flow.token(), "longpass1", &authority).await;
            }
        }

        assert_eq!(authority.accept_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn already_redeemed_rejection_does_not_refresh() {
        let mut flow = ready_flow();
        let authority = MockAuthority::new(
            Err(ApiError::Server("invite already accepted".to_string())),
            Ok(joined_identity()),
        );

        assert!(flow.begin_submit());
        let outcome = run_submit(flow.token(), "longpass1", &authority).await;

        match outcome {
            SubmitOutcome::Rejected(err) => flow.submit_settled(Err(err)),
            SubmitOutcome::Accepted { .. } => panic!("expected rejection"),
        }

        assert_eq!(authority.refresh_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            *flow.state(),
            RedemptionState::ReadyToJoin {
                error: Some("invite already accepted".to_string())
            }
        );
    }

    #[tokio::test]
    async fn refresh_failure_does_not_undo_the_join() {
        let mut flow = ready_flow();
        let authority = MockAuthority::new(Ok(()), Err(ApiError::Network("offline".to_string())));

        assert!(flow.begin_submit());
        let outcome = run_submit(flow.token(), "longpass1", &authority).await;

        match outcome {
            SubmitOutcome::Accepted { identity } => assert!(identity.is_none()),
            SubmitOutcome::Rejected(err) => panic!("unexpected rejection: {}", err),
        }

        flow.submit_settled(Ok(()));
        assert_eq!(*flow.state(), RedemptionState::Joined);
        // Navigation still happens with the route from the snapshot
        assert_eq!(flow.dashboard_route(), "/org/acme/dashboard");
    }
}
