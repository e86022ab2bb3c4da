use async_trait::async_trait;

use crate::api::{self, ApiError};
use crate::models::{InviteInfo, UserIdentity};

/// The remote system of record for invite validity and account
/// creation. The redemption flow is written against this trait so it
/// can be driven by a test double; futures stay `?Send` because the
/// wasm HTTP client is not `Send`.
#[async_trait(?Send)]
pub trait Authority {
    async fn invite_info(&self, token: &str) -> Result<InviteInfo, ApiError>;
    async fn accept_invite(&self, token: &str, password: &str) -> Result<(), ApiError>;
    async fn refresh_current_user(&self) -> Result<UserIdentity, ApiError>;
}

/// Production authority backed by the shared API client.
pub struct ApiAuthority;

#[async_trait(?Send)]
impl Authority for ApiAuthority {
    async fn invite_info(&self, token: &str) -> Result<InviteInfo, ApiError> {
        api::invites::get_invite_info(token).await
    }

    async fn accept_invite(&self, token: &str, password: &str) -> Result<(), ApiError> {
        api::invites::accept_invite(token, password).await.map(|_| ())
    }

    async fn refresh_current_user(&self) -> Result<UserIdentity, ApiError> {
        api::auth::refresh_current_user().await
    }
}
