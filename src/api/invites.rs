use crate::api::{api_client, ApiError};
use crate::models::{AcceptInviteRequest, AcceptInviteResponse, InviteInfo};

/// Resolve an invite token to its descriptive snapshot. The token is
/// passed through verbatim; the server is the sole validator.
pub async fn get_invite_info(token: &str) -> Result<InviteInfo, ApiError> {
    api_client().get(&format!("/api/invites/{}", token)).await
}

/// Redeem the invite: creates the account with the chosen password and
/// joins the organization. Single-use on the server side.
pub async fn accept_invite(token: &str, password: &str) -> Result<AcceptInviteResponse, ApiError> {
    let request = AcceptInviteRequest {
        password: password.to_string(),
    };

    let response: AcceptInviteResponse = api_client()
        .post(&format!("/api/invites/{}/accept", token), &request)
        .await?;

    // The new member is logged in immediately
    api_client().set_token(Some(response.token.clone()));

    Ok(response)
}
