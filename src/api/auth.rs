use crate::api::{api_client, ApiError};
use crate::models::{LoginRequest, LoginResponse, UserIdentity};

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = api_client()
        .post("/api/auth/login", &request)
        .await?;

    // Store the token for future requests
    api_client().set_token(Some(response.token.clone()));

    Ok(response)
}

pub async fn logout() {
    api_client().set_token(None);
}

/// Re-fetch the caller's identity from the server. Used to bootstrap the
/// session after an invite is accepted and on app start when a token is
/// already held.
pub async fn refresh_current_user() -> Result<UserIdentity, ApiError> {
    api_client().get("/api/auth/me").await
}
