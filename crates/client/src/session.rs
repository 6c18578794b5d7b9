//! Sign-in sequence shared by the login page and the integration tests.

use crate::api::ApiClient;
use shared_types::{AppError, AuthUser, LoginRequest};

/// A signed-in user and their bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// Log in, then ask the API who the token belongs to.
///
/// The roles come from `/auth/user`, not from the login response, so the
/// session always reflects what the API reports for the token.
#[tracing::instrument(skip(api, req), fields(username = %req.username))]
pub async fn sign_in(api: &ApiClient, req: &LoginRequest) -> Result<Session, AppError> {
    let login = api.login(req).await?;
    let session = resume(api, login.token).await?;
    tracing::info!(roles = ?session.user.roles, "Session started");
    Ok(session)
}

/// Rebuild a session from a saved token.
///
/// Fails with the API's error (usually `Unauthorized`) when the token has
/// expired or been revoked.
#[tracing::instrument(skip_all)]
pub async fn resume(api: &ApiClient, token: String) -> Result<Session, AppError> {
    let user = api.with_token(token.clone()).current_user().await?;
    Ok(Session { token, user })
}
