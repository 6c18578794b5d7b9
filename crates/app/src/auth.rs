use crate::stores::AppStores;
use crate::token_store;
use client::{ApiClient, Session};
use dioxus::prelude::*;
use shared_types::{AppError, AuthStatus, AuthUser, LoginRequest, Role};
use std::collections::BTreeSet;

/// Global authentication state.
///
/// Starts `Loading` because a saved token may still be checked; `restore`
/// settles it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub status: Signal<AuthStatus>,
    pub current_user: Signal<Option<AuthUser>>,
    pub token: Signal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            status: Signal::new(AuthStatus::Loading),
            current_user: Signal::new(None),
            token: Signal::new(None),
        }
    }

    /// Known roles of the signed-in user; empty when signed out.
    pub fn roles(&self) -> BTreeSet<Role> {
        self.status.read().roles().cloned().unwrap_or_default()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    /// Log in and load the user. The status is `Loading` until
    /// `/auth/user` has answered, so guards never redirect mid-login.
    pub async fn login(&mut self, api: ApiClient, req: LoginRequest) -> Result<(), AppError> {
        self.status.set(AuthStatus::Loading);
        let result = client::sign_in(&api, &req).await;
        self.settle(result)
    }

    /// Check the saved token against `/auth/user` at startup.
    pub async fn restore(&mut self, api: ApiClient) {
        let Some(token) = token_store::load().await else {
            self.clear_auth();
            return;
        };
        self.status.set(AuthStatus::Loading);
        let result = client::resume(&api, token).await;
        if let Err(err) = self.settle(result) {
            tracing::info!(kind = ?err.kind, "Saved session rejected");
        }
    }

    /// Apply the outcome of a sign-in or resume.
    fn settle(&mut self, result: Result<Session, AppError>) -> Result<(), AppError> {
        match result {
            Ok(session) => {
                let roles = session.user.role_set();
                token_store::store(Some(&session.token));
                self.token.set(Some(session.token));
                self.current_user.set(Some(session.user));
                self.status.set(AuthStatus::Authenticated(roles));
                Ok(())
            }
            Err(err) => {
                self.clear_auth();
                Err(err)
            }
        }
    }

    pub fn clear_auth(&mut self) {
        if self.token.peek().is_some() {
            token_store::store(None);
        }
        self.token.set(None);
        self.current_user.set(None);
        self.status.set(AuthStatus::Anonymous);
    }

    /// Sign out and drop every cached record.
    pub fn logout(&mut self, stores: &mut AppStores) {
        tracing::info!("Signing out");
        token_store::store(None);
        self.clear_auth();
        stores.dispose();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// API client carrying the current session token, if any.
pub fn use_api() -> ApiClient {
    let auth = use_auth();
    let base = use_context::<ApiClient>();
    let token = auth.token.read().clone();
    match token {
        Some(token) => base.with_token(token),
        None => base,
    }
}
