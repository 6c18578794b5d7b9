use crate::common::{self, PASSWORD, TOKEN, USERNAME};
use client::{resume, sign_in};
use pretty_assertions::assert_eq;
use shared_types::{
    guard_route, AppErrorKind, AuthStatus, ForgotPasswordRequest, GuardDecision, LoginRequest, Role,
};

fn credentials(password: &str) -> LoginRequest {
    LoginRequest {
        username: USERNAME.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_sign_in_reports_roles_from_current_user() {
    let api = common::spawn_api(common::seeded()).await;

    let session = sign_in(&api.client(), &credentials(PASSWORD))
        .await
        .expect("Sign-in should succeed");

    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.username, USERNAME);
    assert_eq!(session.user.id.as_deref(), Some("7"));
    assert!(session.user.has_role(Role::Receptionist));
    assert!(!session.user.has_role(Role::Admin));
}

#[tokio::test]
async fn test_saved_token_resumes_the_session() {
    let api = common::spawn_api(common::seeded()).await;

    let session = resume(&api.client(), TOKEN.to_string())
        .await
        .expect("Saved token should still be valid");

    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.username, USERNAME);
    assert!(session.user.has_role(Role::Receptionist));
}

#[tokio::test]
async fn test_revoked_token_does_not_resume() {
    let api = common::spawn_api(common::seeded()).await;

    let err = resume(&api.client(), "expired-token".to_string())
        .await
        .expect_err("Unknown token should be rejected");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized_with_api_message() {
    let api = common::spawn_api(common::seeded()).await;

    let err = sign_in(&api.client(), &credentials("nope"))
        .await
        .expect_err("Sign-in should fail");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid username or password");
}

#[tokio::test]
async fn test_blank_credentials_fail_before_any_request() {
    // Nothing listens on this port; validation must stop the call first.
    let api = client::ApiClient::new("http://127.0.0.1:9/api");

    let err = sign_in(&api, &credentials("")).await.expect_err("Should not validate");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("password"));
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    let api = client::ApiClient::new("http://127.0.0.1:9/api");

    let err = sign_in(&api, &credentials(PASSWORD)).await.expect_err("Should not connect");

    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api.client().list_schedules().await.expect_err("Should be rejected");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Full authentication is required");
}

#[tokio::test]
async fn test_signed_in_roles_drive_the_route_guard() {
    let mut state = common::seeded();
    state.roles = vec!["ROLE_DENTIST".into(), "ROLE_UNKNOWN".into()];
    let api = common::spawn_api(state).await;

    let session = sign_in(&api.client(), &credentials(PASSWORD))
        .await
        .expect("Sign-in should succeed");
    let status = AuthStatus::Authenticated(session.user.role_set());

    assert_eq!(session.user.role_set().len(), 1, "Unknown roles are dropped");
    assert_eq!(guard_route(&status, "/patient/11"), GuardDecision::Render);
    assert_eq!(guard_route(&status, "/dentist"), GuardDecision::Redirect("/"));
}

#[tokio::test]
async fn test_forgot_password_succeeds() {
    let api = common::spawn_api(common::seeded()).await;

    api.client()
        .forgot_password(&ForgotPasswordRequest {
            email: "kasun@example.com".into(),
        })
        .await
        .expect("Forgot password should succeed");
}
