use crate::common;
use client::ScheduleStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, FALLBACK_MESSAGE};

/// Queue one failing status write with `body` and return the resulting error.
async fn failed_write(status: u16, body: &str) -> shared_types::AppError {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    api.state.lock().await.status_failures.push_back((status, body.into()));

    let mut store = ScheduleStore::new();
    store.schedules.finish_load(client.list_schedules().await);
    store
        .transition_status(&client, "sched-123", "FULL")
        .await
        .expect_err("Write should fail")
}

#[tokio::test]
async fn test_message_field_is_shown() {
    let err = failed_write(400, r#"{"message":"Date is in the past"}"#).await;
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.user_message(), "Date is in the past");
}

#[tokio::test]
async fn test_error_field_is_shown() {
    let err = failed_write(403, r#"{"error":"Access denied"}"#).await;
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.user_message(), "Access denied");
}

#[tokio::test]
async fn test_nested_details_error_wins() {
    let err = failed_write(409, r#"{"message":"Conflict","details":{"error":"Schedule is locked"}}"#).await;
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.user_message(), "Schedule is locked");
}

#[tokio::test]
async fn test_empty_body_falls_back_to_generic_message() {
    let err = failed_write(500, "").await;
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_missing_remote_schedule_reads_details_error() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api
        .authed()
        .update_schedule_status("ghost", shared_types::ScheduleStatus::Full)
        .await
        .expect_err("Unknown id should fail");

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Schedule not found");
}
