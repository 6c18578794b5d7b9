use crate::common::{self, FakeApi};
use client::ScheduleStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ScheduleStatus};

/// Load the fake's schedules into a fresh store, the way the list page does.
async fn loaded_store(api: &FakeApi) -> ScheduleStore {
    let mut store = ScheduleStore::new();
    store.schedules.begin_load();
    store.schedules.finish_load(api.authed().list_schedules().await);
    assert!(store.schedules.is_loaded(), "Schedules should load");
    store
}

async fn remote_status(api: &FakeApi, id: &str) -> String {
    let state = api.state.lock().await;
    state
        .schedules
        .iter()
        .find(|s| s["id"] == id)
        .and_then(|s| s["status"].as_str())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_cancel_then_failed_reactivation_keeps_cancelled() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let mut store = loaded_store(&api).await;

    let updated = store
        .transition_status(&client, "sched-123", "CANCELLED")
        .await
        .expect("Cancel should succeed");
    assert_eq!(updated.status, ScheduleStatus::Cancelled);
    assert_eq!(remote_status(&api, "sched-123").await, "CANCELLED");

    api.state
        .lock()
        .await
        .status_failures
        .push_back((409, r#"{"message":"Schedule has bookings"}"#.into()));

    let err = store
        .transition_status(&client, "sched-123", "ACTIVE")
        .await
        .expect_err("Reactivation should fail");

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Schedule has bookings");
    assert_eq!(store.status_of("sched-123"), Some(ScheduleStatus::Cancelled));
    assert_eq!(store.pending_target("sched-123"), None);
    assert_eq!(remote_status(&api, "sched-123").await, "CANCELLED");
}

#[tokio::test]
async fn test_repeated_transition_is_idempotent() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let mut store = loaded_store(&api).await;

    for _ in 0..2 {
        store
            .transition_status(&client, "sched-123", "FULL")
            .await
            .expect("Transition should succeed");
    }

    assert_eq!(store.status_of("sched-123"), Some(ScheduleStatus::Full));
    let writes = api.state.lock().await.status_writes.clone();
    assert_eq!(
        writes,
        vec![
            ("sched-123".to_string(), "FULL".to_string()),
            ("sched-123".to_string(), "FULL".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unknown_status_sends_nothing() {
    let api = common::spawn_api(common::seeded()).await;
    let mut store = loaded_store(&api).await;

    let err = store
        .transition_status(&api.authed(), "sched-123", "BOGUS")
        .await
        .expect_err("Unknown status should be rejected");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(api.state.lock().await.status_writes.is_empty());
    assert_eq!(store.status_of("sched-123"), Some(ScheduleStatus::Available));
}

#[tokio::test]
async fn test_uncached_schedule_is_not_found_without_request() {
    let api = common::spawn_api(common::seeded()).await;
    let mut store = ScheduleStore::new();

    let err = store
        .transition_status(&api.authed(), "sched-123", "FULL")
        .await
        .expect_err("Uncached id should be rejected");

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert!(api.state.lock().await.status_writes.is_empty());
}

#[tokio::test]
async fn test_finished_schedule_can_be_reopened() {
    let mut state = common::seeded();
    state.schedules.push(common::schedule("sched-789", "2026-02-20", "FINISHED"));
    let api = common::spawn_api(state).await;
    let mut store = loaded_store(&api).await;

    store
        .transition_status(&api.authed(), "sched-789", "AVAILABLE")
        .await
        .expect("Finished is not terminal");

    assert_eq!(store.status_of("sched-789"), Some(ScheduleStatus::Available));
    assert_eq!(remote_status(&api, "sched-789").await, "AVAILABLE");
}

#[tokio::test]
async fn test_split_transition_matches_the_ui_flow() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let mut store = loaded_store(&api).await;

    let status = store
        .begin_transition("sched-456", "UNAVAILABLE")
        .expect("Known status should parse");
    assert_eq!(store.pending_target("sched-456"), Some(ScheduleStatus::Unavailable));
    assert_eq!(store.status_of("sched-456"), Some(ScheduleStatus::Full));

    let result = client.update_schedule_status("sched-456", status).await;
    let updated = store
        .complete_transition("sched-456", status, result)
        .expect("Write should succeed");

    assert_eq!(updated.status, ScheduleStatus::Unavailable);
    assert_eq!(store.pending_target("sched-456"), None);
}
