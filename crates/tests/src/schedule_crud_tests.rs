use crate::common;
use client::{analytics::ScheduleAnalytics, ScheduleStore};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ScheduleForm, ScheduleStatus};

fn form() -> ScheduleForm {
    ScheduleForm {
        date: "2026-03-09".into(),
        start_time: "13:00:00".into(),
        end_time: "16:30:00".into(),
        dentist_id: "d-1".into(),
        capacity: 8,
        ..ScheduleForm::default()
    }
}

#[tokio::test]
async fn test_create_schedule_from_form() {
    let api = common::spawn_api(common::seeded()).await;
    let req = form().into_request().expect("Form should be valid");

    let created = api.authed().create_schedule(&req).await.expect("Create should succeed");

    assert_eq!(created.date, "2026-03-09");
    assert_eq!(created.status, ScheduleStatus::Available);
    assert_eq!(created.capacity, 8);
    assert_eq!(created.number_of_bookings, 0);
    assert_eq!(created.remaining(), 8);
    assert_eq!(api.state.lock().await.schedules.len(), 3);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_the_api() {
    let api = common::spawn_api(common::seeded()).await;
    let bad = ScheduleForm {
        end_time: "12:00:00".into(),
        ..form()
    };

    let err = bad.into_request().expect_err("End before start should fail");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("end_time"));
    assert_eq!(api.state.lock().await.schedules.len(), 2);
}

#[tokio::test]
async fn test_delete_schedule_removes_it_remotely_and_locally() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let mut store = ScheduleStore::new();
    store.schedules.finish_load(client.list_schedules().await);

    client.delete_schedule("sched-456").await.expect("Delete should succeed");
    store.remove("sched-456");

    assert_eq!(store.schedules.len(), 1);
    assert!(store.get("sched-456").is_none());
    assert_eq!(api.state.lock().await.schedules.len(), 1);
}

#[tokio::test]
async fn test_deleting_missing_schedule_reports_api_error() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api
        .authed()
        .delete_schedule("ghost")
        .await
        .expect_err("Missing schedule should fail");

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Schedule not found");
}

#[tokio::test]
async fn test_loaded_schedules_feed_the_analytics() {
    let api = common::spawn_api(common::seeded()).await;
    let schedules = api.authed().list_schedules().await.expect("List should succeed");

    let stats = ScheduleAnalytics::from_schedules(&schedules);

    assert_eq!(stats.total_bookings, 8);
    assert_eq!(stats.total_capacity, 20);
    assert_eq!(stats.utilization(), 40);
    assert_eq!(stats.count(ScheduleStatus::Available), 1);
    assert_eq!(stats.count(ScheduleStatus::Full), 1);
    assert_eq!(stats.count(ScheduleStatus::Cancelled), 0);
}
