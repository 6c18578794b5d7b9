use crate::common;
use client::{analytics::appointments_per_date, filters::filter_appointments, AppointmentStore, PatientStore};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

#[tokio::test]
async fn test_appointments_load_and_search() {
    let api = common::spawn_api(common::seeded()).await;
    let mut store = AppointmentStore::new();

    store.begin_load();
    assert!(store.is_loading());
    store.finish_load(api.authed().list_appointments().await);

    assert!(!store.is_loading());
    assert_eq!(store.len(), 1);
    let booking = store.get("501").expect("Booking keyed by reference id");
    assert_eq!(booking.appointment_number, Some(3));
    assert_eq!(filter_appointments(store.items(), "0771234567").len(), 1);
    assert!(filter_appointments(store.items(), "nobody").is_empty());
    assert_eq!(appointments_per_date(store.items()).get("2026-03-02"), Some(&1));
}

#[tokio::test]
async fn test_patient_from_booking_copies_contact_details() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let mut patients = PatientStore::new();
    patients.finish_load(client.list_patients().await);

    let patient = client
        .create_patient_from_booking("501")
        .await
        .expect("Conversion should succeed");
    patients.upsert(patient.clone());

    assert_eq!(patient.name, "Nimal Perera");
    assert_eq!(patient.nic, "199012345678");
    assert_eq!(patients.len(), 2);
}

#[tokio::test]
async fn test_patient_from_unknown_booking_fails() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api
        .authed()
        .create_patient_from_booking("999")
        .await
        .expect_err("Unknown booking should fail");

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Booking not found");
}

#[tokio::test]
async fn test_delete_appointment() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let mut store = AppointmentStore::new();
    store.finish_load(client.list_appointments().await);

    client.delete_appointment("501").await.expect("Delete should succeed");
    store.remove("501");

    assert!(store.is_empty());
    assert!(api.state.lock().await.bookings.is_empty());
}

#[tokio::test]
async fn test_current_month_stats() {
    let api = common::spawn_api(common::seeded()).await;

    let stats = api.authed().booking_stats().await.expect("Stats should load");

    assert_eq!(stats.total_bookings, 1);
    assert_eq!(stats.pending_bookings, 1);
    assert_eq!(stats.month, "March 2026");
}

#[tokio::test]
async fn test_failed_load_keeps_error_and_items() {
    let api = common::spawn_api(common::seeded()).await;
    let mut store = AppointmentStore::new();
    store.finish_load(api.authed().list_appointments().await);

    store.begin_load();
    store.finish_load(api.client().list_appointments().await);

    assert_eq!(store.len(), 1, "Previous items stay visible");
    assert_eq!(store.error().map(|e| e.kind.clone()), Some(AppErrorKind::Unauthorized));
}
