use crate::common;
use client::{filters::filter_patients, PatientLogStore, PatientStore};
use pretty_assertions::assert_eq;
use shared_types::{AddPhotoRequest, AppErrorKind, CreatePatientLogRequest, CreatePatientRequest};

fn new_patient(nic: &str) -> CreatePatientRequest {
    CreatePatientRequest {
        name: "Ruwan Jayasinghe".into(),
        email: "ruwan@example.com".into(),
        phone_number: "0751112223".into(),
        nic: nic.into(),
    }
}

#[tokio::test]
async fn test_create_and_search_patients() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();

    let created = client
        .create_patient(&new_patient("198512345678"))
        .await
        .expect("Create should succeed");
    assert_eq!(created.initials(), "RJ");

    let mut store = PatientStore::new();
    store.finish_load(client.list_patients().await);

    assert_eq!(store.len(), 2);
    let found = filter_patients(store.items(), "ruwan");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, created.id);
}

#[tokio::test]
async fn test_duplicate_nic_is_a_conflict() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api
        .authed()
        .create_patient(&new_patient("200012345678"))
        .await
        .expect_err("Duplicate NIC should fail");

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "A patient with this NIC already exists");
}

#[tokio::test]
async fn test_invalid_patient_fails_validation_locally() {
    let api = common::spawn_api(common::seeded()).await;
    let bad = CreatePatientRequest {
        phone_number: "123".into(),
        ..new_patient("198512345678")
    };

    let err = api.authed().create_patient(&bad).await.expect_err("Should not validate");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("phone_number"));
    assert_eq!(api.state.lock().await.patients.len(), 1);
}

#[tokio::test]
async fn test_get_missing_patient_is_not_found() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api.authed().get_patient("999").await.expect_err("Should be missing");

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Patient not found");
}

#[tokio::test]
async fn test_log_book_with_photos() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();

    let log = client
        .create_patient_log(
            "11",
            &CreatePatientLogRequest {
                action_type: "Filling".into(),
                description: "Composite filling, upper left molar".into(),
            },
        )
        .await
        .expect("Log should be created");
    assert!(log.photos.is_empty());

    let mut logs = PatientLogStore::new();
    logs.finish_load(client.list_patient_logs("11").await);
    assert_eq!(logs.len(), 1);

    let photo = client
        .add_log_photo(
            "11",
            &log.id,
            &AddPhotoRequest {
                url: "https://images.example.com/xray-1.png".into(),
                description: Some("X-ray".into()),
            },
        )
        .await
        .expect("Photo should be added");
    logs.add_photo(&log.id, photo.clone());
    assert_eq!(logs.get(&log.id).map(|l| l.photos.len()), Some(1));

    client
        .delete_log_photo("11", &log.id, &photo.id)
        .await
        .expect("Photo should be removed");
    let updated = logs.remove_photo(&log.id, &photo.id).expect("Log is cached");
    assert!(updated.photos.is_empty());

    let remote = client.list_patient_logs("11").await.expect("Logs should load");
    assert!(remote[0].photos.is_empty());
}

#[tokio::test]
async fn test_photo_url_is_validated() {
    let api = common::spawn_api(common::seeded()).await;

    let err = api
        .authed()
        .add_log_photo(
            "11",
            "1",
            &AddPhotoRequest {
                url: "not a url".into(),
                description: None,
            },
        )
        .await
        .expect_err("Bad URL should fail");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("url"));
}

#[tokio::test]
async fn test_delete_patient_drops_their_logs() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    client
        .create_patient_log(
            "11",
            &CreatePatientLogRequest {
                action_type: "Checkup".into(),
                description: String::new(),
            },
        )
        .await
        .expect("Log should be created");

    client.delete_patient("11").await.expect("Delete should succeed");

    let state = api.state.lock().await;
    assert!(state.patients.is_empty());
    assert!(!state.logs.contains_key("11"));
}

#[tokio::test]
async fn test_single_log_fetch_and_delete() {
    let api = common::spawn_api(common::seeded()).await;
    let client = api.authed();
    let log = client
        .create_patient_log(
            "11",
            &CreatePatientLogRequest {
                action_type: "Cleaning".into(),
                description: String::new(),
            },
        )
        .await
        .expect("Log should be created");

    let fetched = client.get_patient_log("11", &log.id).await.expect("Log should load");
    assert_eq!(fetched.action_type, "Cleaning");
    assert_eq!(fetched.description_or_placeholder(), "No description provided.");

    client.delete_patient_log("11", &log.id).await.expect("Delete should succeed");
    let err = client
        .get_patient_log("11", &log.id)
        .await
        .expect_err("Log should be gone");
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
