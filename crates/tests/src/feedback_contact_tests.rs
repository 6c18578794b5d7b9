use crate::common;
use client::{
    analytics::{contact_counts, FeedbackAnalytics},
    filters::{filter_contacts, filter_feedback, ContactSort, ContactTab, FeedbackTab},
    ContactStore, FeedbackStore,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{personalize_reply, AppErrorKind, ContactReplyRequest, REPLY_TEMPLATES};

fn with_feedback_and_contacts() -> common::FakeState {
    let mut state = common::seeded();
    state.feedback = vec![
        json!({ "id": 1, "name": "Ama", "email": "ama@example.com", "rating": 5, "comments": "Painless", "showOnWebsite": true }),
        json!({ "id": 2, "name": "Kamal", "email": "kamal@example.com", "rating": 2, "comments": "Long wait", "showOnWebsite": false }),
        json!({ "id": 3, "name": "Dilani", "email": "dilani@example.com", "rating": 4, "comments": "Friendly staff", "showOnWebsite": false }),
    ];
    state.contacts = vec![
        json!({ "id": 9, "name": "Saman", "email": "saman@example.com", "subject": "Hours", "message": "Open on Sunday?", "replySent": false }),
        json!({ "id": 10, "name": "Anoma", "email": "anoma@example.com", "subject": "Braces", "message": "Do you do braces?", "replySent": true }),
    ];
    state
}

#[tokio::test]
async fn test_feedback_visibility_toggle() {
    let api = common::spawn_api(with_feedback_and_contacts()).await;
    let client = api.authed();
    let mut store = FeedbackStore::new();
    store.finish_load(client.list_feedback().await);

    client.set_feedback_visibility("3", true).await.expect("Toggle should succeed");
    let updated = store.set_visibility("3", true).expect("Feedback is cached");

    assert!(updated.show_on_website);
    let visible = filter_feedback(store.items(), "", FeedbackTab::Visible, None);
    assert_eq!(visible.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(), vec!["1", "3"]);
    let remote = client.list_feedback().await.expect("Feedback should load");
    assert!(remote.iter().all(|f| f.id == "2" || f.show_on_website));
}

#[tokio::test]
async fn test_visibility_for_missing_feedback_fails() {
    let api = common::spawn_api(with_feedback_and_contacts()).await;

    let err = api
        .authed()
        .set_feedback_visibility("77", true)
        .await
        .expect_err("Missing feedback should fail");

    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_feedback_analytics_from_api() {
    let api = common::spawn_api(with_feedback_and_contacts()).await;
    let feedback = api.authed().list_feedback().await.expect("Feedback should load");

    let stats = FeedbackAnalytics::from_feedback(&feedback);

    assert_eq!(stats.count, 3);
    assert_eq!(stats.average, 3.7);
    assert_eq!(stats.positive, 2);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.visible, 1);
    assert_eq!(stats.distribution, [0, 1, 0, 1, 1]);
}

#[tokio::test]
async fn test_reply_marks_contact_as_responded() {
    let api = common::spawn_api(with_feedback_and_contacts()).await;
    let client = api.authed();
    let mut store = ContactStore::new();
    store.finish_load(client.list_contacts().await);
    assert_eq!(contact_counts(store.items()).new, 1);

    let message = client.get_contact("9").await.expect("Message should load");
    let reply = personalize_reply(&message.name, REPLY_TEMPLATES[0].1);
    client
        .send_contact_reply("9", &ContactReplyRequest { reply: reply.clone() })
        .await
        .expect("Reply should be sent");
    store.mark_replied("9");

    let counts = contact_counts(store.items());
    assert_eq!(counts.new, 0);
    assert_eq!(counts.responded, 2);
    let sent = api.state.lock().await.replies.clone();
    assert_eq!(sent, vec![("9".to_string(), reply)]);
}

#[tokio::test]
async fn test_blank_reply_is_rejected_locally() {
    let api = common::spawn_api(with_feedback_and_contacts()).await;

    let err = api
        .authed()
        .send_contact_reply("9", &ContactReplyRequest { reply: "   ".into() })
        .await
        .expect_err("Blank reply should fail");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(api.state.lock().await.replies.is_empty());
}

#[tokio::test]
async fn test_contact_tabs_and_sorting() {
    let api = common::spawn_api(with_feedback_and_contacts()).await;
    let contacts = api.authed().list_contacts().await.expect("Contacts should load");

    let newest = filter_contacts(&contacts, "", ContactTab::All, ContactSort::Newest);
    assert_eq!(newest.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["10", "9"]);

    let fresh = filter_contacts(&contacts, "", ContactTab::New, ContactSort::Newest);
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "Saman");

    let sorted = filter_contacts(&contacts, "", ContactTab::All, ContactSort::Alphabetical);
    assert_eq!(sorted[0].name, "Anoma");
}
