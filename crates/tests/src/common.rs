//! In-process fake of the clinic REST API.
//!
//! Each test gets its own server on an ephemeral port, so tests share no
//! state. Handlers keep JSON values in a [`FakeState`] behind a mutex; tests
//! seed it up front and inspect it afterwards.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use client::ApiClient;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const USERNAME: &str = "kasun";
pub const PASSWORD: &str = "secret1";
pub const TOKEN: &str = "test-token";

#[derive(Debug, Default)]
pub struct FakeState {
    /// Roles reported by `/auth/user`.
    pub roles: Vec<String>,
    pub schedules: Vec<Value>,
    pub bookings: Vec<Value>,
    pub patients: Vec<Value>,
    /// Logs keyed by patient id.
    pub logs: HashMap<String, Vec<Value>>,
    pub feedback: Vec<Value>,
    pub contacts: Vec<Value>,
    pub dentists: Vec<Value>,
    /// Every `PUT /schedules/{id}/status` body, in arrival order.
    pub status_writes: Vec<(String, String)>,
    /// Canned failures for the next status writes: HTTP status and body.
    pub status_failures: VecDeque<(u16, String)>,
    pub replies: Vec<(String, String)>,
    pub next_id: u64,
}

impl FakeState {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("{}", 1000 + self.next_id)
    }
}

pub type Shared = Arc<Mutex<FakeState>>;

pub struct FakeApi {
    pub state: Shared,
    pub base_url: String,
}

impl FakeApi {
    /// Client without a token.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }

    /// Client carrying the token the fake accepts.
    pub fn authed(&self) -> ApiClient {
        self.client().with_token(TOKEN)
    }
}

/// A receptionist-role state with two schedules, one booking and one patient.
pub fn seeded() -> FakeState {
    FakeState {
        roles: vec!["ROLE_RECEPTIONIST".into()],
        schedules: vec![
            schedule("sched-123", "2026-03-02", "AVAILABLE"),
            schedule("sched-456", "2026-03-03", "FULL"),
        ],
        bookings: vec![json!({
            "referenceId": 501,
            "name": "Nimal Perera",
            "email": "nimal@example.com",
            "phoneNumber": "0771234567",
            "nic": "199012345678",
            "address": "Colombo",
            "date": "2026-03-02",
            "appointmentNumber": 3,
            "status": "PENDING"
        })],
        patients: vec![json!({
            "id": 11,
            "name": "Sachini Silva",
            "email": "sachini@example.com",
            "phoneNumber": "0712345678",
            "nic": "200012345678"
        })],
        ..FakeState::default()
    }
}

pub fn schedule(id: &str, date: &str, status: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "startTime": "09:00:00",
        "endTime": "12:00:00",
        "status": status,
        "capacity": 10,
        "numberOfBookings": 4,
        "dentistId": "d-1",
        "dentistName": "Dr. Fernando"
    })
}

/// Start the fake on 127.0.0.1 with an OS-assigned port.
pub async fn spawn_api(state: FakeState) -> FakeApi {
    client::telemetry::init_tracing();
    let state: Shared = Arc::new(Mutex::new(state));
    let router = Router::new().nest("/api", api_router()).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().expect("Fake API has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake API stopped");
    });

    FakeApi {
        state,
        base_url: format!("http://{addr}/api"),
    }
}

fn api_router() -> Router<Shared> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/user", get(current_user))
        .route("/auth/forgot-password", post(ok_message))
        .route("/schedules", get(list_schedules).post(create_schedule))
        .route("/schedules/{id}", delete(delete_schedule))
        .route("/schedules/{id}/status", put(update_status))
        .route("/bookings", get(list_bookings))
        .route("/bookings/{id}", delete(delete_booking))
        .route("/bookings/currentMonth/stats", get(booking_stats))
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/fromBooking/{id}", post(patient_from_booking))
        .route("/patients/{id}", get(get_patient).delete(delete_patient))
        .route("/patients/{id}/logs", get(list_logs).post(create_log))
        .route("/patients/{id}/logs/{log_id}", get(get_log).delete(delete_log))
        .route("/patients/{id}/logs/{log_id}/photos", post(add_photo))
        .route("/patients/{id}/logs/{log_id}/photos/{photo_id}", delete(delete_photo))
        .route("/dentist/{id}", get(get_dentist))
        .route("/feedback", get(list_feedback))
        .route("/feedback/{id}/visibility", put(set_visibility))
        .route("/contacts/all", get(list_contacts))
        .route("/contacts/{id}", get(get_contact))
        .route("/contacts/sendReply/{id}", put(send_reply))
}

type Reply = Result<Response, Response>;

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn require_token(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, json!({ "message": "Full authentication is required" }))),
    }
}

fn id_matches(value: &Value, key: &str, id: &str) -> bool {
    match &value[key] {
        Value::String(s) => s == id,
        Value::Number(n) => n.to_string() == id,
        _ => false,
    }
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["username"] == USERNAME && body["password"] == PASSWORD {
        Ok(Json(json!({ "token": TOKEN })).into_response())
    } else {
        Err(error(StatusCode::UNAUTHORIZED, json!({ "message": "Invalid username or password" })))
    }
}

async fn current_user(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    let state = state.lock().await;
    Ok(Json(json!({
        "id": 7,
        "username": USERNAME,
        "email": "kasun@example.com",
        "roles": state.roles,
    }))
    .into_response())
}

async fn ok_message() -> Json<Value> {
    Json(json!({ "message": "Email sent" }))
}

async fn list_schedules(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    Ok(Json(state.lock().await.schedules.clone()).into_response())
}

async fn create_schedule(State(state): State<Shared>, headers: HeaderMap, Json(mut body): Json<Value>) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    body["id"] = json!(state.next_id());
    body["numberOfBookings"] = json!(0);
    state.schedules.push(body.clone());
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

async fn delete_schedule(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let before = state.schedules.len();
    state.schedules.retain(|s| !id_matches(s, "id", &id));
    if state.schedules.len() == before {
        return Err(error(StatusCode::NOT_FOUND, json!({ "error": "Schedule not found" })));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Answers with an empty body, like the real endpoint.
async fn update_status(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let status = body["status"].as_str().unwrap_or_default().to_string();
    state.status_writes.push((id.clone(), status.clone()));

    if let Some((code, body)) = state.status_failures.pop_front() {
        let code = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Err((code, body).into_response());
    }
    match state.schedules.iter_mut().find(|s| id_matches(s, "id", &id)) {
        Some(schedule) => {
            schedule["status"] = json!(status);
            Ok(StatusCode::OK.into_response())
        }
        None => Err(error(StatusCode::NOT_FOUND, json!({ "details": { "error": "Schedule not found" } }))),
    }
}

async fn list_bookings(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    Ok(Json(state.lock().await.bookings.clone()).into_response())
}

async fn delete_booking(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    state.lock().await.bookings.retain(|b| !id_matches(b, "referenceId", &id));
    Ok(StatusCode::OK.into_response())
}

async fn booking_stats(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    let total = state.lock().await.bookings.len();
    Ok(Json(json!({
        "finishedBookings": 0,
        "cancelledBookings": 0,
        "pendingBookings": total,
        "totalBookings": total,
        "month": "March 2026"
    }))
    .into_response())
}

async fn list_patients(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    Ok(Json(state.lock().await.patients.clone()).into_response())
}

async fn get_patient(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let state = state.lock().await;
    match state.patients.iter().find(|p| id_matches(p, "id", &id)) {
        Some(p) => Ok(Json(p.clone()).into_response()),
        None => Err(error(StatusCode::NOT_FOUND, json!({ "message": "Patient not found" }))),
    }
}

async fn create_patient(State(state): State<Shared>, headers: HeaderMap, Json(mut body): Json<Value>) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let duplicate = state.patients.iter().any(|p| p["nic"] == body["nic"]);
    if duplicate {
        return Err(error(StatusCode::CONFLICT, json!({ "error": "A patient with this NIC already exists" })));
    }
    body["id"] = json!(state.next_id());
    state.patients.push(body.clone());
    Ok(Json(body).into_response())
}

async fn delete_patient(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    state.patients.retain(|p| !id_matches(p, "id", &id));
    state.logs.remove(&id);
    Ok(StatusCode::OK.into_response())
}

async fn patient_from_booking(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let Some(booking) = state.bookings.iter().find(|b| id_matches(b, "referenceId", &id)).cloned() else {
        return Err(error(StatusCode::NOT_FOUND, json!({ "message": "Booking not found" })));
    };
    let patient = json!({
        "id": state.next_id(),
        "name": booking["name"],
        "email": booking["email"],
        "phoneNumber": booking["phoneNumber"],
        "nic": booking["nic"],
    });
    state.patients.push(patient.clone());
    Ok(Json(patient).into_response())
}

async fn list_logs(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let logs = state.lock().await.logs.get(&id).cloned().unwrap_or_default();
    Ok(Json(logs).into_response())
}

async fn create_log(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let log = json!({
        "id": state.next_id(),
        "actionType": body["actionType"],
        "description": body["description"],
        "dentistName": "Dr. Fernando",
        "timestamp": "2026-03-02T10:15:00",
        "photos": []
    });
    state.logs.entry(id).or_default().push(log.clone());
    Ok(Json(log).into_response())
}

async fn get_log(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, log_id)): Path<(String, String)>,
) -> Reply {
    require_token(&headers)?;
    let state = state.lock().await;
    let log = state
        .logs
        .get(&id)
        .and_then(|logs| logs.iter().find(|l| id_matches(l, "id", &log_id)));
    match log {
        Some(log) => Ok(Json(log.clone()).into_response()),
        None => Err(error(StatusCode::NOT_FOUND, json!({ "message": "Log not found" }))),
    }
}

async fn delete_log(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, log_id)): Path<(String, String)>,
) -> Reply {
    require_token(&headers)?;
    if let Some(logs) = state.lock().await.logs.get_mut(&id) {
        logs.retain(|l| !id_matches(l, "id", &log_id));
    }
    Ok(StatusCode::OK.into_response())
}

async fn add_photo(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, log_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let photo_id = state.next_id();
    let photo = json!({ "id": photo_id, "url": body["url"], "description": body["description"] });
    let log = state
        .logs
        .get_mut(&id)
        .and_then(|logs| logs.iter_mut().find(|l| id_matches(l, "id", &log_id)));
    match log {
        Some(log) => {
            if let Some(photos) = log["photos"].as_array_mut() {
                photos.push(photo.clone());
            }
            Ok(Json(photo).into_response())
        }
        None => Err(error(StatusCode::NOT_FOUND, json!({ "message": "Log not found" }))),
    }
}

async fn delete_photo(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, log_id, photo_id)): Path<(String, String, String)>,
) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    if let Some(log) = state
        .logs
        .get_mut(&id)
        .and_then(|logs| logs.iter_mut().find(|l| id_matches(l, "id", &log_id)))
    {
        if let Some(photos) = log["photos"].as_array_mut() {
            photos.retain(|p| !id_matches(p, "id", &photo_id));
        }
    }
    Ok(StatusCode::OK.into_response())
}

async fn get_dentist(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let state = state.lock().await;
    match state.dentists.iter().find(|d| id_matches(d, "id", &id)) {
        Some(d) => Ok(Json(d.clone()).into_response()),
        None => Err(error(StatusCode::NOT_FOUND, json!({ "message": "Dentist not found" }))),
    }
}

async fn list_feedback(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    Ok(Json(state.lock().await.feedback.clone()).into_response())
}

async fn set_visibility(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    match state.feedback.iter_mut().find(|f| id_matches(f, "id", &id)) {
        Some(f) => {
            f["showOnWebsite"] = body["showOnWebsite"].clone();
            Ok(StatusCode::OK.into_response())
        }
        None => Err(error(StatusCode::NOT_FOUND, json!({ "message": "Feedback not found" }))),
    }
}

async fn list_contacts(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_token(&headers)?;
    Ok(Json(state.lock().await.contacts.clone()).into_response())
}

async fn get_contact(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    require_token(&headers)?;
    let state = state.lock().await;
    match state.contacts.iter().find(|c| id_matches(c, "id", &id)) {
        Some(c) => Ok(Json(c.clone()).into_response()),
        None => Err(error(StatusCode::NOT_FOUND, json!({ "message": "Message not found" }))),
    }
}

async fn send_reply(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    require_token(&headers)?;
    let mut state = state.lock().await;
    let reply = body["reply"].as_str().unwrap_or_default().to_string();
    state.replies.push((id.clone(), reply));
    if let Some(c) = state.contacts.iter_mut().find(|c| id_matches(c, "id", &id)) {
        c["replySent"] = json!(true);
    }
    Ok(StatusCode::OK.into_response())
}
