//! REST client for the clinic API.
//!
//! Every call attaches the bearer token when one is set, maps transport
//! failures to [`AppErrorKind::Network`](shared_types::AppErrorKind) and
//! builds API failures from the response status and body with
//! [`AppError::from_response`]. Request bodies that carry validation rules
//! are checked before anything is sent.

use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{
    AddPhotoRequest, ApiConfig, AppError, Appointment, AuthUser, BookingStats, CancelledSchedule,
    ContactMessage, ContactReplyRequest, CreateDentistRequest, CreateFeedbackRequest,
    CreatePatientLogRequest, CreatePatientRequest, CreateReceptionistRequest,
    CreateScheduleRequest, Dentist, Feedback, FeedbackVisibilityRequest, ForgotPasswordRequest,
    LogPhoto, LoginRequest, LoginResponse, Patient, PatientLog, Receptionist,
    ResetPasswordRequest, Schedule, ScheduleStatus, SignupRequest, UpcomingSchedule,
    UpdateScheduleStatusRequest,
};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Build a client from the `[api]` config section.
    pub fn from_config(api: &ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match api.timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };
        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build HTTP client, using defaults");
            reqwest::Client::new()
        });
        Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// A copy of this client that authenticates with `token`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn without_token(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed to reach the API");
            AppError::network(format!("Could not reach the server: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), message = %err.message, "API error");
            return Err(err);
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::internal(format!("Invalid response from server: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path).json(body)).await?;
        Self::decode(response).await
    }

    /// Send a request whose response body is ignored.
    async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send(builder).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send_unit::<()>(Method::DELETE, path, None).await
    }

    // --- Auth ---

    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        req.validate()?;
        let resp: LoginResponse = self.send_json(Method::POST, "/auth/login", req).await?;
        tracing::info!("Login succeeded");
        Ok(resp)
    }

    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn signup(&self, req: &SignupRequest) -> Result<(), AppError> {
        req.validate()?;
        self.send_unit(Method::POST, "/auth/signup", Some(req)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn current_user(&self) -> Result<AuthUser, AppError> {
        self.get_json("/auth/user").await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<(), AppError> {
        req.validate()?;
        self.send_unit(Method::POST, "/auth/forgot-password", Some(req)).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), AppError> {
        req.validate()?;
        self.send_unit(Method::POST, "/auth/reset-password", Some(req)).await
    }

    // --- Schedules ---

    #[tracing::instrument(skip(self))]
    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, AppError> {
        self.get_json("/schedules").await
    }

    #[tracing::instrument(skip(self, req), fields(date = %req.date))]
    pub async fn create_schedule(&self, req: &CreateScheduleRequest) -> Result<Schedule, AppError> {
        self.send_json(Method::POST, "/schedules", req).await
    }

    /// `PUT /schedules/{id}/status`. The API answers without a body.
    #[tracing::instrument(skip(self))]
    pub async fn update_schedule_status(
        &self,
        id: &str,
        status: ScheduleStatus,
    ) -> Result<(), AppError> {
        let path = format!("/schedules/{}/status", segment(id));
        let body = UpdateScheduleStatusRequest { status };
        self.send_unit(Method::PUT, &path, Some(&body)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_schedule(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/schedules/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn upcoming_schedules(&self) -> Result<Vec<UpcomingSchedule>, AppError> {
        self.get_json("/schedules/upcomingSchedules").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancelled_schedules(&self) -> Result<Vec<CancelledSchedule>, AppError> {
        self.get_json("/schedules/cancelledSchedules").await
    }

    // --- Bookings ---

    #[tracing::instrument(skip(self))]
    pub async fn booking_stats(&self) -> Result<BookingStats, AppError> {
        self.get_json("/bookings/currentMonth/stats").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.get_json("/bookings").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_appointment(&self, reference_id: &str) -> Result<(), AppError> {
        self.delete(&format!("/bookings/{}", segment(reference_id))).await
    }

    /// Register the person behind a booking as a patient.
    #[tracing::instrument(skip(self))]
    pub async fn create_patient_from_booking(&self, reference_id: &str) -> Result<Patient, AppError> {
        let path = format!("/patients/fromBooking/{}", segment(reference_id));
        let response = self.send(self.request(Method::POST, &path)).await?;
        Self::decode(response).await
    }

    // --- Patients ---

    #[tracing::instrument(skip(self))]
    pub async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        self.get_json("/patients").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_patient(&self, id: &str) -> Result<Patient, AppError> {
        self.get_json(&format!("/patients/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn create_patient(&self, req: &CreatePatientRequest) -> Result<Patient, AppError> {
        req.validate()?;
        self.send_json(Method::POST, "/patients", req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_patient(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/patients/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_patient_logs(&self, patient_id: &str) -> Result<Vec<PatientLog>, AppError> {
        self.get_json(&format!("/patients/{}/logs", segment(patient_id))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_patient_log(&self, patient_id: &str, log_id: &str) -> Result<PatientLog, AppError> {
        self.get_json(&log_path(patient_id, log_id)).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn create_patient_log(
        &self,
        patient_id: &str,
        req: &CreatePatientLogRequest,
    ) -> Result<PatientLog, AppError> {
        req.validate()?;
        let path = format!("/patients/{}/logs", segment(patient_id));
        self.send_json(Method::POST, &path, req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_patient_log(&self, patient_id: &str, log_id: &str) -> Result<(), AppError> {
        self.delete(&log_path(patient_id, log_id)).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn add_log_photo(
        &self,
        patient_id: &str,
        log_id: &str,
        req: &AddPhotoRequest,
    ) -> Result<LogPhoto, AppError> {
        req.validate()?;
        let path = format!("{}/photos", log_path(patient_id, log_id));
        self.send_json(Method::POST, &path, req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_log_photo(
        &self,
        patient_id: &str,
        log_id: &str,
        photo_id: &str,
    ) -> Result<(), AppError> {
        let path = format!("{}/photos/{}", log_path(patient_id, log_id), segment(photo_id));
        self.delete(&path).await
    }

    // --- Staff ---

    #[tracing::instrument(skip(self))]
    pub async fn list_dentists(&self) -> Result<Vec<Dentist>, AppError> {
        self.get_json("/dentist").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_dentist(&self, id: &str) -> Result<Dentist, AppError> {
        self.get_json(&format!("/dentist/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self, req), fields(user_name = %req.user_name))]
    pub async fn create_dentist(&self, req: &CreateDentistRequest) -> Result<Dentist, AppError> {
        req.validate()?;
        self.send_json(Method::POST, "/dentist", req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_dentist(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/dentist/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_receptionists(&self) -> Result<Vec<Receptionist>, AppError> {
        self.get_json("/receptionist").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_receptionist(&self, id: &str) -> Result<Receptionist, AppError> {
        self.get_json(&format!("/receptionist/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self, req), fields(user_name = %req.user_name))]
    pub async fn create_receptionist(
        &self,
        req: &CreateReceptionistRequest,
    ) -> Result<Receptionist, AppError> {
        req.validate()?;
        self.send_json(Method::POST, "/receptionist", req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_receptionist(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/receptionist/{}", segment(id))).await
    }

    // --- Feedback ---

    #[tracing::instrument(skip(self))]
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, AppError> {
        self.get_json("/feedback").await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn create_feedback(&self, req: &CreateFeedbackRequest) -> Result<Feedback, AppError> {
        req.validate()?;
        self.send_json(Method::POST, "/feedback", req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_feedback_visibility(&self, id: &str, show_on_website: bool) -> Result<(), AppError> {
        let path = format!("/feedback/{}/visibility", segment(id));
        let body = FeedbackVisibilityRequest { show_on_website };
        self.send_unit(Method::PUT, &path, Some(&body)).await
    }

    // --- Contact messages ---

    #[tracing::instrument(skip(self))]
    pub async fn list_contacts(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.get_json("/contacts/all").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_contact(&self, id: &str) -> Result<ContactMessage, AppError> {
        self.get_json(&format!("/contacts/{}", segment(id))).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn send_contact_reply(&self, id: &str, req: &ContactReplyRequest) -> Result<(), AppError> {
        req.validate()?;
        let path = format!("/contacts/sendReply/{}", segment(id));
        self.send_unit(Method::PUT, &path, Some(req)).await
    }
}

/// Percent-encode one path segment.
fn segment(raw: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(raw)
}

fn log_path(patient_id: &str, log_id: &str) -> String {
    format!("/patients/{}/logs/{}", segment(patient_id), segment(log_id))
}
