//! Schedule status transitions.
//!
//! Any of the six states may move to any other. A transition is checked
//! locally, written to the API, and applied to the cache only once the API
//! accepted it. The cached value is trusted afterwards; nothing is
//! re-fetched, so a concurrent change made elsewhere stays invisible until
//! the next list load. Overlapping requests for one entry are not ordered:
//! whichever response is processed last decides the cached status.

use crate::api::ApiClient;
use shared_types::{AppError, ScheduleStatus};

/// The single remote operation the status workflow needs.
pub trait ScheduleApi {
    fn update_schedule_status(
        &self,
        id: &str,
        status: ScheduleStatus,
    ) -> impl std::future::Future<Output = Result<(), AppError>>;
}

impl ScheduleApi for ApiClient {
    async fn update_schedule_status(&self, id: &str, status: ScheduleStatus) -> Result<(), AppError> {
        ApiClient::update_schedule_status(self, id, status).await
    }
}

/// Validate a transition request without touching any cache.
///
/// Rejects an unknown status string or a blank id with a validation error.
pub fn request_transition(id: &str, raw_status: &str) -> Result<ScheduleStatus, AppError> {
    let status = ScheduleStatus::parse(raw_status)?;
    if id.trim().is_empty() {
        return Err(AppError::field("id", "Schedule id is required"));
    }
    Ok(status)
}
