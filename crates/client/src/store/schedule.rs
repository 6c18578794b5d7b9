use super::collection::Collection;
use crate::workflow::{request_transition, ScheduleApi};
use shared_types::{AppError, Schedule, ScheduleStatus};
use std::collections::HashMap;

/// Cached schedules plus in-flight status changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleStore {
    pub schedules: Collection<Schedule>,
    pending: HashMap<String, PendingWrite>,
}

/// Status writes still in flight for one schedule.
#[derive(Debug, Clone, PartialEq)]
struct PendingWrite {
    /// Most recently requested status.
    target: ScheduleStatus,
    in_flight: u32,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Schedule> {
        self.schedules.get(id)
    }

    pub fn status_of(&self, id: &str) -> Option<ScheduleStatus> {
        self.get(id).map(|s| s.status)
    }

    /// Target status of an in-flight write for `id`, if any.
    pub fn pending_target(&self, id: &str) -> Option<ScheduleStatus> {
        self.pending.get(id).map(|p| p.target)
    }

    /// Check a transition and record it as pending.
    ///
    /// Fails without side effects for an unknown status, a blank id, or an
    /// id that is not in the cache.
    pub fn begin_transition(&mut self, id: &str, raw_status: &str) -> Result<ScheduleStatus, AppError> {
        let status = request_transition(id, raw_status)?;
        if !self.schedules.contains(id) {
            return Err(AppError::not_found(format!("Schedule {id} not found")));
        }
        let entry = self.pending.entry(id.to_string()).or_insert(PendingWrite {
            target: status,
            in_flight: 0,
        });
        entry.target = status;
        entry.in_flight += 1;
        Ok(status)
    }

    /// Apply the API's answer to a transition started with
    /// [`begin_transition`](Self::begin_transition).
    ///
    /// On success the cached status becomes `status`; on failure the cache
    /// is left alone and the error is handed back.
    pub fn complete_transition(
        &mut self,
        id: &str,
        status: ScheduleStatus,
        result: Result<(), AppError>,
    ) -> Result<Schedule, AppError> {
        if let Some(entry) = self.pending.get_mut(id) {
            entry.in_flight = entry.in_flight.saturating_sub(1);
            if entry.in_flight == 0 {
                self.pending.remove(id);
            }
        }
        match result {
            Ok(()) => {
                let updated = self
                    .schedules
                    .update(id, |s| s.status = status)
                    .ok_or_else(|| AppError::not_found(format!("Schedule {id} not found")))?;
                tracing::info!(schedule_id = id, status = %status, "Schedule status updated");
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(schedule_id = id, status = %status, error = %err, "Schedule status update failed");
                Err(err)
            }
        }
    }

    /// Run a whole transition against `api`.
    ///
    /// Holds `&mut self` across the request, so UI code that keeps the store
    /// in a signal calls the two halves separately instead.
    pub async fn transition_status<A: ScheduleApi>(
        &mut self,
        api: &A,
        id: &str,
        raw_status: &str,
    ) -> Result<Schedule, AppError> {
        let status = self.begin_transition(id, raw_status)?;
        let result = api.update_schedule_status(id, status).await;
        self.complete_transition(id, status, result)
    }

    pub fn insert(&mut self, schedule: Schedule) {
        self.schedules.upsert(schedule);
    }

    pub fn remove(&mut self, id: &str) -> Option<Schedule> {
        self.pending.remove(id);
        self.schedules.remove(id)
    }

    pub fn clear(&mut self) {
        self.schedules.clear();
        self.pending.clear();
    }
}
