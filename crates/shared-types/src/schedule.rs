use crate::error::AppError;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Lifecycle state of a schedule slot.
///
/// Any state may move to any other; there is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    Available,
    Unavailable,
    Cancelled,
    Full,
    Finished,
    Active,
}

impl ScheduleStatus {
    /// Dropdown order used by the status bar.
    pub const ALL: [ScheduleStatus; 6] = [
        ScheduleStatus::Available,
        ScheduleStatus::Unavailable,
        ScheduleStatus::Active,
        ScheduleStatus::Full,
        ScheduleStatus::Cancelled,
        ScheduleStatus::Finished,
    ];

    /// Statuses a new slot may be created with.
    pub const CREATABLE: [ScheduleStatus; 3] = [
        ScheduleStatus::Available,
        ScheduleStatus::Unavailable,
        ScheduleStatus::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
            Self::Cancelled => "CANCELLED",
            Self::Full => "FULL",
            Self::Finished => "FINISHED",
            Self::Active => "ACTIVE",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(Self::Available),
            "UNAVAILABLE" => Some(Self::Unavailable),
            "CANCELLED" => Some(Self::Cancelled),
            "FULL" => Some(Self::Full),
            "FINISHED" => Some(Self::Finished),
            "ACTIVE" => Some(Self::Active),
            _ => None,
        }
    }

    /// Parse a status for a transition request, rejecting anything else
    /// with a validation error on the `status` field.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        Self::from_str_opt(s).ok_or_else(|| {
            AppError::field("status", format!("Unknown schedule status: {s:?}"))
        })
    }

    /// CSS modifier for the status pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Available => "status-available",
            Self::Unavailable => "status-unavailable",
            Self::Cancelled => "status-cancelled",
            Self::Full => "status-full",
            Self::Finished => "status-finished",
            Self::Active => "status-active",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable time slot for one dentist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: ScheduleStatus,
    pub capacity: u32,
    #[serde(default)]
    pub number_of_bookings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dentist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dentist_name: Option<String>,
}

impl Schedule {
    /// Free places; never negative even when the backend overbooks.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.number_of_bookings)
    }

    pub fn weekday(&self) -> Option<chrono::Weekday> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .map(|d| d.weekday())
    }
}

/// Body of `PUT /schedules/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateScheduleStatusRequest {
    pub status: ScheduleStatus,
}

/// Raw values of the "create schedule" form.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ScheduleForm {
    #[validate(custom(function = "validate_date"))]
    pub date: String,
    pub status: String,
    #[validate(custom(function = "validate_time"))]
    pub start_time: String,
    #[validate(custom(function = "validate_time"))]
    pub end_time: String,
    #[validate(length(min = 1, message = "Select a dentist"))]
    pub dentist_id: String,
    #[validate(range(min = 1, message = "Capacity must be a positive number"))]
    pub capacity: u32,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            status: ScheduleStatus::Available.as_str().to_string(),
            start_time: "09:00:00".to_string(),
            end_time: "17:00:00".to_string(),
            dentist_id: String::new(),
            capacity: 10,
        }
    }
}

/// Body of `POST /schedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub date: String,
    pub status: ScheduleStatus,
    pub start_time: String,
    pub end_time: String,
    pub dentist_id: String,
    pub capacity: u32,
}

impl ScheduleForm {
    /// Check every field and produce the request body.
    pub fn into_request(self) -> Result<CreateScheduleRequest, AppError> {
        self.validate()?;

        let status = match ScheduleStatus::from_str_opt(&self.status) {
            Some(s) if ScheduleStatus::CREATABLE.contains(&s) => s,
            _ => {
                return Err(AppError::field(
                    "status",
                    "Status must be AVAILABLE, UNAVAILABLE, or FULL",
                ))
            }
        };

        let start = parse_time(&self.start_time);
        let end = parse_time(&self.end_time);
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                return Err(AppError::field("end_time", "End time must be after start time"));
            }
        }

        Ok(CreateScheduleRequest {
            date: self.date.trim().to_string(),
            status,
            start_time: self.start_time,
            end_time: self.end_time,
            dentist_id: self.dentist_id.trim().to_string(),
            capacity: self.capacity,
        })
    }
}

/// `HH:MM:SS`, 24-hour, two digits per part.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 8
        && bytes[2] == b':'
        && bytes[5] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S").ok()
}

fn validate_time(value: &str) -> Result<(), ValidationError> {
    if parse_time(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("time_format");
        err.message = Some("Invalid time format (HH:MM:SS)".into());
        Err(err)
    }
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Date is required".into());
        return Err(err);
    }
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("date_format");
            err.message = Some("Invalid date format".into());
            Err(err)
        }
    }
}

/// 12-hour display form of an `HH:MM:SS` value, e.g. `1:30 PM`.
pub fn format_time_12h(value: &str) -> String {
    match parse_time(value).or_else(|| NaiveTime::parse_from_str(value, "%H:%M").ok()) {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => value.to_string(),
    }
}

/// Entry of `GET /schedules/upcomingSchedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingSchedule {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub appointment_count: u32,
}

/// Entry of `GET /schedules/cancelledSchedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledSchedule {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Body of `GET /bookings/currentMonth/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub finished_bookings: u32,
    pub cancelled_bookings: u32,
    pub pending_bookings: u32,
    pub total_bookings: u32,
    #[serde(default)]
    pub month: String,
}

impl BookingStats {
    /// Share of bookings finished this month, in whole percent.
    pub fn completion_rate(&self) -> u32 {
        if self.total_bookings == 0 {
            0
        } else {
            ((f64::from(self.finished_bookings) / f64::from(self.total_bookings)) * 100.0).round()
                as u32
        }
    }
}
