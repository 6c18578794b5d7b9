use crate::common::matches_search;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub nic: String,
}

impl Patient {
    /// Search over name, email, phone number and NIC.
    pub fn matches(&self, term: &str) -> bool {
        matches_search(term, &[&self.name, &self.email, &self.phone_number, &self.nic])
    }

    /// Up to two uppercase initials for the avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, max = 12, message = "Phone number must be 10 to 12 digits"))]
    pub phone_number: String,
    #[validate(length(min = 10, max = 12, message = "NIC must be 10 to 12 characters"))]
    pub nic: String,
}

/// A photo attached to a treatment log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogPhoto {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One treatment entry in a patient's log book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLog {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub action_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dentist_name: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub photos: Vec<LogPhoto>,
}

impl PatientLog {
    pub fn description_or_placeholder(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description provided."
        } else {
            &self.description
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientLogRequest {
    #[validate(length(min = 1, message = "Action type is required"))]
    pub action_type: String,
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: String,
}

/// Attach a photo by URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AddPhotoRequest {
    #[validate(url(message = "Enter a valid image URL"))]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
