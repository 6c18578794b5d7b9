use crate::common::matches_search;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub rating: f32,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub show_on_website: bool,
}

impl Feedback {
    pub fn matches(&self, term: &str) -> bool {
        matches_search(term, &[&self.name, &self.email, &self.comments])
    }

    /// Whole stars to draw, clamped to 0..=5.
    pub fn stars(&self) -> u8 {
        self.rating.floor().clamp(0.0, 5.0) as u8
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(range(min = 1, max = 5, message = "Please select a rating"))]
    pub rating: u8,
    #[validate(length(min = 10, message = "Comments must be at least 10 characters"))]
    pub comments: String,
    #[serde(default)]
    pub show_on_website: bool,
}

/// Body of `PUT /feedback/{id}/visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackVisibilityRequest {
    pub show_on_website: bool,
}
