use crate::common::matches_search;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A message sent through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reply_sent: bool,
}

impl ContactMessage {
    pub fn matches(&self, term: &str) -> bool {
        matches_search(term, &[&self.name, &self.email, &self.subject, &self.message])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactReplyRequest {
    #[validate(custom(function = "not_blank"))]
    pub reply: String,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("required");
        err.message = Some("Reply cannot be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Canned replies offered by the reply dialog, as `(label, body)`.
pub const REPLY_TEMPLATES: [(&str, &str); 3] = [
    (
        "General Thank You",
        "Thank you for reaching out to DN Dental Clinic. We appreciate your message and will address your inquiry as promptly as possible.",
    ),
    (
        "Appointment Confirmation",
        "Thank you for your interest in scheduling an appointment with DN Dental Clinic. We'd be happy to assist you. Please provide your preferred date and time, and we'll check our availability.",
    ),
    (
        "Fee Inquiry",
        "Thank you for your inquiry about our fees. At DN Dental Clinic, we strive to provide transparent pricing. For your specific treatment needs, we recommend scheduling a consultation to provide an accurate estimate.",
    ),
];

/// Wrap a template body with a greeting and signature for `name`.
pub fn personalize_reply(name: &str, template: &str) -> String {
    format!("Dear {name},\n\n{template}\n\nBest regards,\nDN Dental Clinic Team")
}
