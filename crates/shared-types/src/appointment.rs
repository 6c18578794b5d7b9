use crate::common::matches_search;
use serde::{Deserialize, Serialize};

/// A booking made against a schedule slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub reference_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub nic: String,
    #[serde(default)]
    pub address: String,
    /// Date of the booked schedule, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Appointment {
    pub fn matches(&self, term: &str) -> bool {
        matches_search(
            term,
            &[&self.reference_id, &self.name, &self.email, &self.phone_number, &self.nic],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_reference() {
        let a: Appointment = serde_json::from_str(
            r#"{"referenceId":1002,"name":"Kamal","date":"2026-02-10","appointmentNumber":3}"#,
        )
        .unwrap();
        assert_eq!(a.reference_id, "1002");
        assert_eq!(a.appointment_number, Some(3));
        assert!(a.matches("1002"));
        assert!(a.matches("kam"));
    }
}
