use crate::common::matches_search;
use crate::models::UserProfile;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentist {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub nic: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Dentist {
    pub fn matches(&self, term: &str) -> bool {
        matches_search(
            term,
            &[&self.user_name, &self.first_name, &self.email, &self.specialization],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receptionist {
    #[serde(deserialize_with = "crate::common::id_from_string_or_number")]
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub nic: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Receptionist {
    pub fn matches(&self, term: &str) -> bool {
        matches_search(term, &[&self.user_name, &self.first_name, &self.email])
    }
}

impl UserProfile {
    /// Fill in the fields only the dentist record carries.
    pub fn merge_dentist(&mut self, dentist: &Dentist) {
        self.first_name = Some(dentist.first_name.clone());
        self.gender = Some(dentist.gender.clone());
        self.phone_number = Some(dentist.phone_number.clone());
        self.nic = Some(dentist.nic.clone());
        self.specialization = Some(dentist.specialization.clone());
        self.license_number = Some(dentist.license_number.clone());
    }

    pub fn merge_receptionist(&mut self, receptionist: &Receptionist) {
        self.first_name = Some(receptionist.first_name.clone());
        self.gender = Some(receptionist.gender.clone());
        self.phone_number = Some(receptionist.phone_number.clone());
        self.nic = Some(receptionist.nic.clone());
    }
}

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    if GENDERS.contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("gender");
        err.message = Some("Select a gender".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDentistRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub user_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_gender"))]
    pub gender: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Specialization is required"))]
    pub specialization: String,
    #[validate(length(min = 1, message = "License number is required"))]
    pub license_number: String,
    #[validate(length(min = 10, max = 12, message = "NIC must be 10 to 12 characters"))]
    pub nic: String,
    #[validate(length(min = 10, max = 12, message = "Phone number must be 10 to 12 digits"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceptionistRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub user_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_gender"))]
    pub gender: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 10, max = 12, message = "NIC must be 10 to 12 characters"))]
    pub nic: String,
    #[validate(length(min = 10, max = 12, message = "Phone number must be 10 to 12 digits"))]
    pub phone_number: String,
}
