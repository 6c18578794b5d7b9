#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod schedule_status_tests;

#[cfg(test)]
mod schedule_crud_tests;

#[cfg(test)]
mod error_message_tests;

#[cfg(test)]
mod patient_tests;

#[cfg(test)]
mod booking_tests;

#[cfg(test)]
mod feedback_contact_tests;
