//! Per-domain caches of API data.
//!
//! Stores are plain values; the app keeps one of each in a signal, created
//! at startup and cleared on logout. They change only through their own
//! methods.

mod collection;
mod schedule;

pub use collection::{Collection, Keyed};
pub use schedule::ScheduleStore;

use shared_types::{
    Appointment, ContactMessage, Dentist, Feedback, LogPhoto, Patient, PatientLog, Receptionist,
};

pub type PatientStore = Collection<Patient>;
pub type PatientLogStore = Collection<PatientLog>;
pub type DentistStore = Collection<Dentist>;
pub type ReceptionistStore = Collection<Receptionist>;
pub type AppointmentStore = Collection<Appointment>;
pub type FeedbackStore = Collection<Feedback>;
pub type ContactStore = Collection<ContactMessage>;

impl Collection<Feedback> {
    /// Record a visibility change the API accepted.
    pub fn set_visibility(&mut self, id: &str, show_on_website: bool) -> Option<Feedback> {
        self.update(id, |f| f.show_on_website = show_on_website)
    }
}

impl Collection<ContactMessage> {
    /// Record that a reply was sent for `id`.
    pub fn mark_replied(&mut self, id: &str) -> Option<ContactMessage> {
        self.update(id, |m| m.reply_sent = true)
    }
}

impl Collection<PatientLog> {
    pub fn add_photo(&mut self, log_id: &str, photo: LogPhoto) -> Option<PatientLog> {
        self.update(log_id, |log| log.photos.push(photo))
    }

    pub fn remove_photo(&mut self, log_id: &str, photo_id: &str) -> Option<PatientLog> {
        self.update(log_id, |log| log.photos.retain(|p| p.id != photo_id))
    }
}
