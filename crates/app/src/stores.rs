use client::{
    AppointmentStore, Collection, ContactStore, DentistStore, FeedbackStore, Keyed, PatientLogStore,
    PatientStore, ReceptionistStore, ScheduleStore,
};
use dioxus::prelude::*;
use shared_types::AppError;
use std::future::Future;

/// Every per-domain store, created once at startup and provided as context.
#[derive(Clone, Copy, PartialEq)]
pub struct AppStores {
    pub schedules: Signal<ScheduleStore>,
    pub appointments: Signal<AppointmentStore>,
    pub patients: Signal<PatientStore>,
    pub patient_logs: Signal<PatientLogStore>,
    pub dentists: Signal<DentistStore>,
    pub receptionists: Signal<ReceptionistStore>,
    pub feedback: Signal<FeedbackStore>,
    pub contacts: Signal<ContactStore>,
}

impl AppStores {
    pub fn new() -> Self {
        Self {
            schedules: Signal::new(ScheduleStore::new()),
            appointments: Signal::new(Collection::new()),
            patients: Signal::new(Collection::new()),
            patient_logs: Signal::new(Collection::new()),
            dentists: Signal::new(Collection::new()),
            receptionists: Signal::new(Collection::new()),
            feedback: Signal::new(Collection::new()),
            contacts: Signal::new(Collection::new()),
        }
    }

    /// Forget all cached data. Called on logout.
    pub fn dispose(&mut self) {
        self.schedules.write().clear();
        self.appointments.write().clear();
        self.patients.write().clear();
        self.patient_logs.write().clear();
        self.dentists.write().clear();
        self.receptionists.write().clear();
        self.feedback.write().clear();
        self.contacts.write().clear();
        tracing::debug!("Stores disposed");
    }
}

pub fn use_stores() -> AppStores {
    use_context::<AppStores>()
}

/// Fetch a list into `store`, tracking the load state.
pub async fn load_into<T, F>(mut store: Signal<Collection<T>>, fetch: F)
where
    T: Keyed + Clone + 'static,
    F: Future<Output = Result<Vec<T>, AppError>>,
{
    store.write().begin_load();
    let result = fetch.await;
    store.write().finish_load(result);
}

/// [`load_into`] for the schedule store.
pub async fn load_schedules<F>(mut store: Signal<ScheduleStore>, fetch: F)
where
    F: Future<Output = Result<Vec<shared_types::Schedule>, AppError>>,
{
    store.write().schedules.begin_load();
    let result = fetch.await;
    store.write().schedules.finish_load(result);
}
