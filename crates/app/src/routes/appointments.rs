use crate::auth::use_api;
use crate::components::{
    BarRow, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ConfirmDialog,
    DataTable, DataTableHeader, EmptyState, ErrorCard, PageHeader, PageTitle, SearchBar, Skeleton,
};
use crate::format_helpers::format_date_human;
use crate::stores::{load_into, use_stores};
use crate::toast::use_toasts;
use client::analytics::appointments_per_date;
use client::filters::filter_appointments;
use dioxus::prelude::*;
use shared_types::{Appointment, FeatureFlags};
use std::collections::BTreeMap;

#[component]
pub fn AppointmentList() -> Element {
    let stores = use_stores();
    let api = use_api();
    let flags: FeatureFlags = use_context();
    let toasts = use_toasts();
    let search = use_signal(String::new);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        spawn(async move { load_into(stores.appointments, api.list_appointments()).await });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.appointments.read();
    let rows = filter_appointments(store.items(), &search());
    let per_date = appointments_per_date(store.items());
    let loading = store.is_loading() && !store.is_loaded();
    let load_error = store.error().map(|e| e.user_message());
    drop(store);

    let patient_api = api.clone();
    let make_patient = move |reference_id: String| {
        let api = patient_api.clone();
        let mut patients = stores.patients;
        spawn(async move {
            match api.create_patient_from_booking(&reference_id).await {
                Ok(patient) => {
                    let name = patient.name.clone();
                    patients.write().upsert(patient);
                    toasts.success(format!("Patient record created for {name}"));
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(reference_id) = pending_delete() else { return };
        pending_delete.set(None);
        let api = api.clone();
        let mut appointments = stores.appointments;
        spawn(async move {
            match api.delete_appointment(&reference_id).await {
                Ok(()) => {
                    appointments.write().remove(&reference_id);
                    toasts.success("Appointment deleted");
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Appointments" }
        }

        if flags.analytics && !per_date.is_empty() {
            AppointmentsPerDate { per_date }
        }

        div { class: "toolbar",
            SearchBar { value: search, placeholder: "Search by name, email, phone or NIC" }
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 5 }
        } else if rows.is_empty() {
            EmptyState { message: "No appointments found" }
        } else {
            DataTable {
                DataTableHeader {
                    columns: vec![
                        "No.".into(),
                        "Name".into(),
                        "Contact".into(),
                        "NIC".into(),
                        "Date".into(),
                        "Status".into(),
                        "".into(),
                    ],
                }
                tbody {
                    for appointment in rows {
                        AppointmentRow {
                            key: "{appointment.reference_id}",
                            appointment: appointment.clone(),
                            on_make_patient: make_patient.clone(),
                            on_delete: move |id| pending_delete.set(Some(id)),
                        }
                    }
                }
            }
        }

        ConfirmDialog {
            open: pending_delete().is_some(),
            title: "Delete appointment",
            message: "The booking will be removed permanently.",
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn AppointmentRow(
    appointment: Appointment,
    on_make_patient: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let number = appointment
        .appointment_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = appointment.status.clone().unwrap_or_else(|| "-".to_string());
    let id_patient = appointment.reference_id.clone();
    let id_delete = appointment.reference_id.clone();

    rsx! {
        tr {
            td { "{number}" }
            td { "{appointment.name}" }
            td {
                div { "{appointment.email}" }
                div { class: "muted", "{appointment.phone_number}" }
            }
            td { "{appointment.nic}" }
            td { {format_date_human(&appointment.date)} }
            td { "{status}" }
            td { class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_make_patient.call(id_patient.clone()),
                    "Create patient"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_delete.call(id_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn AppointmentsPerDate(per_date: BTreeMap<String, usize>) -> Element {
    let max = per_date.values().copied().max().unwrap_or(0).max(1);
    rsx! {
        Card {
            CardHeader { CardTitle { "Appointments per schedule date" } }
            CardContent {
                for (date, count) in per_date {
                    BarRow {
                        key: "{date}",
                        label: date.clone(),
                        value: count.to_string(),
                        percent: (count * 100 / max) as u32,
                    }
                }
            }
        }
    }
}
