use crate::auth::use_api;
use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    ConfirmDialog, EmptyState, ErrorCard, Input, PageActions, PageHeader, PageTitle, Sheet,
    Skeleton, TextArea,
};
use crate::format_helpers::format_datetime_human;
use crate::routes::Route;
use crate::stores::{load_into, use_stores};
use crate::toast::use_toasts;
use dioxus::prelude::*;
use shared_types::{CreatePatientLogRequest, Patient, PatientLog};
use std::collections::HashMap;

/// Patient details and their treatment log.
#[component]
pub fn PatientLogBook(id: String) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let mut show_sheet = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let patient_id = use_signal(|| id.clone());

    let patient_api = api.clone();
    let patient = use_resource(move || {
        let api = patient_api.clone();
        let id = patient_id();
        async move { api.get_patient(&id).await }
    });

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        let id = patient_id();
        let mut logs = stores.patient_logs;
        spawn(async move {
            logs.write().clear();
            load_into(logs, api.list_patient_logs(&id)).await
        });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.patient_logs.read();
    let mut logs: Vec<PatientLog> = store.items().to_vec();
    let loading = store.is_loading() && !store.is_loaded();
    let load_error = store.error().map(|e| e.user_message());
    drop(store);
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let confirm_delete = move |_| {
        let Some(log_id) = pending_delete() else { return };
        pending_delete.set(None);
        let api = api.clone();
        let id = patient_id();
        let mut store = stores.patient_logs;
        spawn(async move {
            match api.delete_patient_log(&id, &log_id).await {
                Ok(()) => {
                    store.write().remove(&log_id);
                    toasts.success("Log entry deleted");
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Patient Log Book" }
            PageActions {
                Link { to: Route::PatientList {}, class: "button outline", "Back to patients" }
                Button { onclick: move |_| show_sheet.set(true), "Add Log" }
            }
        }

        match &*patient.read() {
            Some(Ok(p)) => rsx! { PatientCard { patient: p.clone() } },
            Some(Err(err)) => rsx! { p { class: "auth-error", {err.user_message()} } },
            None => rsx! { Skeleton { rows: 1 } },
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 4 }
        } else if logs.is_empty() {
            EmptyState { message: "No log entries yet" }
        } else {
            div { class: "log-list",
                for log in logs {
                    LogEntryCard {
                        key: "{log.id}",
                        patient_id: patient_id(),
                        log: log.clone(),
                        on_delete: move |log_id| pending_delete.set(Some(log_id)),
                    }
                }
            }
        }

        LogSheet {
            open: show_sheet(),
            patient_id: patient_id(),
            on_close: move |_| show_sheet.set(false),
        }

        ConfirmDialog {
            open: pending_delete().is_some(),
            title: "Delete log entry",
            message: "The entry and its photos will be removed.",
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn PatientCard(patient: Patient) -> Element {
    let initials = patient.initials();
    rsx! {
        Card { class: "patient-card",
            CardHeader {
                span { class: "avatar large", "{initials}" }
                CardTitle { "{patient.name}" }
                CardDescription { "{patient.email}" }
            }
            CardContent {
                dl { class: "detail-list",
                    dt { "Phone" }
                    dd { "{patient.phone_number}" }
                    dt { "NIC" }
                    dd { "{patient.nic}" }
                }
            }
        }
    }
}

#[component]
fn LogEntryCard(patient_id: String, log: PatientLog, on_delete: EventHandler<String>) -> Element {
    let photo_count = log.photos.len();
    let description = log.description_or_placeholder().to_string();
    let log_id = log.id.clone();

    rsx! {
        Card { class: "log-entry",
            CardHeader {
                CardTitle { "{log.action_type}" }
                CardDescription { {format!("{} · {}", format_datetime_human(&log.timestamp), log.dentist_name)} }
            }
            CardContent {
                p { "{description}" }
                div { class: "row-actions",
                    Link {
                        to: Route::PatientLog { id: patient_id.clone(), log_id: log.id.clone() },
                        class: "button outline",
                        "Photos ({photo_count})"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_delete.call(log_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn LogSheet(open: bool, patient_id: String, on_close: EventHandler<()>) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let mut form = use_signal(CreatePatientLogRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let patient_id = patient_id.clone();
        let mut logs = stores.patient_logs;
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            match api.create_patient_log(&patient_id, &form()).await {
                Ok(log) => {
                    logs.write().upsert(log);
                    toasts.success("Log entry added");
                    form.set(CreatePatientLogRequest::default());
                    on_close.call(());
                }
                Err(err) if err.is_validation() => field_errors.set(err.field_errors.clone()),
                Err(err) => toasts.app_error(&err),
            }
            saving.set(false);
        });
    };

    let values = form();
    let errors = field_errors();

    rsx! {
        Sheet { open, title: "Add Log Entry", on_close: move |_| on_close.call(()),
            form { class: "sheet-form", onsubmit: handle_save,
                Input {
                    label: "Action type",
                    placeholder: "e.g. Filling, Extraction, Cleaning",
                    value: values.action_type.clone(),
                    on_input: move |e: FormEvent| form.write().action_type = e.value(),
                    error: errors.get("action_type").cloned(),
                }
                TextArea {
                    label: "Description",
                    value: values.description.clone(),
                    on_input: move |e: FormEvent| form.write().description = e.value(),
                    error: errors.get("description").cloned(),
                }
                div { class: "sheet-footer",
                    Button { button_type: "submit", disabled: saving(), "Save" }
                }
            }
        }
    }
}
