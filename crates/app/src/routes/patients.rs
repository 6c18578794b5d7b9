use crate::auth::use_api;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableHeader, EmptyState, ErrorCard, Input,
    PageActions, PageHeader, PageTitle, SearchBar, Sheet, Skeleton,
};
use crate::routes::Route;
use crate::stores::{load_into, use_stores};
use crate::toast::use_toasts;
use client::filters::filter_patients;
use dioxus::prelude::*;
use shared_types::{CreatePatientRequest, Patient};
use std::collections::HashMap;

#[component]
pub fn PatientList() -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let search = use_signal(String::new);
    let mut show_sheet = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        spawn(async move { load_into(stores.patients, api.list_patients()).await });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.patients.read();
    let rows = filter_patients(store.items(), &search());
    let loading = store.is_loading() && !store.is_loaded();
    let load_error = store.error().map(|e| e.user_message());
    drop(store);

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        pending_delete.set(None);
        let api = api.clone();
        let mut patients = stores.patients;
        spawn(async move {
            match api.delete_patient(&id).await {
                Ok(()) => {
                    patients.write().remove(&id);
                    toasts.success("Patient deleted");
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Patients" }
            PageActions {
                Button { onclick: move |_| show_sheet.set(true), "New Patient" }
            }
        }

        div { class: "toolbar",
            SearchBar { value: search, placeholder: "Search by name, email, phone or NIC" }
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 5 }
        } else if rows.is_empty() {
            EmptyState { message: "No patients found" }
        } else {
            DataTable {
                DataTableHeader {
                    columns: vec!["".into(), "Name".into(), "Email".into(), "Phone".into(), "NIC".into(), "".into()],
                }
                tbody {
                    for patient in rows {
                        PatientRow {
                            key: "{patient.id}",
                            patient: patient.clone(),
                            on_delete: move |id| pending_delete.set(Some(id)),
                        }
                    }
                }
            }
        }

        PatientSheet { open: show_sheet(), on_close: move |_| show_sheet.set(false) }

        ConfirmDialog {
            open: pending_delete().is_some(),
            title: "Delete patient",
            message: "The patient and their log book will be removed.",
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn PatientRow(patient: Patient, on_delete: EventHandler<String>) -> Element {
    let initials = patient.initials();
    let id = patient.id.clone();

    rsx! {
        tr {
            td { span { class: "avatar", "{initials}" } }
            td {
                Link { to: Route::PatientLogBook { id: patient.id.clone() }, "{patient.name}" }
            }
            td { "{patient.email}" }
            td { "{patient.phone_number}" }
            td { "{patient.nic}" }
            td {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn PatientSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let mut form = use_signal(CreatePatientRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut patients = stores.patients;
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            match api.create_patient(&form()).await {
                Ok(patient) => {
                    patients.write().upsert(patient);
                    toasts.success("Patient created");
                    form.set(CreatePatientRequest::default());
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
        Sheet { open, title: "New Patient", on_close: move |_| on_close.call(()),
            form { class: "sheet-form", onsubmit: handle_save,
                Input {
                    label: "Name",
                    value: values.name.clone(),
                    on_input: move |e: FormEvent| form.write().name = e.value(),
                    error: errors.get("name").cloned(),
                }
                Input {
                    label: "Email",
                    input_type: "email",
                    value: values.email.clone(),
                    on_input: move |e: FormEvent| form.write().email = e.value(),
                    error: errors.get("email").cloned(),
                }
                Input {
                    label: "Phone number",
                    value: values.phone_number.clone(),
                    on_input: move |e: FormEvent| form.write().phone_number = e.value(),
                    error: errors.get("phone_number").cloned(),
                }
                Input {
                    label: "NIC",
                    value: values.nic.clone(),
                    on_input: move |e: FormEvent| form.write().nic = e.value(),
                    error: errors.get("nic").cloned(),
                }
                div { class: "sheet-footer",
                    Button { button_type: "submit", disabled: saving(), "Create" }
                }
            }
        }
    }
}
