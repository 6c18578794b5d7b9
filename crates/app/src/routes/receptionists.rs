use crate::auth::use_api;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableHeader, EmptyState, ErrorCard, Input,
    PageActions, PageHeader, PageTitle, SearchBar, Select, Sheet, Skeleton,
};
use crate::routes::dentists::gender_options;
use crate::stores::{load_into, use_stores};
use crate::toast::use_toasts;
use dioxus::prelude::*;
use shared_types::{CreateReceptionistRequest, Receptionist};
use std::collections::HashMap;

#[component]
pub fn ReceptionistList() -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let search = use_signal(String::new);
    let mut show_sheet = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        spawn(async move { load_into(stores.receptionists, api.list_receptionists()).await });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.receptionists.read();
    let term = search();
    let rows: Vec<Receptionist> = store.items().iter().filter(|r| r.matches(&term)).cloned().collect();
    let loading = store.is_loading() && !store.is_loaded();
    let load_error = store.error().map(|e| e.user_message());
    drop(store);

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        pending_delete.set(None);
        let api = api.clone();
        let mut receptionists = stores.receptionists;
        spawn(async move {
            match api.delete_receptionist(&id).await {
                Ok(()) => {
                    receptionists.write().remove(&id);
                    toasts.success("Receptionist removed");
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Receptionists" }
            PageActions {
                Button { onclick: move |_| show_sheet.set(true), "New Receptionist" }
            }
        }

        div { class: "toolbar",
            SearchBar { value: search, placeholder: "Search by name or email" }
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 5 }
        } else if rows.is_empty() {
            EmptyState { message: "No receptionists found" }
        } else {
            DataTable {
                DataTableHeader {
                    columns: vec![
                        "Name".into(),
                        "Username".into(),
                        "Email".into(),
                        "Gender".into(),
                        "Phone".into(),
                        "".into(),
                    ],
                }
                tbody {
                    for receptionist in rows {
                        ReceptionistRow {
                            key: "{receptionist.id}",
                            receptionist: receptionist.clone(),
                            on_delete: move |id| pending_delete.set(Some(id)),
                        }
                    }
                }
            }
        }

        ReceptionistSheet { open: show_sheet(), on_close: move |_| show_sheet.set(false) }

        ConfirmDialog {
            open: pending_delete().is_some(),
            title: "Remove receptionist",
            message: "The receptionist account will be deleted.",
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn ReceptionistRow(receptionist: Receptionist, on_delete: EventHandler<String>) -> Element {
    let id = receptionist.id.clone();
    rsx! {
        tr {
            td { "{receptionist.first_name}" }
            td { "{receptionist.user_name}" }
            td { "{receptionist.email}" }
            td { "{receptionist.gender}" }
            td { "{receptionist.phone_number}" }
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
fn ReceptionistSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let mut form = use_signal(CreateReceptionistRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut receptionists = stores.receptionists;
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            match api.create_receptionist(&form()).await {
                Ok(receptionist) => {
                    receptionists.write().upsert(receptionist);
                    toasts.success("Receptionist created");
                    form.set(CreateReceptionistRequest::default());
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
        Sheet { open, title: "New Receptionist", on_close: move |_| on_close.call(()),
            form { class: "sheet-form", onsubmit: handle_save,
                Input {
                    label: "Username",
                    value: values.user_name.clone(),
                    on_input: move |e: FormEvent| form.write().user_name = e.value(),
                    error: errors.get("user_name").cloned(),
                }
                Input {
                    label: "First name",
                    value: values.first_name.clone(),
                    on_input: move |e: FormEvent| form.write().first_name = e.value(),
                    error: errors.get("first_name").cloned(),
                }
                Input {
                    label: "Email",
                    input_type: "email",
                    value: values.email.clone(),
                    on_input: move |e: FormEvent| form.write().email = e.value(),
                    error: errors.get("email").cloned(),
                }
                Select {
                    label: "Gender",
                    value: values.gender.clone(),
                    options: gender_options(),
                    on_change: move |e: FormEvent| form.write().gender = e.value(),
                    error: errors.get("gender").cloned(),
                }
                Input {
                    label: "NIC",
                    value: values.nic.clone(),
                    on_input: move |e: FormEvent| form.write().nic = e.value(),
                    error: errors.get("nic").cloned(),
                }
                Input {
                    label: "Phone number",
                    value: values.phone_number.clone(),
                    on_input: move |e: FormEvent| form.write().phone_number = e.value(),
                    error: errors.get("phone_number").cloned(),
                }
                Input {
                    label: "Password",
                    input_type: "password",
                    value: values.password.clone(),
                    on_input: move |e: FormEvent| form.write().password = e.value(),
                    error: errors.get("password").cloned(),
                }
                div { class: "sheet-footer",
                    Button { button_type: "submit", disabled: saving(), "Create" }
                }
            }
        }
    }
}
