use crate::auth::use_api;
use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState,
    ErrorCard, Input, PageActions, PageHeader, PageTitle, Skeleton,
};
use crate::format_helpers::format_datetime_human;
use crate::routes::Route;
use crate::stores::use_stores;
use crate::toast::use_toasts;
use dioxus::prelude::*;
use shared_types::{AddPhotoRequest, LogPhoto};
use std::collections::HashMap;

/// One log entry with its photos. Photos are attached by URL.
#[component]
pub fn PatientLog(id: String, log_id: String) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let ids = use_signal(|| (id.clone(), log_id.clone()));
    let mut load_error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        let (patient_id, log_id) = ids();
        let mut logs = stores.patient_logs;
        spawn(async move {
            load_error.set(None);
            match api.get_patient_log(&patient_id, &log_id).await {
                Ok(log) => logs.write().upsert(log),
                Err(err) => load_error.set(Some(err.user_message())),
            }
        });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let entry = stores.patient_logs.read().get(&ids().1).cloned();

    let remove_api = api.clone();
    let remove_photo = move |photo_id: String| {
        let api = remove_api.clone();
        let (patient_id, log_id) = ids();
        let mut logs = stores.patient_logs;
        spawn(async move {
            match api.delete_log_photo(&patient_id, &log_id, &photo_id).await {
                Ok(()) => {
                    logs.write().remove_photo(&log_id, &photo_id);
                    toasts.success("Photo removed");
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    let back = Route::PatientLogBook { id: ids().0 };

    rsx! {
        PageHeader {
            PageTitle { "Log Entry" }
            PageActions {
                Link { to: back, class: "button outline", "Back to log book" }
            }
        }

        if let Some(message) = load_error() {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if let Some(log) = entry {
            Card {
                CardHeader {
                    CardTitle { "{log.action_type}" }
                    CardDescription { {format!("{} · {}", format_datetime_human(&log.timestamp), log.dentist_name)} }
                }
                CardContent {
                    p { {log.description_or_placeholder().to_string()} }
                }
            }

            AddPhotoForm {}

            if log.photos.is_empty() {
                EmptyState { message: "No photos attached" }
            } else {
                div { class: "photo-grid",
                    for photo in log.photos.clone() {
                        PhotoTile {
                            key: "{photo.id}",
                            photo: photo.clone(),
                            on_remove: remove_photo.clone(),
                        }
                    }
                }
            }
        } else {
            Skeleton { rows: 3 }
        }
    }
}

#[component]
fn PhotoTile(photo: LogPhoto, on_remove: EventHandler<String>) -> Element {
    let caption = photo.description.clone().unwrap_or_default();
    let id = photo.id.clone();
    rsx! {
        figure { class: "photo-tile",
            img { src: "{photo.url}", alt: "{caption}" }
            figcaption {
                span { "{caption}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_remove.call(id.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn AddPhotoForm() -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let route: Route = use_route();
    let mut url = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let Route::PatientLog { id, log_id } = route else {
        return rsx! {};
    };

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let (patient_id, log_id) = (id.clone(), log_id.clone());
        let mut logs = stores.patient_logs;
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            let desc = description().trim().to_string();
            let req = AddPhotoRequest {
                url: url().trim().to_string(),
                description: (!desc.is_empty()).then_some(desc),
            };
            match api.add_log_photo(&patient_id, &log_id, &req).await {
                Ok(photo) => {
                    logs.write().add_photo(&log_id, photo);
                    url.set(String::new());
                    description.set(String::new());
                    toasts.success("Photo attached");
                }
                Err(err) if err.is_validation() => field_errors.set(err.field_errors.clone()),
                Err(err) => toasts.app_error(&err),
            }
            saving.set(false);
        });
    };

    rsx! {
        form { class: "inline-form", onsubmit: handle_add,
            Input {
                label: "Photo URL",
                input_type: "url",
                value: url(),
                on_input: move |e: FormEvent| url.set(e.value()),
                error: field_errors.read().get("url").cloned(),
            }
            Input {
                label: "Caption",
                value: description(),
                on_input: move |e: FormEvent| description.set(e.value()),
            }
            Button { button_type: "submit", disabled: saving(), "Attach photo" }
        }
    }
}
