use crate::auth::use_api;
use crate::components::{
    BarRow, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ConfirmDialog,
    DataTable, DataTableHeader, EmptyState, ErrorCard, Input, PageActions, PageHeader, PageTitle,
    SearchBar, Select, Sheet, Skeleton, StatCard, StatusBar,
};
use crate::format_helpers::format_date_human;
use crate::stores::{load_into, load_schedules, use_stores};
use crate::toast::use_toasts;
use client::analytics::{ScheduleAnalytics, WEEKDAYS};
use client::filters::{filter_schedules, ScheduleFilter};
use dioxus::prelude::*;
use shared_types::{format_time_12h, FeatureFlags, Schedule, ScheduleForm, ScheduleStatus};
use std::collections::HashMap;

#[component]
pub fn ScheduleList() -> Element {
    let stores = use_stores();
    let api = use_api();
    let flags: FeatureFlags = use_context();
    let toasts = use_toasts();

    let search = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut show_sheet = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        spawn(async move { load_schedules(stores.schedules, api.list_schedules()).await });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.schedules.read();
    let collection = &store.schedules;
    let filter = ScheduleFilter {
        status: ScheduleStatus::from_str_opt(&status_filter()),
        search: search(),
    };
    let rows = filter_schedules(collection.items(), &filter);
    let analytics = ScheduleAnalytics::from_schedules(collection.items());
    let loading = collection.is_loading() && !collection.is_loaded();
    let load_error = collection.error().map(|e| e.user_message());
    drop(store);

    let mut status_options = vec![(String::new(), "All statuses".to_string())];
    status_options.extend(
        ScheduleStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.as_str().to_string())),
    );

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        pending_delete.set(None);
        let api = delete_api.clone();
        let mut schedules = stores.schedules;
        spawn(async move {
            match api.delete_schedule(&id).await {
                Ok(()) => {
                    schedules.write().remove(&id);
                    toasts.success("Schedule deleted");
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Schedules" }
            PageActions {
                Button { onclick: move |_| show_sheet.set(true), "New Schedule" }
            }
        }

        if flags.analytics {
            ScheduleAnalyticsPanel { analytics }
        }

        div { class: "toolbar",
            SearchBar { value: search, placeholder: "Search by date, dentist or status" }
            Select {
                value: status_filter(),
                options: status_options,
                on_change: move |e: FormEvent| status_filter.set(e.value()),
            }
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 5 }
        } else if rows.is_empty() {
            EmptyState { message: "No schedules match" }
        } else {
            DataTable {
                DataTableHeader {
                    columns: vec![
                        "Date".into(),
                        "Time".into(),
                        "Dentist".into(),
                        "Bookings".into(),
                        "Status".into(),
                        "".into(),
                    ],
                }
                tbody {
                    for schedule in rows {
                        ScheduleRow {
                            key: "{schedule.id}",
                            schedule: schedule.clone(),
                            on_delete: move |id| pending_delete.set(Some(id)),
                        }
                    }
                }
            }
        }

        ScheduleSheet { open: show_sheet(), on_close: move |_| show_sheet.set(false) }

        ConfirmDialog {
            open: pending_delete().is_some(),
            title: "Delete schedule",
            message: "This removes the schedule and cannot be undone.",
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn ScheduleRow(schedule: Schedule, on_delete: EventHandler<String>) -> Element {
    let time = format!(
        "{} - {}",
        format_time_12h(&schedule.start_time),
        format_time_12h(&schedule.end_time)
    );
    let dentist = schedule
        .dentist_name
        .clone()
        .or_else(|| schedule.dentist_id.clone())
        .unwrap_or_else(|| "-".to_string());
    let bookings = format!("{} / {}", schedule.number_of_bookings, schedule.capacity);
    let id = schedule.id.clone();

    rsx! {
        tr {
            td { {format_date_human(&schedule.date)} }
            td { "{time}" }
            td { "{dentist}" }
            td { "{bookings}" }
            td { StatusBar { schedule_id: schedule.id.clone() } }
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
fn ScheduleAnalyticsPanel(analytics: ScheduleAnalytics) -> Element {
    let max_day = analytics.bookings_by_weekday.iter().copied().max().unwrap_or(0).max(1);
    let utilization = format!("{}%", analytics.utilization());

    rsx! {
        div { class: "stats-grid",
            StatCard { label: "Total bookings", value: analytics.total_bookings.to_string() }
            StatCard { label: "Capacity", value: analytics.total_capacity.to_string(), hint: utilization }
            for status in ScheduleStatus::ALL {
                StatCard {
                    key: "{status}",
                    label: status.as_str(),
                    value: analytics.count(status).to_string(),
                }
            }
        }
        Card {
            CardHeader { CardTitle { "Bookings by weekday" } }
            CardContent {
                for (i, day) in WEEKDAYS.iter().enumerate() {
                    BarRow {
                        key: "{day}",
                        label: day.to_string(),
                        value: analytics.bookings_by_weekday[i].to_string(),
                        percent: analytics.bookings_by_weekday[i] * 100 / max_day,
                    }
                }
            }
        }
    }
}

/// Create form. Input is checked locally before anything is sent.
#[component]
fn ScheduleSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();

    let mut form = use_signal(ScheduleForm::default);
    let mut capacity_raw = use_signal(|| "10".to_string());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let dentist_api = api.clone();
    use_hook(move || {
        let dentists = stores.dentists;
        if !dentists.read().is_loaded() {
            spawn(async move { load_into(dentists, dentist_api.list_dentists()).await });
        }
    });

    let dentist_options: Vec<(String, String)> = std::iter::once((String::new(), "Select a dentist".to_string()))
        .chain(stores.dentists.read().items().iter().map(|d| {
            let name = if d.first_name.is_empty() { d.user_name.clone() } else { d.first_name.clone() };
            (d.id.clone(), name)
        }))
        .collect();
    let has_dentists = dentist_options.len() > 1;

    let status_options: Vec<(String, String)> = ScheduleStatus::CREATABLE
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect();

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut schedules = stores.schedules;
        spawn(async move {
            field_errors.set(HashMap::new());
            let mut values = form();
            values.capacity = capacity_raw().trim().parse::<u32>().unwrap_or(0);
            let req = match values.into_request() {
                Ok(req) => req,
                Err(err) => {
                    field_errors.set(err.field_errors.clone());
                    return;
                }
            };
            saving.set(true);
            match api.create_schedule(&req).await {
                Ok(created) => {
                    schedules.write().insert(created);
                    toasts.success("Schedule created");
                    form.set(ScheduleForm::default());
                    capacity_raw.set("10".to_string());
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
        Sheet { open, title: "New Schedule", on_close: move |_| on_close.call(()),
            form { class: "sheet-form", onsubmit: handle_save,
                Input {
                    label: "Date",
                    input_type: "date",
                    value: values.date.clone(),
                    on_input: move |e: FormEvent| form.write().date = e.value(),
                    error: errors.get("date").cloned(),
                }
                Select {
                    label: "Status",
                    value: values.status.clone(),
                    options: status_options,
                    on_change: move |e: FormEvent| form.write().status = e.value(),
                    error: errors.get("status").cloned(),
                }
                Input {
                    label: "Start time (HH:MM:SS)",
                    value: values.start_time.clone(),
                    on_input: move |e: FormEvent| form.write().start_time = e.value(),
                    error: errors.get("start_time").cloned(),
                }
                Input {
                    label: "End time (HH:MM:SS)",
                    value: values.end_time.clone(),
                    on_input: move |e: FormEvent| form.write().end_time = e.value(),
                    error: errors.get("end_time").cloned(),
                }
                if has_dentists {
                    Select {
                        label: "Dentist",
                        value: values.dentist_id.clone(),
                        options: dentist_options,
                        on_change: move |e: FormEvent| form.write().dentist_id = e.value(),
                        error: errors.get("dentist_id").cloned(),
                    }
                } else {
                    Input {
                        label: "Dentist ID",
                        value: values.dentist_id.clone(),
                        on_input: move |e: FormEvent| form.write().dentist_id = e.value(),
                        error: errors.get("dentist_id").cloned(),
                    }
                }
                Input {
                    label: "Capacity",
                    input_type: "number",
                    value: capacity_raw(),
                    on_input: move |e: FormEvent| capacity_raw.set(e.value()),
                    error: errors.get("capacity").cloned(),
                }
                div { class: "sheet-footer",
                    Button { button_type: "submit", disabled: saving(), "Create" }
                }
            }
        }
    }
}
