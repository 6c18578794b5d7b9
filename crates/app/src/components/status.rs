use crate::auth::use_api;
use crate::stores::use_stores;
use crate::toast::use_toasts;
use dioxus::prelude::*;
use shared_types::ScheduleStatus;

/// Coloured pill for a schedule status.
#[component]
pub fn StatusBadge(status: ScheduleStatus) -> Element {
    let class = format!("status-badge {}", status.css_class());
    rsx! {
        span { class: class, "{status}" }
    }
}

/// Status pill plus a dropdown offering every status.
///
/// Choosing a value writes it to the API; the pill changes only after the
/// API accepted it, and a spinner shows while the write is in flight.
#[component]
pub fn StatusBar(schedule_id: String) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();

    let (current, pending) = {
        let store = stores.schedules.read();
        (store.status_of(&schedule_id), store.pending_target(&schedule_id))
    };
    let Some(current) = current else {
        return rsx! {};
    };

    let id = schedule_id.clone();
    let on_change = move |evt: FormEvent| {
        let raw = evt.value();
        let id = id.clone();
        let api = api.clone();
        let mut schedules = stores.schedules;
        spawn(async move {
            let status = match schedules.write().begin_transition(&id, &raw) {
                Ok(status) => status,
                Err(err) => {
                    toasts.app_error(&err);
                    return;
                }
            };
            let result = api.update_schedule_status(&id, status).await;
            match schedules.write().complete_transition(&id, status, result) {
                Ok(updated) => toasts.success(format!("Status changed to {}", updated.status)),
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    rsx! {
        div { class: "status-bar",
            StatusBadge { status: current }
            select {
                class: "select status-select",
                disabled: pending.is_some(),
                onchange: on_change,
                for status in ScheduleStatus::ALL {
                    option {
                        value: status.as_str(),
                        selected: status == current,
                        "{status}"
                    }
                }
            }
            if let Some(target) = pending {
                span { class: "spinner", title: "Changing to {target}" }
            }
        }
    }
}
