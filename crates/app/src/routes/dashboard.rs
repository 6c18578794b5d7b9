use crate::auth::{use_api, use_auth};
use crate::components::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableHeader, EmptyState, ErrorCard,
    PageHeader, PageTitle, RoleGate, Skeleton, StatCard,
};
use crate::routes::Route;
use crate::format_helpers::format_date_human;
use dioxus::prelude::*;
use shared_types::{format_time_12h, BookingStats, CancelledSchedule, Role, UpcomingSchedule};

/// Month-to-date booking numbers plus the upcoming and cancelled sessions.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let api = use_api();

    let api_stats = api.clone();
    let mut stats = use_resource(move || {
        let api = api_stats.clone();
        async move { api.booking_stats().await }
    });
    let api_upcoming = api.clone();
    let upcoming = use_resource(move || {
        let api = api_upcoming.clone();
        async move { api.upcoming_schedules().await }
    });
    let cancelled = use_resource(move || {
        let api = api.clone();
        async move { api.cancelled_schedules().await }
    });

    let greeting = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.username))
        .unwrap_or_else(|| "Welcome".to_string());

    rsx! {
        PageHeader {
            PageTitle { "{greeting}" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! { StatsGrid { stats: s.clone() } },
            Some(Err(err)) => rsx! {
                ErrorCard { message: err.user_message(), on_retry: move |_| stats.restart() }
            },
            None => rsx! { Skeleton { rows: 1 } },
        }

        div { class: "dashboard-grid",
            RoleGate { roles: vec![Role::Admin],
                Card {
                    CardHeader { CardTitle { "Staff" } }
                    CardContent {
                        div { class: "row-actions",
                            Link { to: Route::DentistList {}, class: "button outline", "Manage dentists" }
                            Link { to: Route::ReceptionistList {}, class: "button outline", "Manage receptionists" }
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Upcoming Schedules" } }
                CardContent {
                    match &*upcoming.read() {
                        Some(Ok(rows)) => rsx! { UpcomingTable { rows: rows.clone() } },
                        Some(Err(err)) => rsx! { p { class: "auth-error", {err.user_message()} } },
                        None => rsx! { Skeleton {} },
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Cancelled Schedules" } }
                CardContent {
                    match &*cancelled.read() {
                        Some(Ok(rows)) => rsx! { CancelledTable { rows: rows.clone() } },
                        Some(Err(err)) => rsx! { p { class: "auth-error", {err.user_message()} } },
                        None => rsx! { Skeleton {} },
                    }
                }
            }
        }
    }
}

#[component]
fn StatsGrid(stats: BookingStats) -> Element {
    let rate = format!("{}%", stats.completion_rate());
    let month = if stats.month.is_empty() {
        "This month".to_string()
    } else {
        stats.month.clone()
    };
    rsx! {
        div { class: "stats-grid",
            StatCard { label: "Total bookings", value: stats.total_bookings.to_string(), hint: month }
            StatCard { label: "Finished", value: stats.finished_bookings.to_string(), hint: rate }
            StatCard { label: "Pending", value: stats.pending_bookings.to_string() }
            StatCard { label: "Cancelled", value: stats.cancelled_bookings.to_string() }
        }
    }
}

#[component]
fn UpcomingTable(rows: Vec<UpcomingSchedule>) -> Element {
    if rows.is_empty() {
        return rsx! { EmptyState { message: "No upcoming schedules" } };
    }
    rsx! {
        DataTable {
            DataTableHeader { columns: vec!["Date".into(), "Time".into(), "Appointments".into()] }
            tbody {
                for row in rows {
                    tr {
                        td { {format_date_human(&row.date)} }
                        td { {format!("{} - {}", format_time_12h(&row.start_time), format_time_12h(&row.end_time))} }
                        td { "{row.appointment_count}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CancelledTable(rows: Vec<CancelledSchedule>) -> Element {
    if rows.is_empty() {
        return rsx! { EmptyState { message: "No cancelled schedules" } };
    }
    rsx! {
        DataTable {
            DataTableHeader { columns: vec!["Date".into(), "Time".into()] }
            tbody {
                for row in rows {
                    tr {
                        td { {format_date_human(&row.date)} }
                        td { {format!("{} - {}", format_time_12h(&row.start_time), format_time_12h(&row.end_time))} }
                    }
                }
            }
        }
    }
}
