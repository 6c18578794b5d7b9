pub mod appointments;
pub mod contact_us;
pub mod dashboard;
pub mod dentists;
pub mod feedback;
pub mod forgot_password;
pub mod login;
pub mod nav;
pub mod not_found;
pub mod patient_log;
pub mod patient_log_book;
pub mod patients;
pub mod profile;
pub mod receptionists;
pub mod reset_password;
pub mod schedule;
pub mod signup;

use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::stores::use_stores;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use nav::{nav_items, NavIcon};
use shared_types::{guard_authenticated, guard_public, guard_route, GuardDecision};

use appointments::AppointmentList;
use contact_us::ContactUs;
use dashboard::Dashboard;
use dentists::DentistList;
use feedback::FeedbackList;
use forgot_password::ForgotPassword;
use login::Login;
use not_found::NotFound;
use patient_log::PatientLog;
use patient_log_book::PatientLogBook;
use patients::PatientList;
use profile::Profile;
use receptionists::ReceptionistList;
use reset_password::ResetPassword;
use schedule::ScheduleList;
use signup::Signup;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PublicGuard)]
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/forget-password")]
    ForgotPassword {},
    #[route("/reset-password?:token")]
    ResetPassword { token: Option<String> },
    #[end_layout]
    #[layout(SignedInGuard)]
    #[layout(AppLayout)]
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[end_layout]
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/dentist")]
    DentistList {},
    #[route("/patient")]
    PatientList {},
    #[route("/patient/:id")]
    PatientLogBook { id: String },
    #[route("/patient/:id/log/:log_id")]
    PatientLog { id: String, log_id: String },
    #[route("/receptionist")]
    ReceptionistList {},
    #[route("/schedule")]
    ScheduleList {},
    #[route("/appointment-list")]
    AppointmentList {},
    #[route("/feedback")]
    FeedbackList {},
    #[route("/contact-us")]
    ContactUs {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Route for a guard redirect target; unknown paths land on the dashboard.
fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Dashboard {})
}

/// Apply a guard decision: render the outlet, wait, redirect or refuse.
fn apply_guard(decision: GuardDecision) -> Element {
    match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::Defer => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        GuardDecision::Redirect(path) => {
            tracing::debug!(target = path, "Guard redirect");
            navigator().replace(route_for(path));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GuardDecision::Forbidden => rsx! { NoAccess {} },
    }
}

/// Role-gated pages. Anonymous visitors go to `/login`; pages outside the
/// user's roles send them back to `/`.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let path = route.to_string();
    let decision = guard_route(&auth.status.read(), &path);
    apply_guard(decision)
}

/// Pages that only need a signed-in user.
#[component]
fn SignedInGuard() -> Element {
    let auth = use_auth();
    let decision = guard_authenticated(&auth.status.read());
    apply_guard(decision)
}

/// Login and password pages; signed-in users are sent home.
#[component]
fn PublicGuard() -> Element {
    let auth = use_auth();
    let decision = guard_public(&auth.status.read());
    apply_guard(decision)
}

/// Shown to a signed-in user whose roles open no page at all.
#[component]
fn NoAccess() -> Element {
    let mut auth = use_auth();
    let mut stores = use_stores();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    Icon::<LdLock> { icon: LdLock, width: 24, height: 24 }
                    CardTitle { "No access" }
                    CardDescription { "Your account has no role that can open this application." }
                }
                CardContent {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| auth.logout(&mut stores),
                        "Sign out"
                    }
                }
            }
        }
    }
}

/// Main app layout: sidebar filtered by role, header with the user and a
/// sign-out button.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut stores = use_stores();

    let current_path = route.to_string();
    let items = nav_items(&auth.roles());
    let username = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Dental Clinic" }
                }
                nav { class: "sidebar-menu",
                    for item in items {
                        Link {
                            key: "{item.path}",
                            to: route_for(item.path),
                            class: if nav::is_active(item.path, &current_path) { "sidebar-item active" } else { "sidebar-item" },
                            NavIcon { path: item.path }
                            span { "{item.label}" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    Link { to: Route::Profile {}, class: "sidebar-item",
                        NavIcon { path: "/profile" }
                        span { "{username}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| auth.logout(&mut stores),
                        "Sign out"
                    }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!(route_for("/login"), Route::Login {});
        assert_eq!(route_for("/"), Route::Dashboard {});
        assert_eq!(
            route_for("/patient/7/log/3"),
            Route::PatientLog {
                id: "7".into(),
                log_id: "3".into()
            }
        );
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::AppointmentList {}.to_string(), "/appointment-list");
        assert_eq!(Route::ForgotPassword {}.to_string(), "/forget-password");
        assert_eq!(
            Route::PatientLogBook { id: "42".into() }.to_string(),
            "/patient/42"
        );
    }

    #[test]
    fn unknown_paths_hit_the_catch_all() {
        assert_eq!(
            route_for("/admin"),
            Route::NotFound {
                route: vec!["admin".into()]
            }
        );
    }
}
