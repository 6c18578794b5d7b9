//! Role-based page access.
//!
//! The policy is a static table from [`Role`] to the top-level path segments
//! that role may open. Access checks look only at the first segment of the
//! requested path, so `/patient/42/log/7` is governed by the `/patient` entry.

use crate::models::{parse_roles, Role};
use std::collections::BTreeSet;

/// Landing page every role may open; also the fallback for denied routes.
pub const LANDING_PATH: &str = "/";
/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Paths reachable by each role.
pub fn permitted_paths(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &[
            "/",
            "/dentist",
            "/patient",
            "/receptionist",
            "/schedule",
            "/appointment-list",
            "/feedback",
            "/contact-us",
        ],
        Role::Dentist => &[
            "/",
            "/patient",
            "/schedule",
            "/appointment-list",
            "/feedback",
            "/contact-us",
        ],
        Role::Receptionist => &[
            "/",
            "/appointment-list",
            "/feedback",
            "/contact-us",
            "/schedule",
        ],
    }
}

/// Permitted paths for a raw role name; unknown names get nothing.
pub fn permitted_paths_for(raw_role: &str) -> &'static [&'static str] {
    Role::from_str_opt(raw_role).map(permitted_paths).unwrap_or(&[])
}

/// First non-empty segment of `path` with a leading slash, or `/`.
///
/// Query strings and fragments are ignored.
pub fn top_segment(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.split('/').find(|s| !s.is_empty()) {
        Some(segment) => format!("/{segment}"),
        None => LANDING_PATH.to_string(),
    }
}

/// Whether any of `roles` may open `path`.
pub fn has_access<'a, I>(roles: I, path: &str) -> bool
where
    I: IntoIterator<Item = &'a Role>,
{
    let segment = top_segment(path);
    roles
        .into_iter()
        .any(|role| permitted_paths(*role).contains(&segment.as_str()))
}

/// [`has_access`] over raw role names as delivered by the API.
pub fn has_access_raw<S: AsRef<str>>(roles: &[S], path: &str) -> bool {
    has_access(&parse_roles(roles), path)
}

/// Authentication state as seen by the route guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// A login or session check is in flight; roles are not known yet.
    Loading,
    Anonymous,
    Authenticated(BTreeSet<Role>),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn roles(&self) -> Option<&BTreeSet<Role>> {
        match self {
            AuthStatus::Authenticated(roles) => Some(roles),
            AuthStatus::Loading | AuthStatus::Anonymous => None,
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the page.
    Render,
    /// Show a neutral loading indicator and decide again later.
    Defer,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    /// Signed in, but not even the landing page is permitted. Redirecting
    /// would loop, so the guard shows a no-access notice instead.
    Forbidden,
}

/// Guard for role-gated pages.
pub fn guard_route(status: &AuthStatus, path: &str) -> GuardDecision {
    match status {
        AuthStatus::Loading => GuardDecision::Defer,
        AuthStatus::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
        AuthStatus::Authenticated(roles) if has_access(roles, path) => GuardDecision::Render,
        AuthStatus::Authenticated(roles) if has_access(roles, LANDING_PATH) => {
            GuardDecision::Redirect(LANDING_PATH)
        }
        AuthStatus::Authenticated(_) => GuardDecision::Forbidden,
    }
}

/// Guard for pages that only need a signed-in user (the profile page).
pub fn guard_authenticated(status: &AuthStatus) -> GuardDecision {
    match status {
        AuthStatus::Loading => GuardDecision::Defer,
        AuthStatus::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
        AuthStatus::Authenticated(_) => GuardDecision::Render,
    }
}

/// Guard for the login and password pages: signed-in users go home.
pub fn guard_public(status: &AuthStatus) -> GuardDecision {
    match status {
        AuthStatus::Authenticated(_) => GuardDecision::Redirect(LANDING_PATH),
        AuthStatus::Loading | AuthStatus::Anonymous => GuardDecision::Render,
    }
}
