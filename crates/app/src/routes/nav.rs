//! Sidebar entries, filtered by the same policy the guards use.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdLayoutDashboard, LdSettings,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{has_access, top_segment, Role};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/" },
    NavItem { label: "Dentists", path: "/dentist" },
    NavItem { label: "Patients", path: "/patient" },
    NavItem { label: "Receptionists", path: "/receptionist" },
    NavItem { label: "Schedules", path: "/schedule" },
    NavItem { label: "Appointments", path: "/appointment-list" },
    NavItem { label: "Feedback", path: "/feedback" },
    NavItem { label: "Contact Messages", path: "/contact-us" },
];

/// Entries the given roles may open, in sidebar order.
pub fn nav_items(roles: &BTreeSet<Role>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| has_access(roles, item.path))
        .copied()
        .collect()
}

/// Whether the entry for `item_path` should be highlighted on `current`.
pub fn is_active(item_path: &str, current: &str) -> bool {
    top_segment(item_path) == top_segment(current)
}

#[component]
pub fn NavIcon(path: &'static str) -> Element {
    match path {
        "/" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "/dentist" => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        "/patient" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        "/receptionist" => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        "/schedule" => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        "/appointment-list" => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        "/feedback" => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        "/contact-us" => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}
