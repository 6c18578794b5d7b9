use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::Role;

/// Whether the signed-in user holds any of `roles`.
pub fn use_role_check(roles: &[Role]) -> bool {
    let auth = use_auth();
    roles.iter().any(|r| auth.has_role(*r))
}

/// Render children only for users holding one of `roles`, else `fallback`.
#[component]
pub fn RoleGate(roles: Vec<Role>, #[props(default = VNode::empty())] fallback: Element, children: Element) -> Element {
    if use_role_check(&roles) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}
