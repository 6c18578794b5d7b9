use crate::auth::{use_api, use_auth};
use crate::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle, Skeleton,
};
use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Role, UserProfile};

/// Signed-in user's details. Dentists and receptionists also get the
/// fields held on their staff record.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let api = use_api();

    let profile = use_resource(move || {
        let api = api.clone();
        let user = auth.current_user.read().clone();
        async move {
            match user {
                Some(user) => load_profile(&api, &user).await,
                None => Err(AppError::unauthorized("Not signed in")),
            }
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "Profile" }
        }
        match &*profile.read() {
            Some(Ok(p)) => rsx! { ProfileCard { profile: p.clone() } },
            Some(Err(err)) => rsx! { p { class: "auth-error", {err.user_message()} } },
            None => rsx! { Skeleton { rows: 3 } },
        }
    }
}

/// `/auth/user` data merged with the staff record matching the user's role.
/// A missing staff record leaves the basic profile in place.
async fn load_profile(api: &client::ApiClient, user: &AuthUser) -> Result<UserProfile, AppError> {
    let mut profile = UserProfile::from_user(user);
    let Some(id) = user.id.clone() else {
        return Ok(profile);
    };

    if user.has_role(Role::Dentist) {
        match api.get_dentist(&id).await {
            Ok(dentist) => profile.merge_dentist(&dentist),
            Err(err) => tracing::warn!(error = %err, "Dentist record unavailable"),
        }
    } else if user.has_role(Role::Receptionist) {
        match api.get_receptionist(&id).await {
            Ok(receptionist) => profile.merge_receptionist(&receptionist),
            Err(err) => tracing::warn!(error = %err, "Receptionist record unavailable"),
        }
    }
    Ok(profile)
}

#[component]
fn ProfileCard(profile: UserProfile) -> Element {
    let name = profile.display_name().to_string();
    let roles: Vec<&'static str> = profile
        .roles
        .iter()
        .filter_map(|r| Role::from_str_opt(r))
        .map(|r| r.label())
        .collect();
    let fields: Vec<(&'static str, String)> = [
        ("Username", Some(profile.user_name.clone())),
        ("Email", profile.email.clone()),
        ("Gender", profile.gender.clone()),
        ("Phone", profile.phone_number.clone()),
        ("NIC", profile.nic.clone()),
        ("Specialization", profile.specialization.clone()),
        ("License number", profile.license_number.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (label, v)))
    .collect();

    rsx! {
        Card { class: "profile-card",
            CardHeader {
                CardTitle { "{name}" }
                CardDescription {
                    for role in roles {
                        Badge { key: "{role}", variant: BadgeVariant::Secondary, "{role}" }
                    }
                }
            }
            CardContent {
                dl { class: "detail-list",
                    for (label, value) in fields {
                        div { key: "{label}", class: "detail-row",
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
