use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

/// Staff role granted by the clinic backend.
///
/// The wire names carry the `ROLE_` prefix used by the authentication
/// service. Strings that name none of these variants are dropped when a
/// user's roles are read, so an unknown role can never grant anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_DENTIST")]
    Dentist,
    #[serde(rename = "ROLE_RECEPTIONIST")]
    Receptionist,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Dentist, Role::Receptionist];

    /// Wire name, e.g. `ROLE_DENTIST`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Dentist => "ROLE_DENTIST",
            Role::Receptionist => "ROLE_RECEPTIONIST",
        }
    }

    /// Parse a wire name. Unknown values yield `None`.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_DENTIST" => Some(Role::Dentist),
            "ROLE_RECEPTIONIST" => Some(Role::Receptionist),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Dentist => "Dentist",
            Role::Receptionist => "Receptionist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse raw role strings into a set, silently dropping unknown names.
pub fn parse_roles<S: AsRef<str>>(raw: &[S]) -> BTreeSet<Role> {
    raw.iter()
        .filter_map(|r| Role::from_str_opt(r.as_ref()))
        .collect()
}

/// The signed-in user as reported by `GET /auth/user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    #[serde(
        default,
        deserialize_with = "crate::common::opt_id_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Raw role names; use [`AuthUser::role_set`] for the typed view.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthUser {
    pub fn role_set(&self) -> BTreeSet<Role> {
        parse_roles(&self.roles)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role_set().contains(&role)
    }

    /// The most privileged role, used for the sidebar badge.
    pub fn primary_role(&self) -> Option<Role> {
        self.role_set().into_iter().next()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "jwt")]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Reset token is missing"))]
    pub token: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Plain acknowledgement returned by some auth endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Profile details merged from `/auth/user` and the role-specific record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Option<String>,
    pub user_name: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub nic: Option<String>,
    pub specialization: Option<String>,
    pub license_number: Option<String>,
    pub roles: Vec<String>,
}

impl UserProfile {
    pub fn from_user(user: &AuthUser) -> Self {
        Self {
            id: user.id.clone(),
            user_name: user.username.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.user_name)
    }
}
