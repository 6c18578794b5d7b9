use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};
use crate::routes::Route;
use crate::toast::use_toasts;
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppError, ResetPasswordRequest};
use std::collections::HashMap;

/// Choose a new password using the token from the reset email.
#[component]
pub fn ResetPassword(token: Option<String>) -> Element {
    let api = use_context::<ApiClient>();
    let toasts = use_toasts();
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);
    let token = use_signal(move || token.unwrap_or_default());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            field_errors.set(HashMap::new());
            if new_password() != confirm() {
                let err = AppError::field("confirm", "Passwords do not match");
                field_errors.set(err.field_errors);
                return;
            }
            loading.set(true);
            let req = ResetPasswordRequest {
                token: token(),
                new_password: new_password(),
            };
            match api.reset_password(&req).await {
                Ok(()) => {
                    toasts.success("Password updated. Sign in with your new password.");
                    navigator().replace(Route::Login {});
                }
                Err(err) if err.is_validation() => field_errors.set(err.field_errors.clone()),
                Err(err) => toasts.app_error(&err),
            }
            loading.set(false);
        });
    };

    let token_error = field_errors.read().get("token").cloned();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Reset Password" }
                    CardDescription { "Enter a new password for your account." }
                }
                CardContent {
                    if let Some(err) = token_error {
                        div { class: "auth-error", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_submit,
                        Input {
                            label: "New password",
                            input_type: "password",
                            value: new_password(),
                            on_input: move |e: FormEvent| new_password.set(e.value()),
                            error: field_errors.read().get("new_password").cloned(),
                        }
                        Input {
                            label: "Confirm password",
                            input_type: "password",
                            value: confirm(),
                            on_input: move |e: FormEvent| confirm.set(e.value()),
                            error: field_errors.read().get("confirm").cloned(),
                        }
                        Button { button_type: "submit", disabled: loading(), "Update password" }
                    }
                }
                CardFooter {
                    Link { to: Route::Login {}, class: "auth-link", "Back to sign in" }
                }
            }
        }
    }
}
