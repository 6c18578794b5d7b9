use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};
use crate::routes::Route;
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::ForgotPasswordRequest;

/// Request a password reset email. The confirmation is shown whatever the
/// API says about the address, so the page does not reveal which emails exist.
#[component]
pub fn ForgotPassword() -> Element {
    let api = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            email_error.set(None);
            let req = ForgotPasswordRequest {
                email: email().trim().to_string(),
            };
            match api.forgot_password(&req).await {
                Err(err) if err.is_validation() => {
                    email_error.set(err.field_errors.get("email").cloned());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Forgot-password request failed");
                    sent.set(true);
                }
                Ok(()) => sent.set(true),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Forgot Password" }
                    CardDescription { "We will email you a link to choose a new password." }
                }
                CardContent {
                    if sent() {
                        div { class: "auth-success",
                            "If an account exists for that address, a reset link is on its way."
                        }
                    } else {
                        form { class: "auth-form", onsubmit: handle_submit,
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                                error: email_error(),
                            }
                            Button { button_type: "submit", disabled: loading(), "Send reset link" }
                        }
                    }
                }
                CardFooter {
                    Link { to: Route::Login {}, class: "auth-link", "Back to sign in" }
                }
            }
        }
    }
}
