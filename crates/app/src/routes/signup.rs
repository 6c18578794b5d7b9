use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};
use crate::routes::Route;
use crate::toast::use_toasts;
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, SignupRequest};
use std::collections::HashMap;

#[component]
pub fn Signup() -> Element {
    let flags: FeatureFlags = use_context();
    let api = use_context::<ApiClient>();
    let toasts = use_toasts();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if !flags.signup {
        return rsx! {
            div { class: "auth-page",
                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Sign up unavailable" }
                        CardDescription { "Accounts are created by a clinic administrator." }
                    }
                    CardFooter {
                        Link { to: Route::Login {}, class: "auth-link", "Back to sign in" }
                    }
                }
            }
        };
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            field_errors.set(HashMap::new());
            let req = SignupRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            match api.signup(&req).await {
                Ok(()) => {
                    toasts.success("Account created. You can sign in now.");
                    navigator().replace(Route::Login {});
                }
                Err(err) if err.is_validation() => field_errors.set(err.field_errors.clone()),
                Err(err) => toasts.app_error(&err),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                }
                CardContent {
                    form { class: "auth-form", onsubmit: handle_signup,
                        Input {
                            label: "Username",
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                            error: field_errors.read().get("username").cloned(),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors.read().get("email").cloned(),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors.read().get("password").cloned(),
                        }
                        Button { button_type: "submit", disabled: loading(), "Sign Up" }
                    }
                }
                CardFooter {
                    Link { to: Route::Login {}, class: "auth-link", "Already have an account? Sign in" }
                }
            }
        }
    }
}
