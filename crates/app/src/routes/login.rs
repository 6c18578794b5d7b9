use crate::auth::{use_auth, AuthState};
use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};
use crate::routes::Route;
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, LoginRequest};
use std::collections::HashMap;

/// Username and password sign-in. The public guard moves the user to the
/// dashboard once the auth state turns authenticated.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_context::<ApiClient>();
    let flags: FeatureFlags = use_context();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut auth: AuthState = auth;
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let req = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            if let Err(err) = auth.login(api, req).await {
                if err.is_validation() {
                    field_errors.set(err.field_errors.clone());
                } else {
                    error_msg.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your clinic credentials" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Username",
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                            error: field_errors.read().get("username").cloned(),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors.read().get("password").cloned(),
                        }
                        Button { button_type: "submit", disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
                CardFooter {
                    Link { to: Route::ForgotPassword {}, class: "auth-link", "Forgot password?" }
                    if flags.signup {
                        Link { to: Route::Signup {}, class: "auth-link", "Create an account" }
                    }
                }
            }
        }
    }
}
