//! Transient success and error notifications.
//!
//! The toast stack and its auto-dismiss timer come from
//! `dioxus_primitives::toast`; this module adds the clinic's wording and
//! routes [`AppError`]s through the API's message.

use dioxus::prelude::*;
use dioxus_primitives::toast as prim;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use shared_types::AppError;

/// Mount once around the router; every page below can raise toasts.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        prim::ToastProvider { ..props }
    }
}

/// Handle for raising toasts from any component under [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    inner: prim::Toasts,
}

impl Toasts {
    pub fn success(&self, body: impl AsRef<str>) {
        self.inner.success(body.as_ref().to_string(), ToastOptions::new());
    }

    pub fn error(&self, body: impl AsRef<str>) {
        self.inner.error(body.as_ref().to_string(), ToastOptions::new());
    }

    /// Error toast for a failed operation, using the API's message.
    pub fn app_error(&self, err: &AppError) {
        tracing::warn!(error = %err, "Operation failed");
        self.error(err.user_message());
    }
}

pub fn use_toasts() -> Toasts {
    Toasts { inner: use_toast() }
}
