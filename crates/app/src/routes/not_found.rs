use crate::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Page not found" }
                    CardDescription { "Nothing lives at {path}." }
                }
                CardContent {
                    Link { to: Route::Dashboard {}, class: "button primary", "Go to dashboard" }
                }
            }
        }
    }
}
