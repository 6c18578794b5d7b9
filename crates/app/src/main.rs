use client::ApiClient;
use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod stores;
mod toast;
mod token_store;

use auth::AuthState;
use routes::Route;
use stores::AppStores;
use toast::ToastProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client::config::load_config();

    use_context_provider(|| config.features.clone());
    let api = use_context_provider(|| ApiClient::from_config(&config.api));
    let auth = use_context_provider(AuthState::new);
    use_context_provider(AppStores::new);

    // A token saved by an earlier visit keeps the user signed in.
    use_future(move || {
        let api = api.clone();
        let mut auth = auth;
        async move { auth.restore(api).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}
