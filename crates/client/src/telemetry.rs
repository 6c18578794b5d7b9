/// Default filter when `RUST_LOG` is not set.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FILTER: &str = "client=info,app=info,warn";

/// Install a `tracing-subscriber` fmt subscriber for native builds.
///
/// The Dioxus launcher installs its own subscriber for the app, so this is
/// meant for tools and tests. Does nothing if a global subscriber is
/// already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init_tracing() {}
