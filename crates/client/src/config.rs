use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "CLINIC_API_URL";

/// Combine the config file contents with an optional base URL override.
///
/// A missing or unparseable file yields defaults.
pub fn resolve_config(contents: Option<&str>, api_url: Option<&str>) -> AppConfig {
    let config = match contents {
        Some(contents) => AppConfig::from_toml_str(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    match api_url {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

/// Read `config.toml` and the environment once and keep the result.
/// Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(
            base_url = %config.api.base_url,
            timeout_secs = ?config.api.timeout_secs,
            features = ?config.features,
            "Loaded configuration"
        );
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::info!(error = %e, path = CONFIG_PATH, "Config file not found, using defaults");
            None
        }
    };
    let api_url = std::env::var(API_URL_ENV).ok();
    resolve_config(contents.as_deref(), api_url.as_deref())
}

// Browsers have no filesystem; the file is baked in at build time instead.
#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    resolve_config(
        Some(include_str!("../../../config.toml")),
        option_env!("CLINIC_API_URL"),
    )
}

/// The loaded config, or defaults when [`load_config`] has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
