use serde::{Deserialize, Serialize};

/// Base URL used when neither `config.toml` nor the environment names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Feature flags controlling which optional pages and panels are active.
///
/// Every field has a default so that a missing or partial config file still
/// yields a usable application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Public self-registration page. Off unless the backend supports it.
    #[serde(default)]
    pub signup: bool,
    /// Chart and summary panels on the schedule, appointment and feedback pages.
    #[serde(default = "default_true")]
    pub analytics: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            signup: false,
            analytics: true,
        }
    }
}

/// Where the clinic REST API lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Replace the API base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api.base_url = trimmed.to_string();
        }
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
