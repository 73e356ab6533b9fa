use serde::{Deserialize, Serialize};

/// Public demo key accepted by the service with a low rate limit.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote image-of-the-day service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Access key sent as the `api_key` query parameter.
    #[serde(default = "default_api_key")]
    pub key: String,
    /// Endpoint URL without query string.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Transport timeout in seconds. 0 disables it.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: default_api_key(),
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
