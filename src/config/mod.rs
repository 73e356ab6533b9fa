mod loader;
mod types;

pub use loader::{ConfigError, API_KEY_ENV};
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_API_KEY, DEFAULT_ENDPOINT};
