use skywindow::config::{
    ApiConfig, Config, ConfigError, UiConfig, API_KEY_ENV, DEFAULT_API_KEY, DEFAULT_ENDPOINT,
};
use std::collections::HashMap;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.key, DEFAULT_API_KEY);
    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("skywindow/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[api]
key = "my-key"
endpoint = "http://localhost:9000/apod"
timeout_seconds = 0

[ui]
tick_rate_ms = 100
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config,
        Config {
            api: ApiConfig {
                key: "my-key".to_string(),
                endpoint: "http://localhost:9000/apod".to_string(),
                timeout_seconds: 0,
            },
            ui: UiConfig { tick_rate_ms: 100 },
        }
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("[api]\nkey = \"only-key\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.key, "only-key");
    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nkey = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_empty_key_fails_validation() {
    let (_dir, path) = write_config("[api]\nkey = \"  \"\n");
    let config = Config::load_from(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_empty_file_key_with_env_override_is_valid() {
    let (_dir, path) = write_config("[api]\nkey = \"\"\n");
    let mut config = Config::load_from(&path).unwrap();
    config.apply_env_from(|name| (name == API_KEY_ENV).then(|| "env-key".to_string()));
    assert!(config.validate().is_ok());
    assert_eq!(config.api.key, "env-key");
}

#[test]
fn test_bad_file_endpoint_can_be_overridden_before_validation() {
    let (_dir, path) = write_config("[api]\nendpoint = \"not-a-url\"\n");
    let mut config = Config::load_from(&path).unwrap();
    assert!(config.validate().is_err());

    config.api.endpoint = "http://localhost:8080/apod".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_non_http_endpoint_fails_validation() {
    let mut config = Config::default();
    config.api.endpoint = "ftp://example.test".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ftp://example.test"));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_env_overrides_key() {
    let env: HashMap<&str, &str> = HashMap::from([(API_KEY_ENV, " from-env ")]);
    let mut config = Config::default();
    config.apply_env_from(|name| env.get(name).map(|v| v.to_string()));
    assert_eq!(config.api.key, "from-env");
}

#[test]
fn test_empty_env_is_ignored() {
    let mut config = Config::default();
    config.apply_env_from(|_| Some(String::new()));
    assert_eq!(config.api.key, DEFAULT_API_KEY);
}
