use super::*;

#[test]
fn client_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url, "/api");
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.home_path, "/dashboard");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn api_base_override_trims_trailing_slash() {
    let config = ClientConfig::with_api_base(Some("https://api.example.com/v1/"));
    assert_eq!(config.api_base_url, "https://api.example.com/v1");
}

#[test]
fn blank_api_base_override_keeps_default() {
    let config = ClientConfig::with_api_base(Some("   "));
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn parse_port_absent_or_blank_is_none() {
    assert_eq!(parse_port(None), Ok(None));
    assert_eq!(parse_port(Some("  ")), Ok(None));
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("8080")), Ok(Some(8080)));
}

#[test]
fn parse_port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".to_owned())));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn use_client_config_falls_back_to_build_config_without_context() {
    assert_eq!(use_client_config(), ClientConfig::from_build_env());
}
