use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SHOPDIR_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(
        cfg.proxy_template.as_deref(),
        Some("https://api.allorigins.win/raw?url={url}")
    );
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "shopdir/0.1 (shop-directory)");
}

#[test]
fn build_app_config_api_url_override() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_API_URL", "http://localhost:9000/shops");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_url, "http://localhost:9000/shops");
}

#[test]
fn build_app_config_rejects_blank_api_url() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_API_URL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPDIR_API_URL"),
        "expected InvalidEnvVar(SHOPDIR_API_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_empty_proxy_template_disables_fallback() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_PROXY_TEMPLATE", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.proxy_template.is_none());
}

#[test]
fn build_app_config_proxy_template_without_placeholder_fails() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_PROXY_TEMPLATE", "https://proxy.example.com/?target=");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPDIR_PROXY_TEMPLATE"),
        "expected InvalidEnvVar(SHOPDIR_PROXY_TEMPLATE), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPDIR_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPDIR_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_zero_fails() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_REQUEST_TIMEOUT_SECS", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn build_app_config_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_log_level_override() {
    let mut map = HashMap::new();
    map.insert("SHOPDIR_LOG_LEVEL", "debug");
    map.insert("SHOPDIR_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.env, Environment::Production);
}
