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
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TAPREVIEW_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_url, "businesses.json");
    assert_eq!(cfg.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(cfg.default_business_id, "sunrise-cafe");
    assert_eq!(cfg.user_agent, "tapreview/0.1 (nfc-review)");
    assert!(cfg.request_timeout_secs.is_none());
    assert!(!cfg.webhook_require_ack);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("TAPREVIEW_ENV", "production");
    map.insert("TAPREVIEW_CATALOG_URL", "https://cdn.example.com/businesses.json");
    map.insert("TAPREVIEW_DEFAULT_BUSINESS_ID", "bella-salon");
    map.insert("TAPREVIEW_REQUEST_TIMEOUT_SECS", "15");
    map.insert("TAPREVIEW_WEBHOOK_REQUIRE_ACK", "yes");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.catalog_url, "https://cdn.example.com/businesses.json");
    assert_eq!(cfg.default_business_id, "bella-salon");
    assert_eq!(cfg.request_timeout_secs, Some(15));
    assert!(cfg.webhook_require_ack);
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("TAPREVIEW_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TAPREVIEW_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TAPREVIEW_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_ack_flag() {
    let mut map = HashMap::new();
    map.insert("TAPREVIEW_WEBHOOK_REQUIRE_ACK", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TAPREVIEW_WEBHOOK_REQUIRE_ACK"),
        "expected InvalidEnvVar(TAPREVIEW_WEBHOOK_REQUIRE_ACK), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_webhook_url() {
    let mut map = HashMap::new();
    map.insert("TAPREVIEW_WEBHOOK_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TAPREVIEW_WEBHOOK_URL"),
        "expected InvalidEnvVar(TAPREVIEW_WEBHOOK_URL), got: {result:?}"
    );
}

#[test]
fn config_error_names_variable_and_reason() {
    let mut map = HashMap::new();
    map.insert("TAPREVIEW_ENV", "staging");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for TAPREVIEW_ENV: unknown environment 'staging'"
    );
}
