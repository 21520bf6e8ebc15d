use crate::app_config::{AppConfig, Environment};
use crate::fallback::DEMO_BUSINESS_ID;
use crate::ConfigError;

const DEFAULT_WEBHOOK_URL: &str = "https://script.google.com/macros/s/AKfycbxXSF_YpNnLEs4NMrmkQhnuBbR5wAmXWkugWvV4E9jNKSM1jDPStUITEPaC5xJ2Juj-/exec";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let env = parse_environment(&or_default("TAPREVIEW_ENV", "development"))?;
    let log_level = or_default("TAPREVIEW_LOG_LEVEL", "info");
    let catalog_url = non_empty("TAPREVIEW_CATALOG_URL", "businesses.json")?;
    let webhook_url = non_empty("TAPREVIEW_WEBHOOK_URL", DEFAULT_WEBHOOK_URL)?;
    let default_business_id = non_empty("TAPREVIEW_DEFAULT_BUSINESS_ID", DEMO_BUSINESS_ID)?;
    let user_agent = or_default("TAPREVIEW_USER_AGENT", "tapreview/0.1 (nfc-review)");

    let request_timeout_secs = match lookup("TAPREVIEW_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "TAPREVIEW_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
        ),
        Err(_) => None,
    };

    let webhook_require_ack = parse_bool(
        "TAPREVIEW_WEBHOOK_REQUIRE_ACK",
        &or_default("TAPREVIEW_WEBHOOK_REQUIRE_ACK", "false"),
    )?;

    Ok(AppConfig {
        env,
        log_level,
        catalog_url,
        webhook_url,
        default_business_id,
        user_agent,
        request_timeout_secs,
        webhook_require_ack,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TAPREVIEW_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
