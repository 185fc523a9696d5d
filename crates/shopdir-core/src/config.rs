use crate::app_config::{AppConfig, Environment, PROXY_URL_PLACEHOLDER};
use crate::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.ultraman-cardgame.com/api/v1/us/shops";
pub const DEFAULT_PROXY_TEMPLATE: &str = "https://api.allorigins.win/raw?url={url}";
pub const DEFAULT_USER_AGENT: &str = "shopdir/0.1 (shop-directory)";

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
/// Decoupled from the process environment so tests can use a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SHOPDIR_ENV", "development"))?;
    let log_level = or_default("SHOPDIR_LOG_LEVEL", "info");

    let api_url = or_default("SHOPDIR_API_URL", DEFAULT_API_URL);
    if api_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPDIR_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let proxy_template = parse_proxy_template(&or_default(
        "SHOPDIR_PROXY_TEMPLATE",
        DEFAULT_PROXY_TEMPLATE,
    ))?;

    let request_timeout_secs = parse_u64("SHOPDIR_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPDIR_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("SHOPDIR_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        env,
        log_level,
        api_url,
        proxy_template,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPDIR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// An empty template disables the fallback; otherwise it must contain the
/// URL placeholder.
fn parse_proxy_template(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.contains(PROXY_URL_PLACEHOLDER) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPDIR_PROXY_TEMPLATE".to_string(),
            reason: format!("template must contain {PROXY_URL_PLACEHOLDER}"),
        });
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
