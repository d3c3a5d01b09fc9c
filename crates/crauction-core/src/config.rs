use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_SITE_ORIGIN, DEFAULT_USER_AGENT};
use crate::ConfigError;

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
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("CRAUCTION_LOG_LEVEL", "info");
    let log_file = lookup("CRAUCTION_LOG_FILE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);
    let data_dir = PathBuf::from(or_default("CRAUCTION_DATA_DIR", "."));

    let site_origin = or_default("CRAUCTION_SITE_ORIGIN", DEFAULT_SITE_ORIGIN)
        .trim_end_matches('/')
        .to_string();
    if !(site_origin.starts_with("http://") || site_origin.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CRAUCTION_SITE_ORIGIN".to_string(),
            reason: format!("\"{site_origin}\" must start with http:// or https://"),
        });
    }

    let user_agent = or_default("CRAUCTION_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64("CRAUCTION_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CRAUCTION_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least one second".to_string(),
        });
    }
    let default_cases = parse_u32("CRAUCTION_DEFAULT_CASES", "40")?;

    Ok(AppConfig {
        log_level,
        log_file,
        data_dir,
        site_origin,
        user_agent,
        request_timeout_secs,
        default_cases,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
