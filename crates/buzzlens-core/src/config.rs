use crate::app_config::{AppConfig, NewsLocale};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    // Credentials are checked first: a missing one would otherwise show up
    // later as an empty discussion result.
    let reddit_client_id = require("REDDIT_CLIENT_ID")?;
    let reddit_client_secret = require("REDDIT_CLIENT_SECRET")?;
    let reddit_user_agent = require("REDDIT_USER_AGENT")?;

    let log_level = or_default("BUZZLENS_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("BUZZLENS_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BUZZLENS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let max_concurrent_queries = parse_usize("BUZZLENS_MAX_CONCURRENT_QUERIES", "4")?;
    if max_concurrent_queries == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BUZZLENS_MAX_CONCURRENT_QUERIES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let max_retries = parse_u32("BUZZLENS_MAX_RETRIES", "1")?;
    let retry_backoff_base_ms = parse_u64("BUZZLENS_RETRY_BACKOFF_BASE_MS", "500")?;

    let defaults = NewsLocale::default();
    let news_locale = NewsLocale {
        language: or_default("BUZZLENS_NEWS_LANGUAGE", &defaults.language),
        region: or_default("BUZZLENS_NEWS_REGION", &defaults.region),
    };

    Ok(AppConfig {
        log_level,
        reddit_client_id,
        reddit_client_secret,
        reddit_user_agent,
        request_timeout_secs,
        max_concurrent_queries,
        max_retries,
        retry_backoff_base_ms,
        news_locale,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
