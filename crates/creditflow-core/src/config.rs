use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var carries an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an env var carries an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("CREDITFLOW_ENV", "development"));
    let bind_addr = parse_addr("CREDITFLOW_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CREDITFLOW_LOG_LEVEL", "info");

    let gemini_api_key = lookup("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    let gemini_model = or_default("CREDITFLOW_GEMINI_MODEL", "gemini-3-flash-preview");
    let ai_request_timeout_secs = parse_u64("CREDITFLOW_AI_TIMEOUT_SECS", "30")?;

    // 10 MiB covers exports an order of magnitude larger than the target
    // scale of a few thousand rows.
    let max_upload_bytes = parse_usize("CREDITFLOW_MAX_UPLOAD_BYTES", "10485760")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gemini_api_key,
        gemini_model,
        ai_request_timeout_secs,
        max_upload_bytes,
    })
}

fn parse_environment(raw: &str) -> Environment {
    match raw.to_lowercase().as_str() {
        "test" => Environment::Test,
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(std::env::VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_apply_with_an_empty_environment() {
        let map = HashMap::new();
        let config = build_app_config(lookup_from(&map)).expect("defaults are valid");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, "gemini-3-flash-preview");
        assert_eq!(config.ai_request_timeout_secs, 30);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let map = HashMap::from([
            ("CREDITFLOW_ENV", "production"),
            ("CREDITFLOW_BIND_ADDR", "127.0.0.1:8080"),
            ("GEMINI_API_KEY", "secret"),
            ("CREDITFLOW_AI_TIMEOUT_SECS", "5"),
        ]);
        let config = build_app_config(lookup_from(&map)).expect("valid overrides");
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.ai_request_timeout_secs, 5);
    }

    #[test]
    fn empty_api_key_counts_as_absent() {
        let map = HashMap::from([("GEMINI_API_KEY", "")]);
        let config = build_app_config(lookup_from(&map)).expect("valid");
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let map = HashMap::from([("CREDITFLOW_BIND_ADDR", "not-an-addr")]);
        let err = build_app_config(lookup_from(&map)).unwrap_err();
        assert!(err.to_string().contains("CREDITFLOW_BIND_ADDR"));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let map = HashMap::from([("CREDITFLOW_AI_TIMEOUT_SECS", "soon")]);
        let err = build_app_config(lookup_from(&map)).unwrap_err();
        assert!(err.to_string().contains("CREDITFLOW_AI_TIMEOUT_SECS"));
    }

    #[test]
    fn debug_redacts_the_api_key() {
        let map = HashMap::from([("GEMINI_API_KEY", "super-secret")]);
        let config = build_app_config(lookup_from(&map)).expect("valid");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
