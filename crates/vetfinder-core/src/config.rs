use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
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
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Nothing is required at startup: a missing `GOOGLE_API_KEY` is reported per
/// request by the discovery engine, not here.
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

    let env = parse_environment(&or_default("VETFINDER_ENV", "development"));
    let bind_addr = parse_addr("VETFINDER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("VETFINDER_LOG_LEVEL", "info");

    // An empty key in `.env` is as good as no key.
    let google_api_key = lookup("GOOGLE_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    let places_base_url = or_default("VETFINDER_PLACES_BASE_URL", "https://places.googleapis.com");
    if !places_base_url.starts_with("http://") && !places_base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "VETFINDER_PLACES_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{places_base_url}'"),
        });
    }

    let parse_timeout = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let secs = parse_u64(var, default)?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(secs)
    };

    let places_timeout_secs = parse_timeout("VETFINDER_PLACES_TIMEOUT_SECS", "10")?;
    let places_connect_timeout_secs =
        parse_timeout("VETFINDER_PLACES_CONNECT_TIMEOUT_SECS", "5")?;

    let user_agent = or_default(
        "VETFINDER_USER_AGENT",
        "vetfinder/0.1 (emergency-clinic-lookup)",
    );

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        google_api_key,
        places_base_url,
        places_timeout_secs,
        places_connect_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
