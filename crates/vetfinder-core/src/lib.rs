pub mod app_config;
pub mod clinic;
pub mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use clinic::{ClinicQuery, ClinicRecord, GeoPoint, SearchResult};
pub use config::{load_app_config, load_app_config_from_env};

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
