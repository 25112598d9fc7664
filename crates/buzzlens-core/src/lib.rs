//! Shared types and configuration for buzzlens.

pub mod app_config;
pub mod config;
pub mod mention;

pub use app_config::{AppConfig, NewsLocale};
pub use config::{load_app_config, load_app_config_from_env};
pub use mention::{EntityType, Mention, Platform, Sentiment};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
