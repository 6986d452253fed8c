//! Error types for sdkconf.
//!
//! Duplicating and merging configuration records cannot fail; these errors only
//! come from the loading, logging and default-installation surfaces around them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Default configuration is already initialized")]
    DefaultAlreadyInitialized,

    #[error("Failed to render configuration: {0}")]
    Render(String),

    #[error("Log sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}
