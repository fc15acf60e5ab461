//! Configuration errors.

use thiserror::Error;

/// Errors that can occur while loading settings or seed data.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Seed file not found
    #[error("Seed file not found: {0}")]
    FileNotFound(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Offending key.
        key: String,
        /// What is wrong with it.
        message: String,
    },

    /// Underlying config crate error
    #[error("Configuration error: {0}")]
    ConfigCrateError(#[from] config::ConfigError),
}
