//! Error types for the contact book.
//!
//! Field validation failures live in [`crate::domain::ValidationError`];
//! this module adds the configuration errors and the `Result` aliases used
//! across the crate.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results of record and book mutations
pub type BookResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
