//! Error types for textkit

use thiserror::Error;

/// Main error type for textkit operations
///
/// The string helpers themselves are total; this type covers the
/// configuration and option surfaces around them.
#[derive(Debug, Error)]
pub enum TextkitError {
    /// Configuration error (environment, .env files, unparsable values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (rejected options or arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value with details
    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        /// Configuration key
        key: String,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Convenient Result type using TextkitError
pub type Result<T> = std::result::Result<T, TextkitError>;

impl TextkitError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        TextkitError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        TextkitError::Validation(msg.into())
    }

    /// Create an invalid value error
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TextkitError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
