//! Unified error handling for Fieldlink.
//!
//! This module provides a common error type that can be used across all
//! crates, reducing boilerplate and making error handling consistent.

/// Unified error type for Fieldlink.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// External command failures (spawn failure or non-zero exit).
    #[error("Command error: {0}")]
    Command(String),

    /// Application manifest read/parse failures.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Parameter store failures.
    #[error("Store error: {0}")]
    Store(String),

    /// Validation errors.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
