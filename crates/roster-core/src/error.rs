//! Error types and result aliases for the roster service.
//!
//! Errors here are startup-shaped: lookups over the loaded directory never
//! fail (absence is a value, not a fault), so the variants cover input
//! validation and roster deserialization only.

/// The result type used throughout the roster crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roster operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided (configuration values, mostly).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// An internal error occurred that should not happen in normal operation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a new serialization error with the given message.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
