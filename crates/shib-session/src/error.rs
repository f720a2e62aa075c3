//! Session cache error types.

use thiserror::Error;

/// Errors that can occur during session cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// A cached payload could not be encoded or decoded.
    #[error("session payload serialization error: {0}")]
    Serialization(String),

    /// The cache backend could not be reached.
    #[error("session cache connection error: {0}")]
    Connection(String),

    /// Internal cache error.
    #[error("internal session cache error: {0}")]
    Internal(String),
}

impl CacheError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for session cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
