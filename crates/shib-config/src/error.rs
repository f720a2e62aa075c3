//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration.
///
/// Loading fails soft: callers receive the conservative default
/// configuration alongside the error, and startup proceeds.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration source could not be read.
    #[error("unable to read configuration from {path}: {source}")]
    Io {
        /// Path of the configuration source.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates an I/O error for a configuration path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
