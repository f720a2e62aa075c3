//! Directory error types.

use thiserror::Error;

/// Errors that can occur during directory operations.
///
/// The authenticator never lets these escape a request: every directory
/// failure degrades to "treat as absent / skip" plus a log record.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No entity with the given name exists.
    #[error("{entity_type} '{name}' not found")]
    NotFound {
        /// Type of entity ("user", "group").
        entity_type: &'static str,
        /// Entity name.
        name: String,
    },

    /// An entity with the given name already exists.
    #[error("{entity_type} '{name}' already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Conflicting name.
        name: String,
    },

    /// The directory backend could not be reached.
    #[error("directory connection error: {0}")]
    Connection(String),

    /// A directory query failed.
    #[error("directory query error: {0}")]
    Query(String),

    /// Internal directory error.
    #[error("internal directory error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Checks if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks if this is a duplicate error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_predicates() {
        assert!(DirectoryError::not_found("user", "jdoe").is_not_found());
        assert!(DirectoryError::duplicate("user", "jdoe").is_duplicate());
        assert!(!DirectoryError::connection("refused").is_not_found());
    }

    #[test]
    fn error_display_names_the_entity() {
        let err = DirectoryError::not_found("group", "legacy-role");
        assert_eq!(err.to_string(), "group 'legacy-role' not found");
    }
}
