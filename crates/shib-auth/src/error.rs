//! Authentication error kinds.
//!
//! Every fallible step of the check returns an explicit kind; the
//! orchestrator decides per kind whether to degrade, skip, or give up on
//! the request. None of these propagate out of
//! [`crate::RemoteUserAuthenticator::authenticate`].

use shib_directory::DirectoryError;
use thiserror::Error;

/// Errors arising inside an authentication check.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No identity was asserted on the request; it proceeds
    /// unauthenticated.
    #[error("no asserted identity on request")]
    MissingIdentity,

    /// A directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// A configured role has no corresponding directory group; that single
    /// assignment is skipped.
    #[error("no directory group named '{name}'")]
    UnknownGroup {
        /// The role name with no matching group.
        name: String,
    },
}

impl AuthError {
    /// Creates an unknown-group error.
    #[must_use]
    pub fn unknown_group(name: impl Into<String>) -> Self {
        Self::UnknownGroup { name: name.into() }
    }

    /// Checks if this is the missing-identity kind.
    #[must_use]
    pub const fn is_missing_identity(&self) -> bool {
        matches!(self, Self::MissingIdentity)
    }
}

/// Result type for authentication steps.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_errors_convert() {
        let err: AuthError = DirectoryError::connection("refused").into();
        assert!(!err.is_missing_identity());
        assert_eq!(err.to_string(), "directory connection error: refused");
    }

    #[test]
    fn unknown_group_names_the_role() {
        let err = AuthError::unknown_group("legacy-role");
        assert_eq!(err.to_string(), "no directory group named 'legacy-role'");
    }
}
