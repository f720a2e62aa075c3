//! User-directory provider trait.

use async_trait::async_trait;
use shib_model::{Group, Profile, User};

use crate::error::DirectoryResult;

/// Capability set the authenticator needs from the host's user directory.
///
/// Implementations must be thread-safe; one authentication check runs per
/// inbound request, concurrently with others, and each issues synchronous
/// (awaited, unpipelined) calls into the directory. The core imposes no
/// timeouts — bounded latency, if required, is the implementation's job.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up an account by username.
    async fn lookup(&self, username: &str) -> DirectoryResult<Option<User>>;

    /// Creates an account for `username` and returns the new record.
    ///
    /// ## Errors
    ///
    /// Returns `DirectoryError::Duplicate` if the account already exists.
    async fn create(&self, username: &str) -> DirectoryResult<User>;

    /// Applies a profile change to an existing account.
    ///
    /// Only the fields present in `profile` are written.
    ///
    /// ## Errors
    ///
    /// Returns `DirectoryError::NotFound` if the account doesn't exist.
    async fn update_profile(&self, username: &str, profile: &Profile) -> DirectoryResult<()>;

    /// Looks up a group by name.
    async fn get_group(&self, name: &str) -> DirectoryResult<Option<Group>>;

    /// Adds an account to a group. Adding an existing member is a no-op.
    ///
    /// ## Errors
    ///
    /// Returns `DirectoryError::NotFound` if the account or group doesn't
    /// exist.
    async fn add_membership(&self, group: &Group, username: &str) -> DirectoryResult<()>;
}
