//! Session cache provider trait.

use async_trait::async_trait;
use shib_model::Principal;

use crate::error::CacheResult;

/// Capability set the authenticator needs from the host's session store.
///
/// Implementations must be safe for concurrent use. A hit on `get` is the
/// per-request fast path: the authenticator returns the cached principal
/// without touching the directory or re-resolving headers, which is what
/// keeps the check cheap when the host calls it many times per page view.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Returns the principal cached for a session key, if any.
    async fn get(&self, session_key: &str) -> CacheResult<Option<Principal>>;

    /// Caches the resolved principal for a session key, replacing any
    /// previous entry.
    async fn put(&self, session_key: &str, principal: &Principal) -> CacheResult<()>;

    /// Removes the entry for a session key. Clearing an absent key is a
    /// no-op.
    async fn clear(&self, session_key: &str) -> CacheResult<()>;
}
