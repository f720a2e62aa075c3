//! In-process session cache.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shib_model::Principal;

use crate::error::CacheResult;
use crate::provider::SessionCache;

/// Session cache backed by a process-local map.
///
/// Payloads are stored as serialized bytes, the same wire shape a
/// distributed cache would hold, so swapping implementations doesn't change
/// what can round-trip.
#[derive(Debug, Default)]
pub struct InMemorySessionCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySessionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no sessions are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn get(&self, session_key: &str) -> CacheResult<Option<Principal>> {
        let entries = self.entries.read();
        match entries.get(session_key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, session_key: &str, principal: &Principal) -> CacheResult<()> {
        let bytes = serde_json::to_vec(principal)?;
        self.entries.write().insert(session_key.to_owned(), bytes);
        Ok(())
    }

    async fn clear(&self, session_key: &str) -> CacheResult<()> {
        self.entries.write().remove(session_key);
        Ok(())
    }
}
