//! Directory group record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authorization group held by the directory.
///
/// Role synchronization resolves configured role names to groups and adds
/// memberships; groups themselves are created and deleted by the host, never
/// by the authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier assigned by the directory.
    pub id: Uuid,
    /// Group name, unique within the directory.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Creates a new group record.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
