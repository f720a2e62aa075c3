//! Local account record and profile updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A local user account as held by the directory.
///
/// Usernames are unique within the directory and stored lowercase; the
/// identity resolver lowercases asserted ids before any lookup, so the two
/// sides always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the directory.
    pub id: Uuid,
    /// Unique username (lowercase).
    pub username: String,
    /// Display name. Defaults to the username until a profile sync runs.
    pub full_name: String,
    /// Email address (lowercase), if known.
    pub email: Option<String>,
    /// Whether the account is enabled.
    pub enabled: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account record for `username`.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            full_name: username.clone(),
            username,
            email: None,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the full name.
    #[must_use]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }
}

/// Name and email fields for a directory profile write.
///
/// Only fields that actually differ from the stored record are populated,
/// so an empty diff means no write is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// New display name, when it changed.
    pub full_name: Option<String>,
    /// New email address, when it changed.
    pub email: Option<String>,
}

impl Profile {
    /// Compares incoming profile values against a stored account.
    ///
    /// Returns `None` when neither field would change. An incoming email of
    /// `None` never clears a stored address; the sync is write-only for
    /// values the upstream actually asserted.
    #[must_use]
    pub fn diff(user: &User, full_name: &str, email: Option<&str>) -> Option<Self> {
        let mut changes = Self::default();

        if user.full_name != full_name {
            changes.full_name = Some(full_name.to_owned());
        }
        if let Some(email) = email {
            if user.email.as_deref() != Some(email) {
                changes.email = Some(email.to_owned());
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes)
        }
    }

    /// Returns true when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}
