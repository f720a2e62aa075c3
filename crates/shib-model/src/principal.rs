//! Resolved session principal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resolved local-account handle for an authenticated session.
///
/// Cached against the session key after a successful check so subsequent
/// requests on the same session skip directory access entirely. Serializable
/// so session caches may externalize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Directory id of the resolved account.
    pub user_id: Uuid,
    /// Username (lowercase).
    pub username: String,
    /// Display name at the time of resolution.
    pub display_name: String,
}

impl Principal {
    /// Builds a principal from a directory account record.
    #[must_use]
    pub fn from_user(user: &crate::User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            display_name: user.full_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::User;

    #[test]
    fn principal_reflects_account() {
        let user = User::new("jdoe").with_full_name("John Doe");
        let principal = Principal::from_user(&user);

        assert_eq!(principal.user_id, user.id);
        assert_eq!(principal.username, "jdoe");
        assert_eq!(principal.display_name, "John Doe");
    }
}
