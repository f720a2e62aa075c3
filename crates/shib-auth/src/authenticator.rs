//! Per-request authentication orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use shib_config::ShibAuthConfig;
use shib_core::Headers;
use shib_directory::UserDirectory;
use shib_model::{Principal, Profile, User};
use shib_session::SessionCache;

use crate::error::{AuthError, AuthResult};
use crate::identity::{self, NormalizedIdentity};
use crate::roles;

/// The request-boundary inputs one authentication check consumes.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    /// Host-provided session key the resolved principal is cached under.
    pub session_key: String,
    /// The identity asserted by the trusted upstream layer, if any.
    pub remote_user: Option<String>,
    /// All inbound request headers.
    pub headers: Headers,
}

/// Authenticator that accepts an upstream-asserted identity as proof of
/// authentication.
///
/// One call to [`authenticate`](Self::authenticate) runs per inbound
/// request; the host may issue many per page view, so a session-cache hit
/// short-circuits everything else. No failure inside the check reaches the
/// host: every directory or cache error degrades to a log record and, at
/// worst, an unauthenticated request.
pub struct RemoteUserAuthenticator {
    config: Arc<ShibAuthConfig>,
    directory: Arc<dyn UserDirectory>,
    sessions: Arc<dyn SessionCache>,
}

impl RemoteUserAuthenticator {
    /// Creates an authenticator over the host's directory and session
    /// store.
    #[must_use]
    pub fn new(
        config: Arc<ShibAuthConfig>,
        directory: Arc<dyn UserDirectory>,
        sessions: Arc<dyn SessionCache>,
    ) -> Self {
        Self {
            config,
            directory,
            sessions,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ShibAuthConfig {
        &self.config
    }

    /// Resolves the request to a principal, or `None` when it must proceed
    /// unauthenticated.
    pub async fn authenticate(&self, request: &AuthRequest) -> Option<Principal> {
        // Fast path: the session already carries a principal. A cache read
        // error is a miss, not a failure.
        match self.sessions.get(&request.session_key).await {
            Ok(Some(principal)) => {
                tracing::debug!(username = %principal.username, "already logged in, returning");
                return Some(principal);
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(error = %error, "session cache read failed, treating as miss");
            }
        }

        let identity =
            match identity::resolve(request.remote_user.as_deref(), &request.headers, &self.config)
            {
                Ok(identity) => identity,
                Err(AuthError::MissingIdentity) => {
                    tracing::debug!("remote user was null or empty, cannot authenticate");
                    return None;
                }
                Err(error) => {
                    tracing::warn!(error = %error, "identity resolution failed");
                    return None;
                }
            };

        let (mut user, new_user) = self.obtain_account(&identity).await?;

        if new_user || self.config.update_info {
            self.sync_profile(&mut user, &identity).await;
        }

        if new_user || self.config.update_roles {
            self.sync_roles(&user, &request.headers).await;
        }

        let principal = Principal::from_user(&user);

        if let Err(error) = self.sessions.put(&request.session_key, &principal).await {
            tracing::warn!(error = %error, "unable to cache principal for session");
        }

        tracing::debug!(username = %principal.username, "logging in user");
        Some(principal)
    }

    /// Looks up the account, provisioning it when allowed.
    ///
    /// Returns the account and whether it was newly created, or `None` when
    /// no usable account could be obtained — the one condition that makes
    /// the request unauthenticated.
    async fn obtain_account(&self, identity: &NormalizedIdentity) -> Option<(User, bool)> {
        match self.find_user(&identity.id).await {
            Some(user) => Some((user, false)),
            None => match self.create_user(&identity.id).await {
                Ok(Some(user)) => Some((user, true)),
                Ok(None) => None,
                Err(error) => {
                    tracing::error!(
                        username = %identity.id,
                        error = %error,
                        "unable to create or recover account"
                    );
                    None
                }
            },
        }
    }

    /// Looks up an account; a directory error is logged and treated as not
    /// found so the flow fails open toward provisioning.
    async fn find_user(&self, username: &str) -> Option<User> {
        match self.directory.lookup(username).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::debug!(username = %username, "no account exists");
                None
            }
            Err(error) => {
                tracing::error!(username = %username, error = %error, "error getting user");
                None
            }
        }
    }

    /// Creates the account when configuration allows it.
    ///
    /// A failed create is followed by one more lookup: under concurrent
    /// first logins another request may have created the account between
    /// our lookup and create.
    async fn create_user(&self, username: &str) -> AuthResult<Option<User>> {
        if !self.config.create_users {
            tracing::debug!(
                username = %username,
                "account creation disabled, authentication fails"
            );
            return Ok(None);
        }

        tracing::info!(username = %username, "creating user account");

        match self.directory.create(username).await {
            Ok(user) => Ok(Some(user)),
            Err(create_error) => {
                tracing::debug!(
                    username = %username,
                    error = %create_error,
                    "create failed, re-checking for an existing account"
                );
                match self.directory.lookup(username).await {
                    Ok(Some(user)) => Ok(Some(user)),
                    Ok(None) => Err(create_error.into()),
                    Err(lookup_error) => Err(lookup_error.into()),
                }
            }
        }
    }

    /// Writes changed profile fields, suppressing no-op writes.
    ///
    /// The local record is updated alongside the directory so the principal
    /// built from it reflects the synced profile.
    async fn sync_profile(&self, user: &mut User, identity: &NormalizedIdentity) {
        let Some(changes) = Profile::diff(user, &identity.full_name, identity.email.as_deref())
        else {
            tracing::debug!(username = %user.username, "profile unchanged, skipping update");
            return;
        };

        tracing::debug!(username = %user.username, changes = ?changes, "updating profile");

        match self.directory.update_profile(&user.username, &changes).await {
            Ok(()) => {
                if let Some(full_name) = changes.full_name {
                    user.full_name = full_name;
                }
                if let Some(email) = changes.email {
                    user.email = Some(email);
                }
            }
            Err(error) => {
                tracing::error!(username = %user.username, error = %error, "couldn't update user");
            }
        }
    }

    /// Applies the effective role set, additively.
    ///
    /// Default roles and header-derived roles are unioned; each group is
    /// resolved and joined independently so one unknown group or directory
    /// error never blocks the rest. Existing memberships are never removed.
    async fn sync_roles(&self, user: &User, headers: &Headers) {
        let mut effective: HashSet<String> = self
            .config
            .default_roles
            .iter()
            .map(|r| r.trim().to_owned())
            .filter(|r| !r.is_empty())
            .collect();
        effective.extend(roles::compute_roles(headers, &self.config));

        if effective.is_empty() {
            tracing::debug!(username = %user.username, "no roles to assign");
            return;
        }

        for role in &effective {
            if let Err(error) = self.assign_role(user, role).await {
                tracing::error!(
                    username = %user.username,
                    role = %role,
                    error = %error,
                    "role assignment skipped"
                );
            }
        }
    }

    /// Resolves one group and adds the user to it.
    async fn assign_role(&self, user: &User, role: &str) -> AuthResult<()> {
        let group = self
            .directory
            .get_group(role)
            .await?
            .ok_or_else(|| AuthError::unknown_group(role))?;

        tracing::debug!(username = %user.username, group = %group.name, "assigning to group");
        self.directory.add_membership(&group, &user.username).await?;
        Ok(())
    }
}
