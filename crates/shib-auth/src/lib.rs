//! # shib-auth
//!
//! The authentication core: turns a trust assertion carried in inbound
//! request metadata (an upstream-asserted identity plus optional name,
//! email, and role attributes in headers) into a resolved local principal,
//! optionally provisioning the account and synchronizing its group
//! memberships from configured mapping rules.
//!
//! The host owns the user directory and the session store; this crate
//! composes them through the [`shib_directory::UserDirectory`] and
//! [`shib_session::SessionCache`] interfaces. The check runs once per
//! inbound request and is reentrant; no failure inside it escapes to the
//! host — at worst the request proceeds unauthenticated.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shib_auth::{AuthRequest, RemoteUserAuthenticator};
//!
//! let authenticator = RemoteUserAuthenticator::new(config, directory, sessions);
//! let principal = authenticator
//!     .authenticate(&AuthRequest {
//!         session_key: session_id,
//!         remote_user: request.remote_user(),
//!         headers: (&request.headers()).into(),
//!     })
//!     .await;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod authenticator;
pub mod error;
pub mod identity;
pub mod roles;

pub use authenticator::{AuthRequest, RemoteUserAuthenticator};
pub use error::{AuthError, AuthResult};
pub use identity::NormalizedIdentity;
pub use roles::compute_roles;
