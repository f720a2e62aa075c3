//! # shib-config
//!
//! Configuration for the remote-user authenticator: the immutable
//! [`ShibAuthConfig`] value, the recognized property keys, a minimal
//! properties-format parser, and the fail-soft loader.
//!
//! Configuration is loaded once at process start and shared read-only across
//! concurrent requests (wrap it in an `Arc`); a missing or unreadable source
//! degrades to conservative defaults instead of aborting startup.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod keys;
pub mod loader;
pub mod properties;

pub use config::{ShibAuthConfig, ShibAuthConfigBuilder};
pub use error::{ConfigError, ConfigResult};
pub use loader::{from_properties, load};
pub use properties::parse_properties;
