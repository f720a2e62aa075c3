//! # shib-directory
//!
//! The user-directory collaborator interface. The host application owns the
//! actual directory (database, LDAP, whatever it uses); the authenticator
//! core only needs the small capability set defined here.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod provider;

pub use error::{DirectoryError, DirectoryResult};
pub use provider::UserDirectory;
