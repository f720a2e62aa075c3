//! # shib-model
//!
//! Domain models for the remote-user authenticator.
//!
//! The user directory owns persistence of these records; this crate only
//! defines their shape and the profile-diff rule used to suppress needless
//! directory writes.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod group;
pub mod principal;
pub mod user;

pub use group::Group;
pub use principal::Principal;
pub use user::{Profile, User};
