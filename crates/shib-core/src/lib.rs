//! # shib-core
//!
//! Shared primitives for the remote-user authenticator: the inbound
//! request-header multimap and the text helpers (delimited-list tokenizer,
//! Latin-1 to UTF-8 reinterpretation) used by both the configuration loader
//! and the role mapper.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod headers;
pub mod text;

pub use headers::Headers;
pub use text::{reinterpret_utf8, split_list};
