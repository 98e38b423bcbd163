//! POSystem Core - Shared types library.
//!
//! This crate provides the records exchanged with the content backend and the
//! helpers shared by the other workspace members:
//! - `site` - Public marketing site and admin console
//! - `cli` - Operator command-line tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. The backend is the source of truth for every record here; these
//! types only describe its JSON.
//!
//! # Modules
//!
//! - [`types`] - Blog posts, contact messages, subscribers, profiles, IDs and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
