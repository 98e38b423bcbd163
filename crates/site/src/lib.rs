//! POS System marketing site and admin console.
//!
//! This crate provides the site as a library, allowing it to be tested
//! end to end without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod backend;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod filters;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::build_router;
