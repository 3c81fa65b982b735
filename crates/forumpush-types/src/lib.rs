//! Shared types, collaborator traits, and core utilities for forumpush.
//!
//! Everything the notification core reads from the hosting forum goes through the
//! traits in [`adapter`]. Keeping them in a separate crate lets adapter
//! implementations build without pulling in the core.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod entity;
pub mod error;
pub mod meta_keys;
pub mod prelude;
pub mod types;
pub mod utils;

// vim: ts=4
