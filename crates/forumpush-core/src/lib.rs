//! Push notification core for threaded forums.
//!
//! Turns "content saved" events from a forum into push notifications:
//!
//! - [`gate`]: keeps only first publications of topics and replies
//! - [`classify`]: published-and-recognized check
//! - [`message`]: payload extraction (author name, parent titles, short content)
//! - [`targets`]: which section, topic or reply gets notified
//! - [`pipeline`]: composition and hand-off to delivery
//!
//! The forum itself is reached through the collaborator traits of
//! `forumpush_types::adapter`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod gate;
pub mod message;
pub mod pipeline;
pub mod settings;
pub mod targets;
pub mod text;
pub mod threading;

mod prelude;

pub use pipeline::{Dispatch, NotificationPipeline, Outcome, PipelineBuilder};
pub use threading::ThreadingConfig;

use crate::prelude::*;

pub fn register_settings(registry: &mut settings::SettingsRegistry) -> FpResult<()> {
	settings::register_settings(registry)
}

// vim: ts=4
