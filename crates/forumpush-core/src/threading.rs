//! Threaded reply configuration

use forumpush_types::meta_keys;

use crate::prelude::*;
use crate::settings::Options;

/// Snapshot of the site's threading options, taken once per notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingConfig {
	pub enabled: bool,
	/// Always at least 1
	pub max_depth: u32,
}

impl Default for ThreadingConfig {
	fn default() -> Self {
		Self { enabled: false, max_depth: 2 }
	}
}

impl ThreadingConfig {
	/// Depths below 1 (including negative stored values) are clamped to 1.
	pub fn new(enabled: bool, max_depth: i64) -> Self {
		let max_depth = u32::try_from(max_depth.max(1)).unwrap_or(u32::MAX);
		Self { enabled, max_depth }
	}

	/// Whether replies may notify the reply they answer.
	///
	/// A depth of 1 shows no nesting, so even with threading enabled replies stay
	/// flat under the topic.
	pub fn allows_reply_targets(&self) -> bool {
		self.enabled && self.max_depth > 1
	}

	pub async fn load(options: &Options) -> FpResult<Self> {
		let enabled = options.get_bool(meta_keys::OPT_THREAD_REPLIES).await?;
		let max_depth = options.get_int(meta_keys::OPT_THREAD_REPLIES_DEPTH).await?;
		Ok(Self::new(enabled, max_depth))
	}
}


// vim: ts=4
