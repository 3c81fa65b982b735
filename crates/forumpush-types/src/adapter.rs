//! Collaborator traits implemented by the hosting forum
//!
//! The notification core only reads through these traits. Lookups return
//! `Ok(None)` for "not found"; an `Err` means the collaborator itself failed and is
//! passed straight back to the caller.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::{NotificationPayload, SubscriptionTarget, User};

/// User accounts
#[async_trait]
pub trait UserDirectory: Debug + Send + Sync {
	/// Reads a user by id
	async fn read_user(&self, user_id: u64) -> FpResult<Option<User>>;
}

/// Per-content key/value metadata
#[async_trait]
pub trait MetadataStore: Debug + Send + Sync {
	/// Reads a single metadata value, `None` if unset
	async fn read_meta(&self, content_id: ContentId, key: &str) -> FpResult<Option<String>>;
}

/// Site-wide options
#[async_trait]
pub trait OptionsStore: Debug + Send + Sync {
	/// Reads a stored option, `None` if it was never set
	async fn read_option(&self, key: &str) -> FpResult<Option<SettingValue>>;
}

/// Display titles of content items
#[async_trait]
pub trait TitleResolver: Debug + Send + Sync {
	async fn read_title(&self, content_id: ContentId) -> FpResult<Option<String>>;
}

/// Outbound sink for resolved notifications
#[async_trait]
pub trait DeliveryService: Debug + Send + Sync {
	async fn send(
		&self,
		payload: &NotificationPayload,
		targets: &[SubscriptionTarget],
	) -> FpResult<()>;
}

/// Translation of user-visible literals
pub trait Localizer: Debug + Send + Sync {
	fn translate(&self, literal: &str) -> String;
}

/// Turns stored markup into the short plain text carried in a payload
pub trait ContentSanitizer: Debug + Send + Sync {
	fn sanitize(&self, raw: &str, max_chars: usize) -> String;
}

// vim: ts=4
