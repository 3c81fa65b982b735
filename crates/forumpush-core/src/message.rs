//! Notification payload extraction

use forumpush_types::adapter::{
	ContentSanitizer, Localizer, MetadataStore, TitleResolver, UserDirectory,
};
use forumpush_types::meta_keys;
use forumpush_types::utils::parse_content_id;

use crate::prelude::*;

/// Fallback display name for authors that cannot be resolved
pub const ANONYMOUS: &str = "Anonymous";

/// Builds [`NotificationPayload`]s from topics and replies.
///
/// Borrows the read-only collaborators it needs; building one is free.
#[derive(Debug, Clone, Copy)]
pub struct MessageExtractor<'a> {
	pub users: &'a dyn UserDirectory,
	pub meta: &'a dyn MetadataStore,
	pub titles: &'a dyn TitleResolver,
	pub localizer: &'a dyn Localizer,
	pub sanitizer: &'a dyn ContentSanitizer,
	/// Maximum characters of content in the payload
	pub content_length: usize,
}

impl MessageExtractor<'_> {
	/// Extract the payload for a topic or reply
	///
	/// Fails with [`Error::InvalidContentKind`] for any other kind of item: callers
	/// are expected to have classified the item first.
	pub async fn extract(&self, item: &ContentItem) -> FpResult<NotificationPayload> {
		if !item.kind.is_recognized() {
			return Err(Error::InvalidContentKind(item.type_id.clone()));
		}

		let username = self.resolve_username(item).await?;

		let topic_id = self.meta.read_meta(item.id, meta_keys::TOPIC_ID).await?;
		let forum_id = self.meta.read_meta(item.id, meta_keys::FORUM_ID).await?;

		Ok(NotificationPayload {
			id: item.id,
			username,
			user_id: item.author_id,
			title: item.title.clone(),
			content: self.sanitizer.sanitize(&item.raw_content, self.content_length),
			parent_post_title: self.resolve_title(parse_content_id(topic_id.as_deref())).await?,
			parent_section_title: self.resolve_title(parse_content_id(forum_id.as_deref())).await?,
		})
	}

	/// Display name of the author, never empty
	async fn resolve_username(&self, item: &ContentItem) -> FpResult<String> {
		let name = if item.is_anonymous() {
			self.meta.read_meta(item.id, meta_keys::ANONYMOUS_NAME).await?
		} else {
			let user = self.users.read_user(item.author_id).await?;
			if user.is_none() {
				debug!(content_id = %item.id, author_id = %item.author_id, "Author not found");
			}
			user.map(|u| u.display_name)
		};

		match name {
			Some(name) if !name.is_empty() => Ok(name),
			_ => Ok(self.localizer.translate(ANONYMOUS)),
		}
	}

	async fn resolve_title(&self, id: Option<ContentId>) -> FpResult<String> {
		let Some(id) = id else {
			return Ok(String::new());
		};
		Ok(self.titles.read_title(id).await?.unwrap_or_default())
	}
}


// vim: ts=4
