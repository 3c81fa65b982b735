//! Mapping between abstract hierarchy roles and concrete content types
//!
//! The forum stores sections, topics and replies under its own type ids. The
//! [`EntityTypeMap`] is the single place those ids are compared; everything after
//! ingestion works with [`ContentKind`].

use serde::{Deserialize, Serialize};

use crate::types::{
	ContentId, ContentItem, ContentKind, ContentRecord, EntityRole, RawSaveEvent, SaveEvent,
	SubscriptionTarget,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTypeMap {
	pub section: Box<str>,
	pub post: Box<str>,
	pub comment: Box<str>,
}

impl Default for EntityTypeMap {
	fn default() -> Self {
		Self { section: "forum".into(), post: "topic".into(), comment: "reply".into() }
	}
}

impl EntityTypeMap {
	/// Concrete type id for a role
	pub fn get(&self, role: EntityRole) -> &str {
		match role {
			EntityRole::Section => &self.section,
			EntityRole::Post => &self.post,
			EntityRole::Comment => &self.comment,
		}
	}

	/// Classify a concrete type id
	///
	/// Sections never carry notifications themselves, so they classify as `Other`.
	pub fn kind_of(&self, type_id: &str) -> ContentKind {
		if type_id == self.post.as_ref() {
			ContentKind::Post
		} else if type_id == self.comment.as_ref() {
			ContentKind::Comment
		} else {
			ContentKind::Other
		}
	}

	/// Turn a raw record into a classified item
	pub fn classify(&self, record: ContentRecord) -> ContentItem {
		ContentItem {
			id: record.id,
			kind: self.kind_of(&record.typ),
			type_id: record.typ,
			author_id: record.author_id,
			title: record.title,
			raw_content: record.raw_content,
			status: record.status,
			parent_id: record.parent_id,
		}
	}

	/// Classify the content carried by a save event
	pub fn classify_event(&self, event: RawSaveEvent) -> SaveEvent {
		SaveEvent {
			content_id: event.content_id,
			content: self.classify(event.content),
			is_update: event.is_update,
			is_autosave: event.is_autosave,
			is_revision: event.is_revision,
			origin: event.origin,
		}
	}

	/// Build a subscription target for a role
	pub fn target(&self, role: EntityRole, entity_id: ContentId) -> SubscriptionTarget {
		SubscriptionTarget { role, entity_type: self.get(role).into(), entity_id }
	}
}


// vim: ts=4
