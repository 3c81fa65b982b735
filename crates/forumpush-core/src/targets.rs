//! Subscription target resolution
//!
//! Decides which entity of the section → topic → reply hierarchy is notified about a
//! newly published item. Exactly one target is produced for a topic or reply.
//!
//! Resolution rules:
//! 1. Topic: its section (`parent_id`), whatever the threading options say
//! 2. Reply answering another reply, with threading enabled and depth > 1: that reply
//! 3. Any other reply: its topic (`parent_id`)
//! 4. Anything else: no target

use forumpush_types::adapter::MetadataStore;
use forumpush_types::entity::EntityTypeMap;
use forumpush_types::meta_keys;
use forumpush_types::utils::parse_content_id;

use crate::prelude::*;
use crate::threading::ThreadingConfig;

/// Resolve the target for an item once its reply-to reference is known
///
/// `reply_to` is only consulted for replies; `None` means the reply answers the topic.
pub fn resolve_target_with(
	types: &EntityTypeMap,
	item: &ContentItem,
	threading: ThreadingConfig,
	reply_to: Option<ContentId>,
) -> Option<SubscriptionTarget> {
	match item.kind {
		ContentKind::Post => Some(types.target(EntityRole::Section, item.parent_id)),
		ContentKind::Comment => match reply_to {
			Some(reply_to) if threading.allows_reply_targets() => {
				Some(types.target(EntityRole::Comment, reply_to))
			}
			_ => Some(types.target(EntityRole::Post, item.parent_id)),
		},
		ContentKind::Other => None,
	}
}

/// Resolve subscription targets for an item
///
/// Reads the reply-to reference from metadata for replies. The result is empty only
/// for items that are neither topics nor replies.
pub async fn resolve_targets<M: MetadataStore + ?Sized>(
	meta: &M,
	types: &EntityTypeMap,
	item: &ContentItem,
	threading: ThreadingConfig,
) -> FpResult<Vec<SubscriptionTarget>> {
	let reply_to = match item.kind {
		ContentKind::Comment => {
			let value = meta.read_meta(item.id, meta_keys::REPLY_TO).await?;
			parse_content_id(value.as_deref())
		}
		ContentKind::Post | ContentKind::Other => None,
	};

	let target = resolve_target_with(types, item, threading, reply_to);
	debug!(
		content_id = %item.id,
		kind = ?item.kind,
		reply_to = ?reply_to,
		threading = ?threading,
		target = ?target,
		"Resolved subscription target"
	);

	Ok(target.into_iter().collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use forumpush_memory_adapter::MemoryStore;
	use forumpush_types::types::ContentStatus;

	fn item(kind: ContentKind, id: u64, parent_id: u64) -> ContentItem {
		ContentItem {
			id: ContentId(id),
			kind,
			type_id: "x".into(),
			author_id: 1,
			title: String::new(),
			raw_content: String::new(),
			status: ContentStatus::Published,
			parent_id: ContentId(parent_id),
		}
	}

	fn target(role: EntityRole, id: u64) -> SubscriptionTarget {
		EntityTypeMap::default().target(role, ContentId(id))
	}

	#[test]
	fn test_topic_targets_section_regardless_of_threading() {
		let types = EntityTypeMap::default();
		let topic = item(ContentKind::Post, 10, 3);
		for threading in [
			ThreadingConfig::new(false, 1),
			ThreadingConfig::new(true, 1),
			ThreadingConfig::new(true, 5),
		] {
			for reply_to in [None, Some(ContentId(42))] {
				assert_eq!(
					resolve_target_with(&types, &topic, threading, reply_to),
					Some(target(EntityRole::Section, 3))
				);
			}
		}
	}

	#[test]
	fn test_reply_decision_table() {
		let types = EntityTypeMap::default();
		let reply = item(ContentKind::Comment, 55, 10);

		let cases = [
			// (enabled, depth, reply_to, expected)
			(true, 3, Some(42), target(EntityRole::Comment, 42)),
			(true, 2, Some(42), target(EntityRole::Comment, 42)),
			(true, 1, Some(42), target(EntityRole::Post, 10)),
			(false, 3, Some(42), target(EntityRole::Post, 10)),
			(true, 3, None, target(EntityRole::Post, 10)),
			(false, 1, None, target(EntityRole::Post, 10)),
		];

		for (enabled, depth, reply_to, expected) in cases {
			let threading = ThreadingConfig::new(enabled, depth);
			let got = resolve_target_with(&types, &reply, threading, reply_to.map(ContentId));
			assert_eq!(got, Some(expected), "enabled={enabled} depth={depth} reply_to={reply_to:?}");
		}
	}

	#[test]
	fn test_other_kind_has_no_target() {
		let types = EntityTypeMap::default();
		let other = item(ContentKind::Other, 1, 2);
		assert_eq!(
			resolve_target_with(&types, &other, ThreadingConfig::new(true, 5), Some(ContentId(9))),
			None
		);
	}

	#[tokio::test]
	async fn test_resolve_reads_reply_to() {
		let store = MemoryStore::new();
		store.set_meta(ContentId(55), meta_keys::REPLY_TO, "42");
		let types = EntityTypeMap::default();
		let reply = item(ContentKind::Comment, 55, 10);

		let threaded =
			resolve_targets(&store, &types, &reply, ThreadingConfig::new(true, 3)).await.unwrap();
		assert_eq!(threaded, vec![target(EntityRole::Comment, 42)]);

		let flat =
			resolve_targets(&store, &types, &reply, ThreadingConfig::new(true, 1)).await.unwrap();
		assert_eq!(flat, vec![target(EntityRole::Post, 10)]);
	}

	#[tokio::test]
	async fn test_resolve_zero_reply_to_targets_topic() {
		let store = MemoryStore::new();
		store.set_meta(ContentId(56), meta_keys::REPLY_TO, "0");
		let types = EntityTypeMap::default();
		let reply = item(ContentKind::Comment, 56, 10);

		let targets =
			resolve_targets(&store, &types, &reply, ThreadingConfig::new(true, 5)).await.unwrap();
		assert_eq!(targets, vec![target(EntityRole::Post, 10)]);
	}

	#[tokio::test]
	async fn test_resolve_other_is_empty() {
		let store = MemoryStore::new();
		let types = EntityTypeMap::default();
		let other = item(ContentKind::Other, 1, 2);
		let targets =
			resolve_targets(&store, &types, &other, ThreadingConfig::default()).await.unwrap();
		assert!(targets.is_empty());
	}

	#[tokio::test]
	async fn test_resolve_is_repeatable() {
		let store = MemoryStore::new();
		store.set_meta(ContentId(55), meta_keys::REPLY_TO, "42");
		let types = EntityTypeMap::default();
		let reply = item(ContentKind::Comment, 55, 10);
		let threading = ThreadingConfig::new(true, 3);

		let first = resolve_targets(&store, &types, &reply, threading).await.unwrap();
		let second = resolve_targets(&store, &types, &reply, threading).await.unwrap();
		assert_eq!(first, second);
	}
}

// vim: ts=4
