//! Shared fixtures for pipeline tests

#![allow(dead_code)]

use std::sync::Arc;

use forumpush_core::NotificationPipeline;
use forumpush_memory_adapter::{MemoryStore, RecordingDelivery};
use forumpush_types::types::{ContentId, ContentRecord, RawSaveEvent, User, WriteOrigin};

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

/// A forum with one section (3), one topic (10) by Alice (7) and a reply (42) under it
pub fn forum_store() -> Arc<MemoryStore> {
	let store = Arc::new(MemoryStore::new());
	store.add_user(User { id: 7, display_name: "Alice".into() });
	store.add_user(User { id: 8, display_name: "Bob".into() });
	store.set_title(ContentId(3), "General");
	store.set_title(ContentId(10), "Hello");
	store.set_meta(ContentId(10), "_bbp_forum_id", "3");
	store
}

pub struct Fixture {
	pub store: Arc<MemoryStore>,
	pub delivery: Arc<RecordingDelivery>,
	pub pipeline: NotificationPipeline,
}

pub fn fixture_with(store: Arc<MemoryStore>, delivery: Arc<RecordingDelivery>) -> Fixture {
	setup_test_logging();
	let pipeline = NotificationPipeline::builder()
		.users(store.clone())
		.meta(store.clone())
		.options(store.clone())
		.titles(store.clone())
		.delivery(delivery.clone())
		.build()
		.expect("pipeline");
	Fixture { store, delivery, pipeline }
}

pub fn fixture() -> Fixture {
	fixture_with(forum_store(), Arc::new(RecordingDelivery::new()))
}

pub fn record(id: u64, typ: &str, author_id: u64, parent_id: u64) -> ContentRecord {
	ContentRecord {
		id: ContentId(id),
		typ: typ.into(),
		author_id,
		title: format!("Item {id}"),
		raw_content: "<p>Some <b>content</b></p>".into(),
		status: "publish".into(),
		parent_id: ContentId(parent_id),
	}
}

/// A first-publication save event from the normal editor
pub fn publish(record: ContentRecord) -> RawSaveEvent {
	RawSaveEvent {
		content_id: record.id,
		content: record,
		is_update: false,
		is_autosave: false,
		is_revision: false,
		origin: Some(WriteOrigin::Interactive),
	}
}

// vim: ts=4
