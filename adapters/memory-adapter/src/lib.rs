//! In-memory forum store for forumpush
//!
//! [`MemoryStore`] answers every lookup the notification core makes (users, content
//! metadata, site options, titles) from hash maps. It can be filled directly or from a
//! JSON [`Snapshot`]. The [`delivery`] module has sinks that record or print what the
//! pipeline sends.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;

use forumpush::adapter::{MetadataStore, OptionsStore, TitleResolver, UserDirectory};
use forumpush::prelude::*;
use forumpush::types::User;

pub mod delivery;
pub mod snapshot;

pub use delivery::{LogDelivery, RecordingDelivery, SentNotification};
pub use snapshot::{MetaEntry, Snapshot};

#[derive(Debug, Default)]
struct Tables {
	users: HashMap<u64, User>,
	meta: HashMap<ContentId, HashMap<Box<str>, String>>,
	options: HashMap<Box<str>, SettingValue>,
	titles: HashMap<ContentId, String>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
	tables: RwLock<Tables>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store holding the contents of a snapshot
	///
	/// The snapshot's entity type map is not part of the store; callers pass it to the
	/// pipeline themselves.
	pub fn from_snapshot(snapshot: &Snapshot) -> Self {
		let store = Self::new();
		store.load_snapshot(snapshot);
		store
	}

	/// Reads a JSON snapshot file
	pub async fn read_snapshot_file(path: impl AsRef<Path>) -> FpResult<Snapshot> {
		let path = path.as_ref();
		let data = tokio::fs::read(path).await?;
		let snapshot: Snapshot = serde_json::from_slice(&data).map_err(|err| {
			warn!("Invalid snapshot file {}: {}", path.display(), err);
			Error::Parse
		})?;
		info!(
			users = snapshot.users.len(),
			titles = snapshot.titles.len(),
			meta = snapshot.meta.len(),
			options = snapshot.options.len(),
			"Loaded snapshot {}",
			path.display()
		);
		Ok(snapshot)
	}

	/// Adds the snapshot's rows, overwriting existing ones with the same key
	pub fn load_snapshot(&self, snapshot: &Snapshot) {
		let mut tables = self.tables.write();
		for user in &snapshot.users {
			tables.users.insert(user.id, user.clone());
		}
		for (id, title) in &snapshot.titles {
			tables.titles.insert(*id, title.clone());
		}
		for entry in &snapshot.meta {
			tables
				.meta
				.entry(entry.content_id)
				.or_default()
				.insert(entry.key.as_str().into(), entry.value.clone());
		}
		for (key, value) in &snapshot.options {
			tables.options.insert(key.as_str().into(), value.clone());
		}
	}

	pub fn add_user(&self, user: User) {
		self.tables.write().users.insert(user.id, user);
	}

	pub fn set_meta(&self, content_id: ContentId, key: &str, value: &str) {
		let mut tables = self.tables.write();
		tables.meta.entry(content_id).or_default().insert(key.into(), value.to_string());
	}

	pub fn set_option(&self, key: &str, value: SettingValue) {
		self.tables.write().options.insert(key.into(), value);
	}

	pub fn remove_option(&self, key: &str) -> Option<SettingValue> {
		self.tables.write().options.remove(key)
	}

	pub fn set_title(&self, content_id: ContentId, title: &str) {
		self.tables.write().titles.insert(content_id, title.to_string());
	}
}

#[async_trait]
impl UserDirectory for MemoryStore {
	async fn read_user(&self, user_id: u64) -> FpResult<Option<User>> {
		Ok(self.tables.read().users.get(&user_id).cloned())
	}
}

#[async_trait]
impl MetadataStore for MemoryStore {
	async fn read_meta(&self, content_id: ContentId, key: &str) -> FpResult<Option<String>> {
		Ok(self.tables.read().meta.get(&content_id).and_then(|meta| meta.get(key)).cloned())
	}
}

#[async_trait]
impl OptionsStore for MemoryStore {
	async fn read_option(&self, key: &str) -> FpResult<Option<SettingValue>> {
		Ok(self.tables.read().options.get(key).cloned())
	}
}

#[async_trait]
impl TitleResolver for MemoryStore {
	async fn read_title(&self, content_id: ContentId) -> FpResult<Option<String>> {
		Ok(self.tables.read().titles.get(&content_id).cloned())
	}
}

// vim: ts=4
