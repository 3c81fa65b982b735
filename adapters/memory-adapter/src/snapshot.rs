//! Serializable snapshot of a forum store

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use forumpush::entity::EntityTypeMap;
use forumpush::types::{ContentId, SettingValue, User};

/// One metadata row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaEntry {
	pub content_id: ContentId,
	pub key: String,
	pub value: String,
}

/// Everything the notification core reads from a forum, in one JSON document
///
/// ```json
/// {
///   "entityTypes": {"section": "forum", "post": "topic", "comment": "reply"},
///   "users": [{"id": 7, "displayName": "Alice"}],
///   "titles": {"3": "General", "10": "Hello"},
///   "meta": [{"contentId": 55, "key": "_bbp_reply_to", "value": "42"}],
///   "options": {"_bbp_thread_replies": true, "_bbp_thread_replies_depth": 3}
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
	pub entity_types: EntityTypeMap,
	pub users: Vec<User>,
	pub titles: HashMap<ContentId, String>,
	pub meta: Vec<MetaEntry>,
	pub options: HashMap<String, SettingValue>,
}

// vim: ts=4
