//! Common types used throughout forumpush.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt;

use crate::utils::intval;

// ContentId //
//***********//
/// Identifier of a forum, topic or reply in the hosting content store.
///
/// Zero means "no content" (a missing parent reference, an unset metadata value).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

impl ContentId {
	/// Returns `None` for the zero id.
	pub fn non_zero(self) -> Option<ContentId> {
		if self.0 == 0 { None } else { Some(self) }
	}
}

impl fmt::Display for ContentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u64> for ContentId {
	fn from(id: u64) -> Self {
		ContentId(id)
	}
}

// EntityRole //
//************//
/// Abstract role of an entity in the section → topic → reply hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityRole {
	/// Top-level container (forum)
	Section,
	/// Thread-starting item (topic)
	Post,
	/// Response to a topic or to another reply
	Comment,
}

impl EntityRole {
	pub fn as_str(&self) -> &'static str {
		match self {
			EntityRole::Section => "section",
			EntityRole::Post => "post",
			EntityRole::Comment => "comment",
		}
	}
}

impl fmt::Display for EntityRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

// ContentKind //
//*************//
/// Closed classification of a content item, decided once when the item is ingested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
	Post,
	Comment,
	Other,
}

impl ContentKind {
	/// True for the two kinds that can trigger notifications.
	pub fn is_recognized(self) -> bool {
		matches!(self, ContentKind::Post | ContentKind::Comment)
	}
}

// ContentStatus //
//***************//
pub const STATUS_PUBLISHED: &str = "publish";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentStatus {
	Published,
	Other(Box<str>),
}

impl ContentStatus {
	pub fn is_published(&self) -> bool {
		matches!(self, ContentStatus::Published)
	}

	pub fn as_str(&self) -> &str {
		match self {
			ContentStatus::Published => STATUS_PUBLISHED,
			ContentStatus::Other(s) => s,
		}
	}
}

impl From<String> for ContentStatus {
	fn from(s: String) -> Self {
		if s == STATUS_PUBLISHED { ContentStatus::Published } else { ContentStatus::Other(s.into()) }
	}
}

impl From<&str> for ContentStatus {
	fn from(s: &str) -> Self {
		ContentStatus::from(s.to_string())
	}
}

impl From<ContentStatus> for String {
	fn from(status: ContentStatus) -> Self {
		status.as_str().to_string()
	}
}

// ContentRecord //
//***************//
/// Raw content as delivered by the event source, before classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
	pub id: ContentId,
	#[serde(rename = "type")]
	pub typ: Box<str>,
	#[serde(default)]
	pub author_id: u64,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub raw_content: String,
	pub status: ContentStatus,
	#[serde(default)]
	pub parent_id: ContentId,
}

// ContentItem //
//*************//
/// A classified topic or reply snapshot.
///
/// Built from a [`ContentRecord`] by [`crate::entity::EntityTypeMap::classify`]; the
/// `kind` tag is the only thing downstream code switches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
	pub id: ContentId,
	pub kind: ContentKind,
	/// Concrete type id this item was stored with
	pub type_id: Box<str>,
	/// Zero for anonymous authorship
	pub author_id: u64,
	pub title: String,
	pub raw_content: String,
	pub status: ContentStatus,
	/// Section for a topic, containing topic for a reply
	pub parent_id: ContentId,
}

impl ContentItem {
	pub fn is_anonymous(&self) -> bool {
		self.author_id == 0
	}
}

// Save events //
//*************//
/// Which write path produced a save event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOrigin {
	/// Normal user-facing publish
	Interactive,
	/// Programmatic / REST API write
	Api,
}

/// "Content saved" event as emitted by the hosting system.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSaveEvent {
	pub content_id: ContentId,
	pub content: ContentRecord,
	#[serde(default)]
	pub is_update: bool,
	#[serde(default)]
	pub is_autosave: bool,
	#[serde(default)]
	pub is_revision: bool,
	/// `None` when the runtime cannot tell where the write came from
	pub origin: Option<WriteOrigin>,
}

/// Save event carrying a classified item.
#[derive(Clone, Debug)]
pub struct SaveEvent {
	pub content_id: ContentId,
	pub content: ContentItem,
	pub is_update: bool,
	pub is_autosave: bool,
	pub is_revision: bool,
	pub origin: Option<WriteOrigin>,
}

// Users //
//*******//
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: u64,
	pub display_name: String,
}

// Outputs //
//*********//
/// Entity that should receive a notification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTarget {
	pub role: EntityRole,
	/// Concrete type id for `role`
	pub entity_type: Box<str>,
	pub entity_id: ContentId,
}

/// Structured push notification payload.
///
/// Field names on the wire follow the format existing push clients consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
	pub id: ContentId,
	pub username: String,
	pub user_id: u64,
	pub title: String,
	pub content: String,
	#[serde(rename = "post__title")]
	pub parent_post_title: String,
	#[serde(rename = "section__title")]
	pub parent_section_title: String,
}

// SettingValue //
//**************//
/// Site option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from SettingDefinition
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
	Json(serde_json::Value),
}

impl SettingValue {
	/// Loose boolean reading, as options stored as text are read by the forum itself.
	///
	/// `""`, `"0"`, `0`, `null`, empty arrays/objects are false.
	pub fn as_bool(&self) -> bool {
		match self {
			SettingValue::Bool(b) => *b,
			SettingValue::Int(i) => *i != 0,
			SettingValue::String(s) => !(s.is_empty() || s == "0"),
			SettingValue::Json(v) => match v {
				serde_json::Value::Null => false,
				serde_json::Value::Bool(b) => *b,
				serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
				serde_json::Value::String(s) => !(s.is_empty() || s == "0"),
				serde_json::Value::Array(a) => !a.is_empty(),
				serde_json::Value::Object(o) => !o.is_empty(),
			},
		}
	}

	/// Loose integer reading: strings use their leading integer, bools are 0/1.
	pub fn as_int(&self) -> i64 {
		match self {
			SettingValue::Bool(b) => i64::from(*b),
			SettingValue::Int(i) => *i,
			SettingValue::String(s) => intval(s),
			SettingValue::Json(v) => match v {
				serde_json::Value::Bool(b) => i64::from(*b),
				serde_json::Value::Number(n) => n.as_i64().unwrap_or(0),
				serde_json::Value::String(s) => intval(s),
				_ => 0,
			},
		}
	}
}


// vim: ts=4
