//! Content eligibility checks

use crate::prelude::*;

/// Check if a content item can trigger a notification
///
/// Only published topics and replies qualify. Anything else is silently skipped.
pub fn is_eligible(item: &ContentItem) -> bool {
	item.kind.is_recognized() && item.status.is_published()
}

/// Concrete type id of a recognized item, or `""` for anything else
pub fn object_type(item: &ContentItem) -> &str {
	match item.kind {
		ContentKind::Post | ContentKind::Comment => &item.type_id,
		ContentKind::Other => "",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use forumpush_types::types::ContentStatus;

	fn item(kind: ContentKind, type_id: &str, status: &str) -> ContentItem {
		ContentItem {
			id: ContentId(1),
			kind,
			type_id: type_id.into(),
			author_id: 1,
			title: String::new(),
			raw_content: String::new(),
			status: ContentStatus::from(status),
			parent_id: ContentId(0),
		}
	}

	#[test]
	fn test_is_eligible() {
		assert!(is_eligible(&item(ContentKind::Post, "topic", "publish")));
		assert!(is_eligible(&item(ContentKind::Comment, "reply", "publish")));
		assert!(!is_eligible(&item(ContentKind::Post, "topic", "draft")));
		assert!(!is_eligible(&item(ContentKind::Comment, "reply", "pending")));
		assert!(!is_eligible(&item(ContentKind::Other, "page", "publish")));
	}

	#[test]
	fn test_object_type() {
		assert_eq!(object_type(&item(ContentKind::Post, "topic", "publish")), "topic");
		assert_eq!(object_type(&item(ContentKind::Comment, "reply", "draft")), "reply");
		assert_eq!(object_type(&item(ContentKind::Other, "page", "publish")), "");
	}
}

// vim: ts=4
