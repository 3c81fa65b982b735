pub use forumpush_types::error::{Error, FpResult};
pub use forumpush_types::types::{
	ContentId, ContentItem, ContentKind, EntityRole, NotificationPayload, SettingValue,
	SubscriptionTarget,
};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
