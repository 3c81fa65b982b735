pub use crate::error::{Error, FpResult};
pub use crate::types::{ContentId, ContentItem, ContentKind, EntityRole, SettingValue};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
