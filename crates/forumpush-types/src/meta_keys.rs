//! Metadata and option keys read from the hosting forum.
//!
//! The values are the keys the forum plugin stores, so they must not be renamed.

/// Display name left by an anonymous poster
pub const ANONYMOUS_NAME: &str = "_bbp_anonymous_name";

/// Id of the topic a reply (or topic) belongs to
pub const TOPIC_ID: &str = "_bbp_topic_id";

/// Id of the forum a reply or topic belongs to
pub const FORUM_ID: &str = "_bbp_forum_id";

/// Id of the reply this reply answers; 0 or absent when it answers the topic
pub const REPLY_TO: &str = "_bbp_reply_to";

/// Site option: threaded replies enabled
pub const OPT_THREAD_REPLIES: &str = "_bbp_thread_replies";

/// Site option: maximum thread depth
pub const OPT_THREAD_REPLIES_DEPTH: &str = "_bbp_thread_replies_depth";

/// Site option: push notification master switch
pub const OPT_NOTIFY_PUSH: &str = "notify.push";

/// Site option: maximum characters of content carried in a payload
pub const OPT_NOTIFY_PUSH_CONTENT_LENGTH: &str = "notify.push.content_length";

// vim: ts=4
