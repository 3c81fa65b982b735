//! Insertion gate for content save events
//!
//! The hosting forum reports every save: edits, autosaves, revision snapshots and API
//! writes included. Only the first interactive publication of a topic or reply is
//! worth a notification. Each event is judged on its own; nothing is remembered
//! between calls.

use forumpush_types::types::{SaveEvent, WriteOrigin};

/// Why an event was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
	/// Edit of existing content
	Update,
	/// Neither a topic nor a reply
	UnrecognizedKind,
	Autosave,
	Revision,
	/// Written through the programmatic API
	ApiOrigin,
}

impl RejectReason {
	pub fn as_str(&self) -> &'static str {
		match self {
			RejectReason::Update => "update",
			RejectReason::UnrecognizedKind => "unrecognized_kind",
			RejectReason::Autosave => "autosave",
			RejectReason::Revision => "revision",
			RejectReason::ApiOrigin => "api_origin",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
	Accept,
	Reject(RejectReason),
}

impl GateDecision {
	pub fn is_accept(self) -> bool {
		matches!(self, GateDecision::Accept)
	}
}

/// Judge a save event
///
/// An unknown origin (`None`) skips the API check rather than rejecting.
pub fn evaluate(event: &SaveEvent) -> GateDecision {
	let reason = if event.is_update {
		RejectReason::Update
	} else if !event.content.kind.is_recognized() {
		RejectReason::UnrecognizedKind
	} else if event.is_autosave {
		RejectReason::Autosave
	} else if event.is_revision {
		RejectReason::Revision
	} else if event.origin == Some(WriteOrigin::Api) {
		RejectReason::ApiOrigin
	} else {
		return GateDecision::Accept;
	};

	GateDecision::Reject(reason)
}

/// True if the event is a new publication to process
pub fn accept(event: &SaveEvent) -> bool {
	evaluate(event).is_accept()
}


// vim: ts=4
