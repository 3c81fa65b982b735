//! Delivery sinks: one keeps what it was sent, one prints it

use std::fmt;
use std::io::Write;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use forumpush::adapter::DeliveryService;
use forumpush::prelude::*;
use forumpush::types::{NotificationPayload, SubscriptionTarget};

/// One call to [`DeliveryService::send`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentNotification {
	pub payload: NotificationPayload,
	pub targets: Vec<SubscriptionTarget>,
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingDelivery {
	sent: Mutex<Vec<SentNotification>>,
	fail: bool,
}

impl RecordingDelivery {
	pub fn new() -> Self {
		Self::default()
	}

	/// A sink whose every send fails
	pub fn failing() -> Self {
		Self { sent: Mutex::default(), fail: true }
	}

	pub fn sent(&self) -> Vec<SentNotification> {
		self.sent.lock().clone()
	}

	pub fn is_empty(&self) -> bool {
		self.sent.lock().is_empty()
	}
}

#[async_trait]
impl DeliveryService for RecordingDelivery {
	async fn send(
		&self,
		payload: &NotificationPayload,
		targets: &[SubscriptionTarget],
	) -> FpResult<()> {
		if self.fail {
			return Err(Error::Internal("delivery unavailable".into()));
		}
		self.sent
			.lock()
			.push(SentNotification { payload: payload.clone(), targets: targets.to_vec() });
		Ok(())
	}
}

/// Writes each notification as a line of JSON
///
/// Writes and flushes synchronously while holding a lock, blocking the calling task.
/// Meant for the current-thread replay binary and tests; on a multi-threaded runtime
/// wrap a real sink in `spawn_blocking` instead.
pub struct LogDelivery<W: Write + Send> {
	out: Mutex<W>,
}

impl<W: Write + Send> LogDelivery<W> {
	pub fn new(out: W) -> Self {
		Self { out: Mutex::new(out) }
	}

	pub fn into_inner(self) -> W {
		self.out.into_inner()
	}
}

impl<W: Write + Send> fmt::Debug for LogDelivery<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LogDelivery").finish_non_exhaustive()
	}
}

#[async_trait]
impl<W: Write + Send> DeliveryService for LogDelivery<W> {
	async fn send(
		&self,
		payload: &NotificationPayload,
		targets: &[SubscriptionTarget],
	) -> FpResult<()> {
		let line = serde_json::to_string(&SentNotification {
			payload: payload.clone(),
			targets: targets.to_vec(),
		})?;

		let mut out = self.out.lock();
		writeln!(out, "{line}")?;
		out.flush()?;

		info!(
			id = %payload.id,
			user_id = payload.user_id,
			targets = targets.len(),
			"Notification sent"
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use forumpush::types::EntityRole;

	fn payload() -> NotificationPayload {
		NotificationPayload {
			id: ContentId(10),
			username: "Alice".into(),
			user_id: 7,
			title: "Hello".into(),
			content: "First post".into(),
			parent_post_title: String::new(),
			parent_section_title: "General".into(),
		}
	}

	fn section_target() -> SubscriptionTarget {
		SubscriptionTarget {
			role: EntityRole::Section,
			entity_type: "forum".into(),
			entity_id: ContentId(3),
		}
	}

	#[tokio::test]
	async fn test_recording_delivery() {
		let delivery = RecordingDelivery::new();
		assert!(delivery.is_empty());

		delivery.send(&payload(), &[section_target()]).await.unwrap();

		let sent = delivery.sent();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].payload.username, "Alice");
		assert_eq!(sent[0].targets, vec![section_target()]);
	}

	#[tokio::test]
	async fn test_failing_delivery() {
		let delivery = RecordingDelivery::failing();
		let res = delivery.send(&payload(), &[section_target()]).await;
		assert!(matches!(res, Err(Error::Internal(_))));
		assert!(delivery.is_empty());
	}

	#[tokio::test]
	async fn test_log_delivery_writes_json_lines() {
		let delivery = LogDelivery::new(Vec::new());
		delivery.send(&payload(), &[section_target()]).await.unwrap();
		delivery.send(&payload(), &[]).await.unwrap();

		let out = String::from_utf8(delivery.into_inner()).unwrap();
		let lines: Vec<&str> = out.lines().collect();
		assert_eq!(lines.len(), 2);

		let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
		assert_eq!(first["payload"]["id"], 10);
		assert_eq!(first["payload"]["section__title"], "General");
		assert_eq!(first["targets"][0]["role"], "section");
		assert_eq!(first["targets"][0]["entityId"], 3);
	}
}

// vim: ts=4
