//! Notification pipeline
//!
//! Wires the insertion gate, classifier, extractor and target resolver together and
//! hands the result to the delivery collaborator. One call handles one save event;
//! all lookups are awaited one after another.

use std::sync::Arc;

use serde::Serialize;

use forumpush_types::adapter::{
	ContentSanitizer, DeliveryService, Localizer, MetadataStore, OptionsStore, TitleResolver,
	UserDirectory,
};
use forumpush_types::entity::EntityTypeMap;
use forumpush_types::meta_keys;
use forumpush_types::types::{RawSaveEvent, SaveEvent};

use crate::classify;
use crate::gate::{self, GateDecision, RejectReason};
use crate::message::MessageExtractor;
use crate::prelude::*;
use crate::settings::{self, Options, SettingsRegistry};
use crate::targets;
use crate::text::{IdentityLocalizer, PlainTextSanitizer};
use crate::threading::ThreadingConfig;

/// Collaborators the pipeline reads from and delivers to
#[derive(Debug, Clone)]
pub struct Adapters {
	pub users: Arc<dyn UserDirectory>,
	pub meta: Arc<dyn MetadataStore>,
	pub options: Arc<dyn OptionsStore>,
	pub titles: Arc<dyn TitleResolver>,
	pub delivery: Arc<dyn DeliveryService>,
	pub localizer: Arc<dyn Localizer>,
	pub sanitizer: Arc<dyn ContentSanitizer>,
}

/// A resolved notification, as handed to delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
	pub payload: NotificationPayload,
	pub targets: Vec<SubscriptionTarget>,
}

/// What happened to a save event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Turned away by the insertion gate
	Rejected(RejectReason),
	/// Not a published topic or reply
	Ineligible,
	/// Push notifications are switched off for the site
	Disabled,
	/// Nothing in the hierarchy to notify
	NoTargets,
	/// Handed to delivery
	Dispatched(Dispatch),
}

impl Outcome {
	pub fn dispatch(&self) -> Option<&Dispatch> {
		match self {
			Outcome::Dispatched(dispatch) => Some(dispatch),
			_ => None,
		}
	}
}

pub struct PipelineBuilder {
	entity_types: EntityTypeMap,
	users: Option<Arc<dyn UserDirectory>>,
	meta: Option<Arc<dyn MetadataStore>>,
	options: Option<Arc<dyn OptionsStore>>,
	titles: Option<Arc<dyn TitleResolver>>,
	delivery: Option<Arc<dyn DeliveryService>>,
	localizer: Arc<dyn Localizer>,
	sanitizer: Arc<dyn ContentSanitizer>,
}

impl PipelineBuilder {
	pub fn new() -> Self {
		PipelineBuilder {
			entity_types: EntityTypeMap::default(),
			users: None,
			meta: None,
			options: None,
			titles: None,
			delivery: None,
			localizer: Arc::new(IdentityLocalizer),
			sanitizer: Arc::new(PlainTextSanitizer),
		}
	}

	pub fn entity_types(&mut self, entity_types: EntityTypeMap) -> &mut Self {
		self.entity_types = entity_types;
		self
	}

	// Adapters
	pub fn users(&mut self, users: Arc<dyn UserDirectory>) -> &mut Self {
		self.users = Some(users);
		self
	}
	pub fn meta(&mut self, meta: Arc<dyn MetadataStore>) -> &mut Self {
		self.meta = Some(meta);
		self
	}
	pub fn options(&mut self, options: Arc<dyn OptionsStore>) -> &mut Self {
		self.options = Some(options);
		self
	}
	pub fn titles(&mut self, titles: Arc<dyn TitleResolver>) -> &mut Self {
		self.titles = Some(titles);
		self
	}
	pub fn delivery(&mut self, delivery: Arc<dyn DeliveryService>) -> &mut Self {
		self.delivery = Some(delivery);
		self
	}
	pub fn localizer(&mut self, localizer: Arc<dyn Localizer>) -> &mut Self {
		self.localizer = localizer;
		self
	}
	pub fn sanitizer(&mut self, sanitizer: Arc<dyn ContentSanitizer>) -> &mut Self {
		self.sanitizer = sanitizer;
		self
	}

	pub fn build(&self) -> FpResult<NotificationPipeline> {
		let Some(users) = self.users.clone() else {
			error!("No user directory configured");
			return Err(Error::ConfigError("No user directory configured".into()));
		};
		let Some(meta) = self.meta.clone() else {
			error!("No metadata store configured");
			return Err(Error::ConfigError("No metadata store configured".into()));
		};
		let Some(options) = self.options.clone() else {
			error!("No options store configured");
			return Err(Error::ConfigError("No options store configured".into()));
		};
		let Some(titles) = self.titles.clone() else {
			error!("No title resolver configured");
			return Err(Error::ConfigError("No title resolver configured".into()));
		};
		let Some(delivery) = self.delivery.clone() else {
			error!("No delivery service configured");
			return Err(Error::ConfigError("No delivery service configured".into()));
		};

		let mut registry = SettingsRegistry::new();
		settings::register_settings(&mut registry)?;
		let options_reader = Options::new(Arc::new(registry.freeze()), options.clone());

		Ok(NotificationPipeline {
			entity_types: self.entity_types.clone(),
			options: options_reader,
			adapters: Adapters {
				users,
				meta,
				options,
				titles,
				delivery,
				localizer: self.localizer.clone(),
				sanitizer: self.sanitizer.clone(),
			},
		})
	}
}

impl Default for PipelineBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug, Clone)]
pub struct NotificationPipeline {
	entity_types: EntityTypeMap,
	options: Options,
	adapters: Adapters,
}

impl NotificationPipeline {
	pub fn builder() -> PipelineBuilder {
		PipelineBuilder::new()
	}

	/// Classify the content of a raw save event
	pub fn ingest(&self, event: RawSaveEvent) -> SaveEvent {
		self.entity_types.classify_event(event)
	}

	/// Concrete type id of a recognized item, `""` otherwise
	pub fn object_type<'a>(&self, item: &'a ContentItem) -> &'a str {
		classify::object_type(item)
	}

	/// Entry point for the hosting event source
	pub async fn on_raw_content_saved(&self, event: RawSaveEvent) -> FpResult<Outcome> {
		let event = self.ingest(event);
		self.on_content_saved(&event).await
	}

	/// Gate a save event, then process the content if it is a new publication
	pub async fn on_content_saved(&self, event: &SaveEvent) -> FpResult<Outcome> {
		if let GateDecision::Reject(reason) = gate::evaluate(event) {
			debug!(
				content_id = %event.content_id,
				reason = reason.as_str(),
				"Save event rejected"
			);
			return Ok(Outcome::Rejected(reason));
		}

		self.handle_content(&event.content).await
	}

	/// Process content that is known to be newly published
	pub async fn handle_content(&self, item: &ContentItem) -> FpResult<Outcome> {
		if !classify::is_eligible(item) {
			debug!(
				content_id = %item.id,
				type_id = %item.type_id,
				status = %item.status.as_str(),
				"Content not eligible for notification"
			);
			return Ok(Outcome::Ineligible);
		}

		if !self.options.get_bool(meta_keys::OPT_NOTIFY_PUSH).await? {
			debug!(content_id = %item.id, "Push notifications disabled (master switch)");
			return Ok(Outcome::Disabled);
		}

		let Some(dispatch) = self.resolve(item).await? else {
			info!(content_id = %item.id, "No subscription target for content");
			return Ok(Outcome::NoTargets);
		};

		self.adapters.delivery.send(&dispatch.payload, &dispatch.targets).await?;
		info!(
			content_id = %item.id,
			object_type = %self.object_type(item),
			targets = ?dispatch.targets,
			"Push notification dispatched"
		);

		Ok(Outcome::Dispatched(dispatch))
	}

	/// Build payload and targets for an item without delivering
	///
	/// Returns `None` when the item has no target in the hierarchy.
	pub async fn resolve(&self, item: &ContentItem) -> FpResult<Option<Dispatch>> {
		let content_length =
			self.options.get_int(meta_keys::OPT_NOTIFY_PUSH_CONTENT_LENGTH).await?;
		let extractor = MessageExtractor {
			users: self.adapters.users.as_ref(),
			meta: self.adapters.meta.as_ref(),
			titles: self.adapters.titles.as_ref(),
			localizer: self.adapters.localizer.as_ref(),
			sanitizer: self.adapters.sanitizer.as_ref(),
			content_length: usize::try_from(content_length).unwrap_or(0),
		};
		let payload = extractor.extract(item).await?;

		let threading = ThreadingConfig::load(&self.options).await?;
		let targets =
			targets::resolve_targets(self.adapters.meta.as_ref(), &self.entity_types, item, threading)
				.await?;

		if targets.is_empty() {
			return Ok(None);
		}

		Ok(Some(Dispatch { payload, targets }))
	}
}

// vim: ts=4
