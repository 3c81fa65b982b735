//! Site options used by the notification core
//!
//! Options are declared once in a [`SettingsRegistry`] with their defaults, then the
//! registry is frozen and read through [`Options`], which resolves a key as
//! stored value → registered default.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use forumpush_types::adapter::OptionsStore;
use forumpush_types::meta_keys;

use crate::prelude::*;

/// Type alias for setting validator function
pub type SettingValidator = Box<dyn Fn(&SettingValue) -> FpResult<()> + Send + Sync>;

/// Setting definition - defines metadata for each option
pub struct SettingDefinition {
	/// Option key as stored by the forum
	pub key: String,

	/// Human-readable description
	pub description: String,

	/// Value used when the option was never stored
	/// If None, reading an unset option is a configuration error
	pub default: Option<SettingValue>,

	/// Optional validation function, applied to stored values
	pub validator: Option<SettingValidator>,
}

impl Debug for SettingDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingDefinition")
			.field("key", &self.key)
			.field("description", &self.description)
			.field("default", &self.default)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}
}

/// Builder for SettingDefinition with fluent API
pub struct SettingDefinitionBuilder {
	key: String,
	description: Option<String>,
	default: Option<SettingValue>,
	validator: Option<SettingValidator>,
}

impl SettingDefinitionBuilder {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into(), description: None, default: None, validator: None }
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the default value
	pub fn default(mut self, value: SettingValue) -> Self {
		self.default = Some(value);
		self
	}

	/// Set a validation function
	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&SettingValue) -> FpResult<()> + Send + Sync + 'static,
	{
		self.validator = Some(Box::new(f));
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> FpResult<SettingDefinition> {
		let description = self
			.description
			.ok_or_else(|| Error::ConfigError("Setting description is required".into()))?;

		if let (Some(default), Some(validator)) = (&self.default, &self.validator) {
			validator(default).map_err(|e| {
				Error::ConfigError(format!("Default of '{}' fails validation: {}", self.key, e))
			})?;
		}

		Ok(SettingDefinition {
			key: self.key,
			description,
			default: self.default,
			validator: self.validator,
		})
	}
}

/// Mutable registry used while the pipeline is being built
pub struct SettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self { definitions: HashMap::new() }
	}

	/// Register a new setting definition
	pub fn register(&mut self, def: SettingDefinition) -> FpResult<()> {
		if self.definitions.contains_key(&def.key) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.key)));
		}

		debug!("Registering setting: {}", def.key);
		self.definitions.insert(def.key.clone(), def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		debug!("Freezing settings registry with {} definitions", self.definitions.len());
		FrozenSettingsRegistry { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl Default for SettingsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry shared by the pipeline
#[derive(Debug)]
pub struct FrozenSettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
}

impl FrozenSettingsRegistry {
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		self.definitions.get(key)
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Register the options the notification core reads
pub fn register_settings(registry: &mut SettingsRegistry) -> FpResult<()> {
	// Threaded replies
	registry.register(
		SettingDefinition::builder(meta_keys::OPT_THREAD_REPLIES)
			.description("Allow replies to be nested under other replies")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	// Thread depth; 1 means no visible nesting
	registry.register(
		SettingDefinition::builder(meta_keys::OPT_THREAD_REPLIES_DEPTH)
			.description("Maximum depth of threaded replies")
			.default(SettingValue::Int(2))
			.build()?,
	)?;

	// Master switch
	registry.register(
		SettingDefinition::builder(meta_keys::OPT_NOTIFY_PUSH)
			.description("Enable push notifications for new topics and replies")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(meta_keys::OPT_NOTIFY_PUSH_CONTENT_LENGTH)
			.description("Maximum number of characters of content in a notification")
			.default(SettingValue::Int(100))
			.validator(|value| {
				if value.as_int() > 0 {
					Ok(())
				} else {
					Err(Error::ValidationError("content length must be positive".into()))
				}
			})
			.build()?,
	)?;

	Ok(())
}

/// Option reader - resolves stored values against registered defaults
#[derive(Debug, Clone)]
pub struct Options {
	registry: Arc<FrozenSettingsRegistry>,
	store: Arc<dyn OptionsStore>,
}

impl Options {
	pub fn new(registry: Arc<FrozenSettingsRegistry>, store: Arc<dyn OptionsStore>) -> Self {
		Self { registry, store }
	}

	/// Get an option value (stored -> default)
	///
	/// Stored values failing the definition's validator are ignored in favor of the
	/// default.
	pub async fn get(&self, key: &str) -> FpResult<SettingValue> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Some(value) = self.store.read_option(key).await? {
			match &def.validator {
				Some(validator) => match validator(&value) {
					Ok(()) => return Ok(value),
					Err(e) => warn!(key = %key, error = %e, "Ignoring invalid stored option"),
				},
				None => return Ok(value),
			}
		}

		def.default.clone().ok_or_else(|| {
			Error::ConfigError(format!("Setting '{}' has no default and must be configured", key))
		})
	}

	pub async fn get_bool(&self, key: &str) -> FpResult<bool> {
		Ok(self.get(key).await?.as_bool())
	}

	pub async fn get_int(&self, key: &str) -> FpResult<i64> {
		Ok(self.get(key).await?.as_int())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use forumpush_memory_adapter::MemoryStore;

	fn options(store: MemoryStore) -> Options {
		let mut registry = SettingsRegistry::new();
		register_settings(&mut registry).unwrap();
		Options::new(Arc::new(registry.freeze()), Arc::new(store))
	}

	#[test]
	fn test_register_duplicate() {
		let mut registry = SettingsRegistry::new();
		register_settings(&mut registry).unwrap();
		assert_eq!(registry.len(), 4);
		assert!(register_settings(&mut registry).is_err());
	}

	#[test]
	fn test_frozen_registry_lookup() {
		let mut registry = SettingsRegistry::new();
		register_settings(&mut registry).unwrap();
		let frozen = registry.freeze();

		assert_eq!(frozen.len(), 4);
		assert!(!frozen.is_empty());
		let def = frozen.get(meta_keys::OPT_NOTIFY_PUSH).expect("registered");
		assert_eq!(def.default, Some(SettingValue::Bool(true)));
		assert!(def.validator.is_none());
		let def = frozen.get(meta_keys::OPT_NOTIFY_PUSH_CONTENT_LENGTH).expect("registered");
		assert!(def.validator.is_some());
		assert!(frozen.get("unknown").is_none());
	}

	#[test]
	fn test_builder_requires_description() {
		let res = SettingDefinition::builder("x").default(SettingValue::Bool(true)).build();
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_builder_validates_default() {
		let res = SettingDefinition::builder("x")
			.description("x")
			.default(SettingValue::Int(0))
			.validator(|v| {
				if v.as_int() > 0 { Ok(()) } else { Err(Error::ValidationError("zero".into())) }
			})
			.build();
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[tokio::test]
	async fn test_defaults() {
		let opts = options(MemoryStore::new());
		assert!(!opts.get_bool(meta_keys::OPT_THREAD_REPLIES).await.unwrap());
		assert_eq!(opts.get_int(meta_keys::OPT_THREAD_REPLIES_DEPTH).await.unwrap(), 2);
		assert!(opts.get_bool(meta_keys::OPT_NOTIFY_PUSH).await.unwrap());
		assert_eq!(opts.get_int(meta_keys::OPT_NOTIFY_PUSH_CONTENT_LENGTH).await.unwrap(), 100);
	}

	#[tokio::test]
	async fn test_stored_values_win() {
		let store = MemoryStore::new();
		store.set_option(meta_keys::OPT_THREAD_REPLIES, SettingValue::String("1".into()));
		store.set_option(meta_keys::OPT_THREAD_REPLIES_DEPTH, SettingValue::String("5".into()));
		let opts = options(store);
		assert!(opts.get_bool(meta_keys::OPT_THREAD_REPLIES).await.unwrap());
		assert_eq!(opts.get_int(meta_keys::OPT_THREAD_REPLIES_DEPTH).await.unwrap(), 5);
	}

	#[tokio::test]
	async fn test_invalid_stored_value_falls_back() {
		let store = MemoryStore::new();
		store.set_option(meta_keys::OPT_NOTIFY_PUSH_CONTENT_LENGTH, SettingValue::Int(-4));
		let opts = options(store);
		assert_eq!(opts.get_int(meta_keys::OPT_NOTIFY_PUSH_CONTENT_LENGTH).await.unwrap(), 100);
	}

	#[tokio::test]
	async fn test_unknown_key() {
		let opts = options(MemoryStore::new());
		assert!(matches!(opts.get("nope").await, Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
