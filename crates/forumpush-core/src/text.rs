//! Default text collaborators: localization and content sanitizing

use std::collections::HashMap;

use html2text::render::TrivialDecorator;

use forumpush_types::adapter::{ContentSanitizer, Localizer};

use crate::prelude::*;

/// Returns every literal untranslated
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
	fn translate(&self, literal: &str) -> String {
		literal.to_string()
	}
}

/// Fixed translation table; unknown literals pass through
#[derive(Debug, Default, Clone)]
pub struct CatalogLocalizer {
	entries: HashMap<String, String>,
}

impl CatalogLocalizer {
	pub fn with(mut self, literal: impl Into<String>, translation: impl Into<String>) -> Self {
		self.entries.insert(literal.into(), translation.into());
		self
	}
}

impl Localizer for CatalogLocalizer {
	fn translate(&self, literal: &str) -> String {
		self.entries.get(literal).cloned().unwrap_or_else(|| literal.to_string())
	}
}

/// Renders stored markup as plain text and shortens it for a notification
///
/// HTML goes through `html2text` without decorations, so emphasis and links keep only
/// their text and entities are decoded. Whitespace runs are collapsed. Text longer than
/// `max_chars` characters is cut and ends with `…`. A `max_chars` of 0 disables
/// shortening.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextSanitizer;

/// Wide enough that wrapping never splits a word in practice
const RENDER_WIDTH: usize = 4096;

impl ContentSanitizer for PlainTextSanitizer {
	fn sanitize(&self, raw: &str, max_chars: usize) -> String {
		let text = collapse_whitespace(&render_text(raw));
		if max_chars == 0 || text.chars().count() <= max_chars {
			return text;
		}

		let mut short: String = text.chars().take(max_chars).collect();
		short.truncate(short.trim_end().len());
		short.push('…');
		short
	}
}

fn render_text(raw: &str) -> String {
	html2text::config::with_decorator(TrivialDecorator::new())
		.string_from_read(raw.as_bytes(), RENDER_WIDTH)
		.unwrap_or_else(|err| {
			warn!("Rendering content as text failed, using it verbatim: {}", err);
			raw.to_string()
		})
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}


// vim: ts=4
