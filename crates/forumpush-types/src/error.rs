//! Error type shared by all forumpush crates

use std::fmt;

pub type FpResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Message extraction was called on something that is neither a topic nor a reply.
	/// Holds the concrete type id of the offending item.
	InvalidContentKind(Box<str>),
	ConfigError(String),
	ValidationError(String),
	Parse,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::InvalidContentKind(typ) => {
				write!(f, "invalid content kind for notification: '{}'", typ)
			}
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::debug!("JSON error: {}", err);
		Self::Parse
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_invalid_content_kind() {
		let err = Error::InvalidContentKind("attachment".into());
		assert_eq!(err.to_string(), "invalid content kind for notification: 'attachment'");
	}

	#[test]
	fn test_json_error_maps_to_parse() {
		let res: Result<serde_json::Value, _> = serde_json::from_str("{not json");
		let err: Error = res.unwrap_err().into();
		assert!(matches!(err, Error::Parse));
	}
}

// vim: ts=4
