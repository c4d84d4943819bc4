use thiserror::Error;

/// Errors raised while decoding a format value from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
	/// The text does not satisfy the format's parsing rules.
	#[error("invalid {format} {value:?}: {reason}")]
	Invalid {
		/// Format being decoded (e.g. "date-time").
		format: &'static str,
		/// Offending input.
		value: String,
		/// What was wrong with it.
		reason: String,
	},
	/// An empty string was given where the format requires content.
	#[error("empty string is an invalid {format} format")]
	Empty {
		/// Format being decoded.
		format: &'static str,
	},
}

impl FormatError {
	/// Builds an [`FormatError::Invalid`] for `value`.
	pub fn invalid(format: &'static str, value: &str, reason: impl Into<String>) -> Self {
		Self::Invalid {
			format,
			value: value.to_string(),
			reason: reason.into(),
		}
	}

	/// Returns the name of the format that failed to decode.
	pub fn format(&self) -> &'static str {
		match self {
			Self::Invalid { format, .. } | Self::Empty { format } => format,
		}
	}
}
