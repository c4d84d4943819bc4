use strfmt_formats::FormatError;
use thiserror::Error;

/// Errors from [`FormatStore::parse`](crate::FormatStore::parse) and the decode hook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// No format is registered under the given name.
	#[error("unknown format name: {0}")]
	UnknownFormat(String),
	/// The format is known but the text breaks its rules.
	#[error(transparent)]
	Decode(#[from] FormatError),
	/// The format is registered to a different type than the one requested.
	#[error("format {format} is registered as {found}, not {expected}")]
	TypeMismatch {
		format: String,
		expected: &'static str,
		found: &'static str,
	},
}

/// Errors raised while decoding a source map into a typed structure.
#[derive(Error, Debug)]
pub enum DecodeError {
	/// The source value was not a JSON object.
	#[error("expected an object, found {0}")]
	NotAnObject(&'static str),
	/// A required field is absent from the source map.
	#[error("missing field {0:?}")]
	MissingField(String),
	/// A registered format rejected the field's value.
	#[error("field {field:?}: {source}")]
	Field {
		field: String,
		#[source]
		source: ParseError,
	},
	/// Default conversion of an unformatted value failed.
	#[error("field {field:?}: {source}")]
	Json {
		field: String,
		#[source]
		source: serde_json::Error,
	},
	/// The value does not have the shape the field declares.
	#[error("field {field:?}: expected {expected}")]
	TypeMismatch { field: String, expected: &'static str },
}

impl DecodeError {
	/// Name of the field the error is attributed to, if any.
	pub fn field(&self) -> Option<&str> {
		match self {
			Self::NotAnObject(_) => None,
			Self::MissingField(field) | Self::Field { field, .. } | Self::Json { field, .. } | Self::TypeMismatch { field, .. } => Some(field),
		}
	}
}
