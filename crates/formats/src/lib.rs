//! Typed string formats.
//!
//! This crate provides the value types a format registry hands out:
//! - [`Format`]: the capability contract every registrable type implements
//! - [`FormatValue`]: object-safe view used when the concrete type is only known at runtime
//! - [`FormatError`]: decode failure for a string that breaks a format's rules
//! - Built-in formats ([`time`], [`ids`], [`net`], [`codes`], [`misc`]) and their validators
//!
//! Every built-in serializes to JSON as its text form and deserializes through
//! [`Format::decode_text`].

use std::any::Any;
use std::fmt;

#[macro_use]
mod macros;

pub mod codes;
mod error;
pub mod ids;
pub mod misc;
pub mod net;
pub mod time;

pub use codes::{CreditCard, Currency, Isbn, Isbn10, Isbn13, Ssn};
pub use error::FormatError;
pub use ids::{ObjectId, Ulid, Uuid, Uuid3, Uuid4, Uuid5};
pub use misc::{Base64, HexColor, Password, RgbColor};
pub use net::{Cidr, Email, Hostname, Ipv4, Ipv6, Mac, Uri};
pub use time::{Date, DateTime, Duration};

#[doc(hidden)]
pub mod __private {
	pub use serde;
}

/// Capability contract for a string format value.
///
/// Implementors are plain values with no identity beyond their content. The
/// [`Default`] instance is the format's zero value.
pub trait Format: fmt::Display + fmt::Debug + Default + Clone + Send + Sync + 'static {
	/// Encodes the value to its canonical text form.
	fn encode_text(&self) -> String {
		self.to_string()
	}

	/// Decodes a value from text.
	fn decode_text(text: &str) -> Result<Self, FormatError>;

	/// Decodes a value found in a loosely-typed source map.
	///
	/// Defaults to [`Format::decode_text`]. Formats whose text decoding is
	/// lenient (e.g. an empty string yielding the zero value) override this to
	/// be strict.
	fn decode_field(text: &str) -> Result<Self, FormatError> {
		Self::decode_text(text)
	}
}

/// Object-safe view over any [`Format`] value.
pub trait FormatValue: Any + fmt::Display + fmt::Debug + Send + Sync {
	/// Text form of the value, as produced by [`Format::encode_text`].
	fn text(&self) -> String;

	/// Short name of the concrete type (e.g. `"DateTime"`).
	fn type_name(&self) -> &'static str;

	fn as_any(&self) -> &dyn Any;

	fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

impl<F: Format> FormatValue for F {
	fn text(&self) -> String {
		Format::encode_text(self)
	}

	fn type_name(&self) -> &'static str {
		short_type_name(std::any::type_name::<F>())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
		self
	}
}

impl dyn FormatValue {
	/// Returns `true` if the value is an `F`.
	pub fn is<F: Format>(&self) -> bool {
		self.as_any().is::<F>()
	}

	/// Borrows the value as an `F`.
	pub fn downcast_ref<F: Format>(&self) -> Option<&F> {
		self.as_any().downcast_ref::<F>()
	}

	/// Unboxes the value as an `F`.
	pub fn downcast<F: Format>(self: Box<Self>) -> Option<F> {
		self.into_any().downcast::<F>().ok().map(|value| *value)
	}
}

/// Strips the module path and generic arguments from a type name.
///
/// `"strfmt_formats::time::Date"` becomes `"Date"`.
pub fn short_type_name(full: &'static str) -> &'static str {
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_type_name_strips_path_and_generics() {
		assert_eq!(short_type_name("strfmt_formats::time::Date"), "Date");
		assert_eq!(short_type_name("Email"), "Email");
		assert_eq!(short_type_name("my_crate::Wrapper<alloc::string::String>"), "Wrapper");
	}

	#[test]
	fn format_value_downcasts() {
		let value: Box<dyn FormatValue> = Box::new(Email::new("a@b.org"));
		assert!(value.is::<Email>());
		assert!(!value.is::<Hostname>());
		assert_eq!(value.type_name(), "Email");
		assert_eq!(value.text(), "a@b.org");
		assert_eq!(value.downcast_ref::<Email>().map(Email::as_str), Some("a@b.org"));
		assert_eq!(value.downcast::<Email>(), Some(Email::new("a@b.org")));
	}

	#[test]
	fn downcast_to_wrong_type_is_none() {
		let value: Box<dyn FormatValue> = Box::new(Ssn::new("111-11-1111"));
		assert!(value.downcast::<Email>().is_none());
	}
}
