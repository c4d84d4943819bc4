//! Decoding loosely-typed maps into typed structures.
//!
//! [`DecodeHook`] is the per-field adapter: given the declared type of a target
//! field and the source value, it either produces a typed format value or
//! hands the value back for default conversion. [`FieldDecoder`] drives it over
//! a JSON object, and [`Decode`] is implemented by target structures, usually
//! through [`impl_decode!`](crate::impl_decode).
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Default)]
//! struct Layout {
//!     created: DateTime,
//!     id: Uuid4,
//!     label: String,
//! }
//!
//! impl_decode!(Layout { created, id as "uuid4", label });
//!
//! let layout: Layout = store.decode(json!({"created": "2014-12-15T19:30:20Z", "uuid4": "..."}))?;
//! ```

use std::any::{Any, TypeId, type_name};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use strfmt_formats::FormatValue;

use crate::FormatStore;
use crate::entry::{Routine, Shape};
use crate::error::{DecodeError, ParseError};


/// Outcome of running the hook on one field.
#[derive(Debug)]
pub enum Hooked {
	/// No format applies; convert the value the default way.
	Passthrough(Value),
	/// The value was decoded by the format registered for the target type.
	Typed(Box<dyn FormatValue>),
	/// The target is `Option<F>` or `Vec<F>` for a registered `F`, and every
	/// contained string was decoded by `F`'s format.
	Wrapped(Box<dyn Any + Send>),
}

/// Per-field decode adapter bound to a store.
#[derive(Clone, Copy)]
pub struct DecodeHook<'a> {
	store: &'a FormatStore,
}

impl<'a> DecodeHook<'a> {
	pub fn new(store: &'a FormatStore) -> Self {
		Self { store }
	}

	/// Decodes `value` for a field whose declared type is `target`.
	///
	/// Non-string values and targets without a registered format pass through
	/// untouched. A string aimed at a registered type is decoded by that
	/// type's field routine, and its failure is the field's failure.
	///
	/// `Option<F>` and `Vec<F>` targets are decoded the same way when `F` is
	/// registered: a string becomes `Some`, an array of strings is decoded
	/// element by element. Any other source value passes through.
	pub fn apply(&self, target: TypeId, value: Value) -> Result<Hooked, ParseError> {
		if let Some((key, decode)) = self.store.decoder_for(target) {
			return match value {
				Value::String(text) => run(&key, &decode, &text).map(Hooked::Typed),
				other => Ok(Hooked::Passthrough(other)),
			};
		}
		let Some(shaped) = self.store.shaped_decoder_for(target) else {
			return Ok(Hooked::Passthrough(value));
		};
		let values = match (shaped.shape, value) {
			(Shape::Optional, Value::String(text)) => vec![run(&shaped.key, &shaped.decode, &text)?],
			(Shape::List, Value::Array(items)) if items.iter().all(Value::is_string) => items
				.iter()
				.filter_map(Value::as_str)
				.map(|text| run(&shaped.key, &shaped.decode, text))
				.collect::<Result<Vec<_>, _>>()?,
			(_, other) => return Ok(Hooked::Passthrough(other)),
		};
		Ok(Hooked::Wrapped((shaped.wrap)(shaped.shape, values)))
	}

	/// [`DecodeHook::apply`] with the target given as a type parameter.
	pub fn apply_to<T: 'static>(&self, value: Value) -> Result<Hooked, ParseError> {
		self.apply(TypeId::of::<T>(), value)
	}
}

fn run(key: &str, decode: &Routine, text: &str) -> Result<Box<dyn FormatValue>, ParseError> {
	decode(text).map_err(|error| {
		tracing::trace!(format = %key, %error, "field value rejected");
		error.into()
	})
}

/// A structure that can be decoded field by field.
pub trait Decode: Sized {
	fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError>;
}

/// Pulls typed fields out of a source object through a [`DecodeHook`].
pub struct FieldDecoder<'a> {
	hook: DecodeHook<'a>,
	source: Map<String, Value>,
}

impl<'a> FieldDecoder<'a> {
	pub fn new(hook: DecodeHook<'a>, source: Map<String, Value>) -> Self {
		Self { hook, source }
	}

	/// Decodes a field that must be present.
	pub fn required<T: DeserializeOwned + 'static>(&mut self, field: &str) -> Result<T, DecodeError> {
		self.optional(field)?.ok_or_else(|| DecodeError::MissingField(field.to_string()))
	}

	/// Decodes a field that may be absent or `null`.
	pub fn optional<T: DeserializeOwned + 'static>(&mut self, field: &str) -> Result<Option<T>, DecodeError> {
		match self.source.remove(field) {
			None | Some(Value::Null) => Ok(None),
			Some(value) => self.convert(field, value).map(Some),
		}
	}

	/// Decodes a field, leaving the zero value when it is absent or `null`.
	pub fn or_default<T: DeserializeOwned + Default + 'static>(&mut self, field: &str) -> Result<T, DecodeError> {
		Ok(self.optional(field)?.unwrap_or_default())
	}

	/// Decodes a nested object field with its own [`Decode`] impl.
	pub fn nested<T: Decode>(&mut self, field: &str) -> Result<Option<T>, DecodeError> {
		match self.source.remove(field) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::Object(map)) => T::decode(&mut FieldDecoder::new(self.hook, map)).map(Some),
			Some(_) => Err(DecodeError::TypeMismatch {
				field: field.to_string(),
				expected: "object",
			}),
		}
	}

	/// Source keys no field has consumed yet.
	pub fn unused(&self) -> impl Iterator<Item = &str> {
		self.source.keys().map(String::as_str)
	}

	fn convert<T: DeserializeOwned + 'static>(&self, field: &str, value: Value) -> Result<T, DecodeError> {
		let hooked = self.hook.apply_to::<T>(value).map_err(|source| DecodeError::Field {
			field: field.to_string(),
			source,
		})?;
		match hooked {
			Hooked::Typed(value) => value
				.into_any()
				.downcast::<T>()
				.map(|value| *value)
				.map_err(|_| DecodeError::TypeMismatch {
					field: field.to_string(),
					expected: type_name::<T>(),
				}),
			Hooked::Wrapped(value) => value
				.downcast::<T>()
				.map(|value| *value)
				.map_err(|_| DecodeError::TypeMismatch {
					field: field.to_string(),
					expected: type_name::<T>(),
				}),
			Hooked::Passthrough(value) => serde_json::from_value(value).map_err(|source| DecodeError::Json {
				field: field.to_string(),
				source,
			}),
		}
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

impl FormatStore {
	pub fn decode_hook(&self) -> DecodeHook<'_> {
		DecodeHook::new(self)
	}

	/// Decodes a JSON object into `T`, running registered formats on its fields.
	pub fn decode<T: Decode>(&self, value: Value) -> Result<T, DecodeError> {
		match value {
			Value::Object(map) => self.decode_map(map),
			other => Err(DecodeError::NotAnObject(json_kind(&other))),
		}
	}

	pub fn decode_map<T: Decode>(&self, map: Map<String, Value>) -> Result<T, DecodeError> {
		T::decode(&mut FieldDecoder::new(self.decode_hook(), map))
	}
}

/// Implements [`Decode`] for a struct by listing its fields.
///
/// Each field is read from the source key of the same name, or from the key
/// given with `as "key"`. Fields default to `or_default`; append
/// `=> required` or `=> optional` to pick another [`FieldDecoder`] method.
///
/// ```rust,ignore
/// impl_decode!(Layout {
///     created as "createdAt",
///     id => required,
///     expires => optional,
/// });
/// ```
#[macro_export]
macro_rules! impl_decode {
	($ty:ident { $($field:ident $(as $key:literal)? $(=> $how:ident)?),* $(,)? }) => {
		impl $crate::Decode for $ty {
			fn decode(fields: &mut $crate::FieldDecoder<'_>) -> ::std::result::Result<Self, $crate::DecodeError> {
				::std::result::Result::Ok(Self {
					$($field: $crate::__decode_field!(fields, $crate::__field_key!($field $(, $key)?) $(, $how)?),)*
				})
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_key {
	($field:ident) => {
		stringify!($field)
	};
	($field:ident, $key:literal) => {
		$key
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __decode_field {
	($fields:ident, $key:expr) => {
		$fields.or_default($key)?
	};
	($fields:ident, $key:expr, $how:ident) => {
		$fields.$how($key)?
	};
}
