//! Declaration macros for format types.

/// Implements `serde::Serialize` and `serde::Deserialize` for a [`Format`](crate::Format)
/// type through its text form.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Default)]
/// struct Sku(String);
/// // impl Display + Format for Sku ...
/// strfmt_formats::impl_text_serde!(Sku);
/// ```
#[macro_export]
macro_rules! impl_text_serde {
	($ty:ty) => {
		impl $crate::__private::serde::Serialize for $ty {
			fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				serializer.serialize_str(&$crate::Format::encode_text(self))
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
			fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				let text = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
				<$ty as $crate::Format>::decode_text(&text).map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
			}
		}
	};
}

/// Declares a string-backed format type.
///
/// Text decoding stores the input verbatim; validity is checked separately by
/// the validator, so a value may hold text its validator rejects. The
/// `redacted` form prints `***` from `Debug` instead of the content.
macro_rules! string_format {
	($(#[$attr:meta])* $name:ident, validator: $validator:path) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub struct $name(String);

		string_format!(@impls $name, $validator);
	};
	($(#[$attr:meta])* $name:ident, validator: $validator:path, redacted) => {
		$(#[$attr])*
		#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub struct $name(String);

		impl ::core::fmt::Debug for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.debug_tuple(stringify!($name)).field(&"***").finish()
			}
		}

		string_format!(@impls $name, $validator);
	};
	(@impls $name:ident, $validator:path) => {
		impl $name {
			/// Wraps `value` without validating it.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}

			pub fn into_inner(self) -> String {
				self.0
			}

			/// Runs the format's validator over the held text.
			pub fn is_valid(&self) -> bool {
				$validator(&self.0)
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl From<String> for $name {
			fn from(value: String) -> Self {
				Self(value)
			}
		}

		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self(value.to_string())
			}
		}

		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}

		impl $crate::Format for $name {
			fn decode_text(text: &str) -> Result<Self, $crate::FormatError> {
				Ok(Self(text.to_string()))
			}
		}

		$crate::impl_text_serde!($name);
	};
}

/// Declares a lazily compiled regex for a fixed pattern.
macro_rules! static_regex {
	($name:ident, $pattern:literal) => {
		static $name: ::std::sync::LazyLock<::regex::Regex> =
			::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect("static pattern compiles"));
	};
}
