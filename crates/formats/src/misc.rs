//! Colors, secrets and binary payloads.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{Format, FormatError};

static_regex!(HEX_COLOR, r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$");
static_regex!(RGB_COLOR, r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$");

string_format!(
	/// A `#rgb` or `#rrggbb` color (`hexcolor` format).
	HexColor,
	validator: is_hex_color
);

string_format!(
	/// An `rgb(r, g, b)` color (`rgbcolor` format).
	RgbColor,
	validator: is_rgb_color
);

string_format!(
	/// A secret; any string is valid and `Debug` never prints it (`password` format).
	Password,
	validator: is_password,
	redacted
);

pub fn is_hex_color(s: &str) -> bool {
	HEX_COLOR.is_match(s)
}

pub fn is_rgb_color(s: &str) -> bool {
	RGB_COLOR.captures(s).is_some_and(|caps| {
		caps.iter()
			.skip(1)
			.flatten()
			.all(|m| m.as_str().parse::<u16>().is_ok_and(|c| c <= 255))
	})
}

pub fn is_password(_: &str) -> bool {
	true
}

/// Binary data carried as standard base64 text (`byte` format).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64(Vec<u8>);

impl Base64 {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.0
	}
}

impl From<Vec<u8>> for Base64 {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl fmt::Display for Base64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&STANDARD.encode(&self.0))
	}
}

impl Format for Base64 {
	fn decode_text(text: &str) -> Result<Self, FormatError> {
		STANDARD
			.decode(text)
			.map(Self)
			.map_err(|e| FormatError::invalid("byte", text, e.to_string()))
	}
}

impl_text_serde!(Base64);

pub fn is_base64(s: &str) -> bool {
	STANDARD.decode(s).is_ok()
}
