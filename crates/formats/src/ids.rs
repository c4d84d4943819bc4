//! Identifier formats: UUIDs, ULIDs and BSON object ids.

use std::fmt;

use crate::{Format, FormatError};

static_regex!(OBJECT_ID, r"^[0-9a-fA-F]{24}$");

/// Crockford base32 alphabet used by ULIDs.
const ULID_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const ULID_LEN: usize = 26;

string_format!(
	/// A hyphenated UUID of any version (`uuid` format).
	Uuid,
	validator: is_uuid
);

string_format!(
	/// A hyphenated version 3 UUID (`uuid3` format).
	Uuid3,
	validator: is_uuid3
);

string_format!(
	/// A hyphenated version 4 UUID (`uuid4` format).
	Uuid4,
	validator: is_uuid4
);

string_format!(
	/// A hyphenated version 5 UUID (`uuid5` format).
	Uuid5,
	validator: is_uuid5
);

string_format!(
	/// A BSON object id as 24 hex digits (`bsonobjectid` format).
	ObjectId,
	validator: is_object_id
);

fn hyphenated(s: &str) -> Option<uuid::Uuid> {
	if s.len() != 36 {
		return None;
	}
	uuid::Uuid::try_parse(s).ok()
}

fn is_rfc4122(s: &str, version: usize) -> bool {
	hyphenated(s).is_some_and(|id| id.get_version_num() == version && id.get_variant() == uuid::Variant::RFC4122)
}

/// Returns `true` if `s` is a hyphenated UUID.
pub fn is_uuid(s: &str) -> bool {
	hyphenated(s).is_some()
}

pub fn is_uuid3(s: &str) -> bool {
	is_rfc4122(s, 3)
}

pub fn is_uuid4(s: &str) -> bool {
	is_rfc4122(s, 4)
}

pub fn is_uuid5(s: &str) -> bool {
	is_rfc4122(s, 5)
}

pub fn is_object_id(s: &str) -> bool {
	OBJECT_ID.is_match(s)
}

/// A Universally Unique Lexicographically Sortable Identifier (`ulid` format).
///
/// Held as its 128-bit value; encodes as 26 Crockford base32 characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ulid(u128);

impl Ulid {
	pub const fn from_u128(value: u128) -> Self {
		Self(value)
	}

	pub const fn as_u128(&self) -> u128 {
		self.0
	}

	/// Parses the 26 character text form.
	pub fn parse(text: &str) -> Result<Self, FormatError> {
		if text.is_empty() {
			return Err(FormatError::Empty { format: "ulid" });
		}
		if text.len() != ULID_LEN {
			return Err(FormatError::invalid("ulid", text, format!("expected {ULID_LEN} characters")));
		}

		let mut value: u128 = 0;
		for (i, byte) in text.bytes().enumerate() {
			let digit = crockford_digit(byte).ok_or_else(|| FormatError::invalid("ulid", text, format!("invalid character at {i}")))?;
			// 26 * 5 = 130 bits; the leading character may only carry 3.
			if i == 0 && digit > 7 {
				return Err(FormatError::invalid("ulid", text, "value overflows 128 bits"));
			}
			value = (value << 5) | u128::from(digit);
		}
		Ok(Self(value))
	}
}

fn crockford_digit(byte: u8) -> Option<u8> {
	let upper = byte.to_ascii_uppercase();
	ULID_ALPHABET.iter().position(|&c| c == upper).map(|pos| pos as u8)
}

impl fmt::Display for Ulid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = [0u8; ULID_LEN];
		let mut value = self.0;
		for slot in out.iter_mut().rev() {
			*slot = ULID_ALPHABET[(value & 0x1f) as usize];
			value >>= 5;
		}
		f.write_str(std::str::from_utf8(&out).map_err(|_| fmt::Error)?)
	}
}

impl Format for Ulid {
	fn decode_text(text: &str) -> Result<Self, FormatError> {
		if text.is_empty() {
			return Ok(Self::default());
		}
		Self::parse(text)
	}

	fn decode_field(text: &str) -> Result<Self, FormatError> {
		Self::parse(text)
	}
}

impl_text_serde!(Ulid);

pub fn is_ulid(s: &str) -> bool {
	Ulid::parse(s).is_ok()
}
