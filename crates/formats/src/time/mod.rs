//! Calendar and time formats: `date`, `date-time`, `duration`.

use std::fmt;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::{Format, FormatError};

mod duration;

pub use duration::{Duration, is_duration};

#[cfg(test)]
mod tests;

/// Layout of a full date (`2006-01-02`).
pub const RFC3339_FULL_DATE: &str = "%Y-%m-%d";

/// Layouts tried, in order, after RFC 3339 when parsing a date-time.
const DATE_TIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%MZ"];

/// Offset-less layouts, read as UTC.
const LOCAL_DATE_TIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// A calendar date without time of day (`date` format).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(NaiveDate);

impl Date {
	pub fn new(date: NaiveDate) -> Self {
		Self(date)
	}

	/// Builds a date from its parts, `None` when out of range.
	pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
		NaiveDate::from_ymd_opt(year, month, day).map(Self)
	}

	pub fn naive(&self) -> NaiveDate {
		self.0
	}

	/// Parses a `YYYY-MM-DD` date.
	pub fn parse(text: &str) -> Result<Self, FormatError> {
		if text.is_empty() {
			return Err(FormatError::Empty { format: "date" });
		}
		if text.len() != 10 {
			return Err(FormatError::invalid("date", text, "expected YYYY-MM-DD"));
		}
		NaiveDate::parse_from_str(text, RFC3339_FULL_DATE)
			.map(Self)
			.map_err(|e| FormatError::invalid("date", text, e.to_string()))
	}
}

impl From<NaiveDate> for Date {
	fn from(date: NaiveDate) -> Self {
		Self(date)
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.format(RFC3339_FULL_DATE))
	}
}

impl Format for Date {
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

impl_text_serde!(Date);

/// Returns `true` if `s` is a `YYYY-MM-DD` date.
pub fn is_date(s: &str) -> bool {
	Date::parse(s).is_ok()
}

/// An instant with a UTC offset (`date-time` format).
///
/// Encodes as RFC 3339 with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
	pub fn new(instant: chrono::DateTime<FixedOffset>) -> Self {
		Self(instant)
	}

	pub fn instant(&self) -> chrono::DateTime<FixedOffset> {
		self.0
	}

	pub fn to_utc(&self) -> chrono::DateTime<Utc> {
		self.0.with_timezone(&Utc)
	}

	/// Parses any supported date-time layout.
	///
	/// RFC 3339 is tried first, then offset layouts without colons or with
	/// reduced precision, then offset-less layouts read as UTC. The empty
	/// string parses to the zero value.
	pub fn parse(text: &str) -> Result<Self, FormatError> {
		if text.is_empty() {
			return Ok(Self::default());
		}
		if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(text) {
			return Ok(Self(instant));
		}
		for layout in DATE_TIME_LAYOUTS {
			if let Ok(instant) = chrono::DateTime::parse_from_str(text, layout) {
				return Ok(Self(instant));
			}
			if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
				return Ok(Self(naive.and_utc().fixed_offset()));
			}
		}
		for layout in LOCAL_DATE_TIME_LAYOUTS {
			if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
				return Ok(Self(naive.and_utc().fixed_offset()));
			}
		}
		Err(FormatError::invalid("date-time", text, "not an RFC 3339 or ISO 8601 date-time"))
	}
}

impl Default for DateTime {
	fn default() -> Self {
		Self(chrono::DateTime::<Utc>::default().fixed_offset())
	}
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
	fn from(instant: chrono::DateTime<FixedOffset>) -> Self {
		Self(instant)
	}
}

impl From<chrono::DateTime<Utc>> for DateTime {
	fn from(instant: chrono::DateTime<Utc>) -> Self {
		Self(instant.fixed_offset())
	}
}

impl fmt::Display for DateTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
	}
}

impl Format for DateTime {
	fn decode_text(text: &str) -> Result<Self, FormatError> {
		Self::parse(text)
	}

	fn decode_field(text: &str) -> Result<Self, FormatError> {
		if text.is_empty() {
			return Err(FormatError::Empty { format: "date-time" });
		}
		Self::parse(text)
	}
}

impl_text_serde!(DateTime);

/// Returns `true` if `s` is a strict RFC 3339 date-time.
pub fn is_date_time(s: &str) -> bool {
	chrono::DateTime::parse_from_rfc3339(s).is_ok()
}
