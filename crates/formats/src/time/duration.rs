use std::fmt;

use chrono::TimeDelta;

use crate::{Format, FormatError};

static_regex!(
	DURATION_SHAPE,
	r"^\s*[-+]?\s*(?:(?:\d+(?:\.\d*)?|\.\d+)\s*[a-zA-Zµμ]+\s*)+$"
);
static_regex!(DURATION_PART, r"(\d+(?:\.\d*)?|\.\d+)\s*([a-zA-Zµμ]+)");

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;

/// A signed span of time (`duration` format).
///
/// Accepts Go-style compact spans (`1h30m`, `250ms`) as well as spelled-out
/// units (`3 days`, `2 weeks`). Encodes in the compact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration(TimeDelta);

impl Duration {
	pub fn new(delta: TimeDelta) -> Self {
		Self(delta)
	}

	pub fn delta(&self) -> TimeDelta {
		self.0
	}

	/// Parses a duration.
	pub fn parse(text: &str) -> Result<Self, FormatError> {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return Err(FormatError::Empty { format: "duration" });
		}
		if trimmed.trim_start_matches(['-', '+']) == "0" {
			return Ok(Self::default());
		}
		if !DURATION_SHAPE.is_match(trimmed) {
			return Err(FormatError::invalid("duration", text, "expected <number><unit> parts such as 1h30m"));
		}

		let negative = trimmed.starts_with('-');
		let mut total: i128 = 0;
		for part in DURATION_PART.captures_iter(trimmed) {
			let unit = unit_nanos(&part[2]).ok_or_else(|| FormatError::invalid("duration", text, format!("unknown unit {:?}", &part[2])))?;
			let nanos = scaled(&part[1], unit).ok_or_else(|| FormatError::invalid("duration", text, "value out of range"))?;
			total = total
				.checked_add(nanos)
				.ok_or_else(|| FormatError::invalid("duration", text, "value out of range"))?;
		}
		if negative {
			total = -total;
		}

		let nanos = i64::try_from(total).map_err(|_| FormatError::invalid("duration", text, "value out of range"))?;
		Ok(Self(TimeDelta::nanoseconds(nanos)))
	}
}

impl Default for Duration {
	fn default() -> Self {
		Self(TimeDelta::zero())
	}
}

impl From<TimeDelta> for Duration {
	fn from(delta: TimeDelta) -> Self {
		Self(delta)
	}
}

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_zero() {
			return f.write_str("0s");
		}
		let sign = if self.0 < TimeDelta::zero() { "-" } else { "" };
		let delta = self.0.abs();
		let secs = delta.num_seconds();
		let nanos = delta.subsec_nanos();

		if secs == 0 {
			return if nanos % 1_000_000 == 0 {
				write!(f, "{sign}{}ms", nanos / 1_000_000)
			} else if nanos % 1_000 == 0 {
				write!(f, "{sign}{}us", nanos / 1_000)
			} else {
				write!(f, "{sign}{nanos}ns")
			};
		}

		let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
		f.write_str(sign)?;
		if hours > 0 {
			write!(f, "{hours}h")?;
		}
		if hours > 0 || minutes > 0 {
			write!(f, "{minutes}m")?;
		}
		write!(f, "{seconds}")?;
		if nanos > 0 {
			let frac = format!("{nanos:09}");
			write!(f, ".{}", frac.trim_end_matches('0'))?;
		}
		f.write_str("s")
	}
}

impl Format for Duration {
	fn decode_text(text: &str) -> Result<Self, FormatError> {
		Self::parse(text)
	}
}

impl_text_serde!(Duration);

/// Returns `true` if `s` parses as a duration.
pub fn is_duration(s: &str) -> bool {
	Duration::parse(s).is_ok()
}

fn unit_nanos(unit: &str) -> Option<i128> {
	let nanos = match unit.to_lowercase().as_str() {
		"ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => 1,
		"us" | "µs" | "μs" | "micro" | "micros" | "microsecond" | "microseconds" => NANOS_PER_MICRO,
		"ms" | "milli" | "millis" | "millisecond" | "milliseconds" => NANOS_PER_MILLI,
		"s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SECOND,
		"m" | "min" | "mins" | "minute" | "minutes" => NANOS_PER_MINUTE,
		"h" | "hr" | "hrs" | "hour" | "hours" => NANOS_PER_HOUR,
		"d" | "day" | "days" => NANOS_PER_DAY,
		"w" | "wk" | "wks" | "week" | "weeks" => NANOS_PER_WEEK,
		_ => return None,
	};
	Some(nanos)
}

/// Multiplies a decimal literal by `unit` nanoseconds, truncating below 1ns.
fn scaled(value: &str, unit: i128) -> Option<i128> {
	let (whole, frac) = value.split_once('.').unwrap_or((value, ""));
	let whole: i128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
	let mut nanos = whole.checked_mul(unit)?;

	let frac = &frac[..frac.len().min(18)];
	if !frac.is_empty() {
		let digits: i128 = frac.parse().ok()?;
		let scale = 10_i128.checked_pow(frac.len() as u32)?;
		nanos = nanos.checked_add(digits.checked_mul(unit)? / scale)?;
	}
	Some(nanos)
}
