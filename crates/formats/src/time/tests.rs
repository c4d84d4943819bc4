use chrono::{TimeDelta, TimeZone};
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[test]
fn date_parses_full_date() {
	let date = Date::parse("2014-12-15").unwrap();
	assert_eq!(date, Date::from_ymd(2014, 12, 15).unwrap());
	assert_eq!(date.to_string(), "2014-12-15");
}

#[rstest]
#[case("")]
#[case("2014-12")]
#[case("2014-13-01")]
#[case("2014-1-05")]
#[case("15-12-2014")]
fn date_rejects(#[case] input: &str) {
	assert!(Date::parse(input).is_err());
	assert!(!is_date(input));
}

#[test]
fn date_text_decode_of_empty_is_zero_but_field_decode_fails() {
	assert_eq!(Date::decode_text("").unwrap(), Date::default());
	assert_eq!(Date::decode_field(""), Err(FormatError::Empty { format: "date" }));
}

#[test]
fn date_time_parses_rfc3339_with_nanos() {
	let dt = DateTime::parse("2012-03-02T15:06:05.999999999Z").unwrap();
	let expected = Utc.with_ymd_and_hms(2012, 3, 2, 15, 6, 5).unwrap() + TimeDelta::nanoseconds(999_999_999);
	assert_eq!(dt.to_utc(), expected);
	assert_eq!(dt.to_string(), "2012-03-02T15:06:05.999Z");
}

#[rstest]
#[case("2012-03-02T15:06:05+01:00")]
#[case("2012-03-02T15:06:05.123+0100")]
#[case("2012-03-02T15:06:05")]
#[case("2012-03-02T15:06")]
#[case("2012-03-02T15:06Z")]
#[case("2012-03-02 15:06:05")]
fn date_time_accepts_layout(#[case] input: &str) {
	assert!(DateTime::parse(input).is_ok(), "{input}");
}

#[test]
fn date_time_keeps_offset() {
	let dt = DateTime::parse("2012-03-02T15:06:05+01:00").unwrap();
	assert_eq!(dt.to_utc(), Utc.with_ymd_and_hms(2012, 3, 2, 14, 6, 5).unwrap());
	assert_eq!(dt.to_string(), "2012-03-02T15:06:05.000+01:00");
}

#[test]
fn date_time_empty_handling() {
	assert_eq!(DateTime::decode_text("").unwrap(), DateTime::default());
	assert!(matches!(DateTime::decode_field(""), Err(FormatError::Empty { .. })));
	assert!(DateTime::decode_field("2019-01-01abc").is_err());
}

#[test]
fn date_time_validator_is_strict_rfc3339() {
	assert!(is_date_time("2012-03-02T15:06:05Z"));
	assert!(!is_date_time("2012-03-02 15:06:05"));
	assert!(!is_date_time(""));
}

#[rstest]
#[case("5s", TimeDelta::seconds(5))]
#[case("1h30m", TimeDelta::minutes(90))]
#[case("250ms", TimeDelta::milliseconds(250))]
#[case("1.5h", TimeDelta::minutes(90))]
#[case("3 days", TimeDelta::days(3))]
#[case("2 weeks 1 day", TimeDelta::days(15))]
#[case("-2w", TimeDelta::weeks(-2))]
#[case("10µs", TimeDelta::microseconds(10))]
#[case("0", TimeDelta::zero())]
fn duration_parses(#[case] input: &str, #[case] expected: TimeDelta) {
	assert_eq!(Duration::parse(input).unwrap().delta(), expected);
}

#[rstest]
#[case("")]
#[case("5")]
#[case("5 parsecs")]
#[case("h")]
#[case("99999999999999999999999h")]
fn duration_rejects(#[case] input: &str) {
	assert!(Duration::parse(input).is_err(), "{input}");
	assert!(!is_duration(input));
}

#[rstest]
#[case(TimeDelta::zero(), "0s")]
#[case(TimeDelta::seconds(5), "5s")]
#[case(TimeDelta::minutes(90), "1h30m0s")]
#[case(TimeDelta::milliseconds(1500), "1.5s")]
#[case(TimeDelta::milliseconds(250), "250ms")]
#[case(TimeDelta::microseconds(7), "7us")]
#[case(TimeDelta::nanoseconds(42), "42ns")]
#[case(TimeDelta::seconds(-75), "-1m15s")]
fn duration_display(#[case] delta: TimeDelta, #[case] expected: &str) {
	let duration = Duration::new(delta);
	assert_eq!(duration.to_string(), expected);
	assert_eq!(Duration::parse(expected).unwrap(), duration);
}

#[test]
fn json_uses_text_form() {
	let date = Date::from_ymd(2014, 12, 15).unwrap();
	assert_eq!(serde_json::to_string(&date).unwrap(), "\"2014-12-15\"");
	let back: Date = serde_json::from_str("\"2014-12-15\"").unwrap();
	assert_eq!(back, date);
	assert!(serde_json::from_str::<Duration>("\"nope\"").is_err());
}

proptest! {
	/// The compact text form is always accepted back.
	#[test]
	fn duration_text_parses_back(nanos in -1_000_000_000_000_000_i64..1_000_000_000_000_000) {
		let duration = Duration::new(TimeDelta::nanoseconds(nanos));
		prop_assert_eq!(Duration::parse(&duration.to_string()).unwrap(), duration);
	}
}
