//! Check-digit and code formats: ISBNs, credit cards, SSNs, currencies.

static_regex!(SSN, r"^\d{3}[- ]?\d{2}[- ]?\d{4}$");
static_regex!(CURRENCY, r"^[A-Za-z]{3}$");

/// ISO 4217 codes accepted by [`is_currency`].
const ISO_CURRENCIES: &[&str] = &[
	"AED", "AFA", "AFN", "ARS", "AUD", "BGN", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK", "DKK", "EGP", "EUR", "GBP", "HKD",
	"HUF", "IDR", "ILS", "INR", "ISK", "JPY", "KRW", "MXN", "MYR", "NGN", "NOK", "NZD", "PEN", "PHP", "PKR", "PLN", "RON", "RUB",
	"SAR", "SEK", "SGD", "THB", "TRY", "TWD", "UAH", "USD", "VND", "ZAR",
];

string_format!(
	/// An ISBN-10 or ISBN-13 (`isbn` format).
	Isbn,
	validator: is_isbn
);

string_format!(
	/// A ten digit ISBN (`isbn10` format).
	Isbn10,
	validator: is_isbn10
);

string_format!(
	/// A thirteen digit ISBN (`isbn13` format).
	Isbn13,
	validator: is_isbn13
);

string_format!(
	/// A payment card number (`creditcard` format).
	CreditCard,
	validator: is_credit_card
);

string_format!(
	/// A US social security number (`ssn` format).
	Ssn,
	validator: is_ssn
);

string_format!(
	/// An ISO 4217 currency code (`currency` format).
	Currency,
	validator: is_currency
);

/// Drops the separators ISBNs and card numbers are commonly written with.
fn compact(s: &str) -> String {
	s.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
}

pub fn is_isbn10(s: &str) -> bool {
	let digits = compact(s);
	let bytes = digits.as_bytes();
	if bytes.len() != 10 {
		return false;
	}

	let mut sum = 0u32;
	for (i, &b) in bytes.iter().enumerate() {
		let value = match b {
			b'0'..=b'9' => u32::from(b - b'0'),
			b'X' | b'x' if i == 9 => 10,
			_ => return false,
		};
		sum += (10 - i as u32) * value;
	}
	sum % 11 == 0
}

pub fn is_isbn13(s: &str) -> bool {
	let digits = compact(s);
	let bytes = digits.as_bytes();
	if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
		return false;
	}

	let sum: u32 = bytes
		.iter()
		.enumerate()
		.map(|(i, &b)| {
			let weight = if i % 2 == 0 { 1 } else { 3 };
			weight * u32::from(b - b'0')
		})
		.sum();
	sum % 10 == 0
}

pub fn is_isbn(s: &str) -> bool {
	is_isbn10(s) || is_isbn13(s)
}

/// 13 to 19 digits passing the Luhn check.
pub fn is_credit_card(s: &str) -> bool {
	let digits = compact(s);
	let bytes = digits.as_bytes();
	if !(13..=19).contains(&bytes.len()) || !bytes.iter().all(u8::is_ascii_digit) {
		return false;
	}

	let sum: u32 = bytes
		.iter()
		.rev()
		.enumerate()
		.map(|(i, &b)| {
			let d = u32::from(b - b'0');
			if i % 2 == 1 {
				let doubled = d * 2;
				if doubled > 9 { doubled - 9 } else { doubled }
			} else {
				d
			}
		})
		.sum();
	sum % 10 == 0
}

pub fn is_ssn(s: &str) -> bool {
	SSN.is_match(s)
}

pub fn is_currency(s: &str) -> bool {
	CURRENCY.is_match(s) && ISO_CURRENCIES.contains(&s.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("0321751043", true, false)]
	#[case("0-321-75104-3", true, false)]
	#[case("080442957X", true, false)]
	#[case("978-0321751041", false, true)]
	#[case("978 0 321 75104 1", false, true)]
	#[case("0321751044", false, false)]
	#[case("978-0321751042", false, false)]
	#[case("X321751043", false, false)]
	fn isbns(#[case] input: &str, #[case] ten: bool, #[case] thirteen: bool) {
		assert_eq!(is_isbn10(input), ten, "{input}");
		assert_eq!(is_isbn13(input), thirteen, "{input}");
		assert_eq!(is_isbn(input), ten || thirteen, "{input}");
	}

	#[rstest]
	#[case("4111-1111-1111-1111", true)]
	#[case("4111 1111 1111 1111", true)]
	#[case("5500000000000004", true)]
	#[case("4111-1111-1111-1112", false)]
	#[case("4111", false)]
	#[case("4111-1111-1111-111a", false)]
	fn credit_cards(#[case] input: &str, #[case] valid: bool) {
		assert_eq!(is_credit_card(input), valid, "{input}");
	}

	#[test]
	fn ssns() {
		assert!(is_ssn("111-11-1111"));
		assert!(is_ssn("111111111"));
		assert!(!is_ssn("111-11-111"));
		assert!(!is_ssn("aaa-bb-cccc"));
	}

	#[test]
	fn currencies() {
		assert!(is_currency("USD"));
		assert!(is_currency("eur"));
		assert!(!is_currency("XXX"));
		assert!(!is_currency("US"));
		assert!(!is_currency("USDD"));
		assert!(Currency::new("chf").is_valid());
	}
}
