//! Network formats: addresses, hostnames, URIs and email.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

static_regex!(
	HOSTNAME,
	r"^(?i)[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.?$"
);
static_regex!(
	EMAIL,
	r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$"
);
static_regex!(
	MAC,
	r"^(?i)(?:[0-9a-f]{2}(?:[:-][0-9a-f]{2}){5}|[0-9a-f]{2}(?:[:-][0-9a-f]{2}){7}|[0-9a-f]{4}(?:\.[0-9a-f]{4}){2}|[0-9a-f]{4}(?:\.[0-9a-f]{4}){3})$"
);

const MAX_HOSTNAME_LEN: usize = 255;

string_format!(
	/// An absolute URI (`uri` format).
	Uri,
	validator: is_uri
);

string_format!(
	/// An email address (`email` format).
	Email,
	validator: is_email
);

string_format!(
	/// An RFC 1123 host name (`hostname` format).
	Hostname,
	validator: is_hostname
);

string_format!(
	/// A dotted-quad IPv4 address (`ipv4` format).
	Ipv4,
	validator: is_ipv4
);

string_format!(
	/// An IPv6 address (`ipv6` format).
	Ipv6,
	validator: is_ipv6
);

string_format!(
	/// An address with a prefix length, e.g. `192.0.2.1/24` (`cidr` format).
	Cidr,
	validator: is_cidr
);

string_format!(
	/// An IEEE 802 MAC-48, EUI-48 or EUI-64 address (`mac` format).
	Mac,
	validator: is_mac
);

pub fn is_uri(s: &str) -> bool {
	url::Url::parse(s).is_ok()
}

pub fn is_email(s: &str) -> bool {
	s.len() <= 254 && EMAIL.is_match(s)
}

pub fn is_hostname(s: &str) -> bool {
	s.len() <= MAX_HOSTNAME_LEN && HOSTNAME.is_match(s)
}

pub fn is_ipv4(s: &str) -> bool {
	s.parse::<Ipv4Addr>().is_ok()
}

pub fn is_ipv6(s: &str) -> bool {
	s.parse::<Ipv6Addr>().is_ok()
}

pub fn is_cidr(s: &str) -> bool {
	let Some((addr, prefix)) = s.split_once('/') else {
		return false;
	};
	if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
		return false;
	}
	let Ok(prefix) = prefix.parse::<u8>() else {
		return false;
	};
	match addr.parse::<IpAddr>() {
		Ok(IpAddr::V4(_)) => prefix <= 32,
		Ok(IpAddr::V6(_)) => prefix <= 128,
		Err(_) => false,
	}
}

/// Separators may not be mixed within one address.
pub fn is_mac(s: &str) -> bool {
	MAC.is_match(s) && !(s.contains(':') && s.contains('-'))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("somewhere.com", true)]
	#[case("localhost", true)]
	#[case("a-b.example.org.", true)]
	#[case("-leading.com", false)]
	#[case("trailing-.com", false)]
	#[case("under_score.com", false)]
	#[case("", false)]
	fn hostnames(#[case] input: &str, #[case] valid: bool) {
		assert_eq!(is_hostname(input), valid, "{input}");
	}

	#[test]
	fn hostname_label_and_total_length() {
		let label = "a".repeat(63);
		assert!(is_hostname(&format!("{label}.com")));
		assert!(!is_hostname(&format!("{}a.com", label)));
		let long = vec![label.as_str(); 5].join(".");
		assert!(!is_hostname(&long));
	}

	#[rstest]
	#[case("dummy@dummy.com", true)]
	#[case("first.last+tag@sub.example.org", true)]
	#[case("no-at-sign", false)]
	#[case("two@@example.com", false)]
	#[case("@example.com", false)]
	fn emails(#[case] input: &str, #[case] valid: bool) {
		assert_eq!(is_email(input), valid, "{input}");
	}

	#[test]
	fn ip_addresses() {
		assert!(is_ipv4("192.168.254.1"));
		assert!(!is_ipv4("192.168.254.256"));
		assert!(!is_ipv4("::1"));
		assert!(is_ipv6("::1"));
		assert!(is_ipv6("2001:db8::ff00:42:8329"));
		assert!(!is_ipv6("192.168.0.1"));
	}

	#[rstest]
	#[case("192.0.2.1/24", true)]
	#[case("2001:db8::/32", true)]
	#[case("10.0.0.0/33", false)]
	#[case("10.0.0.0/+8", false)]
	#[case("10.0.0.0", false)]
	#[case("host/8", false)]
	fn cidrs(#[case] input: &str, #[case] valid: bool) {
		assert_eq!(is_cidr(input), valid, "{input}");
	}

	#[rstest]
	#[case("01:02:03:04:05:06", true)]
	#[case("01-02-03-04-05-06", true)]
	#[case("0102.0304.0506", true)]
	#[case("01:02:03:04:05:06:07:08", true)]
	#[case("01:02-03:04:05:06", false)]
	#[case("01:02:03:04:05", false)]
	fn macs(#[case] input: &str, #[case] valid: bool) {
		assert_eq!(is_mac(input), valid, "{input}");
	}

	#[test]
	fn uris() {
		assert!(is_uri("http://www.dummy.com"));
		assert!(is_uri("urn:isbn:0451450523"));
		assert!(!is_uri("www.dummy.com"));
		assert!(Uri::new("http://www.dummy.com").is_valid());
	}
}
