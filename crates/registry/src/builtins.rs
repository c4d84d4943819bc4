//! Built-in format table.

use strfmt_formats::{codes, ids, misc, net, time};
use strfmt_formats::{
	Base64, Cidr, CreditCard, Currency, Date, DateTime, Duration, Email, HexColor, Hostname, Ipv4, Ipv6, Isbn, Isbn10, Isbn13, Mac,
	ObjectId, Password, RgbColor, Ssn, Ulid, Uri, Uuid, Uuid3, Uuid4, Uuid5,
};

use crate::FormatStore;
use crate::entry::FormatDef;

/// Registers every built-in format on `store`.
pub(crate) fn register(store: &FormatStore) {
	store.add::<Base64>("byte", misc::is_base64);
	store.add::<ObjectId>("bsonobjectid", ids::is_object_id);
	store.add::<CreditCard>("creditcard", codes::is_credit_card);
	store.add::<Currency>("currency", codes::is_currency);
	store.add::<Date>("date", time::is_date);
	store.add::<DateTime>("date-time", time::is_date_time);
	store.add::<Duration>("duration", time::is_duration);
	store.add::<Email>("email", net::is_email);
	store.register("hexcolor", FormatDef::<HexColor>::new(misc::is_hex_color).zero_expression("HexColor::new(\"#000000\")"));
	store.add::<Hostname>("hostname", net::is_hostname);
	store.add::<Ipv4>("ipv4", net::is_ipv4);
	store.add::<Ipv6>("ipv6", net::is_ipv6);
	store.add::<Cidr>("cidr", net::is_cidr);
	store.add::<Isbn>("isbn", codes::is_isbn);
	store.add::<Isbn10>("isbn10", codes::is_isbn10);
	store.add::<Isbn13>("isbn13", codes::is_isbn13);
	store.add::<Mac>("mac", net::is_mac);
	store.add::<Password>("password", misc::is_password);
	store.register("rgbcolor", FormatDef::<RgbColor>::new(misc::is_rgb_color).zero_expression("RgbColor::new(\"rgb(0,0,0)\")"));
	store.add::<Ssn>("ssn", codes::is_ssn);
	store.add::<Ulid>("ulid", ids::is_ulid);
	store.add::<Uri>("uri", net::is_uri);
	store.add::<Uuid>("uuid", ids::is_uuid);
	store.add::<Uuid3>("uuid3", ids::is_uuid3);
	store.add::<Uuid4>("uuid4", ids::is_uuid4);
	store.add::<Uuid5>("uuid5", ids::is_uuid5);
}
