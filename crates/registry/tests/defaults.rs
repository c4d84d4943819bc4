//! The process-wide default store.
//!
//! Kept in its own test binary because it mutates global state.

use strfmt_registry::formats::{DateTime, Password};
use strfmt_registry::{FormatStore, GeneratorRegistry};

#[test]
fn test_default_store_seeds_new_stores() {
	let defaults = FormatStore::defaults();
	assert_eq!(defaults.len(), 26);
	assert_eq!(defaults.normalized_name("date-time"), "datetime");

	let before = FormatStore::new();
	assert!(defaults.add::<Password>("api-key", |s| s.len() >= 16));

	let after = FormatStore::new();
	assert!(after.contains_name("api-key"));
	assert!(after.validates("api-key", "0123456789abcdef"));
	assert!(!before.contains_name("api-key"));

	after.remove("date-time");
	assert!(defaults.contains_type::<DateTime>());
	assert!(FormatStore::new().contains_name("date-time"));

	assert!(defaults.remove("api-key"));
	assert!(after.contains_name("api-key"));
	assert!(!FormatStore::new().contains_name("api-key"));
}
