//! Format name normalization.
//!
//! Names are looked up by a canonical key so that `"date-time"`, `"dateTime"`
//! and `"date_time"` all resolve to the same entry.

use std::sync::Arc;

/// Maps a user-supplied format name to its lookup key.
pub type NameNormalizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Strips separators (`-`, `_`, `.`, whitespace) and lower-cases the rest.
pub fn default_normalizer(name: &str) -> String {
	name.chars()
		.filter(|c| !matches!(c, '-' | '_' | '.') && !c.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn separators_and_case_are_ignored() {
		for name in ["date-time", "dateTime", "date_time", "DATE TIME", "Date.Time"] {
			assert_eq!(default_normalizer(name), "datetime", "{name}");
		}
	}

	#[test]
	fn digits_survive() {
		assert_eq!(default_normalizer("uuid-4"), "uuid4");
		assert_eq!(default_normalizer("ISBN13"), "isbn13");
	}

	fn separator() -> impl Strategy<Value = char> {
		prop::sample::select(vec!['-', '_', '.', ' '])
	}

	proptest! {
		/// Inserting separators and flipping case never changes the key.
		#[test]
		fn variants_share_a_key(
			name in "[a-z0-9]{1,12}",
			cut in 0usize..12,
			sep in separator(),
			upper in any::<bool>(),
		) {
			let cut = cut.min(name.len());
			let mut variant = format!("{}{}{}", &name[..cut], sep, &name[cut..]);
			if upper {
				variant = variant.to_uppercase();
			}
			prop_assert_eq!(default_normalizer(&variant), default_normalizer(&name));
		}

		#[test]
		fn normalization_is_idempotent(name in "\\PC{0,16}") {
			let once = default_normalizer(&name);
			prop_assert_eq!(default_normalizer(&once), once.clone());
		}
	}
}
