use std::sync::Arc;

use super::FormatStore;
use crate::builtins;
use crate::entry::FormatEntry;
use crate::normalize::{NameNormalizer, default_normalizer};

/// Builder for a [`FormatStore`].
///
/// Sources are applied in order: built-ins, then seeded entries, then
/// exclusions. Seeded entries are re-keyed under the builder's normalizer, and
/// a later source replaces an earlier one under the same key.
///
/// # Example
///
/// ```rust,ignore
/// let store = FormatStore::builder()
///     .with_builtins()
///     .exclude("password")
///     .build();
/// ```
pub struct FormatStoreBuilder {
	label: &'static str,
	normalizer: Option<NameNormalizer>,
	builtins: bool,
	seeds: Vec<FormatEntry>,
	excluded: Vec<String>,
}

impl Default for FormatStoreBuilder {
	/// Defaults:
	/// - `label`: `"formats"`
	/// - `normalizer`: [`default_normalizer`]
	/// - no entries
	fn default() -> Self {
		Self {
			label: "formats",
			normalizer: None,
			builtins: false,
			seeds: Vec::new(),
			excluded: Vec::new(),
		}
	}
}

impl FormatStoreBuilder {
	/// Sets the label used in log output.
	pub fn label(mut self, label: &'static str) -> Self {
		self.label = label;
		self
	}

	/// Replaces the name normalizer.
	pub fn normalizer(mut self, normalizer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
		self.normalizer = Some(Arc::new(normalizer));
		self
	}

	/// Registers the built-in formats.
	pub fn with_builtins(mut self) -> Self {
		self.builtins = true;
		self
	}

	/// Copies every entry currently in `store`.
	pub fn seed_from(mut self, store: &FormatStore) -> Self {
		self.seeds.extend(store.snapshot());
		self
	}

	/// Leaves `name` out of the built store.
	pub fn exclude(mut self, name: impl Into<String>) -> Self {
		self.excluded.push(name.into());
		self
	}

	pub fn build(self) -> FormatStore {
		let normalizer: NameNormalizer = match self.normalizer {
			Some(normalizer) => normalizer,
			None => Arc::new(default_normalizer),
		};
		let store = FormatStore::with_normalizer(normalizer);
		if self.builtins {
			builtins::register(&store);
		}
		for entry in self.seeds {
			store.seed(entry);
		}
		for name in &self.excluded {
			store.remove(name);
		}
		tracing::debug!(label = self.label, formats = store.len(), "built format store");
		store
	}
}
