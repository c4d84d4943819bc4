//! The format catalogue.
//!
//! Entries live in registration order behind a single [`Mutex`]; a secondary
//! index maps each format type to the keys registered for it. The first key
//! for a type is the earliest one still present, so lookups by type are
//! deterministic. A third map relates `Option<F>` and `Vec<F>` to `F`, so
//! field decoding can see through those containers.

use std::any::TypeId;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use strfmt_formats::{Format, FormatValue};

use crate::entry::{FormatDef, FormatEntry, FormatInfo, FormatType, Routine, Shape, Wrap};
use crate::error::ParseError;
use crate::normalize::NameNormalizer;

mod builder;

pub use builder::FormatStoreBuilder;


static DEFAULTS: LazyLock<FormatStore> = LazyLock::new(|| FormatStore::builder().with_builtins().build());

/// Thread-safe registry of named string formats.
///
/// Every operation takes the store's lock for the duration of its bookkeeping.
/// Validators and parse routines are cloned out and run after the lock is
/// released, so they may themselves consult the store.
pub struct FormatStore {
	normalizer: NameNormalizer,
	inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
	entries: IndexMap<String, FormatEntry>,
	by_type: FxHashMap<TypeId, Vec<String>>,
	shapes: FxHashMap<TypeId, (TypeId, Shape)>,
}

/// Field decoder for a container of a registered format type.
pub(crate) struct ShapedDecoder {
	pub key: String,
	pub shape: Shape,
	pub decode: Routine,
	pub wrap: Wrap,
}

impl StoreInner {
	/// Inserts or replaces by key. Returns `true` if an entry was replaced.
	fn upsert(&mut self, entry: FormatEntry) -> bool {
		let wrappers = entry.wrappers;
		self.shapes.insert(wrappers.optional, (entry.ty.id(), Shape::Optional));
		self.shapes.insert(wrappers.list, (entry.ty.id(), Shape::List));
		match self.entries.get_mut(&entry.key) {
			Some(existing) => {
				let key = existing.key.clone();
				let previous = existing.ty.id();
				let next = entry.ty.id();
				existing.replace_with(entry);
				if previous != next {
					self.unlink(previous, &key);
					self.by_type.entry(next).or_default().push(key);
				}
				true
			}
			None => {
				self.by_type.entry(entry.ty.id()).or_default().push(entry.key.clone());
				self.entries.insert(entry.key.clone(), entry);
				false
			}
		}
	}

	fn remove_key(&mut self, key: &str) -> Option<FormatEntry> {
		let entry = self.entries.shift_remove(key)?;
		self.unlink(entry.ty.id(), key);
		Some(entry)
	}

	fn unlink(&mut self, ty: TypeId, key: &str) {
		if let Some(keys) = self.by_type.get_mut(&ty) {
			keys.retain(|k| k != key);
			if keys.is_empty() {
				self.by_type.remove(&ty);
			}
		}
	}

	/// Earliest-registered entry still present for `ty`.
	fn first_for_type(&self, ty: TypeId) -> Option<&FormatEntry> {
		self.by_type
			.get(&ty)?
			.iter()
			.filter_map(|key| self.entries.get_full(key.as_str()))
			.min_by_key(|(index, _, _)| *index)
			.map(|(_, _, entry)| entry)
	}
}

impl FormatStore {
	pub(crate) fn with_normalizer(normalizer: NameNormalizer) -> Self {
		Self {
			normalizer,
			inner: Mutex::new(StoreInner::default()),
		}
	}

	/// A store seeded with a copy of every entry in [`FormatStore::defaults`].
	pub fn new() -> Self {
		Self::builder().seed_from(Self::defaults()).build()
	}

	/// A store with no entries and the default normalizer.
	pub fn empty() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> FormatStoreBuilder {
		FormatStoreBuilder::default()
	}

	/// Process-wide store holding the built-in formats.
	///
	/// Formats added here are visible to every later [`FormatStore::new`].
	pub fn defaults() -> &'static FormatStore {
		&DEFAULTS
	}

	/// Normalized lookup key for `name`.
	pub fn normalize(&self, name: &str) -> String {
		(self.normalizer)(name)
	}

	/// Registers `F` under `name` with `validator`.
	///
	/// Returns `true` if the name was new, `false` if an existing entry under
	/// the same normalized name was replaced.
	pub fn add<F: Format>(&self, name: &str, validator: impl Fn(&str) -> bool + Send + Sync + 'static) -> bool {
		self.register(name, FormatDef::<F>::new(validator))
	}

	/// Registers a full definition under `name`. See [`FormatStore::add`].
	pub fn register<F: Format>(&self, name: &str, def: FormatDef<F>) -> bool {
		let key = self.normalize(name);
		let entry = def.into_entry(key.clone(), name);
		let replaced = self.inner.lock().upsert(entry);
		tracing::debug!(format = %key, ty = FormatType::of::<F>().name(), replaced, "registered string format");
		!replaced
	}

	/// Removes the entry registered under `name`. Returns `true` if one existed.
	pub fn remove(&self, name: &str) -> bool {
		let key = self.normalize(name);
		let removed = self.inner.lock().remove_key(&key);
		match removed {
			Some(entry) => {
				tracing::debug!(format = %key, ty = entry.ty.name(), "removed string format");
				true
			}
			None => false,
		}
	}

	/// Removes the earliest-registered entry for `F`. Returns `true` if one existed.
	pub fn remove_type<F: Format>(&self) -> bool {
		self.remove_format_type(FormatType::of::<F>())
	}

	pub fn remove_format_type(&self, ty: FormatType) -> bool {
		let removed = {
			let mut inner = self.inner.lock();
			let key = inner.first_for_type(ty.id()).map(|entry| entry.key.clone());
			key.and_then(|key| inner.remove_key(&key))
		};
		match removed {
			Some(entry) => {
				tracing::debug!(format = %entry.key, ty = ty.name(), "removed string format by type");
				true
			}
			None => false,
		}
	}

	pub fn contains_name(&self, name: &str) -> bool {
		self.contains_key(&self.normalize(name))
	}

	pub(crate) fn contains_key(&self, key: &str) -> bool {
		self.inner.lock().entries.contains_key(key)
	}

	pub fn contains_type<F: Format>(&self) -> bool {
		self.contains_format_type(FormatType::of::<F>())
	}

	pub fn contains_format_type(&self, ty: FormatType) -> bool {
		self.inner.lock().by_type.contains_key(&ty.id())
	}

	/// Type registered under `name`.
	pub fn type_of(&self, name: &str) -> Option<FormatType> {
		let key = self.normalize(name);
		self.inner.lock().entries.get(&key).map(|entry| entry.ty)
	}

	/// First name registered for `ty`, as originally spelled.
	pub fn name_of(&self, ty: FormatType) -> Option<String> {
		self.inner.lock().first_for_type(ty.id()).map(|entry| entry.name.clone())
	}

	/// Runs the validator registered under `name`. Unknown names never validate.
	pub fn validates(&self, name: &str, text: &str) -> bool {
		let key = self.normalize(name);
		let validator = self.inner.lock().entries.get(&key).map(|entry| Arc::clone(&entry.validator));
		validator.is_some_and(|validator| validator(text))
	}

	/// Parses `text` with the format registered under `name`.
	pub fn parse(&self, name: &str, text: &str) -> Result<Box<dyn FormatValue>, ParseError> {
		let key = self.normalize(name);
		let parse = self.inner.lock().entries.get(&key).map(|entry| Arc::clone(&entry.parse));
		let parse = parse.ok_or_else(|| ParseError::UnknownFormat(name.to_string()))?;
		Ok(parse(text)?)
	}

	/// Parses `text` with the format registered under `name`, expecting an `F`.
	pub fn parse_as<F: Format>(&self, name: &str, text: &str) -> Result<F, ParseError> {
		let value = self.parse(name, text)?;
		let found = value.type_name();
		value.downcast::<F>().ok_or_else(|| ParseError::TypeMismatch {
			format: name.to_string(),
			expected: FormatType::of::<F>().name(),
			found,
		})
	}

	pub fn len(&self) -> usize {
		self.inner.lock().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.lock().entries.is_empty()
	}

	/// Snapshot of all entries in registration order.
	pub fn entries(&self) -> Vec<FormatInfo> {
		self.inner.lock().entries.values().map(FormatEntry::info).collect()
	}

	pub(crate) fn snapshot(&self) -> Vec<FormatEntry> {
		self.inner.lock().entries.values().cloned().collect()
	}

	/// Inserts a copied entry, re-keying it under this store's normalizer.
	pub(crate) fn seed(&self, mut entry: FormatEntry) {
		entry.key = self.normalize(&entry.name);
		self.inner.lock().upsert(entry);
	}

	/// Key and field decoder of the earliest entry registered for `ty`.
	pub(crate) fn decoder_for(&self, ty: TypeId) -> Option<(String, Routine)> {
		self.inner
			.lock()
			.first_for_type(ty)
			.map(|entry| (entry.key.clone(), Arc::clone(&entry.decode)))
	}

	/// Decoder for `Option<F>` or `Vec<F>` when `F` is registered.
	pub(crate) fn shaped_decoder_for(&self, ty: TypeId) -> Option<ShapedDecoder> {
		let inner = self.inner.lock();
		let (element, shape) = *inner.shapes.get(&ty)?;
		inner.first_for_type(element).map(|entry| ShapedDecoder {
			key: entry.key.clone(),
			shape,
			decode: Arc::clone(&entry.decode),
			wrap: entry.wrappers.wrap,
		})
	}

	/// Runs `f` over the entries in registration order while holding the lock.
	pub(crate) fn with_entries<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &FormatEntry>) -> R) -> R {
		let inner = self.inner.lock();
		f(&mut inner.entries.values())
	}
}

impl Default for FormatStore {
	fn default() -> Self {
		Self::new()
	}
}

impl Clone for FormatStore {
	fn clone(&self) -> Self {
		let store = Self::with_normalizer(Arc::clone(&self.normalizer));
		for entry in self.snapshot() {
			store.inner.lock().upsert(entry);
		}
		store
	}
}

impl std::fmt::Debug for FormatStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.lock();
		f.debug_struct("FormatStore").field("formats", &inner.entries.keys().collect::<Vec<_>>()).finish()
	}
}
