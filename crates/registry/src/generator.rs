//! Read-only registry metadata for code generators.

use std::any::Any;
use std::collections::BTreeMap;

use crate::FormatStore;
use crate::entry::FormatEntry;

/// What a code generator needs to know about registered formats.
///
/// Sequences follow registration order; maps are sorted by key so that
/// generated output is stable across runs.
pub trait GeneratorRegistry {
	/// Normalized key for `name` if a format is registered under it, else empty.
	fn normalized_name(&self, name: &str) -> String;

	/// Normalized names of all registered formats.
	fn names(&self) -> Vec<String>;

	/// Short type names of all registered formats, parallel to [`names`](Self::names).
	fn type_names(&self) -> Vec<String>;

	/// Normalized name to short type name.
	fn format_to_type(&self) -> BTreeMap<String, String>;

	/// Short type name to the normalized names registered for it, in registration order.
	fn type_to_formats(&self) -> BTreeMap<String, Vec<String>>;

	/// Source expression for the zero value of a registered type.
	///
	/// Returns the expression registered with the format, `<Type>::default()`
	/// when none was given, and an empty string for unknown types.
	fn zero_value_expression(&self, type_name: &str) -> String;

	/// Zero value expression of every registered type.
	fn zero_value_expressions(&self) -> BTreeMap<String, String>;

	/// JSON schema `(type, format)` for a value of a registered format type.
	///
	/// Values of unregistered types yield two empty strings.
	fn schema_info(&self, value: &dyn Any) -> (String, String);
}

fn zero_expression(entry: &FormatEntry) -> String {
	match &entry.zero_expression {
		Some(expression) => expression.clone(),
		None => format!("{}::default()", entry.ty.name()),
	}
}

impl GeneratorRegistry for FormatStore {
	fn normalized_name(&self, name: &str) -> String {
		let key = self.normalize(name);
		if self.contains_key(&key) { key } else { String::new() }
	}

	fn names(&self) -> Vec<String> {
		self.with_entries(|entries| entries.map(|entry| entry.key.clone()).collect())
	}

	fn type_names(&self) -> Vec<String> {
		self.with_entries(|entries| entries.map(|entry| entry.ty.name().to_string()).collect())
	}

	fn format_to_type(&self) -> BTreeMap<String, String> {
		self.with_entries(|entries| {
			entries
				.map(|entry| (entry.key.clone(), entry.ty.name().to_string()))
				.collect()
		})
	}

	fn type_to_formats(&self) -> BTreeMap<String, Vec<String>> {
		self.with_entries(|entries| {
			let mut map = BTreeMap::<String, Vec<String>>::new();
			for entry in entries {
				map.entry(entry.ty.name().to_string()).or_default().push(entry.key.clone());
			}
			map
		})
	}

	fn zero_value_expression(&self, type_name: &str) -> String {
		self.with_entries(|entries| {
			entries
				.filter(|entry| entry.ty.name() == type_name)
				.map(zero_expression)
				.next()
				.unwrap_or_default()
		})
	}

	fn zero_value_expressions(&self) -> BTreeMap<String, String> {
		self.with_entries(|entries| {
			let mut map = BTreeMap::new();
			for entry in entries {
				map.entry(entry.ty.name().to_string())
					.or_insert_with(|| zero_expression(entry));
			}
			map
		})
	}

	fn schema_info(&self, value: &dyn Any) -> (String, String) {
		let ty = value.type_id();
		match self.decoder_for(ty) {
			Some((key, _)) => ("string".to_string(), key),
			None => (String::new(), String::new()),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fmt;

	use pretty_assertions::assert_eq;
	use strfmt_formats::{DateTime, Email, Format, FormatError, HexColor, Uuid4};

	use super::*;
	use crate::FormatDef;

	#[derive(Debug, Clone, Default)]
	struct Tag(String);

	#[derive(Debug, Clone, Default)]
	struct Level(String);

	impl fmt::Display for Tag {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str(&self.0)
		}
	}

	impl fmt::Display for Level {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str(&self.0)
		}
	}

	impl Format for Tag {
		fn decode_text(text: &str) -> Result<Self, FormatError> {
			Ok(Self(text.to_string()))
		}
	}

	impl Format for Level {
		fn decode_text(text: &str) -> Result<Self, FormatError> {
			Ok(Self(text.to_string()))
		}
	}

	#[test]
	fn names_and_types_are_parallel() {
		let store = FormatStore::new();
		let names = store.names();
		let types = store.type_names();
		assert_eq!(names.len(), 26);
		assert_eq!(types.len(), names.len());
		assert_eq!((names[0].as_str(), types[0].as_str()), ("byte", "Base64"));
		let at = names.iter().position(|name| name == "datetime").unwrap();
		assert_eq!(types[at], "DateTime");
		assert_eq!(store.format_to_type().get("uuid4").map(String::as_str), Some("Uuid4"));
	}

	#[test]
	fn aliases_repeat_in_type_names() {
		let store = FormatStore::new();
		store.add::<Email>("mail", |_| true);
		assert_eq!(store.type_names().last().map(String::as_str), Some("Email"));
		assert_eq!(store.type_names().iter().filter(|ty| *ty == "Email").count(), 2);
	}

	#[test]
	fn type_to_formats_groups_aliases() {
		let store = FormatStore::new();
		store.add::<Email>("mail", |_| true);
		assert_eq!(store.type_to_formats()["Email"], vec!["email".to_string(), "mail".to_string()]);
	}

	#[test]
	fn zero_expressions() {
		let store = FormatStore::new();
		assert_eq!(store.zero_value_expression("DateTime"), "DateTime::default()");
		assert_eq!(store.zero_value_expression("HexColor"), "HexColor::new(\"#000000\")");
		assert_eq!(store.zero_value_expression("Nope"), "");
		let all = store.zero_value_expressions();
		assert_eq!(all.len(), 26);
		assert_eq!(all["RgbColor"], "RgbColor::new(\"rgb(0,0,0)\")");
	}

	#[test]
	fn zero_expressions_for_custom_types() {
		let store = FormatStore::empty();
		store.register("tag", FormatDef::<Tag>::new(|_| true).zero_expression("Tag::untagged()"));
		store.add::<Level>("level", |_| true);
		assert_eq!(store.zero_value_expression("Tag"), "Tag::untagged()");
		assert_eq!(store.zero_value_expression("Level"), "Level::default()");

		let all = store.zero_value_expressions();
		assert_eq!(all.len(), 2);
		assert_eq!(all["Tag"], "Tag::untagged()");
		assert_eq!(all["Level"], "Level::default()");

		store.add::<Tag>("tag", |_| true);
		assert_eq!(store.zero_value_expression("Tag"), "Tag::default()");
	}

	#[test]
	fn schema_info_for_registered_values() {
		let store = FormatStore::new();
		assert_eq!(store.schema_info(&DateTime::default()), ("string".to_string(), "datetime".to_string()));
		assert_eq!(store.schema_info(&Uuid4::default()), ("string".to_string(), "uuid4".to_string()));
		assert_eq!(store.schema_info(&HexColor::default()), ("string".to_string(), "hexcolor".to_string()));
		assert_eq!(store.schema_info(&42_u32), (String::new(), String::new()));
	}

	#[test]
	fn normalized_name_only_for_registered() {
		let store = FormatStore::new();
		assert_eq!(store.normalized_name("date-time"), "datetime");
		assert_eq!(store.normalized_name("Date_Time"), "datetime");
		assert_eq!(store.normalized_name("unknown"), "");
	}

	#[test]
	fn normalized_name_uses_store_normalizer() {
		let store = FormatStore::builder().normalizer(|name: &str| name.to_uppercase()).with_builtins().build();
		assert_eq!(store.normalized_name("date-time"), "DATE-TIME");
		assert_eq!(store.normalized_name("datetime"), "");
	}
}
