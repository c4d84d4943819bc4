//! Registry of named string formats.
//!
//! A [`FormatStore`] maps format names (`"date-time"`, `"uuid4"`, ...) to the
//! [`Format`] type implementing them, a validator predicate, and the routines
//! that parse text into typed values. It is the substrate a schema-driven
//! toolchain queries to validate strings, parse them, and decode loosely-typed
//! maps into typed structures.
//!
//! # Layout
//!
//! - [`normalize`]: canonical lookup keys for format names
//! - [`FormatStore`] / [`FormatStoreBuilder`]: the mutex-guarded catalogue
//! - [`decode`]: the hook a generic map-to-structure decoder calls per field
//! - [`GeneratorRegistry`]: read-only metadata for code generators
//!
//! # Example
//!
//! ```ignore
//! use strfmt_registry::{FormatStore, formats::Email};
//!
//! let store = FormatStore::new();
//! assert!(store.validates("email", "someone@example.org"));
//! let email = store.parse_as::<Email>("email", "someone@example.org")?;
//! ```

mod builtins;
pub mod decode;
mod entry;
mod error;
pub mod generator;
pub mod normalize;
mod store;

pub use decode::{Decode, DecodeHook, FieldDecoder, Hooked};
pub use entry::{FormatDef, FormatInfo, FormatType, Validator};
pub use error::{DecodeError, ParseError};
pub use generator::GeneratorRegistry;
pub use normalize::{NameNormalizer, default_normalizer};
pub use store::{FormatStore, FormatStoreBuilder};
pub use strfmt_formats as formats;
pub use strfmt_formats::{Format, FormatError, FormatValue};
