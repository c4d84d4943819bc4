//! Registry entries and the definitions they are built from.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use strfmt_formats::{Format, FormatError, FormatValue, short_type_name};

/// Predicate deciding whether a string conforms to a format.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

pub(crate) type Routine = Arc<dyn Fn(&str) -> Result<Box<dyn FormatValue>, FormatError> + Send + Sync>;

/// Collects decoded values of one format type into the container `Shape` names.
pub(crate) type Wrap = fn(Shape, Vec<Box<dyn FormatValue>>) -> Box<dyn Any + Send>;

/// Container around a format type that field decoding sees through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
	/// `Option<F>`
	Optional,
	/// `Vec<F>`
	List,
}

/// Container type ids of a format type, and how to build them.
#[derive(Clone, Copy)]
pub(crate) struct Wrappers {
	pub optional: TypeId,
	pub list: TypeId,
	pub wrap: Wrap,
}

impl Wrappers {
	fn of<F: Format>() -> Self {
		Self {
			optional: TypeId::of::<Option<F>>(),
			list: TypeId::of::<Vec<F>>(),
			wrap: wrap::<F>,
		}
	}
}

fn wrap<F: Format>(shape: Shape, values: Vec<Box<dyn FormatValue>>) -> Box<dyn Any + Send> {
	let mut values = values.into_iter().filter_map(|value| value.downcast::<F>());
	match shape {
		Shape::Optional => Box::new(values.next()),
		Shape::List => Box::new(values.collect::<Vec<F>>()),
	}
}

/// Runtime identity of a format type.
///
/// Equality and hashing use the [`TypeId`] only; the name is carried for
/// display and for generator metadata.
#[derive(Clone, Copy)]
pub struct FormatType {
	id: TypeId,
	name: &'static str,
}

impl FormatType {
	pub fn of<F: Format>() -> Self {
		Self {
			id: TypeId::of::<F>(),
			name: short_type_name(std::any::type_name::<F>()),
		}
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Short type name, e.g. `"DateTime"`.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for FormatType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for FormatType {}

impl Hash for FormatType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for FormatType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for FormatType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Everything needed to register a format type under a name.
///
/// ```ignore
/// let def = FormatDef::<HexColor>::new(is_hex_color).zero_expression("HexColor::new(\"#000000\")");
/// store.register("hexcolor", def);
/// ```
pub struct FormatDef<F: Format> {
	validator: Validator,
	decode: Option<Routine>,
	zero_expression: Option<String>,
	_format: PhantomData<fn() -> F>,
}

impl<F: Format> FormatDef<F> {
	pub fn new(validator: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
		Self {
			validator: Arc::new(validator),
			decode: None,
			zero_expression: None,
			_format: PhantomData,
		}
	}

	/// Source expression a code generator emits for the zero value of `F`.
	///
	/// Without one, generators fall back to `<Type>::default()`.
	pub fn zero_expression(mut self, expression: impl Into<String>) -> Self {
		self.zero_expression = Some(expression.into());
		self
	}

	/// Overrides how a string field is decoded into `F` by the decode hook.
	///
	/// Defaults to [`Format::decode_field`].
	pub fn decode_with(mut self, decode: impl Fn(&str) -> Result<F, FormatError> + Send + Sync + 'static) -> Self {
		self.decode = Some(Arc::new(move |text: &str| decode(text).map(boxed)));
		self
	}

	pub(crate) fn into_entry(self, key: String, name: &str) -> FormatEntry {
		let decode: Routine = match self.decode {
			Some(decode) => decode,
			None => Arc::new(|text: &str| F::decode_field(text).map(boxed)),
		};
		FormatEntry {
			key,
			name: name.to_string(),
			ty: FormatType::of::<F>(),
			validator: self.validator,
			parse: Arc::new(|text: &str| F::decode_text(text).map(boxed)),
			decode,
			wrappers: Wrappers::of::<F>(),
			zero_expression: self.zero_expression,
		}
	}
}

fn boxed<F: Format>(value: F) -> Box<dyn FormatValue> {
	Box::new(value)
}

/// A registered format.
#[derive(Clone)]
pub(crate) struct FormatEntry {
	/// Normalized lookup key.
	pub key: String,
	/// Name as first registered.
	pub name: String,
	pub ty: FormatType,
	pub validator: Validator,
	pub parse: Routine,
	pub decode: Routine,
	pub wrappers: Wrappers,
	pub zero_expression: Option<String>,
}

impl FormatEntry {
	/// Takes over everything except the originally registered name.
	pub fn replace_with(&mut self, other: FormatEntry) {
		self.ty = other.ty;
		self.validator = other.validator;
		self.parse = other.parse;
		self.decode = other.decode;
		self.wrappers = other.wrappers;
		self.zero_expression = other.zero_expression;
	}

	pub fn info(&self) -> FormatInfo {
		FormatInfo {
			key: self.key.clone(),
			name: self.name.clone(),
			ty: self.ty,
			zero_expression: self.zero_expression.clone(),
		}
	}
}

impl fmt::Debug for FormatEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormatEntry")
			.field("key", &self.key)
			.field("name", &self.name)
			.field("ty", &self.ty)
			.finish_non_exhaustive()
	}
}

/// Snapshot of a registered format, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
	pub key: String,
	pub name: String,
	pub ty: FormatType,
	pub zero_expression: Option<String>,
}
