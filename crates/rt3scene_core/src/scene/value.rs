use std::fmt;

use serde::{Serialize, Serializer};

use crate::scene::{Result, SceneError};

/// Floating point type used for every real-valued component.
pub type Real = f32;

/// Element kind shared by single and array shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Signed integer.
	Int,
	/// Unsigned integer.
	UInt,
	/// Real number.
	Real,
	/// Verbatim text.
	String,
	/// Three-component real vector.
	Vector3f,
	/// Three-component integer vector.
	Vector3i,
	/// Three-component surface normal.
	Normal3f,
	/// Three-component point.
	Point3f,
	/// Two-component integer point.
	Point2i,
	/// RGB color.
	Color,
	/// RGB spectrum, or a uniform one written as a single token.
	Spectrum,
}

impl ValueKind {
	/// Short label used in diagnostics and JSON output.
	pub fn as_str(self) -> &'static str {
		match self {
			ValueKind::Int => "int",
			ValueKind::UInt => "uint",
			ValueKind::Real => "real",
			ValueKind::String => "string",
			ValueKind::Vector3f => "vec3f",
			ValueKind::Vector3i => "vec3i",
			ValueKind::Normal3f => "normal3f",
			ValueKind::Point3f => "point3f",
			ValueKind::Point2i => "point2i",
			ValueKind::Color => "color",
			ValueKind::Spectrum => "spectrum",
		}
	}

	/// Number of text tokens one canonical element occupies.
	pub fn arity(self) -> usize {
		match self {
			ValueKind::Int | ValueKind::UInt | ValueKind::Real | ValueKind::String => 1,
			ValueKind::Point2i => 2,
			ValueKind::Vector3f | ValueKind::Vector3i | ValueKind::Normal3f | ValueKind::Point3f | ValueKind::Color | ValueKind::Spectrum => 3,
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Discriminant of a [`Value`]: one element or a sequence of elements of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Exactly one element.
	Single(ValueKind),
	/// Any number of elements.
	Array(ValueKind),
}

impl Shape {
	/// Element kind regardless of arity.
	pub fn kind(self) -> ValueKind {
		match self {
			Shape::Single(kind) | Shape::Array(kind) => kind,
		}
	}

	/// Whether this is an array shape.
	pub fn is_array(self) -> bool {
		matches!(self, Shape::Array(_))
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Shape::Single(kind) => f.write_str(kind.as_str()),
			Shape::Array(kind) => write!(f, "{}[]", kind.as_str()),
		}
	}
}

impl Serialize for Shape {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// Direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Vector3f(pub [Real; 3]);

/// Integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vector3i(pub [i32; 3]);

/// Surface normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Normal3f(pub [Real; 3]);

/// Position in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Point3f(pub [Real; 3]);

/// Integer raster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Point2i(pub [i32; 2]);

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Color(pub [Real; 3]);

/// RGB spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Spectrum(pub [Real; 3]);

impl Spectrum {
	/// Spectrum with the same value on every channel.
	pub fn uniform(value: Real) -> Self {
		Self([value; 3])
	}
}

/// Decoded attribute value; the variant is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "value")]
pub enum Value {
	/// Signed integer.
	#[serde(rename = "int")]
	Int(i32),
	/// Unsigned integer.
	#[serde(rename = "uint")]
	UInt(u32),
	/// Real number.
	#[serde(rename = "real")]
	Real(Real),
	/// Verbatim text.
	#[serde(rename = "string")]
	String(String),
	/// Direction vector.
	#[serde(rename = "vec3f")]
	Vector3f(Vector3f),
	/// Integer vector.
	#[serde(rename = "vec3i")]
	Vector3i(Vector3i),
	/// Surface normal.
	#[serde(rename = "normal3f")]
	Normal3f(Normal3f),
	/// Point.
	#[serde(rename = "point3f")]
	Point3f(Point3f),
	/// Integer raster point.
	#[serde(rename = "point2i")]
	Point2i(Point2i),
	/// RGB color.
	#[serde(rename = "color")]
	Color(Color),
	/// RGB spectrum.
	#[serde(rename = "spectrum")]
	Spectrum(Spectrum),
	/// Sequence of signed integer elements.
	#[serde(rename = "int[]")]
	IntArray(Vec<i32>),
	/// Sequence of unsigned integer elements.
	#[serde(rename = "uint[]")]
	UIntArray(Vec<u32>),
	/// Sequence of real number elements.
	#[serde(rename = "real[]")]
	RealArray(Vec<Real>),
	/// Sequence of verbatim text elements.
	#[serde(rename = "string[]")]
	StringArray(Vec<String>),
	/// Sequence of direction vector elements.
	#[serde(rename = "vec3f[]")]
	Vector3fArray(Vec<Vector3f>),
	/// Sequence of integer vector elements.
	#[serde(rename = "vec3i[]")]
	Vector3iArray(Vec<Vector3i>),
	/// Sequence of surface normal elements.
	#[serde(rename = "normal3f[]")]
	Normal3fArray(Vec<Normal3f>),
	/// Sequence of point elements.
	#[serde(rename = "point3f[]")]
	Point3fArray(Vec<Point3f>),
	/// Sequence of integer raster point elements.
	#[serde(rename = "point2i[]")]
	Point2iArray(Vec<Point2i>),
	/// Sequence of RGB colors.
	#[serde(rename = "color[]")]
	ColorArray(Vec<Color>),
	/// Sequence of RGB spectra.
	#[serde(rename = "spectrum[]")]
	SpectrumArray(Vec<Spectrum>),
}

impl Value {
	/// Shape discriminant of the stored payload.
	pub fn shape(&self) -> Shape {
		use ValueKind as K;

		match self {
			Value::Int(_) => Shape::Single(K::Int),
			Value::UInt(_) => Shape::Single(K::UInt),
			Value::Real(_) => Shape::Single(K::Real),
			Value::String(_) => Shape::Single(K::String),
			Value::Vector3f(_) => Shape::Single(K::Vector3f),
			Value::Vector3i(_) => Shape::Single(K::Vector3i),
			Value::Normal3f(_) => Shape::Single(K::Normal3f),
			Value::Point3f(_) => Shape::Single(K::Point3f),
			Value::Point2i(_) => Shape::Single(K::Point2i),
			Value::Color(_) => Shape::Single(K::Color),
			Value::Spectrum(_) => Shape::Single(K::Spectrum),
			Value::IntArray(_) => Shape::Array(K::Int),
			Value::UIntArray(_) => Shape::Array(K::UInt),
			Value::RealArray(_) => Shape::Array(K::Real),
			Value::StringArray(_) => Shape::Array(K::String),
			Value::Vector3fArray(_) => Shape::Array(K::Vector3f),
			Value::Vector3iArray(_) => Shape::Array(K::Vector3i),
			Value::Normal3fArray(_) => Shape::Array(K::Normal3f),
			Value::Point3fArray(_) => Shape::Array(K::Point3f),
			Value::Point2iArray(_) => Shape::Array(K::Point2i),
			Value::ColorArray(_) => Shape::Array(K::Color),
			Value::SpectrumArray(_) => Shape::Array(K::Spectrum),
		}
	}

	/// Borrow the payload as `T`, failing when the shape differs.
	pub fn get<T: ParamValue>(&self) -> Result<&T> {
		T::from_value(self).ok_or_else(|| SceneError::TypeMismatch {
			name: String::new(),
			expected: T::SHAPE,
			got: self.shape(),
		})
	}

	/// Render the value in the attribute text encoding it decodes from.
	pub fn to_text(&self) -> String {
		match self {
			Value::Int(value) => value.to_string(),
			Value::UInt(value) => value.to_string(),
			Value::Real(value) => value.to_string(),
			Value::String(value) => value.clone(),
			Value::Vector3f(Vector3f(items))
			| Value::Normal3f(Normal3f(items))
			| Value::Point3f(Point3f(items))
			| Value::Color(Color(items))
			| Value::Spectrum(Spectrum(items)) => join_tokens(items),
			Value::Vector3i(Vector3i(items)) => join_tokens(items),
			Value::Point2i(Point2i(items)) => join_tokens(items),
			Value::IntArray(items) => join_tokens(items),
			Value::UIntArray(items) => join_tokens(items),
			Value::RealArray(items) => join_tokens(items),
			Value::StringArray(items) => items.join(" "),
			Value::Vector3fArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
			Value::Vector3iArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
			Value::Normal3fArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
			Value::Point3fArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
			Value::Point2iArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
			Value::ColorArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
			Value::SpectrumArray(items) => join_groups(items.iter().map(|item| &item.0[..])),
		}
	}
}

fn join_tokens<T: ToString>(items: &[T]) -> String {
	items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn join_groups<'a, T: ToString + 'a>(groups: impl Iterator<Item = &'a [T]>) -> String {
	groups.map(join_tokens).collect::<Vec<_>>().join(" ")
}

/// Payload types that can be stored in and borrowed back out of a [`Value`].
pub trait ParamValue: Sized {
	/// Shape this payload type is stored under.
	const SHAPE: Shape;

	/// Borrow the payload when `value` has [`Self::SHAPE`].
	fn from_value(value: &Value) -> Option<&Self>;

	/// Wrap the payload in its value variant.
	fn into_value(self) -> Value;
}

macro_rules! param_value {
	($ty:ty, $variant:ident, $shape:expr) => {
		impl ParamValue for $ty {
			const SHAPE: Shape = $shape;

			fn from_value(value: &Value) -> Option<&Self> {
				match value {
					Value::$variant(inner) => Some(inner),
					_ => None,
				}
			}

			fn into_value(self) -> Value {
				Value::$variant(self)
			}
		}
	};
}

param_value!(i32, Int, Shape::Single(ValueKind::Int));
param_value!(u32, UInt, Shape::Single(ValueKind::UInt));
param_value!(Real, Real, Shape::Single(ValueKind::Real));
param_value!(String, String, Shape::Single(ValueKind::String));
param_value!(Vector3f, Vector3f, Shape::Single(ValueKind::Vector3f));
param_value!(Vector3i, Vector3i, Shape::Single(ValueKind::Vector3i));
param_value!(Normal3f, Normal3f, Shape::Single(ValueKind::Normal3f));
param_value!(Point3f, Point3f, Shape::Single(ValueKind::Point3f));
param_value!(Point2i, Point2i, Shape::Single(ValueKind::Point2i));
param_value!(Color, Color, Shape::Single(ValueKind::Color));
param_value!(Spectrum, Spectrum, Shape::Single(ValueKind::Spectrum));
param_value!(Vec<i32>, IntArray, Shape::Array(ValueKind::Int));
param_value!(Vec<u32>, UIntArray, Shape::Array(ValueKind::UInt));
param_value!(Vec<Real>, RealArray, Shape::Array(ValueKind::Real));
param_value!(Vec<String>, StringArray, Shape::Array(ValueKind::String));
param_value!(Vec<Vector3f>, Vector3fArray, Shape::Array(ValueKind::Vector3f));
param_value!(Vec<Vector3i>, Vector3iArray, Shape::Array(ValueKind::Vector3i));
param_value!(Vec<Normal3f>, Normal3fArray, Shape::Array(ValueKind::Normal3f));
param_value!(Vec<Point3f>, Point3fArray, Shape::Array(ValueKind::Point3f));
param_value!(Vec<Point2i>, Point2iArray, Shape::Array(ValueKind::Point2i));
param_value!(Vec<Color>, ColorArray, Shape::Array(ValueKind::Color));
param_value!(Vec<Spectrum>, SpectrumArray, Shape::Array(ValueKind::Spectrum));
