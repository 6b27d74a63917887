use std::path::PathBuf;

use thiserror::Error;

use crate::scene::{Shape, ValueKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors produced while loading, decoding, and dispatching scene documents.
#[derive(Debug, Error)]
pub enum SceneError {
	/// Scene source could not be read.
	#[error("the file \"{path}\" is not available: {source}")]
	Io {
		/// Requested source path.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Scene source is not a well-formed XML document.
	#[error("the scene \"{source_name}\" contains an invalid RT3 scene: {message}")]
	Xml {
		/// Source identifier used in diagnostics.
		source_name: String,
		/// Reader error message.
		message: String,
	},
	/// Document has no root element.
	#[error("no root tag found in scene \"{source_name}\"")]
	MissingRoot {
		/// Source identifier used in diagnostics.
		source_name: String,
	},
	/// Root element has no child tags.
	#[error("no child tags found inside the \"{root}\" tag of \"{source_name}\", empty scene file?")]
	EmptyScene {
		/// Source identifier used in diagnostics.
		source_name: String,
		/// Root tag name as written.
		root: String,
	},
	/// Nested scopes exceeded the configured depth.
	#[error("scene nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Attribute text was empty where a value was required.
	#[error("empty value")]
	EmptyValue,
	/// Token could not be parsed as the expected numeric type.
	#[error("invalid {expected} token {token:?}")]
	InvalidNumber {
		/// Offending token.
		token: String,
		/// Numeric type label.
		expected: &'static str,
	},
	/// Real token parsed to infinity or NaN.
	#[error("non-finite real {token:?}")]
	NonFiniteReal {
		/// Offending token.
		token: String,
	},
	/// Wrong number of components for a composite value.
	#[error("{kind} expects {expected} components, got {got}")]
	ArityMismatch {
		/// Composite kind being decoded.
		kind: ValueKind,
		/// Accepted component count description.
		expected: &'static str,
		/// Component count found.
		got: usize,
	},
	/// Typed retrieval under the wrong shape.
	#[error("parameter {name:?} has shape {got}, requested {expected}")]
	TypeMismatch {
		/// Parameter name, or empty for a detached value.
		name: String,
		/// Requested shape.
		expected: Shape,
		/// Stored shape.
		got: Shape,
	},
	/// String parameter could not be read as a boolean flag.
	#[error("parameter {name:?} is not a boolean flag: {value:?}")]
	InvalidFlag {
		/// Parameter name.
		name: String,
		/// Stored text.
		value: String,
	},
}
