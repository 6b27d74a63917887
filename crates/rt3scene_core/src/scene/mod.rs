mod api;
mod decode;
mod dispatch;
mod document;
mod error;
mod extract;
mod node;
mod options;
mod params;
mod record;
mod schema;
mod value;

/// Renderer setup interface.
pub use api::SceneApi;
/// Attribute text decoding entry point.
pub use decode::decode_value;
/// Tag walk, diagnostics, and summary types.
pub use dispatch::{Diagnostic, Dispatcher, ParseSummary};
/// Whole-document entry points.
pub use document::{parse_file, parse_str};
/// Error and result aliases.
pub use error::{Result, SceneError};
/// Schema-driven attribute extraction.
pub use extract::{AttrOutcome, AttrReport, Extraction, extract, undeclared_attributes};
/// Document tree node abstraction.
pub use node::TagNode;
/// Parsing options.
pub use options::ParseOptions;
/// Parameter bundle types.
pub use params::{ParamEntry, ParamSet};
/// Recording setup API.
pub use record::{RecordingApi, SetupCall, SetupTag};
/// Static tag schema table.
pub use schema::{ParamSpec, SetupFn, TAG_SCHEMAS, TagAction, TagSchema, find_schema, normalize_tag_name};
/// Typed value representation.
pub use value::{Color, Normal3f, ParamValue, Point2i, Point3f, Real, Shape, Spectrum, Value, ValueKind, Vector3f, Vector3i};
