use crate::scene::{ParamSet, SceneApi, Shape, ValueKind};

/// One declared attribute: expected shape plus attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
	/// Shape the attribute text decodes into.
	pub shape: Shape,
	/// Attribute name as written in the scene file.
	pub name: &'static str,
}

impl ParamSpec {
	/// Declare a single-element attribute.
	pub const fn single(kind: ValueKind, name: &'static str) -> Self {
		Self {
			shape: Shape::Single(kind),
			name,
		}
	}

	/// Declare an array attribute.
	pub const fn array(kind: ValueKind, name: &'static str) -> Self {
		Self {
			shape: Shape::Array(kind),
			name,
		}
	}
}

/// Setup call receiving an extracted parameter set.
pub type SetupFn = fn(&mut dyn SceneApi, ParamSet);

/// What the dispatcher does once a tag matched.
#[derive(Clone, Copy)]
pub enum TagAction {
	/// Extract the declared attributes and forward them.
	Setup(SetupFn),
	/// Open the world scope.
	WorldBegin,
	/// Close the world scope.
	WorldEnd,
	/// World scope written as an element wrapping its content.
	World,
}

/// Static declaration of one recognized tag.
#[derive(Clone, Copy)]
pub struct TagSchema {
	/// Normalized (lowercase) tag name.
	pub name: &'static str,
	/// Attributes extracted from the tag, in declaration order.
	pub params: &'static [ParamSpec],
	/// Dispatch action.
	pub action: TagAction,
}

use ValueKind as K;

const BACKGROUND_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::String, "type"),
	ParamSpec::single(K::String, "filename"),
	ParamSpec::single(K::String, "mapping"),
	ParamSpec::single(K::Color, "color"),
	ParamSpec::single(K::Color, "tl"),
	ParamSpec::single(K::Color, "tr"),
	ParamSpec::single(K::Color, "bl"),
	ParamSpec::single(K::Color, "br"),
];

const FILM_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::String, "type"),
	ParamSpec::single(K::String, "filename"),
	ParamSpec::single(K::String, "img_type"),
	ParamSpec::single(K::Int, "x_res"),
	ParamSpec::single(K::Int, "y_res"),
	ParamSpec::array(K::Real, "crop_window"),
	// boolean, read through ParamSet::get_flag
	ParamSpec::single(K::String, "gamma_corrected"),
];

const CAMERA_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::String, "type"),
	ParamSpec::single(K::Real, "fovy"),
	ParamSpec::array(K::Real, "screen_window"),
];

const LOOKAT_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::Point3f, "look_from"),
	ParamSpec::single(K::Point3f, "look_at"),
	ParamSpec::single(K::Vector3f, "up"),
];

const MATERIAL_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::String, "type"),
	ParamSpec::single(K::String, "name"),
	ParamSpec::single(K::Color, "color"),
	ParamSpec::single(K::Spectrum, "diffuse"),
	ParamSpec::single(K::Spectrum, "specular"),
	ParamSpec::single(K::Real, "glossiness"),
];

const OBJECT_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::String, "type"),
	ParamSpec::single(K::String, "name"),
	ParamSpec::single(K::Real, "radius"),
	ParamSpec::single(K::Point3f, "center"),
	ParamSpec::array(K::Point3f, "vertices"),
	ParamSpec::array(K::Normal3f, "normals"),
	ParamSpec::array(K::Int, "indices"),
];

const LIGHT_SOURCE_PARAMS: &[ParamSpec] = &[
	ParamSpec::single(K::String, "type"),
	ParamSpec::single(K::Spectrum, "I"),
	ParamSpec::single(K::Spectrum, "L"),
	ParamSpec::single(K::Point3f, "from"),
	ParamSpec::single(K::Point3f, "to"),
	ParamSpec::single(K::Vector3f, "scale"),
	ParamSpec::single(K::Real, "cutoff"),
	ParamSpec::single(K::Real, "falloff"),
];

const INCLUDE_PARAMS: &[ParamSpec] = &[ParamSpec::single(K::String, "filename")];

/// Every tag the dispatcher recognizes.
pub static TAG_SCHEMAS: &[TagSchema] = &[
	TagSchema {
		name: "background",
		params: BACKGROUND_PARAMS,
		action: TagAction::Setup(setup_background),
	},
	TagSchema {
		name: "film",
		params: FILM_PARAMS,
		action: TagAction::Setup(setup_film),
	},
	TagSchema {
		name: "camera",
		params: CAMERA_PARAMS,
		action: TagAction::Setup(setup_camera),
	},
	TagSchema {
		name: "lookat",
		params: LOOKAT_PARAMS,
		action: TagAction::Setup(setup_look_at),
	},
	TagSchema {
		name: "material",
		params: MATERIAL_PARAMS,
		action: TagAction::Setup(setup_material),
	},
	TagSchema {
		name: "object",
		params: OBJECT_PARAMS,
		action: TagAction::Setup(setup_object),
	},
	TagSchema {
		name: "light_source",
		params: LIGHT_SOURCE_PARAMS,
		action: TagAction::Setup(setup_light_source),
	},
	TagSchema {
		name: "include",
		params: INCLUDE_PARAMS,
		action: TagAction::Setup(setup_include),
	},
	TagSchema {
		name: "world_begin",
		params: &[],
		action: TagAction::WorldBegin,
	},
	TagSchema {
		name: "world_end",
		params: &[],
		action: TagAction::WorldEnd,
	},
	TagSchema {
		name: "world",
		params: &[],
		action: TagAction::World,
	},
];

/// ASCII-lowercase a tag name for schema lookup; non-ASCII characters are kept as written.
pub fn normalize_tag_name(raw: &str) -> String {
	raw.to_ascii_lowercase()
}

/// Exact-match lookup of an already normalized tag name.
pub fn find_schema(normalized: &str) -> Option<&'static TagSchema> {
	TAG_SCHEMAS.iter().find(|schema| schema.name == normalized)
}

fn setup_background(api: &mut dyn SceneApi, params: ParamSet) {
	api.background(params);
}

fn setup_film(api: &mut dyn SceneApi, params: ParamSet) {
	api.film(params);
}

fn setup_camera(api: &mut dyn SceneApi, params: ParamSet) {
	api.camera(params);
}

fn setup_look_at(api: &mut dyn SceneApi, params: ParamSet) {
	api.look_at(params);
}

fn setup_material(api: &mut dyn SceneApi, params: ParamSet) {
	api.material(params);
}

fn setup_object(api: &mut dyn SceneApi, params: ParamSet) {
	api.object(params);
}

fn setup_light_source(api: &mut dyn SceneApi, params: ParamSet) {
	api.light_source(params);
}

fn setup_include(api: &mut dyn SceneApi, params: ParamSet) {
	api.include(params);
}
