use serde::Serialize;

use crate::scene::{ParamSet, SceneApi};

/// Setup API entry point a recorded call went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupTag {
	/// [`SceneApi::background`].
	Background,
	/// [`SceneApi::film`].
	Film,
	/// [`SceneApi::camera`].
	Camera,
	/// [`SceneApi::look_at`].
	LookAt,
	/// [`SceneApi::material`].
	Material,
	/// [`SceneApi::object`].
	Object,
	/// [`SceneApi::light_source`].
	LightSource,
	/// [`SceneApi::include`].
	Include,
	/// [`SceneApi::world_begin`].
	WorldBegin,
	/// [`SceneApi::world_end`].
	WorldEnd,
}

impl SetupTag {
	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			SetupTag::Background => "background",
			SetupTag::Film => "film",
			SetupTag::Camera => "camera",
			SetupTag::LookAt => "look_at",
			SetupTag::Material => "material",
			SetupTag::Object => "object",
			SetupTag::LightSource => "light_source",
			SetupTag::Include => "include",
			SetupTag::WorldBegin => "world_begin",
			SetupTag::WorldEnd => "world_end",
		}
	}
}

/// One recorded setup call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupCall {
	/// Entry point called.
	pub tag: SetupTag,
	/// Parameters handed over; `None` for scope calls.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub params: Option<ParamSet>,
}

/// [`SceneApi`] that keeps every call it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingApi {
	calls: Vec<SetupCall>,
}

impl RecordingApi {
	/// Create an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Calls recorded so far.
	pub fn calls(&self) -> &[SetupCall] {
		&self.calls
	}

	/// Entry points called so far, in order.
	pub fn tags(&self) -> Vec<SetupTag> {
		self.calls.iter().map(|call| call.tag).collect()
	}

	/// Consume the recorder, returning its calls.
	pub fn into_calls(self) -> Vec<SetupCall> {
		self.calls
	}

	fn push(&mut self, tag: SetupTag, params: Option<ParamSet>) {
		tracing::debug!(call = tag.as_str(), params = params.as_ref().map_or(0, ParamSet::len), "setup call");
		self.calls.push(SetupCall { tag, params });
	}
}

impl SceneApi for RecordingApi {
	fn background(&mut self, params: ParamSet) {
		self.push(SetupTag::Background, Some(params));
	}

	fn film(&mut self, params: ParamSet) {
		self.push(SetupTag::Film, Some(params));
	}

	fn camera(&mut self, params: ParamSet) {
		self.push(SetupTag::Camera, Some(params));
	}

	fn look_at(&mut self, params: ParamSet) {
		self.push(SetupTag::LookAt, Some(params));
	}

	fn material(&mut self, params: ParamSet) {
		self.push(SetupTag::Material, Some(params));
	}

	fn object(&mut self, params: ParamSet) {
		self.push(SetupTag::Object, Some(params));
	}

	fn light_source(&mut self, params: ParamSet) {
		self.push(SetupTag::LightSource, Some(params));
	}

	fn include(&mut self, params: ParamSet) {
		self.push(SetupTag::Include, Some(params));
	}

	fn world_begin(&mut self) {
		self.push(SetupTag::WorldBegin, None);
	}

	fn world_end(&mut self) {
		self.push(SetupTag::WorldEnd, None);
	}
}
