use crate::scene::ParamSet;

/// Renderer setup interface receiving one call per recognized tag.
///
/// Implementors own the scene state; the dispatcher only hands over
/// finished parameter sets and never inspects what happens to them.
pub trait SceneApi {
	/// Background color or texture setup.
	fn background(&mut self, params: ParamSet);
	/// Film (image output) setup.
	fn film(&mut self, params: ParamSet);
	/// Camera projection setup.
	fn camera(&mut self, params: ParamSet);
	/// Camera frame setup.
	fn look_at(&mut self, params: ParamSet);
	/// Material definition.
	fn material(&mut self, params: ParamSet);
	/// Geometric object definition.
	fn object(&mut self, params: ParamSet);
	/// Light source definition.
	fn light_source(&mut self, params: ParamSet);
	/// Reference to another scene file.
	fn include(&mut self, params: ParamSet);
	/// Open the world block.
	fn world_begin(&mut self);
	/// Close the world block.
	fn world_end(&mut self);
}
