use rt3scene::scene::{Result, Shape, TAG_SCHEMAS, TagAction};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Print the table as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Print every recognized tag with its declared attributes.
pub fn run(args: Args) -> Result<()> {
	if args.json {
		let tags: Vec<_> = TAG_SCHEMAS
			.iter()
			.map(|schema| TagJson {
				name: schema.name,
				action: action_label(schema.action),
				params: schema
					.params
					.iter()
					.map(|spec| ParamJson {
						name: spec.name,
						shape: spec.shape,
						kind: spec.shape.kind().as_str(),
						array: spec.shape.is_array(),
					})
					.collect(),
			})
			.collect();
		emit_json(&tags);
		return Ok(());
	}

	for schema in TAG_SCHEMAS {
		println!("{} ({})", schema.name, action_label(schema.action));
		for spec in schema.params {
			println!("  {}: {}", spec.name, spec.shape);
		}
	}
	Ok(())
}

fn action_label(action: TagAction) -> &'static str {
	match action {
		TagAction::Setup(_) => "setup",
		TagAction::WorldBegin => "world_begin",
		TagAction::WorldEnd => "world_end",
		TagAction::World => "world_scope",
	}
}

#[derive(serde::Serialize)]
struct ParamJson {
	name: &'static str,
	shape: Shape,
	kind: &'static str,
	array: bool,
}

#[derive(serde::Serialize)]
struct TagJson {
	name: &'static str,
	action: &'static str,
	params: Vec<ParamJson>,
}
