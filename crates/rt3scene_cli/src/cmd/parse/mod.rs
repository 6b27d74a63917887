use std::path::PathBuf;

use rt3scene::scene::{ParseOptions, ParseSummary, RecordingApi, Result, SetupCall, parse_file};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Scene description file.
	pub path: PathBuf,
	/// Print calls and diagnostics as JSON.
	#[arg(long)]
	pub json: bool,
	/// Also report attributes no tag schema declares.
	#[arg(long)]
	pub strict_attrs: bool,
	/// Maximum nesting depth of world elements.
	#[arg(long)]
	pub max_depth: Option<u32>,
}

/// Parse a scene into a recording setup API and print what it received.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		json,
		strict_attrs,
		max_depth,
	} = args;

	let mut options = if strict_attrs { ParseOptions::strict() } else { ParseOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let mut api = RecordingApi::new();
	let summary = parse_file(&path, &mut api, &options)?;
	let calls = api.into_calls();

	if json {
		emit_json(&ParseJson {
			source: path.display().to_string(),
			summary: &summary,
			calls: &calls,
		});
		return Ok(());
	}

	print_text(&path, &summary, &calls);
	Ok(())
}

fn print_text(path: &std::path::Path, summary: &ParseSummary, calls: &[SetupCall]) {
	println!("source: {}", path.display());
	println!("tags_dispatched: {}", summary.tags_dispatched);
	println!("setup_calls: {}", summary.setup_calls);

	for call in calls {
		println!("{}", call.tag.as_str());
		let Some(params) = &call.params else {
			continue;
		};
		for entry in params.iter() {
			println!("  {}: {} = {}", entry.name, entry.value.shape(), entry.value.to_text());
		}
	}

	println!("diagnostics: {}", summary.diagnostics.len());
	for item in &summary.diagnostics {
		println!("  {item}");
	}
}

#[derive(serde::Serialize)]
struct ParseJson<'a> {
	source: String,
	summary: &'a ParseSummary,
	calls: &'a [SetupCall],
}
