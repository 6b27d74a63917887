use std::fs;
use std::path::Path;

use crate::scene::{Dispatcher, ParseOptions, ParseSummary, Result, SceneApi, SceneError, TagNode};

/// Read a scene file and dispatch its tags to `api`.
pub fn parse_file(path: impl AsRef<Path>, api: &mut dyn SceneApi, options: &ParseOptions) -> Result<ParseSummary> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	parse_str(&path.display().to_string(), &text, api, options)
}

/// Parse scene text and dispatch its tags to `api`.
///
/// `source_name` only labels diagnostics. Unreadable XML, a missing root or
/// a root without child tags abort before any setup call is made.
pub fn parse_str(source_name: &str, text: &str, api: &mut dyn SceneApi, options: &ParseOptions) -> Result<ParseSummary> {
	let xml_options = roxmltree::ParsingOptions {
		allow_dtd: true,
		..roxmltree::ParsingOptions::default()
	};
	let doc = roxmltree::Document::parse_with_options(text, xml_options).map_err(|err| match err {
		roxmltree::Error::NoRootNode => SceneError::MissingRoot {
			source_name: source_name.to_owned(),
		},
		other => SceneError::Xml {
			source_name: source_name.to_owned(),
			message: other.to_string(),
		},
	})?;

	let root = doc.root_element();
	let mut children = root.child_tags().peekable();
	if children.peek().is_none() {
		return Err(SceneError::EmptyScene {
			source_name: source_name.to_owned(),
			root: root.tag().to_owned(),
		});
	}

	tracing::debug!(source = source_name, root = root.tag(), "parsing scene");

	let mut dispatcher = Dispatcher::new(api, options);
	dispatcher.check_root(root.tag());
	dispatcher.dispatch_siblings(children, 0)?;
	Ok(dispatcher.finish())
}
