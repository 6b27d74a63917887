use std::fmt;

use serde::Serialize;

use crate::scene::{
	AttrOutcome, ParseOptions, Result, SceneApi, SceneError, Shape, TagAction, TagNode, extract, find_schema, normalize_tag_name,
	undeclared_attributes,
};

/// Recoverable problem found while walking a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
	/// Tag name has no schema; the element was skipped.
	UnknownTag {
		/// Normalized tag name.
		tag: String,
		/// Nesting level.
		depth: u32,
	},
	/// Declared attribute present but not decodable.
	MalformedAttribute {
		/// Normalized tag name.
		tag: String,
		/// Attribute name.
		attribute: String,
		/// Declared shape.
		shape: Shape,
		/// Decoder error message.
		reason: String,
	},
	/// Attribute present on the element but not declared by its schema.
	UnknownAttribute {
		/// Normalized tag name.
		tag: String,
		/// Attribute name.
		attribute: String,
	},
	/// World scope opened twice, closed while not open, or never closed.
	ScopeMismatch {
		/// Normalized tag name.
		tag: String,
		/// Nesting level.
		depth: u32,
		/// Short description.
		message: &'static str,
	},
	/// Root tag differs from the configured one.
	UnexpectedRoot {
		/// Configured root name.
		expected: String,
		/// Root name found.
		found: String,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::UnknownTag { tag, depth } => write!(f, "undefined tag `{tag}` found at level {depth}"),
			Diagnostic::MalformedAttribute {
				tag,
				attribute,
				shape,
				reason,
			} => write!(f, "tag `{tag}`: attribute `{attribute}` is not a valid {shape}: {reason}"),
			Diagnostic::UnknownAttribute { tag, attribute } => write!(f, "tag `{tag}`: attribute `{attribute}` is not declared"),
			Diagnostic::ScopeMismatch { tag, depth, message } => write!(f, "tag `{tag}` at level {depth}: {message}"),
			Diagnostic::UnexpectedRoot { expected, found } => write!(f, "root tag `{found}` is not `{expected}`"),
		}
	}
}

/// Outcome of a completed walk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseSummary {
	/// Elements that matched a schema.
	pub tags_dispatched: usize,
	/// Setup API calls issued.
	pub setup_calls: usize,
	/// Recoverable problems, in encounter order.
	pub diagnostics: Vec<Diagnostic>,
}

/// Depth-first walker forwarding recognized tags to a [`SceneApi`].
pub struct Dispatcher<'a> {
	api: &'a mut dyn SceneApi,
	options: &'a ParseOptions,
	/// Open world scopes; nested `world` elements stack on top of `world_begin`.
	world_depth: u32,
	summary: ParseSummary,
}

impl<'a> Dispatcher<'a> {
	/// Create a dispatcher issuing calls on `api`.
	pub fn new(api: &'a mut dyn SceneApi, options: &'a ParseOptions) -> Self {
		Self {
			api,
			options,
			world_depth: 0,
			summary: ParseSummary::default(),
		}
	}

	/// Compare the document root name against [`ParseOptions::expected_root`].
	pub fn check_root(&mut self, root_tag: &str) {
		if let Some(expected) = self.options.expected_root.as_deref()
			&& !root_tag.eq_ignore_ascii_case(expected)
		{
			tracing::warn!("root tag `{root_tag}` is not `{expected}`");
			self.summary.diagnostics.push(Diagnostic::UnexpectedRoot {
				expected: expected.to_owned(),
				found: root_tag.to_owned(),
			});
		}
	}

	/// Dispatch every node of one sibling list, in order.
	pub fn dispatch_siblings<N: TagNode>(&mut self, nodes: impl Iterator<Item = N>, depth: u32) -> Result<()> {
		if depth > self.options.max_depth {
			return Err(SceneError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		for node in nodes {
			self.dispatch_tag(&node, depth)?;
		}
		Ok(())
	}

	/// Close the walk, reporting a world block left open.
	pub fn finish(mut self) -> ParseSummary {
		if self.world_depth > 0 {
			self.scope_mismatch("world_begin", 0, "world block never closed");
		}
		self.summary
	}

	fn dispatch_tag<N: TagNode>(&mut self, node: &N, depth: u32) -> Result<()> {
		let tag = normalize_tag_name(node.tag());
		tracing::debug!(depth, "tag id is `{tag}`");

		let Some(schema) = find_schema(&tag) else {
			tracing::warn!(depth, "undefined tag `{tag}` found");
			self.summary.diagnostics.push(Diagnostic::UnknownTag { tag, depth });
			return Ok(());
		};
		self.summary.tags_dispatched += 1;

		if self.options.report_unknown_attributes {
			for attribute in undeclared_attributes(node, schema.params) {
				tracing::warn!(depth, "tag `{tag}`: attribute `{attribute}` is not declared");
				self.summary.diagnostics.push(Diagnostic::UnknownAttribute {
					tag: tag.clone(),
					attribute: attribute.to_owned(),
				});
			}
		}

		match schema.action {
			TagAction::Setup(setup) => {
				let extraction = extract(node, schema.params);
				for item in extraction.malformed() {
					let AttrOutcome::Malformed { reason } = &item.outcome else {
						continue;
					};
					self.summary.diagnostics.push(Diagnostic::MalformedAttribute {
						tag: tag.clone(),
						attribute: item.name.to_owned(),
						shape: item.shape,
						reason: reason.clone(),
					});
				}
				self.skip_children(node, &tag, depth);
				setup(&mut *self.api, extraction.params);
				self.summary.setup_calls += 1;
			}
			TagAction::WorldBegin => {
				self.skip_children(node, &tag, depth);
				self.begin_world(&tag, depth);
			}
			TagAction::WorldEnd => {
				self.skip_children(node, &tag, depth);
				self.end_world(&tag, depth);
			}
			TagAction::World => {
				self.begin_world(&tag, depth);
				self.dispatch_siblings(node.child_tags(), depth + 1)?;
				self.end_world(&tag, depth);
			}
		}

		Ok(())
	}

	fn begin_world(&mut self, tag: &str, depth: u32) {
		if self.world_depth > 0 {
			self.scope_mismatch(tag, depth, "world block opened while already open");
		}
		self.world_depth += 1;
		self.api.world_begin();
		self.summary.setup_calls += 1;
	}

	fn end_world(&mut self, tag: &str, depth: u32) {
		if self.world_depth == 0 {
			self.scope_mismatch(tag, depth, "world block closed while not open");
		}
		self.world_depth = self.world_depth.saturating_sub(1);
		self.api.world_end();
		self.summary.setup_calls += 1;
	}

	fn scope_mismatch(&mut self, tag: &str, depth: u32, message: &'static str) {
		tracing::warn!(depth, "tag `{tag}`: {message}");
		self.summary.diagnostics.push(Diagnostic::ScopeMismatch {
			tag: tag.to_owned(),
			depth,
			message,
		});
	}

	fn skip_children<N: TagNode>(&self, node: &N, tag: &str, depth: u32) {
		let count = node.child_tags().count();
		if count > 0 {
			tracing::debug!(depth, "ignoring {count} nested tag(s) inside `{tag}`");
		}
	}
}
