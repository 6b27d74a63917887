use crate::scene::{ParamSet, ParamSpec, Shape, TagNode, decode_value};

/// Result of extracting one declared attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrOutcome {
	/// Decoded and stored in the parameter set.
	Stored,
	/// Not present on the element.
	Absent,
	/// Present but not decodable as the declared shape.
	Malformed {
		/// Decoder error message.
		reason: String,
	},
}

/// Per-attribute extraction record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrReport {
	/// Declared attribute name.
	pub name: &'static str,
	/// Declared shape.
	pub shape: Shape,
	/// What happened to it.
	pub outcome: AttrOutcome,
}

/// Parameters extracted from one element plus what happened to each declared attribute.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
	/// Successfully decoded parameters.
	pub params: ParamSet,
	/// One record per declared attribute, in declaration order.
	pub report: Vec<AttrReport>,
}

impl Extraction {
	/// Records of attributes that were present but failed to decode.
	pub fn malformed(&self) -> impl Iterator<Item = &AttrReport> {
		self.report.iter().filter(|item| matches!(item.outcome, AttrOutcome::Malformed { .. }))
	}
}

/// Decode every declared attribute found on `node`.
///
/// Never fails as a whole: absent attributes are skipped and malformed ones
/// are logged and left out of the returned set.
pub fn extract<N: TagNode>(node: &N, specs: &[ParamSpec]) -> Extraction {
	let mut out = Extraction::default();

	for spec in specs {
		let Some(text) = node.attr(spec.name) else {
			out.report.push(AttrReport {
				name: spec.name,
				shape: spec.shape,
				outcome: AttrOutcome::Absent,
			});
			continue;
		};

		let outcome = match decode_value(spec.shape, text) {
			Ok(value) => {
				tracing::debug!(tag = node.tag(), attribute = spec.name, shape = %spec.shape, value = %value.to_text(), "stored attribute");
				out.params.set(spec.name, value);
				AttrOutcome::Stored
			}
			Err(err) => {
				tracing::warn!(
					tag = node.tag(),
					attribute = spec.name,
					shape = %spec.shape,
					"skipping malformed attribute {:?}: {err}",
					text
				);
				AttrOutcome::Malformed { reason: err.to_string() }
			}
		};

		out.report.push(AttrReport {
			name: spec.name,
			shape: spec.shape,
			outcome,
		});
	}

	out
}

/// Attribute names on `node` that `specs` does not declare.
pub fn undeclared_attributes<'n, N: TagNode>(node: &'n N, specs: &[ParamSpec]) -> Vec<&'n str> {
	node.attr_names().filter(|name| !specs.iter().any(|spec| spec.name == *name)).collect()
}

#[cfg(test)]
mod tests;
