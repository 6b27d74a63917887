/// Runtime limits and behavior switches for scene parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Maximum nesting depth of scope elements.
	pub max_depth: u32,
	/// Warn about attributes a tag schema does not declare.
	pub report_unknown_attributes: bool,
	/// Expected root tag name (case-insensitive); a mismatch only warns.
	pub expected_root: Option<Box<str>>,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			max_depth: 16,
			report_unknown_attributes: false,
			expected_root: Some("rt3".into()),
		}
	}
}

impl ParseOptions {
	/// Preset that also reports undeclared attributes.
	pub fn strict() -> Self {
		Self {
			report_unknown_attributes: true,
			..Self::default()
		}
	}
}
