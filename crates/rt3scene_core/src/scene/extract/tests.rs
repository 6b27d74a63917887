use crate::scene::{AttrOutcome, Color, ParamSpec, Value, ValueKind, extract, undeclared_attributes};

const SPECS: &[ParamSpec] = &[
	ParamSpec::single(ValueKind::String, "type"),
	ParamSpec::single(ValueKind::Int, "x_res"),
	ParamSpec::single(ValueKind::Int, "y_res"),
	ParamSpec::single(ValueKind::Color, "color"),
	ParamSpec::array(ValueKind::Real, "crop_window"),
];

fn with_first_tag<R>(xml: &str, f: impl FnOnce(roxmltree::Node<'_, '_>) -> R) -> R {
	let doc = roxmltree::Document::parse(xml).expect("test xml parses");
	let node = doc.root_element().first_element_child().expect("root has a child tag");
	f(node)
}

#[test]
fn malformed_attribute_does_not_block_the_others() {
	let xml = r#"<rt3><film type="image" x_res="800" y_res="6OO" color="1 0 0" crop_window="0 1 0 1"/></rt3>"#;
	let extraction = with_first_tag(xml, |node| extract(&node, SPECS));

	assert_eq!(extraction.params.len(), SPECS.len() - 1);
	assert!(extraction.params.get("y_res").is_none(), "malformed value must not be stored");
	assert_eq!(extraction.params.get("x_res"), Some(&Value::Int(800)));
	assert_eq!(extraction.params.get("color"), Some(&Value::Color(Color([1.0, 0.0, 0.0]))));

	let y_res = &extraction.report[2];
	assert_eq!(y_res.name, "y_res");
	assert!(matches!(y_res.outcome, AttrOutcome::Malformed { .. }));
}

#[test]
fn absent_attributes_are_reported_but_not_stored() {
	let xml = r#"<rt3><film x_res="800"/></rt3>"#;
	let extraction = with_first_tag(xml, |node| extract(&node, SPECS));

	assert_eq!(extraction.params.len(), 1);
	let outcomes: Vec<_> = extraction.report.iter().map(|item| item.outcome.clone()).collect();
	assert_eq!(
		outcomes,
		[
			AttrOutcome::Absent,
			AttrOutcome::Stored,
			AttrOutcome::Absent,
			AttrOutcome::Absent,
			AttrOutcome::Absent
		]
	);
}

#[test]
fn report_follows_declaration_order() {
	let xml = r#"<rt3><film crop_window="0 1" y_res="1" type="x"/></rt3>"#;
	let extraction = with_first_tag(xml, |node| extract(&node, SPECS));

	let names: Vec<_> = extraction.report.iter().map(|item| item.name).collect();
	assert_eq!(names, ["type", "x_res", "y_res", "color", "crop_window"]);
	assert_eq!(extraction.params.names().collect::<Vec<_>>(), ["type", "y_res", "crop_window"]);
}

#[test]
fn undeclared_attributes_are_listed() {
	let xml = r#"<rt3><film x_res="1" exposure="2" type="image" iso="100"/></rt3>"#;
	let names = with_first_tag(xml, |node| undeclared_attributes(&node, SPECS).into_iter().map(str::to_owned).collect::<Vec<_>>());
	assert_eq!(names, ["exposure", "iso"]);
}
