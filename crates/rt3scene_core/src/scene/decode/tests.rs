use crate::scene::{
	Color, Normal3f, Point2i, Point3f, SceneError, Shape, Spectrum, Value, ValueKind, Vector3f, Vector3i, decode_value,
};

fn single(kind: ValueKind) -> Shape {
	Shape::Single(kind)
}

fn array(kind: ValueKind) -> Shape {
	Shape::Array(kind)
}

#[test]
fn decodes_numeric_scalars() {
	assert_eq!(decode_value(single(ValueKind::Int), "800").expect("int"), Value::Int(800));
	assert_eq!(decode_value(single(ValueKind::Int), " -3 ").expect("padded int"), Value::Int(-3));
	assert_eq!(decode_value(single(ValueKind::UInt), "7").expect("uint"), Value::UInt(7));
	assert_eq!(decode_value(single(ValueKind::Real), "65.5").expect("real"), Value::Real(65.5));
}

#[test]
fn single_shapes_decode_to_their_own_variant() {
	for (kind, text) in [
		(ValueKind::Int, "1"),
		(ValueKind::UInt, "1"),
		(ValueKind::Real, "1"),
		(ValueKind::String, "1"),
		(ValueKind::Vector3f, "1 1 1"),
		(ValueKind::Vector3i, "1 1 1"),
		(ValueKind::Normal3f, "1 1 1"),
		(ValueKind::Point3f, "1 1 1"),
		(ValueKind::Point2i, "1 1"),
		(ValueKind::Color, "1 1 1"),
		(ValueKind::Spectrum, "1"),
	] {
		let value = decode_value(single(kind), text).expect("sample text decodes");
		assert_eq!(value.shape(), single(kind), "{kind} decoded as {}", value.shape());
	}
}

#[test]
fn numeric_scalars_reject_partial_text() {
	for (kind, text) in [
		(ValueKind::Int, "800px"),
		(ValueKind::Int, "1.5"),
		(ValueKind::Int, "1 2"),
		(ValueKind::UInt, "-1"),
		(ValueKind::Real, "0.5f"),
		(ValueKind::Real, "true"),
	] {
		let err = decode_value(single(kind), text).expect_err("partial numeric text must fail");
		assert!(matches!(err, SceneError::InvalidNumber { .. }), "{kind} {text:?}: {err}");
	}
}

#[test]
fn numeric_scalars_reject_empty_and_non_finite_text() {
	assert!(matches!(decode_value(single(ValueKind::Int), "  "), Err(SceneError::EmptyValue)));
	assert!(matches!(decode_value(single(ValueKind::Real), "inf"), Err(SceneError::NonFiniteReal { .. })));
	assert!(matches!(decode_value(single(ValueKind::Real), "NaN"), Err(SceneError::NonFiniteReal { .. })));
}

#[test]
fn strings_are_kept_verbatim() {
	assert_eq!(
		decode_value(single(ValueKind::String), "  true ").expect("string"),
		Value::String("  true ".to_owned())
	);
	assert_eq!(decode_value(single(ValueKind::String), "").expect("empty string"), Value::String(String::new()));
}

#[test]
fn three_component_shapes_need_exactly_three_tokens() {
	assert_eq!(
		decode_value(single(ValueKind::Vector3f), "0 1 0").expect("vector"),
		Value::Vector3f(Vector3f([0.0, 1.0, 0.0]))
	);
	assert_eq!(
		decode_value(single(ValueKind::Point3f), "-1\t0.5\n5").expect("point"),
		Value::Point3f(Point3f([-1.0, 0.5, 5.0]))
	);
	assert_eq!(
		decode_value(single(ValueKind::Normal3f), "0 0 1").expect("normal"),
		Value::Normal3f(Normal3f([0.0, 0.0, 1.0]))
	);
	assert_eq!(
		decode_value(single(ValueKind::Vector3i), "1 2 3").expect("int vector"),
		Value::Vector3i(Vector3i([1, 2, 3]))
	);

	for kind in [ValueKind::Vector3f, ValueKind::Point3f, ValueKind::Normal3f, ValueKind::Vector3i, ValueKind::Color] {
		for text in ["1 2", "1 2 3 4"] {
			let err = decode_value(single(kind), text).expect_err("wrong arity must fail");
			assert!(matches!(err, SceneError::ArityMismatch { expected: "3", .. }), "{kind} {text:?}: {err}");
		}
	}
}

#[test]
fn composite_rejects_bad_component() {
	let err = decode_value(single(ValueKind::Vector3f), "0 one 0").expect_err("bad component must fail");
	assert!(matches!(err, SceneError::InvalidNumber { expected: "real", .. }));

	let err = decode_value(single(ValueKind::Vector3i), "1 2.5 3").expect_err("real in int vector must fail");
	assert!(matches!(err, SceneError::InvalidNumber { expected: "int", .. }));
}

#[test]
fn point2i_needs_two_tokens() {
	assert_eq!(decode_value(single(ValueKind::Point2i), "640 480").expect("point2i"), Value::Point2i(Point2i([640, 480])));
	assert!(decode_value(single(ValueKind::Point2i), "640 480 1").is_err());
}

#[test]
fn color_is_always_rgb() {
	assert_eq!(
		decode_value(single(ValueKind::Color), "1.0 0.0 0.0").expect("color"),
		Value::Color(Color([1.0, 0.0, 0.0]))
	);
	assert!(decode_value(single(ValueKind::Color), "0.5").is_err(), "single token is not a color");
}

#[test]
fn spectrum_accepts_one_or_three_tokens() {
	assert_eq!(
		decode_value(single(ValueKind::Spectrum), "0.8").expect("uniform spectrum"),
		Value::Spectrum(Spectrum([0.8, 0.8, 0.8]))
	);
	assert_eq!(
		decode_value(single(ValueKind::Spectrum), "0.1 0.2 0.3").expect("rgb spectrum"),
		Value::Spectrum(Spectrum([0.1, 0.2, 0.3]))
	);
	let err = decode_value(single(ValueKind::Spectrum), "0.1 0.2").expect_err("two tokens must fail");
	assert!(matches!(err, SceneError::ArityMismatch { expected: "1 or 3", got: 2, .. }));
}

#[test]
fn scalar_arrays_have_one_element_per_token() {
	assert_eq!(
		decode_value(array(ValueKind::Real), "0 1 0.25 1").expect("real array"),
		Value::RealArray(vec![0.0, 1.0, 0.25, 1.0])
	);
	assert_eq!(decode_value(array(ValueKind::Int), "5").expect("int array"), Value::IntArray(vec![5]));
	assert_eq!(
		decode_value(array(ValueKind::String), "a b  c").expect("string array"),
		Value::StringArray(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
	);
	assert!(decode_value(array(ValueKind::UInt), "1 2 -3").is_err(), "one bad token fails the array");
	assert!(matches!(decode_value(array(ValueKind::Real), ""), Err(SceneError::EmptyValue)));
}

#[test]
fn composite_arrays_group_tokens_by_arity() {
	assert_eq!(
		decode_value(array(ValueKind::Point3f), "0 0 0 1 1 1").expect("point array"),
		Value::Point3fArray(vec![Point3f([0.0, 0.0, 0.0]), Point3f([1.0, 1.0, 1.0])])
	);
	assert_eq!(
		decode_value(array(ValueKind::Point2i), "1 2 3 4").expect("point2i array"),
		Value::Point2iArray(vec![Point2i([1, 2]), Point2i([3, 4])])
	);

	let err = decode_value(array(ValueKind::Normal3f), "0 0 1 0").expect_err("dangling component must fail");
	assert!(matches!(err, SceneError::ArityMismatch { got: 4, .. }));
}
