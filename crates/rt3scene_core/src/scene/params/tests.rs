use crate::scene::{Color, ParamSet, SceneError, Value};

fn film_params() -> ParamSet {
	let mut params = ParamSet::new();
	params.set("x_res", Value::Int(800));
	params.set("y_res", Value::Int(600));
	params.set("gamma_corrected", Value::String("true".to_owned()));
	params
}

#[test]
fn absent_names_are_none_not_errors() {
	let params = film_params();
	assert!(params.get("filename").is_none());
	assert!(params.get_as::<String>("filename").expect("absent is not an error").is_none());
	assert!(params.get_flag("filename").expect("absent is not an error").is_none());
	assert!(!params.contains("filename"));
}

#[test]
fn set_overwrites_and_keeps_one_entry_per_name() {
	let mut params = film_params();
	let previous = params.set("x_res", Value::Int(1024));

	assert_eq!(previous, Some(Value::Int(800)));
	assert_eq!(params.len(), 3);
	assert_eq!(params.get("x_res"), Some(&Value::Int(1024)));
	assert_eq!(params.names().collect::<Vec<_>>(), ["x_res", "y_res", "gamma_corrected"]);
}

#[test]
fn typed_lookup_reports_shape_mismatch() {
	let params = film_params();
	assert_eq!(params.get_as::<i32>("x_res").expect("int lookup"), Some(&800));

	let err = params.get_as::<f32>("x_res").expect_err("int must not read as real");
	assert!(matches!(err, SceneError::TypeMismatch { ref name, .. } if name == "x_res"));
}

#[test]
fn find_or_falls_back_only_when_absent() {
	let params = film_params();
	assert_eq!(params.find_or("y_res", 1).expect("present"), 600);
	assert_eq!(params.find_or("crop_window", vec![0.0_f32, 1.0, 0.0, 1.0]).expect("absent"), vec![0.0, 1.0, 0.0, 1.0]);
	assert!(params.find_or("gamma_corrected", 0_i32).is_err(), "string must not fall back to int default");
}

#[test]
fn flags_are_decoded_from_text() {
	let mut params = film_params();
	assert_eq!(params.get_flag("gamma_corrected").expect("flag"), Some(true));

	params.set("gamma_corrected", Value::String("Off".to_owned()));
	assert_eq!(params.get_flag("gamma_corrected").expect("flag"), Some(false));

	params.set("gamma_corrected", Value::String("maybe".to_owned()));
	assert!(matches!(params.get_flag("gamma_corrected"), Err(SceneError::InvalidFlag { .. })));

	params.set("gamma_corrected", Value::Color(Color([1.0, 1.0, 1.0])));
	assert!(matches!(params.get_flag("gamma_corrected"), Err(SceneError::TypeMismatch { .. })));
}

#[test]
fn serializes_as_name_keyed_object() {
	let json = serde_json::to_value(film_params()).expect("params serialize");
	assert_eq!(json["x_res"]["shape"], "int");
	assert_eq!(json["x_res"]["value"], 800);
	assert_eq!(json["gamma_corrected"]["value"], "true");
}
