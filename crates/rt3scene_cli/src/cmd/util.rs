use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}
