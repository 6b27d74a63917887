use crate::scene::{
	Color, Normal3f, Point2i, Point3f, Real, Result, SceneError, Shape, Spectrum, Value, ValueKind, Vector3f, Vector3i,
};

/// Decode raw attribute text into a value of the declared shape.
pub fn decode_value(shape: Shape, text: &str) -> Result<Value> {
	match shape {
		Shape::Single(kind) if kind.arity() == 1 => decode_scalar(kind, text),
		Shape::Single(kind) => decode_composite(kind, text),
		Shape::Array(kind) => decode_array(kind, text),
	}
}

fn decode_scalar(kind: ValueKind, text: &str) -> Result<Value> {
	match kind {
		ValueKind::String => Ok(Value::String(text.to_owned())),
		ValueKind::Int => Ok(Value::Int(parse_int(scalar_token(text)?)?)),
		ValueKind::UInt => Ok(Value::UInt(parse_uint(scalar_token(text)?)?)),
		ValueKind::Real => Ok(Value::Real(parse_real(scalar_token(text)?)?)),
		ValueKind::Vector3f
		| ValueKind::Vector3i
		| ValueKind::Normal3f
		| ValueKind::Point3f
		| ValueKind::Point2i
		| ValueKind::Color
		| ValueKind::Spectrum => decode_composite(kind, text),
	}
}

fn scalar_token(text: &str) -> Result<&str> {
	let token = text.trim();
	if token.is_empty() {
		return Err(SceneError::EmptyValue);
	}
	Ok(token)
}

fn decode_composite(kind: ValueKind, text: &str) -> Result<Value> {
	let tokens = split_tokens(text)?;

	match kind {
		ValueKind::Vector3f => Ok(Value::Vector3f(Vector3f(reals3(kind, &tokens)?))),
		ValueKind::Normal3f => Ok(Value::Normal3f(Normal3f(reals3(kind, &tokens)?))),
		ValueKind::Point3f => Ok(Value::Point3f(Point3f(reals3(kind, &tokens)?))),
		ValueKind::Color => Ok(Value::Color(Color(reals3(kind, &tokens)?))),
		ValueKind::Vector3i => Ok(Value::Vector3i(Vector3i(ints3(kind, &tokens)?))),
		ValueKind::Point2i => Ok(Value::Point2i(Point2i(ints2(kind, &tokens)?))),
		ValueKind::Spectrum => match tokens.as_slice() {
			[single] => Ok(Value::Spectrum(Spectrum::uniform(parse_real(single)?))),
			_ if tokens.len() == 3 => Ok(Value::Spectrum(Spectrum(reals3(kind, &tokens)?))),
			_ => Err(SceneError::ArityMismatch {
				kind,
				expected: "1 or 3",
				got: tokens.len(),
			}),
		},
		ValueKind::Int | ValueKind::UInt | ValueKind::Real | ValueKind::String => decode_scalar(kind, text),
	}
}

fn decode_array(kind: ValueKind, text: &str) -> Result<Value> {
	let tokens = split_tokens(text)?;

	let arity = kind.arity();
	if tokens.len() % arity != 0 {
		return Err(SceneError::ArityMismatch {
			kind,
			expected: if arity == 2 { "a multiple of 2" } else { "a multiple of 3" },
			got: tokens.len(),
		});
	}
	let groups = tokens.chunks(arity);

	Ok(match kind {
		ValueKind::Int => Value::IntArray(tokens.iter().map(|token| parse_int(token)).collect::<Result<_>>()?),
		ValueKind::UInt => Value::UIntArray(tokens.iter().map(|token| parse_uint(token)).collect::<Result<_>>()?),
		ValueKind::Real => Value::RealArray(tokens.iter().map(|token| parse_real(token)).collect::<Result<_>>()?),
		ValueKind::String => Value::StringArray(tokens.iter().map(|token| (*token).to_owned()).collect()),
		ValueKind::Vector3f => Value::Vector3fArray(groups.map(|group| reals3(kind, group).map(Vector3f)).collect::<Result<_>>()?),
		ValueKind::Normal3f => Value::Normal3fArray(groups.map(|group| reals3(kind, group).map(Normal3f)).collect::<Result<_>>()?),
		ValueKind::Point3f => Value::Point3fArray(groups.map(|group| reals3(kind, group).map(Point3f)).collect::<Result<_>>()?),
		ValueKind::Color => Value::ColorArray(groups.map(|group| reals3(kind, group).map(Color)).collect::<Result<_>>()?),
		ValueKind::Spectrum => Value::SpectrumArray(groups.map(|group| reals3(kind, group).map(Spectrum)).collect::<Result<_>>()?),
		ValueKind::Vector3i => Value::Vector3iArray(groups.map(|group| ints3(kind, group).map(Vector3i)).collect::<Result<_>>()?),
		ValueKind::Point2i => Value::Point2iArray(groups.map(|group| ints2(kind, group).map(Point2i)).collect::<Result<_>>()?),
	})
}

fn split_tokens(text: &str) -> Result<Vec<&str>> {
	let tokens: Vec<&str> = text.split_whitespace().collect();
	if tokens.is_empty() {
		return Err(SceneError::EmptyValue);
	}
	Ok(tokens)
}

fn reals3(kind: ValueKind, tokens: &[&str]) -> Result<[Real; 3]> {
	let [x, y, z] = tokens else {
		return Err(arity_mismatch(kind, "3", tokens.len()));
	};
	Ok([parse_real(x)?, parse_real(y)?, parse_real(z)?])
}

fn ints3(kind: ValueKind, tokens: &[&str]) -> Result<[i32; 3]> {
	let [x, y, z] = tokens else {
		return Err(arity_mismatch(kind, "3", tokens.len()));
	};
	Ok([parse_int(x)?, parse_int(y)?, parse_int(z)?])
}

fn ints2(kind: ValueKind, tokens: &[&str]) -> Result<[i32; 2]> {
	let [x, y] = tokens else {
		return Err(arity_mismatch(kind, "2", tokens.len()));
	};
	Ok([parse_int(x)?, parse_int(y)?])
}

fn arity_mismatch(kind: ValueKind, expected: &'static str, got: usize) -> SceneError {
	SceneError::ArityMismatch { kind, expected, got }
}

fn parse_int(token: &str) -> Result<i32> {
	token.parse::<i32>().map_err(|_| invalid_number(token, "int"))
}

fn parse_uint(token: &str) -> Result<u32> {
	token.parse::<u32>().map_err(|_| invalid_number(token, "uint"))
}

fn parse_real(token: &str) -> Result<Real> {
	let value = token.parse::<Real>().map_err(|_| invalid_number(token, "real"))?;
	if !value.is_finite() {
		return Err(SceneError::NonFiniteReal { token: token.to_owned() });
	}
	Ok(value)
}

fn invalid_number(token: &str, expected: &'static str) -> SceneError {
	SceneError::InvalidNumber {
		token: token.to_owned(),
		expected,
	}
}

#[cfg(test)]
mod tests;
