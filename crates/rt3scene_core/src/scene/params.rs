use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::scene::{ParamValue, Result, SceneError, Value};

/// Named parameter stored in a [`ParamSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntry {
	/// Attribute name.
	pub name: Box<str>,
	/// Decoded attribute value.
	pub value: Value,
}

/// Parameters extracted from one tag occurrence, keyed by attribute name.
///
/// Names are unique. Entries keep insertion order so printed output is
/// stable, but lookups only ever go by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
	entries: Vec<ParamEntry>,
}

impl ParamSet {
	/// Create an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert `value` under `name`, replacing and returning any previous value.
	pub fn set(&mut self, name: impl Into<Box<str>>, value: Value) -> Option<Value> {
		let name = name.into();
		if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
			return Some(std::mem::replace(&mut entry.value, value));
		}
		self.entries.push(ParamEntry { name, value });
		None
	}

	/// Look up a value by name; `None` when absent.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.entries.iter().find(|entry| &*entry.name == name).map(|entry| &entry.value)
	}

	/// Look up a typed payload; absent is `Ok(None)`, a different shape is an error.
	pub fn get_as<T: ParamValue>(&self, name: &str) -> Result<Option<&T>> {
		let Some(value) = self.get(name) else {
			return Ok(None);
		};
		T::from_value(value).map(Some).ok_or_else(|| SceneError::TypeMismatch {
			name: name.to_owned(),
			expected: T::SHAPE,
			got: value.shape(),
		})
	}

	/// Typed payload or `default` when absent.
	pub fn find_or<T: ParamValue + Clone>(&self, name: &str, default: T) -> Result<T> {
		Ok(self.get_as::<T>(name)?.cloned().unwrap_or(default))
	}

	/// Interpret a string parameter as a boolean flag.
	///
	/// Booleans are carried as text; this accepts `true/false`, `yes/no`,
	/// `on/off` and `1/0`, ignoring case.
	pub fn get_flag(&self, name: &str) -> Result<Option<bool>> {
		let Some(text) = self.get_as::<String>(name)? else {
			return Ok(None);
		};
		match text.trim().to_ascii_lowercase().as_str() {
			"true" | "yes" | "on" | "1" => Ok(Some(true)),
			"false" | "no" | "off" | "0" => Ok(Some(false)),
			_ => Err(SceneError::InvalidFlag {
				name: name.to_owned(),
				value: text.clone(),
			}),
		}
	}

	/// Whether a value is stored under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Number of stored parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no parameter is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Stored names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| &*entry.name)
	}

	/// Stored entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &ParamEntry> {
		self.entries.iter()
	}
}

impl Serialize for ParamSet {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for entry in &self.entries {
			map.serialize_entry(&*entry.name, &entry.value)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests;
