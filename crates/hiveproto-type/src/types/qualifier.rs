// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CHARACTER_MAXIMUM_LENGTH: &str = "characterMaximumLength";
pub const PRECISION: &str = "precision";
pub const SCALE: &str = "scale";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeQualifierValue {
	I32(i32),
	String(String),
}

impl TypeQualifierValue {
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			TypeQualifierValue::I32(v) => Some(*v),
			TypeQualifierValue::String(_) => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			TypeQualifierValue::I32(_) => None,
			TypeQualifierValue::String(v) => Some(v.as_str()),
		}
	}

	fn kind_name(&self) -> &'static str {
		match self {
			TypeQualifierValue::I32(_) => "i32",
			TypeQualifierValue::String(_) => "string",
		}
	}
}

/// Qualifiers of a primitive type, such as the precision of a decimal.
/// Wire order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeQualifiers(IndexMap<String, TypeQualifierValue>);

impl TypeQualifiers {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, name: impl Into<String>, value: TypeQualifierValue) -> Self {
		self.0.insert(name.into(), value);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: TypeQualifierValue) {
		self.0.insert(name.into(), value);
	}

	pub fn get(&self, name: &str) -> Option<&TypeQualifierValue> {
		self.0.get(name)
	}

	pub fn get_i32(&self, name: &str) -> Option<i32> {
		self.get(name).and_then(TypeQualifierValue::as_i32)
	}

	pub fn precision(&self) -> Option<i32> {
		self.get_i32(PRECISION)
	}

	pub fn scale(&self) -> Option<i32> {
		self.get_i32(SCALE)
	}

	pub fn max_length(&self) -> Option<i32> {
		self.get_i32(CHARACTER_MAXIMUM_LENGTH)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeQualifierValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Checks the value kind of every qualifier this crate knows by name.
	/// Unknown names are never an error.
	pub fn validate(&self) -> Result<()> {
		for (name, value) in &self.0 {
			let expected = match name.as_str() {
				CHARACTER_MAXIMUM_LENGTH | PRECISION | SCALE => "i32",
				_ => continue,
			};
			if value.kind_name() != expected {
				return Err(Error::MalformedQualifier {
					name: name.clone(),
					expected,
					found: value.kind_name(),
				});
			}
		}
		Ok(())
	}
}

impl FromIterator<(String, TypeQualifierValue)> for TypeQualifiers {
	fn from_iter<T: IntoIterator<Item = (String, TypeQualifierValue)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// What the resolver does with a recognised qualifier whose value has the
/// wrong kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifierPolicy {
	/// Log a warning and keep the qualifier as received.
	#[default]
	Permissive,
	/// Fail resolution with `MalformedQualifier`.
	Strict,
}
