// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod kind;
mod ordered_f64;

pub use kind::ColumnKind;
pub use ordered_f64::OrderedF64;

/// A single decoded result cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarValue {
	/// The cell is null
	Null,
	/// A boolean: true or false.
	Bool(bool),
	/// A 1-byte signed integer
	Byte(i8),
	/// A 2-byte signed integer
	I16(i16),
	/// A 4-byte signed integer
	I32(i32),
	/// An 8-byte signed integer
	I64(i64),
	/// An 8-byte floating point
	Double(OrderedF64),
	/// A UTF-8 encoded text
	String(String),
	/// Raw bytes
	Binary(#[serde(with = "serde_bytes")] Vec<u8>),
}

impl ScalarValue {
	pub fn null() -> Self {
		ScalarValue::Null
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		ScalarValue::Bool(v.into())
	}

	pub fn byte(v: i8) -> Self {
		ScalarValue::Byte(v)
	}

	pub fn i16(v: i16) -> Self {
		ScalarValue::I16(v)
	}

	pub fn i32(v: i32) -> Self {
		ScalarValue::I32(v)
	}

	pub fn i64(v: i64) -> Self {
		ScalarValue::I64(v)
	}

	pub fn double(v: f64) -> Self {
		ScalarValue::Double(OrderedF64::new(v))
	}

	pub fn string(v: impl Into<String>) -> Self {
		ScalarValue::String(v.into())
	}

	pub fn binary(v: impl Into<Vec<u8>>) -> Self {
		ScalarValue::Binary(v.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, ScalarValue::Null)
	}

	/// The wire kind that carries this value, `None` for null.
	pub fn column_kind(&self) -> Option<ColumnKind> {
		match self {
			ScalarValue::Null => None,
			ScalarValue::Bool(_) => Some(ColumnKind::Bool),
			ScalarValue::Byte(_) => Some(ColumnKind::Byte),
			ScalarValue::I16(_) => Some(ColumnKind::I16),
			ScalarValue::I32(_) => Some(ColumnKind::I32),
			ScalarValue::I64(_) => Some(ColumnKind::I64),
			ScalarValue::Double(_) => Some(ColumnKind::Double),
			ScalarValue::String(_) => Some(ColumnKind::String),
			ScalarValue::Binary(_) => Some(ColumnKind::Binary),
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ScalarValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Widens any integer kind to `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			ScalarValue::Byte(v) => Some(*v as i64),
			ScalarValue::I16(v) => Some(*v as i64),
			ScalarValue::I32(v) => Some(*v as i64),
			ScalarValue::I64(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			ScalarValue::Double(v) => Some(v.value()),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			ScalarValue::String(v) => Some(v.as_str()),
			_ => None,
		}
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			ScalarValue::Binary(v) => Some(v.as_slice()),
			_ => None,
		}
	}

	pub fn into_option(self) -> Option<ScalarValue> {
		match self {
			ScalarValue::Null => None,
			value => Some(value),
		}
	}
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(ScalarValue::Null, Into::into)
	}
}

impl From<bool> for ScalarValue {
	fn from(v: bool) -> Self {
		ScalarValue::Bool(v)
	}
}

impl From<i8> for ScalarValue {
	fn from(v: i8) -> Self {
		ScalarValue::Byte(v)
	}
}

impl From<i16> for ScalarValue {
	fn from(v: i16) -> Self {
		ScalarValue::I16(v)
	}
}

impl From<i32> for ScalarValue {
	fn from(v: i32) -> Self {
		ScalarValue::I32(v)
	}
}

impl From<i64> for ScalarValue {
	fn from(v: i64) -> Self {
		ScalarValue::I64(v)
	}
}

impl From<f64> for ScalarValue {
	fn from(v: f64) -> Self {
		ScalarValue::double(v)
	}
}

impl From<String> for ScalarValue {
	fn from(v: String) -> Self {
		ScalarValue::String(v)
	}
}

impl From<&str> for ScalarValue {
	fn from(v: &str) -> Self {
		ScalarValue::String(v.to_string())
	}
}

impl From<Vec<u8>> for ScalarValue {
	fn from(v: Vec<u8>) -> Self {
		ScalarValue::Binary(v)
	}
}

impl Display for ScalarValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ScalarValue::Null => f.write_str("NULL"),
			ScalarValue::Bool(v) => Display::fmt(v, f),
			ScalarValue::Byte(v) => Display::fmt(v, f),
			ScalarValue::I16(v) => Display::fmt(v, f),
			ScalarValue::I32(v) => Display::fmt(v, f),
			ScalarValue::I64(v) => Display::fmt(v, f),
			ScalarValue::Double(v) => Display::fmt(v, f),
			ScalarValue::String(v) => f.write_str(v),
			ScalarValue::Binary(v) => {
				f.write_str("0x")?;
				for byte in v {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
		}
	}
}
