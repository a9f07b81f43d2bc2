// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::ColumnKind;
use serde::{Deserialize, Serialize};

/// One cell of the legacy row-major form (`TColumnValue`). An absent payload
/// is a null cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnValue {
	Bool(Option<bool>),
	/// One byte buffer.
	Byte(Option<Vec<u8>>),
	I16(Option<i16>),
	I32(Option<i32>),
	/// Eight byte big-endian buffer.
	I64(Option<Vec<u8>>),
	Double(Option<f64>),
	String(Option<String>),
}

impl ColumnValue {
	pub fn kind(&self) -> ColumnKind {
		match self {
			ColumnValue::Bool(_) => ColumnKind::Bool,
			ColumnValue::Byte(_) => ColumnKind::Byte,
			ColumnValue::I16(_) => ColumnKind::I16,
			ColumnValue::I32(_) => ColumnKind::I32,
			ColumnValue::I64(_) => ColumnKind::I64,
			ColumnValue::Double(_) => ColumnKind::Double,
			ColumnValue::String(_) => ColumnKind::String,
		}
	}

	pub fn is_null(&self) -> bool {
		match self {
			ColumnValue::Bool(v) => v.is_none(),
			ColumnValue::Byte(v) | ColumnValue::I64(v) => v.is_none(),
			ColumnValue::I16(v) => v.is_none(),
			ColumnValue::I32(v) => v.is_none(),
			ColumnValue::Double(v) => v.is_none(),
			ColumnValue::String(v) => v.is_none(),
		}
	}
}

/// A row of the legacy row-major form (`TRow`), one cell per column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
	pub col_vals: Vec<ColumnValue>,
}

impl Row {
	pub fn new(col_vals: Vec<ColumnValue>) -> Self {
		Self {
			col_vals,
		}
	}
}
