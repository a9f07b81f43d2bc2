// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::{ColumnKind, util::NullBitmap};
use serde::{Deserialize, Serialize};

/// Dense values of one column plus its packed null bitmap. Slots whose null
/// bit is set hold whatever the producer left there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnData<T> {
	pub values: Vec<T>,
	#[serde(with = "serde_bytes")]
	pub nulls: Vec<u8>,
}

impl<T> ColumnData<T> {
	pub fn new(values: Vec<T>, nulls: Vec<u8>) -> Self {
		Self {
			values,
			nulls,
		}
	}

	/// A column without nulls.
	pub fn from_values(values: Vec<T>) -> Self {
		let nulls = NullBitmap::with_rows(values.len()).into_bytes();
		Self::new(values, nulls)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn is_null(&self, row: usize) -> bool {
		NullBitmap::is_null_in(&self.nulls, row)
	}
}

pub type BoolColumn = ColumnData<bool>;
/// Each value is a one byte buffer.
pub type ByteColumn = ColumnData<Vec<u8>>;
pub type I16Column = ColumnData<i16>;
pub type I32Column = ColumnData<i32>;
/// Each value is an eight byte big-endian buffer.
pub type I64Column = ColumnData<Vec<u8>>;
pub type DoubleColumn = ColumnData<f64>;
pub type StringColumn = ColumnData<String>;
pub type BinaryColumn = ColumnData<Vec<u8>>;

/// One column of a columnar row set (`TColumn`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Column {
	Bool(BoolColumn),
	Byte(ByteColumn),
	I16(I16Column),
	I32(I32Column),
	I64(I64Column),
	Double(DoubleColumn),
	String(StringColumn),
	Binary(BinaryColumn),
}

impl Column {
	pub fn kind(&self) -> ColumnKind {
		match self {
			Column::Bool(_) => ColumnKind::Bool,
			Column::Byte(_) => ColumnKind::Byte,
			Column::I16(_) => ColumnKind::I16,
			Column::I32(_) => ColumnKind::I32,
			Column::I64(_) => ColumnKind::I64,
			Column::Double(_) => ColumnKind::Double,
			Column::String(_) => ColumnKind::String,
			Column::Binary(_) => ColumnKind::Binary,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Column::Bool(c) => c.len(),
			Column::Byte(c) => c.len(),
			Column::I16(c) => c.len(),
			Column::I32(c) => c.len(),
			Column::I64(c) => c.len(),
			Column::Double(c) => c.len(),
			Column::String(c) => c.len(),
			Column::Binary(c) => c.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn nulls(&self) -> &[u8] {
		match self {
			Column::Bool(c) => &c.nulls,
			Column::Byte(c) => &c.nulls,
			Column::I16(c) => &c.nulls,
			Column::I32(c) => &c.nulls,
			Column::I64(c) => &c.nulls,
			Column::Double(c) => &c.nulls,
			Column::String(c) => &c.nulls,
			Column::Binary(c) => &c.nulls,
		}
	}

	pub fn null_count(&self) -> usize {
		NullBitmap::count_nulls_in(self.nulls(), self.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_values_has_zeroed_bitmap() {
		let column = I32Column::from_values(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
		assert_eq!(column.nulls, vec![0, 0]);
		assert!(!column.is_null(8));
	}

	#[test]
	fn test_kind_len_and_null_count() {
		let column = Column::String(StringColumn::new(
			vec!["a".into(), String::new(), "c".into()],
			vec![0b0000_0010],
		));
		assert_eq!(column.kind(), ColumnKind::String);
		assert_eq!(column.len(), 3);
		assert_eq!(column.null_count(), 1);
	}
}
