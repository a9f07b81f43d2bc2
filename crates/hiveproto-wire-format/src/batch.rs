// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use hiveproto_type::ScalarValue;
use serde::{Deserialize, Serialize};

/// A decoded row, one value per schema column in schema order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedRow(Vec<ScalarValue>);

impl DecodedRow {
	pub fn new(values: Vec<ScalarValue>) -> Self {
		Self(values)
	}

	pub fn into_values(self) -> Vec<ScalarValue> {
		self.0
	}
}

impl Deref for DecodedRow {
	type Target = [ScalarValue];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<ScalarValue>> for DecodedRow {
	fn from(values: Vec<ScalarValue>) -> Self {
		Self(values)
	}
}

impl FromIterator<ScalarValue> for DecodedRow {
	fn from_iter<T: IntoIterator<Item = ScalarValue>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Typed rows of one fetched batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RowBatch {
	pub start_row_offset: i64,
	pub columns: Vec<String>,
	pub rows: Vec<DecodedRow>,
}

impl RowBatch {
	pub fn new(start_row_offset: i64, columns: Vec<String>, rows: Vec<DecodedRow>) -> Self {
		Self {
			start_row_offset,
			columns,
			rows,
		}
	}

	pub fn empty(start_row_offset: i64, columns: Vec<String>) -> Self {
		Self::new(start_row_offset, columns, Vec::new())
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c == name)
	}

	pub fn get(&self, row: usize, column: &str) -> Option<&ScalarValue> {
		let index = self.column_index(column)?;
		self.rows.get(row).and_then(|r| r.get(index))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, DecodedRow> {
		self.rows.iter()
	}
}

impl Index<usize> for RowBatch {
	type Output = DecodedRow;

	fn index(&self, index: usize) -> &Self::Output {
		&self.rows[index]
	}
}

impl IntoIterator for RowBatch {
	type Item = DecodedRow;
	type IntoIter = std::vec::IntoIter<DecodedRow>;

	fn into_iter(self) -> Self::IntoIter {
		self.rows.into_iter()
	}
}

impl<'a> IntoIterator for &'a RowBatch {
	type Item = &'a DecodedRow;
	type IntoIter = std::slice::Iter<'a, DecodedRow>;

	fn into_iter(self) -> Self::IntoIter {
		self.rows.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_by_name() {
		let batch = RowBatch::new(
			10,
			vec!["id".into(), "name".into()],
			vec![
				DecodedRow::new(vec![ScalarValue::i32(1), ScalarValue::string("a")]),
				DecodedRow::new(vec![ScalarValue::i32(2), ScalarValue::Null]),
			],
		);
		assert_eq!(batch.get(0, "name"), Some(&ScalarValue::string("a")));
		assert_eq!(batch.get(1, "name"), Some(&ScalarValue::Null));
		assert_eq!(batch.get(2, "name"), None);
		assert_eq!(batch.get(0, "missing"), None);
		assert_eq!(batch[1][0], ScalarValue::i32(2));
		assert_eq!(batch.iter().count(), 2);
	}
}
