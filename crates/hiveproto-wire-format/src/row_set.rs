// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{column::Column, row::Row};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RowSetData {
	Columnar(Vec<Column>),
	RowMajor(Vec<Row>),
}

/// One batch of fetched results. `start_row_offset` is the cursor position
/// of the first row and is carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
	pub start_row_offset: i64,
	pub data: RowSetData,
}

impl RowSet {
	pub fn columnar(start_row_offset: i64, columns: Vec<Column>) -> Self {
		Self {
			start_row_offset,
			data: RowSetData::Columnar(columns),
		}
	}

	pub fn row_major(start_row_offset: i64, rows: Vec<Row>) -> Self {
		Self {
			start_row_offset,
			data: RowSetData::RowMajor(rows),
		}
	}

	pub fn is_columnar(&self) -> bool {
		matches!(self.data, RowSetData::Columnar(_))
	}
}
