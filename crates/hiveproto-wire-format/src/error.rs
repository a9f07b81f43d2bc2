// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::status::Status;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Type(#[from] hiveproto_type::Error),

	#[error("malformed column{}: {reason}", column_label(.column))]
	MalformedColumn {
		column: String,
		reason: String,
	},

	#[error("column{} has type {found}, only primitive column types can be decoded", column_label(.column))]
	UnsupportedColumnType {
		column: String,
		found: String,
	},

	#[error("column{} holds {found} rows but the batch holds {expected}", column_label(.column))]
	ColumnLengthMismatch {
		column: String,
		expected: usize,
		found: usize,
	},

	#[error("row set carries {found} columns but the schema declares {expected}")]
	ColumnCountMismatch {
		expected: usize,
		found: usize,
	},

	#[error("column{} is declared as {declared} but carries {found} values", column_label(.column))]
	ColumnKindMismatch {
		column: String,
		declared: String,
		found: String,
	},

	#[error("row {row} is malformed: {reason}")]
	MalformedRow {
		row: usize,
		reason: String,
	},

	#[error("{what} of {found} exceeds the limit of {limit}")]
	OversizedInput {
		what: &'static str,
		found: usize,
		limit: usize,
	},

	#[error("server returned {0}")]
	Status(Status),
}

impl Error {
	/// Stable diagnostic code of this error.
	pub fn code(&self) -> &'static str {
		match self {
			Error::Type(err) => err.code(),
			Error::MalformedColumn {
				..
			} => "WIRE_001",
			Error::UnsupportedColumnType {
				..
			} => "WIRE_002",
			Error::ColumnLengthMismatch {
				..
			} => "WIRE_003",
			Error::ColumnCountMismatch {
				..
			} => "WIRE_004",
			Error::ColumnKindMismatch {
				..
			} => "WIRE_005",
			Error::MalformedRow {
				..
			} => "WIRE_006",
			Error::OversizedInput {
				..
			} => "WIRE_007",
			Error::Status(_) => "WIRE_008",
		}
	}

	/// Attaches a column name to column scoped errors raised without one.
	pub fn with_column(mut self, name: &str) -> Self {
		match &mut self {
			Error::MalformedColumn {
				column,
				..
			}
			| Error::UnsupportedColumnType {
				column,
				..
			}
			| Error::ColumnLengthMismatch {
				column,
				..
			}
			| Error::ColumnKindMismatch {
				column,
				..
			} if column.is_empty() => {
				*column = name.to_string();
			}
			_ => {}
		}
		self
	}
}

fn column_label(column: &str) -> String {
	if column.is_empty() {
		String::new()
	} else {
		format!(" '{}'", column)
	}
}
