// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::{ColumnDescriptor, ColumnKind, PrimitiveKind, ResolvedColumn, ScalarValue, TableSchema};
use tracing::{debug, instrument};

use crate::{
	batch::{DecodedRow, RowBatch},
	codec::{byte_from_buffer, check_row_count, decode_column, i64_from_buffer},
	column::Column,
	config::DecoderConfig,
	error::{Error, Result},
	response::{FetchResultsResponse, GetResultSetMetadataResponse},
	row::{ColumnValue, Row},
	row_set::{RowSet, RowSetData},
};

/// Turns fetched row sets into typed rows.
#[derive(Debug, Clone, Default)]
pub struct RowSetDecoder {
	config: DecoderConfig,
}

impl RowSetDecoder {
	pub fn new(config: DecoderConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &DecoderConfig {
		&self.config
	}

	/// Decodes one batch. Fails without partial output if any column is
	/// malformed or disagrees with the schema.
	#[instrument(
		name = "wire::decode_row_set",
		level = "trace",
		skip_all,
		fields(columns = schema.len(), columnar = row_set.is_columnar())
	)]
	pub fn decode(&self, schema: &TableSchema, row_set: &RowSet) -> Result<RowBatch> {
		let kinds = primitive_kinds(schema, &self.config)?;

		let rows = match &row_set.data {
			RowSetData::Columnar(columns) => self.decode_columnar(schema, &kinds, columns)?,
			RowSetData::RowMajor(rows) => self.decode_row_major(schema, &kinds, rows)?,
		};

		debug!(rows = rows.len(), start_row_offset = row_set.start_row_offset, "decoded row set");
		Ok(RowBatch::new(row_set.start_row_offset, schema.column_names(), rows))
	}

	/// Checks the response status before looking at its payload. A failed
	/// status is returned as [`Error::Status`].
	#[instrument(name = "wire::decode_fetch", level = "trace", skip_all)]
	pub fn decode_fetch(&self, schema: &TableSchema, response: &FetchResultsResponse) -> Result<RowBatch> {
		response.status.check()?;
		match &response.results {
			Some(row_set) => self.decode(schema, row_set),
			None => Ok(RowBatch::empty(0, schema.column_names())),
		}
	}

	/// Checks the response status and resolves the column types of the
	/// returned schema.
	#[instrument(name = "wire::resolve_schema", level = "trace", skip_all)]
	pub fn resolve_schema(&self, response: &GetResultSetMetadataResponse) -> Result<Vec<ResolvedColumn>> {
		response.status.check()?;
		match &response.schema {
			Some(schema) => Ok(schema.resolve_with(self.config.qualifier_policy, self.config.resolve_limits())?),
			None => Ok(Vec::new()),
		}
	}

	fn decode_columnar(&self, schema: &TableSchema, kinds: &[PrimitiveKind], columns: &[Column]) -> Result<Vec<DecodedRow>> {
		if columns.len() != schema.len() {
			return Err(Error::ColumnCountMismatch {
				expected: schema.len(),
				found: columns.len(),
			});
		}

		let row_count = columns.first().map_or(0, Column::len);
		check_row_count(row_count, &self.config)?;

		for ((descriptor, kind), column) in schema.iter().zip(kinds).zip(columns) {
			if !kind.accepts(column.kind()) {
				return Err(kind_mismatch(descriptor, *kind, column.kind()));
			}
			if column.len() != row_count {
				return Err(Error::ColumnLengthMismatch {
					column: descriptor.name.clone(),
					expected: row_count,
					found: column.len(),
				});
			}
		}

		let mut rows: Vec<Vec<ScalarValue>> = (0..row_count).map(|_| Vec::with_capacity(columns.len())).collect();
		for (descriptor, column) in schema.iter().zip(columns) {
			let values = decode_column(column, row_count, &self.config).map_err(|e| e.with_column(&descriptor.name))?;
			for (row, value) in rows.iter_mut().zip(values) {
				row.push(value);
			}
		}

		Ok(rows.into_iter().map(DecodedRow::from).collect())
	}

	fn decode_row_major(&self, schema: &TableSchema, kinds: &[PrimitiveKind], rows: &[Row]) -> Result<Vec<DecodedRow>> {
		check_row_count(rows.len(), &self.config)?;

		rows.iter()
			.enumerate()
			.map(|(index, row)| {
				if row.col_vals.len() != schema.len() {
					return Err(Error::MalformedRow {
						row: index,
						reason: format!("holds {} values for {} columns", row.col_vals.len(), schema.len()),
					});
				}
				row.col_vals
					.iter()
					.zip(schema.iter().zip(kinds))
					.map(|(cell, (descriptor, kind))| decode_cell(index, descriptor, *kind, cell))
					.collect()
			})
			.collect()
	}
}

/// Resolves every schema column and insists it is primitive.
pub(crate) fn primitive_kinds(schema: &TableSchema, config: &DecoderConfig) -> Result<Vec<PrimitiveKind>> {
	schema.resolve_with(config.qualifier_policy, config.resolve_limits())?
		.into_iter()
		.map(|column| {
			column.logical_type.primitive_kind().ok_or_else(|| Error::UnsupportedColumnType {
				column: column.name.clone(),
				found: column.logical_type.shape_name().to_string(),
			})
		})
		.collect()
}

fn kind_mismatch(descriptor: &ColumnDescriptor, declared: PrimitiveKind, found: ColumnKind) -> Error {
	Error::ColumnKindMismatch {
		column: descriptor.name.clone(),
		declared: declared.sql_name().to_string(),
		found: found.to_string(),
	}
}

fn decode_cell(row: usize, descriptor: &ColumnDescriptor, declared: PrimitiveKind, cell: &ColumnValue) -> Result<ScalarValue> {
	// Row-major servers send binary columns as string cells.
	if declared == PrimitiveKind::Binary
		&& let ColumnValue::String(value) = cell
	{
		return Ok(value.as_ref().map_or(ScalarValue::Null, |s| ScalarValue::Binary(s.as_bytes().to_vec())));
	}

	if !declared.accepts(cell.kind()) {
		return Err(kind_mismatch(descriptor, declared, cell.kind()));
	}

	let malformed = |kind: &str, len: usize| Error::MalformedRow {
		row,
		reason: format!("{} cell of column '{}' holds a {} byte buffer", kind, descriptor.name, len),
	};

	let value = match cell {
		ColumnValue::Bool(v) => v.map(ScalarValue::Bool),
		ColumnValue::Byte(v) => match v {
			Some(buffer) => Some(byte_from_buffer(buffer).map(ScalarValue::Byte).ok_or_else(|| malformed("byte", buffer.len()))?),
			None => None,
		},
		ColumnValue::I16(v) => v.map(ScalarValue::I16),
		ColumnValue::I32(v) => v.map(ScalarValue::I32),
		ColumnValue::I64(v) => match v {
			Some(buffer) => Some(i64_from_buffer(buffer).map(ScalarValue::I64).ok_or_else(|| malformed("i64", buffer.len()))?),
			None => None,
		},
		ColumnValue::Double(v) => v.map(ScalarValue::double),
		ColumnValue::String(v) => v.clone().map(ScalarValue::String),
	};

	Ok(value.unwrap_or(ScalarValue::Null))
}

#[cfg(test)]
mod tests {
	use hiveproto_type::{TypeEntry, TypeTable};

	use super::*;
	use crate::{
		column::{I32Column, StringColumn},
		status::Status,
	};

	fn schema_x() -> TableSchema {
		TableSchema::new(vec![ColumnDescriptor::primitive("x", PrimitiveKind::Int, 1)])
	}

	#[test]
	fn test_end_to_end_int_column() {
		let row_set = RowSet::columnar(0, vec![Column::I32(I32Column::new(vec![1, 2, 3], vec![0b0000_0010]))]);
		let batch = RowSetDecoder::default().decode(&schema_x(), &row_set).unwrap();

		assert_eq!(batch.columns, vec!["x".to_string()]);
		assert_eq!(
			batch.rows,
			vec![
				DecodedRow::new(vec![ScalarValue::I32(1)]),
				DecodedRow::new(vec![ScalarValue::Null]),
				DecodedRow::new(vec![ScalarValue::I32(3)]),
			]
		);
	}

	#[test]
	fn test_length_mismatch() {
		let schema = TableSchema::new(vec![
			ColumnDescriptor::primitive("a", PrimitiveKind::Int, 1),
			ColumnDescriptor::primitive("b", PrimitiveKind::Int, 2),
		]);
		let row_set = RowSet::columnar(
			0,
			vec![
				Column::I32(I32Column::from_values(vec![1, 2, 3, 4, 5])),
				Column::I32(I32Column::from_values(vec![1, 2, 3, 4])),
			],
		);
		assert_eq!(
			RowSetDecoder::default().decode(&schema, &row_set).unwrap_err(),
			Error::ColumnLengthMismatch {
				column: "b".into(),
				expected: 5,
				found: 4,
			}
		);
	}

	#[test]
	fn test_column_count_mismatch() {
		let row_set = RowSet::columnar(0, vec![]);
		assert_eq!(
			RowSetDecoder::default().decode(&schema_x(), &row_set).unwrap_err(),
			Error::ColumnCountMismatch {
				expected: 1,
				found: 0,
			}
		);
	}

	#[test]
	fn test_composite_root_is_unsupported() {
		let schema = TableSchema::new(vec![ColumnDescriptor::new(
			"xs",
			TypeTable::new(vec![TypeEntry::array(1), TypeEntry::primitive(PrimitiveKind::Int)]),
			1,
		)]);
		let row_set = RowSet::columnar(0, vec![Column::String(StringColumn::from_values(vec!["[1,2]".into()]))]);
		assert_eq!(
			RowSetDecoder::default().decode(&schema, &row_set).unwrap_err(),
			Error::UnsupportedColumnType {
				column: "xs".into(),
				found: "array".into(),
			}
		);
	}

	#[test]
	fn test_kind_mismatch() {
		let row_set = RowSet::columnar(0, vec![Column::String(StringColumn::from_values(vec!["1".into()]))]);
		assert_eq!(
			RowSetDecoder::default().decode(&schema_x(), &row_set).unwrap_err(),
			Error::ColumnKindMismatch {
				column: "x".into(),
				declared: "int".into(),
				found: "stringVal".into(),
			}
		);
	}

	#[test]
	fn test_malformed_column_is_named() {
		let row_set = RowSet::columnar(0, vec![Column::I32(I32Column::new(vec![1; 9], vec![0]))]);
		match RowSetDecoder::default().decode(&schema_x(), &row_set) {
			Err(Error::MalformedColumn {
				column,
				..
			}) => assert_eq!(column, "x"),
			other => panic!("expected malformed column, got {other:?}"),
		}
	}

	#[test]
	fn test_start_row_offset_passthrough() {
		let row_set = RowSet::columnar(4096, vec![Column::I32(I32Column::from_values(vec![5]))]);
		let batch = RowSetDecoder::default().decode(&schema_x(), &row_set).unwrap();
		assert_eq!(batch.start_row_offset, 4096);
	}

	#[test]
	fn test_row_major() {
		let rows = vec![Row::new(vec![ColumnValue::I32(Some(1))]), Row::new(vec![ColumnValue::I32(None)])];
		let batch = RowSetDecoder::default().decode(&schema_x(), &RowSet::row_major(0, rows)).unwrap();
		assert_eq!(
			batch.rows,
			vec![DecodedRow::new(vec![ScalarValue::I32(1)]), DecodedRow::new(vec![ScalarValue::Null])]
		);
	}

	#[test]
	fn test_row_major_width_mismatch() {
		let rows = vec![Row::new(vec![ColumnValue::I32(Some(1)), ColumnValue::I32(Some(2))])];
		let err = RowSetDecoder::default().decode(&schema_x(), &RowSet::row_major(0, rows)).unwrap_err();
		assert_eq!(
			err,
			Error::MalformedRow {
				row: 0,
				reason: "holds 2 values for 1 columns".into(),
			}
		);
	}

	#[test]
	fn test_row_major_binary_from_string_cell() {
		let schema = TableSchema::new(vec![ColumnDescriptor::primitive("blob", PrimitiveKind::Binary, 1)]);
		let rows = vec![
			Row::new(vec![ColumnValue::String(Some("ab".into()))]),
			Row::new(vec![ColumnValue::String(None)]),
		];
		let batch = RowSetDecoder::default().decode(&schema, &RowSet::row_major(0, rows)).unwrap();
		assert_eq!(batch[0][0], ScalarValue::binary(b"ab".to_vec()));
		assert_eq!(batch[1][0], ScalarValue::Null);
	}

	#[test]
	fn test_row_major_bad_i64_buffer() {
		let schema = TableSchema::new(vec![ColumnDescriptor::primitive("n", PrimitiveKind::BigInt, 1)]);
		let rows = vec![Row::new(vec![ColumnValue::I64(Some(vec![1, 2]))])];
		let err = RowSetDecoder::default().decode(&schema, &RowSet::row_major(0, rows)).unwrap_err();
		assert_eq!(err.code(), "WIRE_006");
	}

	#[test]
	fn test_failed_status_short_circuits() {
		// The payload is malformed; a failed status must win before decoding.
		let status = Status::error("query was cancelled");
		let response = FetchResultsResponse {
			status: status.clone(),
			has_more_rows: false,
			results: Some(RowSet::columnar(0, vec![])),
		};
		assert_eq!(RowSetDecoder::default().decode_fetch(&schema_x(), &response), Err(Error::Status(status)));
	}

	#[test]
	fn test_fetch_without_results() {
		let response = FetchResultsResponse {
			status: Status::success(),
			has_more_rows: false,
			results: None,
		};
		let batch = RowSetDecoder::default().decode_fetch(&schema_x(), &response).unwrap();
		assert!(batch.is_empty());
		assert_eq!(batch.columns, vec!["x".to_string()]);
	}

	#[test]
	fn test_resolve_schema_checks_status() {
		let response = GetResultSetMetadataResponse {
			status: Status::new(crate::status::StatusCode::InvalidHandle),
			schema: Some(schema_x()),
		};
		assert_eq!(RowSetDecoder::default().resolve_schema(&response).unwrap_err().code(), "WIRE_008");

		let response = GetResultSetMetadataResponse {
			status: Status::success(),
			schema: Some(schema_x()),
		};
		let resolved = RowSetDecoder::default().resolve_schema(&response).unwrap();
		assert_eq!(resolved[0].logical_type.to_string(), "int");
	}
}
