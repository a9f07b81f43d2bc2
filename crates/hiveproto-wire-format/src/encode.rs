// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::{ColumnKind, ScalarValue, TableSchema};
use tracing::{debug, instrument};

use crate::{
	batch::DecodedRow,
	codec::{byte_to_buffer, encode_column, i64_to_buffer},
	config::DecoderConfig,
	decode::primitive_kinds,
	error::{Error, Result},
	row::{ColumnValue, Row},
	row_set::RowSet,
};

/// Encodes typed rows into a columnar [`RowSet`] for `schema`.
///
/// Columns declared as `void` or with an unknown type code take the kind of
/// their first non-null value, falling back to strings.
#[instrument(name = "wire::encode_row_set", level = "trace", skip_all, fields(rows = rows.len()))]
pub fn encode_row_set(schema: &TableSchema, rows: &[DecodedRow], start_row_offset: i64) -> Result<RowSet> {
	let kinds = column_kinds(schema, rows)?;

	let columns = schema
		.iter()
		.zip(kinds)
		.enumerate()
		.map(|(index, (descriptor, (kind, _)))| {
			let values: Vec<ScalarValue> = rows.iter().map(|row| row[index].clone()).collect();
			encode_column(kind, &values).map_err(|e| e.with_column(&descriptor.name))
		})
		.collect::<Result<Vec<_>>>()?;

	debug!(columns = columns.len(), rows = rows.len(), "encoded columnar row set");
	Ok(RowSet::columnar(start_row_offset, columns))
}

/// Encodes typed rows into the legacy row-major form. Binary values travel
/// as string cells and must be valid UTF-8. Only columns declared as binary
/// may carry them, since nothing else tells the reader to turn those cells
/// back into bytes.
#[instrument(name = "wire::encode_row_major", level = "trace", skip_all, fields(rows = rows.len()))]
pub fn encode_row_major(schema: &TableSchema, rows: &[DecodedRow], start_row_offset: i64) -> Result<RowSet> {
	let kinds = column_kinds(schema, rows)?;

	let encoded = rows
		.iter()
		.enumerate()
		.map(|(index, row)| {
			row.iter()
				.zip(schema.iter().zip(&kinds))
				.map(|(value, (descriptor, (kind, declared)))| {
					if *kind == ColumnKind::Binary && !declared && !value.is_null() {
						return Err(Error::MalformedRow {
							row: index,
							reason: format!(
								"binary value in untyped column '{}' cannot be sent as a string cell",
								descriptor.name
							),
						});
					}
					encode_cell(index, *kind, value).map_err(|e| e.with_column(&descriptor.name))
				})
				.collect::<Result<Vec<_>>>()
				.map(Row::new)
		})
		.collect::<Result<Vec<_>>>()?;

	debug!(rows = encoded.len(), "encoded row-major row set");
	Ok(RowSet::row_major(start_row_offset, encoded))
}

/// The wire kind of every column, paired with whether the schema declared it
/// or it was inferred from the values.
fn column_kinds(schema: &TableSchema, rows: &[DecodedRow]) -> Result<Vec<(ColumnKind, bool)>> {
	for (index, row) in rows.iter().enumerate() {
		if row.len() != schema.len() {
			return Err(Error::MalformedRow {
				row: index,
				reason: format!("holds {} values for {} columns", row.len(), schema.len()),
			});
		}
	}

	let declared = primitive_kinds(schema, &DecoderConfig::default())?;
	Ok(declared
		.into_iter()
		.enumerate()
		.map(|(index, kind)| match kind.column_kind() {
			Some(declared) => (declared, true),
			None => (inferred_kind(rows, index), false),
		})
		.collect())
}

fn inferred_kind(rows: &[DecodedRow], index: usize) -> ColumnKind {
	rows.iter().find_map(|row| row[index].column_kind()).unwrap_or(ColumnKind::String)
}

fn encode_cell(row: usize, kind: ColumnKind, value: &ScalarValue) -> Result<ColumnValue> {
	let cell = match (kind, value) {
		(ColumnKind::Bool, ScalarValue::Null) => ColumnValue::Bool(None),
		(ColumnKind::Byte, ScalarValue::Null) => ColumnValue::Byte(None),
		(ColumnKind::I16, ScalarValue::Null) => ColumnValue::I16(None),
		(ColumnKind::I32, ScalarValue::Null) => ColumnValue::I32(None),
		(ColumnKind::I64, ScalarValue::Null) => ColumnValue::I64(None),
		(ColumnKind::Double, ScalarValue::Null) => ColumnValue::Double(None),
		(ColumnKind::String | ColumnKind::Binary, ScalarValue::Null) => ColumnValue::String(None),
		(ColumnKind::Bool, ScalarValue::Bool(b)) => ColumnValue::Bool(Some(*b)),
		(ColumnKind::Byte, ScalarValue::Byte(b)) => ColumnValue::Byte(Some(byte_to_buffer(*b))),
		(ColumnKind::I16, ScalarValue::I16(n)) => ColumnValue::I16(Some(*n)),
		(ColumnKind::I32, ScalarValue::I32(n)) => ColumnValue::I32(Some(*n)),
		(ColumnKind::I64, ScalarValue::I64(n)) => ColumnValue::I64(Some(i64_to_buffer(*n))),
		(ColumnKind::Double, ScalarValue::Double(d)) => ColumnValue::Double(Some(d.value())),
		(ColumnKind::String, ScalarValue::String(s)) => ColumnValue::String(Some(s.clone())),
		(ColumnKind::Binary, ScalarValue::Binary(bytes)) => {
			let text = String::from_utf8(bytes.clone()).map_err(|_| Error::MalformedRow {
				row,
				reason: "binary value is not valid UTF-8 and cannot be sent as a string cell".to_string(),
			})?;
			ColumnValue::String(Some(text))
		}
		(_, other) => {
			return Err(Error::ColumnKindMismatch {
				column: String::new(),
				declared: kind.to_string(),
				found: other.column_kind().map_or_else(|| "null".to_string(), |found| found.to_string()),
			});
		}
	};
	Ok(cell)
}

#[cfg(test)]
mod tests {
	use hiveproto_type::{ColumnDescriptor, PrimitiveKind};

	use super::*;
	use crate::{column::Column, row_set::RowSetData};

	fn schema() -> TableSchema {
		TableSchema::new(vec![
			ColumnDescriptor::primitive("id", PrimitiveKind::BigInt, 1),
			ColumnDescriptor::primitive("name", PrimitiveKind::Varchar, 2),
		])
	}

	fn rows() -> Vec<DecodedRow> {
		vec![
			DecodedRow::new(vec![ScalarValue::i64(1), ScalarValue::string("a")]),
			DecodedRow::new(vec![ScalarValue::i64(2), ScalarValue::Null]),
		]
	}

	#[test]
	fn test_encode_columnar() {
		let row_set = encode_row_set(&schema(), &rows(), 10).unwrap();
		assert_eq!(row_set.start_row_offset, 10);

		let RowSetData::Columnar(columns) = row_set.data else {
			panic!("expected a columnar row set");
		};
		assert_eq!(columns[0].kind(), ColumnKind::I64);
		assert_eq!(columns[1].kind(), ColumnKind::String);
		assert_eq!(columns[1].nulls(), &[0b0000_0010]);
		match &columns[0] {
			Column::I64(c) => assert_eq!(c.values[1], vec![0, 0, 0, 0, 0, 0, 0, 2]),
			other => panic!("unexpected column {other:?}"),
		}
	}

	#[test]
	fn test_encode_row_width_mismatch() {
		let rows = vec![DecodedRow::new(vec![ScalarValue::i64(1)])];
		assert_eq!(encode_row_set(&schema(), &rows, 0).unwrap_err().code(), "WIRE_006");
	}

	#[test]
	fn test_encode_wrong_kind_names_column() {
		let rows = vec![DecodedRow::new(vec![ScalarValue::string("x"), ScalarValue::Null])];
		match encode_row_set(&schema(), &rows, 0) {
			Err(Error::ColumnKindMismatch {
				column,
				..
			}) => assert_eq!(column, "id"),
			other => panic!("expected kind mismatch, got {other:?}"),
		}
	}

	#[test]
	fn test_void_column_infers_kind() {
		let schema = TableSchema::new(vec![ColumnDescriptor::primitive("v", PrimitiveKind::Null, 1)]);
		let rows = vec![DecodedRow::new(vec![ScalarValue::Null]), DecodedRow::new(vec![ScalarValue::i32(7)])];
		let RowSetData::Columnar(columns) = encode_row_set(&schema, &rows, 0).unwrap().data else {
			panic!("expected a columnar row set");
		};
		assert_eq!(columns[0].kind(), ColumnKind::I32);

		let rows = vec![DecodedRow::new(vec![ScalarValue::Null])];
		let RowSetData::Columnar(columns) = encode_row_set(&schema, &rows, 0).unwrap().data else {
			panic!("expected a columnar row set");
		};
		assert_eq!(columns[0].kind(), ColumnKind::String);
	}

	#[test]
	fn test_row_major_binary_in_void_column() {
		let schema = TableSchema::new(vec![ColumnDescriptor::primitive("v", PrimitiveKind::Null, 1)]);
		let rows = vec![DecodedRow::new(vec![ScalarValue::binary(b"ab".to_vec())])];

		assert!(encode_row_set(&schema, &rows, 0).is_ok());
		assert_eq!(
			encode_row_major(&schema, &rows, 0).unwrap_err(),
			Error::MalformedRow {
				row: 0,
				reason: "binary value in untyped column 'v' cannot be sent as a string cell".into(),
			}
		);
	}

	#[test]
	fn test_encode_row_major() {
		let RowSetData::RowMajor(rows) = encode_row_major(&schema(), &rows(), 0).unwrap().data else {
			panic!("expected a row-major row set");
		};
		assert_eq!(
			rows[1],
			Row::new(vec![ColumnValue::I64(Some(vec![0, 0, 0, 0, 0, 0, 0, 2])), ColumnValue::String(None)])
		);
	}

	#[test]
	fn test_row_major_binary_not_utf8() {
		let schema = TableSchema::new(vec![ColumnDescriptor::primitive("b", PrimitiveKind::Binary, 1)]);
		let rows = vec![DecodedRow::new(vec![ScalarValue::binary(vec![0xff, 0xfe])])];
		assert_eq!(encode_row_major(&schema, &rows, 0).unwrap_err().code(), "WIRE_006");

		let rows = vec![DecodedRow::new(vec![ScalarValue::binary(b"ok".to_vec())])];
		let RowSetData::RowMajor(encoded) = encode_row_major(&schema, &rows, 0).unwrap().data else {
			panic!("expected a row-major row set");
		};
		assert_eq!(encoded[0].col_vals[0], ColumnValue::String(Some("ok".into())));
	}
}
