// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::{ColumnKind, ScalarValue, util::NullBitmap};
use tracing::{instrument, warn};

use crate::{
	column::{Column, ColumnData},
	config::DecoderConfig,
	error::{Error, Result},
};

/// Decodes `column` into one value per row, with `ScalarValue::Null` where
/// the null bitmap marks the row.
#[instrument(name = "wire::decode_column", level = "trace", skip(column, config), fields(kind = %column.kind()))]
pub fn decode_column(column: &Column, row_count: usize, config: &DecoderConfig) -> Result<Vec<ScalarValue>> {
	match column {
		Column::Bool(c) => decode_values(c, row_count, config, |v| Ok(ScalarValue::Bool(*v))),
		Column::Byte(c) => decode_values(c, row_count, config, |v| {
			byte_from_buffer(v).map(ScalarValue::Byte).ok_or_else(|| malformed_buffer("byte", 1, v.len()))
		}),
		Column::I16(c) => decode_values(c, row_count, config, |v| Ok(ScalarValue::I16(*v))),
		Column::I32(c) => decode_values(c, row_count, config, |v| Ok(ScalarValue::I32(*v))),
		Column::I64(c) => decode_values(c, row_count, config, |v| {
			i64_from_buffer(v).map(ScalarValue::I64).ok_or_else(|| malformed_buffer("i64", 8, v.len()))
		}),
		Column::Double(c) => decode_values(c, row_count, config, |v| Ok(ScalarValue::double(*v))),
		Column::String(c) => decode_values(c, row_count, config, |v| Ok(ScalarValue::String(v.clone()))),
		Column::Binary(c) => decode_values(c, row_count, config, |v| Ok(ScalarValue::Binary(v.clone()))),
	}
}

fn decode_values<T, F>(data: &ColumnData<T>, row_count: usize, config: &DecoderConfig, convert: F) -> Result<Vec<ScalarValue>>
where
	F: Fn(&T) -> Result<ScalarValue>,
{
	check_shape(data.values.len(), &data.nulls, row_count, config)?;

	data.values
		.iter()
		.enumerate()
		.map(|(row, value)| {
			if NullBitmap::is_null_in(&data.nulls, row) {
				Ok(ScalarValue::Null)
			} else {
				convert(value)
			}
		})
		.collect()
}

pub(crate) fn check_row_count(row_count: usize, config: &DecoderConfig) -> Result<()> {
	if row_count > config.max_rows {
		return Err(Error::OversizedInput {
			what: "row count",
			found: row_count,
			limit: config.max_rows,
		});
	}
	Ok(())
}

fn check_shape(values: usize, nulls: &[u8], row_count: usize, config: &DecoderConfig) -> Result<()> {
	check_row_count(row_count, config)?;
	check_row_count(values, config)?;

	let limit = config.null_bitmap_limit();
	if nulls.len() > limit {
		return Err(Error::OversizedInput {
			what: "null bitmap",
			found: nulls.len(),
			limit,
		});
	}

	if values != row_count {
		return Err(Error::MalformedColumn {
			column: String::new(),
			reason: format!("holds {} values for {} rows", values, row_count),
		});
	}

	let required = NullBitmap::byte_len(row_count);
	if nulls.len() < required {
		if !config.lenient_null_bitmap {
			return Err(Error::MalformedColumn {
				column: String::new(),
				reason: format!(
					"null bitmap of {} bytes cannot cover {} rows, {} bytes required",
					nulls.len(),
					row_count,
					required
				),
			});
		}
		warn!(bytes = nulls.len(), required, "short null bitmap, treating missing rows as not null");
	}

	Ok(())
}

fn malformed_buffer(kind: &str, expected: usize, found: usize) -> Error {
	Error::MalformedColumn {
		column: String::new(),
		reason: format!("{} value buffer of {} bytes, expected {}", kind, found, expected),
	}
}

pub(crate) fn byte_from_buffer(buffer: &[u8]) -> Option<i8> {
	match buffer {
		[byte] => Some(*byte as i8),
		_ => None,
	}
}

pub(crate) fn i64_from_buffer(buffer: &[u8]) -> Option<i64> {
	let bytes: [u8; 8] = buffer.try_into().ok()?;
	Some(i64::from_be_bytes(bytes))
}

pub(crate) fn byte_to_buffer(value: i8) -> Vec<u8> {
	vec![value as u8]
}

pub(crate) fn i64_to_buffer(value: i64) -> Vec<u8> {
	value.to_be_bytes().to_vec()
}

/// Encodes `values` into a column of `kind`. Null values get a zeroed bitmap
/// bit set and a default slot value.
pub fn encode_column(kind: ColumnKind, values: &[ScalarValue]) -> Result<Column> {
	let column = match kind {
		ColumnKind::Bool => Column::Bool(encode_values(kind, values, false, |v| match v {
			ScalarValue::Bool(b) => Some(*b),
			_ => None,
		})?),
		ColumnKind::Byte => Column::Byte(encode_values(kind, values, vec![0u8], |v| match v {
			ScalarValue::Byte(b) => Some(byte_to_buffer(*b)),
			_ => None,
		})?),
		ColumnKind::I16 => Column::I16(encode_values(kind, values, 0, |v| match v {
			ScalarValue::I16(n) => Some(*n),
			_ => None,
		})?),
		ColumnKind::I32 => Column::I32(encode_values(kind, values, 0, |v| match v {
			ScalarValue::I32(n) => Some(*n),
			_ => None,
		})?),
		ColumnKind::I64 => Column::I64(encode_values(kind, values, vec![0u8; 8], |v| match v {
			ScalarValue::I64(n) => Some(i64_to_buffer(*n)),
			_ => None,
		})?),
		ColumnKind::Double => Column::Double(encode_values(kind, values, 0.0, |v| match v {
			ScalarValue::Double(d) => Some(d.value()),
			_ => None,
		})?),
		ColumnKind::String => Column::String(encode_values(kind, values, String::new(), |v| match v {
			ScalarValue::String(s) => Some(s.clone()),
			_ => None,
		})?),
		ColumnKind::Binary => Column::Binary(encode_values(kind, values, Vec::new(), |v| match v {
			ScalarValue::Binary(b) => Some(b.clone()),
			_ => None,
		})?),
	};
	Ok(column)
}

fn encode_values<T, F>(kind: ColumnKind, values: &[ScalarValue], default: T, extract: F) -> Result<ColumnData<T>>
where
	T: Clone,
	F: Fn(&ScalarValue) -> Option<T>,
{
	let mut nulls = NullBitmap::with_rows(values.len());
	let mut out = Vec::with_capacity(values.len());

	for (row, value) in values.iter().enumerate() {
		if value.is_null() {
			nulls.set_null(row);
			out.push(default.clone());
			continue;
		}
		match extract(value) {
			Some(v) => out.push(v),
			None => {
				return Err(Error::ColumnKindMismatch {
					column: String::new(),
					declared: kind.to_string(),
					found: value.column_kind().map_or_else(|| "null".to_string(), |k| k.to_string()),
				});
			}
		}
	}

	Ok(ColumnData::new(out, nulls.into_bytes()))
}
