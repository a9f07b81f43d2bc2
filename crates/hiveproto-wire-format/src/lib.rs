// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Result set encoding of the HiveServer2 wire protocol.
//!
//! A fetch returns a [`RowSet`], either columnar (one value array and null
//! bitmap per column) or in the legacy row-major form. [`RowSetDecoder`]
//! combines it with the [`TableSchema`] of the operation and produces a
//! [`RowBatch`] of typed rows; [`encode_row_set`] goes the other way.

mod batch;
mod codec;
mod column;
mod config;
mod decode;
mod encode;
pub mod error;
mod handle;
mod info;
mod response;
mod row;
mod row_set;
mod status;

pub use batch::{DecodedRow, RowBatch};
pub use codec::{decode_column, encode_column};
pub use column::{
	BinaryColumn, BoolColumn, ByteColumn, Column, ColumnData, DoubleColumn, I16Column, I32Column, I64Column,
	StringColumn,
};
pub use config::DecoderConfig;
pub use decode::RowSetDecoder;
pub use encode::{encode_row_major, encode_row_set};
pub use error::{Error, Result};
pub use handle::{HandleIdentifier, OperationHandle, SessionHandle};
pub use hiveproto_type::{
	ColumnDescriptor, ColumnKind, LogicalType, PrimitiveKind, QualifierPolicy, ScalarValue, TableSchema, TypeEntry,
	TypePointer, TypeTable,
};
pub use info::{GetInfoValue, ProgressUpdateResponse};
pub use response::{FetchResultsResponse, GetResultSetMetadataResponse};
pub use row::{ColumnValue, Row};
pub use row_set::{RowSet, RowSetData};
pub use status::{Status, StatusCode};
