// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::TableSchema;
use serde::{Deserialize, Serialize};

use crate::{row_set::RowSet, status::Status};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FetchResultsResponse {
	pub status: Status,
	#[serde(default)]
	pub has_more_rows: bool,
	/// Absent when the operation produced no result set.
	#[serde(default)]
	pub results: Option<RowSet>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetResultSetMetadataResponse {
	pub status: Status,
	#[serde(default)]
	pub schema: Option<TableSchema>,
}
