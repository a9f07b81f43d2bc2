// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Answer to a `GetInfo` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GetInfoValue {
	String(String),
	SmallInt(i16),
	IntegerBitmask(i32),
	IntegerFlag(i32),
	BinaryValue(i32),
	LenValue(i64),
}

/// Progress report of a running query, rendered by the server as a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdateResponse {
	pub header_names: Vec<String>,
	pub rows: Vec<Vec<String>>,
	pub progressed_percentage: f64,
	pub status: i32,
	pub footer_summary: String,
	pub start_time: i64,
}
