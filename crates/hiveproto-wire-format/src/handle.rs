// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Opaque guid and secret pair naming a session or operation on the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleIdentifier {
	#[serde(with = "serde_bytes")]
	pub guid: Vec<u8>,
	#[serde(with = "serde_bytes")]
	pub secret: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionHandle {
	pub session_id: HandleIdentifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationHandle {
	pub operation_id: HandleIdentifier,
	pub operation_type: i32,
	pub has_result_set: bool,
	#[serde(default)]
	pub modified_row_count: Option<f64>,
}
