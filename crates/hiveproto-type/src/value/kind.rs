// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The value kinds a wire column (or a legacy row-major cell) can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
	Bool,
	Byte,
	I16,
	I32,
	I64,
	Double,
	String,
	Binary,
}

impl ColumnKind {
	pub const ALL: [ColumnKind; 8] = [
		ColumnKind::Bool,
		ColumnKind::Byte,
		ColumnKind::I16,
		ColumnKind::I32,
		ColumnKind::I64,
		ColumnKind::Double,
		ColumnKind::String,
		ColumnKind::Binary,
	];

	/// Field name of this kind in the `TColumn` union.
	pub fn wire_name(&self) -> &'static str {
		match self {
			ColumnKind::Bool => "boolVal",
			ColumnKind::Byte => "byteVal",
			ColumnKind::I16 => "i16Val",
			ColumnKind::I32 => "i32Val",
			ColumnKind::I64 => "i64Val",
			ColumnKind::Double => "doubleVal",
			ColumnKind::String => "stringVal",
			ColumnKind::Binary => "binaryVal",
		}
	}
}

impl Display for ColumnKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.wire_name())
	}
}
