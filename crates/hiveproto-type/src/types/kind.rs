// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::value::ColumnKind;

const ARRAY_TYPE: i32 = 10;
const USER_DEFINED_TYPE: i32 = 14;

/// Primitive type ids of the wire protocol (`TTypeId`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
	Boolean,
	TinyInt,
	SmallInt,
	Int,
	BigInt,
	Float,
	Double,
	String,
	Timestamp,
	Binary,
	Decimal,
	Null,
	Date,
	Varchar,
	Char,
	IntervalYearMonth,
	IntervalDayTime,
	TimestampWithLocalTimeZone,
	/// A type id this crate does not know about, kept verbatim.
	Other(i32),
}

impl PrimitiveKind {
	/// Maps a wire type id to a primitive kind. Returns `None` for the ids
	/// reserved for array, map, struct, union and user defined types.
	pub fn from_code(code: i32) -> Option<Self> {
		let kind = match code {
			0 => PrimitiveKind::Boolean,
			1 => PrimitiveKind::TinyInt,
			2 => PrimitiveKind::SmallInt,
			3 => PrimitiveKind::Int,
			4 => PrimitiveKind::BigInt,
			5 => PrimitiveKind::Float,
			6 => PrimitiveKind::Double,
			7 => PrimitiveKind::String,
			8 => PrimitiveKind::Timestamp,
			9 => PrimitiveKind::Binary,
			ARRAY_TYPE..=USER_DEFINED_TYPE => return None,
			15 => PrimitiveKind::Decimal,
			16 => PrimitiveKind::Null,
			17 => PrimitiveKind::Date,
			18 => PrimitiveKind::Varchar,
			19 => PrimitiveKind::Char,
			20 => PrimitiveKind::IntervalYearMonth,
			21 => PrimitiveKind::IntervalDayTime,
			22 => PrimitiveKind::TimestampWithLocalTimeZone,
			other => PrimitiveKind::Other(other),
		};
		Some(kind)
	}

	pub fn code(&self) -> i32 {
		match self {
			PrimitiveKind::Boolean => 0,
			PrimitiveKind::TinyInt => 1,
			PrimitiveKind::SmallInt => 2,
			PrimitiveKind::Int => 3,
			PrimitiveKind::BigInt => 4,
			PrimitiveKind::Float => 5,
			PrimitiveKind::Double => 6,
			PrimitiveKind::String => 7,
			PrimitiveKind::Timestamp => 8,
			PrimitiveKind::Binary => 9,
			PrimitiveKind::Decimal => 15,
			PrimitiveKind::Null => 16,
			PrimitiveKind::Date => 17,
			PrimitiveKind::Varchar => 18,
			PrimitiveKind::Char => 19,
			PrimitiveKind::IntervalYearMonth => 20,
			PrimitiveKind::IntervalDayTime => 21,
			PrimitiveKind::TimestampWithLocalTimeZone => 22,
			PrimitiveKind::Other(code) => *code,
		}
	}

	/// Type name as the server spells it in a type string.
	pub fn sql_name(&self) -> &'static str {
		match self {
			PrimitiveKind::Boolean => "boolean",
			PrimitiveKind::TinyInt => "tinyint",
			PrimitiveKind::SmallInt => "smallint",
			PrimitiveKind::Int => "int",
			PrimitiveKind::BigInt => "bigint",
			PrimitiveKind::Float => "float",
			PrimitiveKind::Double => "double",
			PrimitiveKind::String => "string",
			PrimitiveKind::Timestamp => "timestamp",
			PrimitiveKind::Binary => "binary",
			PrimitiveKind::Decimal => "decimal",
			PrimitiveKind::Null => "void",
			PrimitiveKind::Date => "date",
			PrimitiveKind::Varchar => "varchar",
			PrimitiveKind::Char => "char",
			PrimitiveKind::IntervalYearMonth => "interval_year_month",
			PrimitiveKind::IntervalDayTime => "interval_day_time",
			PrimitiveKind::TimestampWithLocalTimeZone => "timestamp with local time zone",
			PrimitiveKind::Other(_) => "unknown",
		}
	}

	/// The wire column kind values of this type travel as. `None` means the
	/// server may pick any kind (null type and unknown ids).
	pub fn column_kind(&self) -> Option<ColumnKind> {
		match self {
			PrimitiveKind::Boolean => Some(ColumnKind::Bool),
			PrimitiveKind::TinyInt => Some(ColumnKind::Byte),
			PrimitiveKind::SmallInt => Some(ColumnKind::I16),
			PrimitiveKind::Int => Some(ColumnKind::I32),
			PrimitiveKind::BigInt => Some(ColumnKind::I64),
			PrimitiveKind::Float | PrimitiveKind::Double => Some(ColumnKind::Double),
			PrimitiveKind::Binary => Some(ColumnKind::Binary),
			PrimitiveKind::Null | PrimitiveKind::Other(_) => None,
			PrimitiveKind::String
			| PrimitiveKind::Timestamp
			| PrimitiveKind::Decimal
			| PrimitiveKind::Date
			| PrimitiveKind::Varchar
			| PrimitiveKind::Char
			| PrimitiveKind::IntervalYearMonth
			| PrimitiveKind::IntervalDayTime
			| PrimitiveKind::TimestampWithLocalTimeZone => Some(ColumnKind::String),
		}
	}

	pub fn accepts(&self, kind: ColumnKind) -> bool {
		self.column_kind().is_none_or(|expected| expected == kind)
	}
}
