// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	sync::Arc,
};

use serde::{Deserialize, Serialize};

use super::{PrimitiveKind, TypeQualifiers};

/// A fully dereferenced type. Sub-trees shared in the type table are shared
/// here through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalType {
	Primitive {
		kind: PrimitiveKind,
		qualifiers: TypeQualifiers,
	},
	Array(Arc<LogicalType>),
	Map {
		key: Arc<LogicalType>,
		value: Arc<LogicalType>,
	},
	/// Fields in declaration order.
	Struct(Vec<(String, Arc<LogicalType>)>),
	Union(Vec<(String, Arc<LogicalType>)>),
	UserDefined {
		class_name: String,
	},
}

impl LogicalType {
	pub fn primitive(kind: PrimitiveKind) -> Self {
		LogicalType::Primitive {
			kind,
			qualifiers: TypeQualifiers::default(),
		}
	}

	pub fn is_primitive(&self) -> bool {
		matches!(self, LogicalType::Primitive { .. })
	}

	pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
		match self {
			LogicalType::Primitive {
				kind,
				..
			} => Some(*kind),
			_ => None,
		}
	}

	pub fn qualifiers(&self) -> Option<&TypeQualifiers> {
		match self {
			LogicalType::Primitive {
				qualifiers,
				..
			} => Some(qualifiers),
			_ => None,
		}
	}

	/// Short name of the outermost shape, used in error messages.
	pub fn shape_name(&self) -> &'static str {
		match self {
			LogicalType::Primitive {
				kind,
				..
			} => kind.sql_name(),
			LogicalType::Array(_) => "array",
			LogicalType::Map {
				..
			} => "map",
			LogicalType::Struct(_) => "struct",
			LogicalType::Union(_) => "uniontype",
			LogicalType::UserDefined {
				..
			} => "user defined",
		}
	}
}

impl Display for LogicalType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			LogicalType::Primitive {
				kind,
				qualifiers,
			} => match kind {
				PrimitiveKind::Decimal => match (qualifiers.precision(), qualifiers.scale()) {
					(Some(precision), Some(scale)) => write!(f, "decimal({},{})", precision, scale),
					(Some(precision), None) => write!(f, "decimal({})", precision),
					_ => f.write_str("decimal"),
				},
				PrimitiveKind::Varchar | PrimitiveKind::Char => match qualifiers.max_length() {
					Some(len) => write!(f, "{}({})", kind.sql_name(), len),
					None => f.write_str(kind.sql_name()),
				},
				PrimitiveKind::Other(code) => write!(f, "unknown({})", code),
				_ => f.write_str(kind.sql_name()),
			},
			LogicalType::Array(element) => write!(f, "array<{}>", element),
			LogicalType::Map {
				key,
				value,
			} => write!(f, "map<{},{}>", key, value),
			LogicalType::Struct(fields) => {
				f.write_str("struct<")?;
				for (i, (name, ty)) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}:{}", name, ty)?;
				}
				f.write_str(">")
			}
			LogicalType::Union(members) => {
				f.write_str("uniontype<")?;
				for (i, (_, ty)) in members.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}", ty)?;
				}
				f.write_str(">")
			}
			LogicalType::UserDefined {
				class_name,
			} => f.write_str(class_name),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{CHARACTER_MAXIMUM_LENGTH, PRECISION, SCALE, TypeQualifierValue};

	fn int() -> Arc<LogicalType> {
		Arc::new(LogicalType::primitive(PrimitiveKind::Int))
	}

	#[test]
	fn test_display_nested() {
		let ty = LogicalType::Array(Arc::new(LogicalType::Map {
			key: Arc::new(LogicalType::primitive(PrimitiveKind::String)),
			value: int(),
		}));
		assert_eq!(ty.to_string(), "array<map<string,int>>");
	}

	#[test]
	fn test_display_struct_and_union() {
		let s = LogicalType::Struct(vec![("b".into(), int()), ("a".into(), int())]);
		assert_eq!(s.to_string(), "struct<b:int,a:int>");

		let u = LogicalType::Union(vec![
			("0".into(), int()),
			("1".into(), Arc::new(LogicalType::primitive(PrimitiveKind::String))),
		]);
		assert_eq!(u.to_string(), "uniontype<int,string>");
	}

	#[test]
	fn test_display_qualified() {
		let decimal = LogicalType::Primitive {
			kind: PrimitiveKind::Decimal,
			qualifiers: TypeQualifiers::new()
				.with(PRECISION, TypeQualifierValue::I32(10))
				.with(SCALE, TypeQualifierValue::I32(2)),
		};
		assert_eq!(decimal.to_string(), "decimal(10,2)");

		let varchar = LogicalType::Primitive {
			kind: PrimitiveKind::Varchar,
			qualifiers: TypeQualifiers::new().with(CHARACTER_MAXIMUM_LENGTH, TypeQualifierValue::I32(20)),
		};
		assert_eq!(varchar.to_string(), "varchar(20)");
	}

	#[test]
	fn test_struct_equality_is_order_sensitive() {
		let ab = LogicalType::Struct(vec![("a".into(), int()), ("b".into(), int())]);
		let ba = LogicalType::Struct(vec![("b".into(), int()), ("a".into(), int())]);
		assert_ne!(ab, ba);
	}
}
