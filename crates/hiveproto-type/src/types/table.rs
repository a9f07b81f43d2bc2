// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{PrimitiveKind, TypeQualifiers};
use crate::error::{Error, Result};

/// Position of an entry inside a [`TypeTable`].
pub type TypePointer = usize;

/// A primitive entry as it arrives on the wire: the raw type id plus its
/// qualifiers. The id is interpreted by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveEntry {
	pub type_code: i32,
	#[serde(default)]
	pub qualifiers: TypeQualifiers,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeEntry {
	Primitive(PrimitiveEntry),
	Array {
		element: TypePointer,
	},
	Map {
		key: TypePointer,
		value: TypePointer,
	},
	/// Fields in declaration order.
	Struct {
		fields: IndexMap<String, TypePointer>,
	},
	Union {
		members: IndexMap<String, TypePointer>,
	},
	UserDefined {
		class_name: String,
	},
}

impl TypeEntry {
	pub fn primitive(kind: PrimitiveKind) -> Self {
		Self::primitive_with(kind, TypeQualifiers::default())
	}

	pub fn primitive_with(kind: PrimitiveKind, qualifiers: TypeQualifiers) -> Self {
		TypeEntry::Primitive(PrimitiveEntry {
			type_code: kind.code(),
			qualifiers,
		})
	}

	pub fn array(element: TypePointer) -> Self {
		TypeEntry::Array {
			element,
		}
	}

	pub fn map(key: TypePointer, value: TypePointer) -> Self {
		TypeEntry::Map {
			key,
			value,
		}
	}

	pub fn structure<N: Into<String>>(fields: impl IntoIterator<Item = (N, TypePointer)>) -> Self {
		TypeEntry::Struct {
			fields: fields.into_iter().map(|(name, ptr)| (name.into(), ptr)).collect(),
		}
	}

	pub fn union<N: Into<String>>(members: impl IntoIterator<Item = (N, TypePointer)>) -> Self {
		TypeEntry::Union {
			members: members.into_iter().map(|(name, ptr)| (name.into(), ptr)).collect(),
		}
	}

	pub fn user_defined(class_name: impl Into<String>) -> Self {
		TypeEntry::UserDefined {
			class_name: class_name.into(),
		}
	}

	pub fn is_primitive(&self) -> bool {
		matches!(self, TypeEntry::Primitive(_))
	}

	/// Pointers this entry references directly, in declaration order.
	pub fn children(&self) -> Vec<TypePointer> {
		match self {
			TypeEntry::Primitive(_)
			| TypeEntry::UserDefined {
				..
			} => vec![],
			TypeEntry::Array {
				element,
			} => vec![*element],
			TypeEntry::Map {
				key,
				value,
			} => vec![*key, *value],
			TypeEntry::Struct {
				fields: children,
			}
			| TypeEntry::Union {
				members: children,
			} => children.values().copied().collect(),
		}
	}
}

/// Flat table of type entries referenced by position. Entries may share
/// children; a table is immutable once handed to a schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
	entries: Vec<TypeEntry>,
}

impl TypeTable {
	pub fn new(entries: Vec<TypeEntry>) -> Self {
		Self {
			entries,
		}
	}

	/// A table holding a single primitive entry at pointer 0.
	pub fn primitive(kind: PrimitiveKind) -> Self {
		Self::new(vec![TypeEntry::primitive(kind)])
	}

	/// Appends an entry and returns its pointer.
	pub fn push(&mut self, entry: TypeEntry) -> TypePointer {
		self.entries.push(entry);
		self.entries.len() - 1
	}

	pub fn get(&self, pointer: TypePointer) -> Result<&TypeEntry> {
		self.entries.get(pointer).ok_or(Error::DanglingPointer {
			pointer,
			len: self.entries.len(),
		})
	}

	pub fn entries(&self) -> &[TypeEntry] {
		&self.entries
	}
}

impl Deref for TypeTable {
	type Target = [TypeEntry];

	fn deref(&self) -> &Self::Target {
		&self.entries
	}
}

impl From<Vec<TypeEntry>> for TypeTable {
	fn from(entries: Vec<TypeEntry>) -> Self {
		Self::new(entries)
	}
}

impl FromIterator<TypeEntry> for TypeTable {
	fn from_iter<T: IntoIterator<Item = TypeEntry>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_returns_pointer() {
		let mut table = TypeTable::default();
		let int = table.push(TypeEntry::primitive(PrimitiveKind::Int));
		let list = table.push(TypeEntry::array(int));
		assert_eq!(int, 0);
		assert_eq!(list, 1);
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn test_get_out_of_range() {
		let table = TypeTable::primitive(PrimitiveKind::Int);
		assert_eq!(
			table.get(3),
			Err(Error::DanglingPointer {
				pointer: 3,
				len: 1,
			})
		);
	}

	#[test]
	fn test_children_in_declaration_order() {
		let entry = TypeEntry::structure([("z", 3), ("a", 1), ("m", 2)]);
		assert_eq!(entry.children(), vec![3, 1, 2]);
		assert_eq!(TypeEntry::map(4, 5).children(), vec![4, 5]);
		assert!(TypeEntry::user_defined("com.example.Point").children().is_empty());
	}

	#[test]
	fn test_serde_roundtrip() {
		let table = TypeTable::new(vec![
			TypeEntry::structure([("id", 1), ("tags", 2)]),
			TypeEntry::primitive(PrimitiveKind::BigInt),
			TypeEntry::array(3),
			TypeEntry::primitive(PrimitiveKind::String),
		]);
		let json = serde_json::to_string(&table).unwrap();
		let back: TypeTable = serde_json::from_str(&json).unwrap();
		assert_eq!(back, table);
	}
}
