// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{LogicalType, PrimitiveKind, QualifierPolicy, ResolveLimits, Resolver, TypePointer, TypeTable};
use crate::error::Result;

/// Metadata of one result column. The server ships a separate type table per
/// column, rooted at pointer 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
	pub name: String,
	pub type_table: Arc<TypeTable>,
	#[serde(default)]
	pub root: TypePointer,
	pub position: i32,
	#[serde(default)]
	pub comment: Option<String>,
}

impl ColumnDescriptor {
	pub fn new(name: impl Into<String>, type_table: impl Into<Arc<TypeTable>>, position: i32) -> Self {
		Self {
			name: name.into(),
			type_table: type_table.into(),
			root: 0,
			position,
			comment: None,
		}
	}

	pub fn primitive(name: impl Into<String>, kind: PrimitiveKind, position: i32) -> Self {
		Self::new(name, TypeTable::primitive(kind), position)
	}

	pub fn with_root(mut self, root: TypePointer) -> Self {
		self.root = root;
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}

	pub fn resolve_with(&self, policy: QualifierPolicy, limits: ResolveLimits) -> Result<Arc<LogicalType>> {
		Resolver::new(&self.type_table).with_policy(policy).with_limits(limits).resolve(self.root)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumn {
	pub name: String,
	pub position: i32,
	pub logical_type: Arc<LogicalType>,
}

/// Result columns in row layout order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
	pub columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
	pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
		Self {
			columns,
		}
	}

	pub fn column_names(&self) -> Vec<String> {
		self.columns.iter().map(|c| c.name.clone()).collect()
	}

	pub fn find(&self, name: &str) -> Option<(usize, &ColumnDescriptor)> {
		self.columns.iter().enumerate().find(|(_, c)| c.name == name)
	}

	/// Resolves every column type under the given qualifier policy and type
	/// table ceilings.
	pub fn resolve_with(&self, policy: QualifierPolicy, limits: ResolveLimits) -> Result<Vec<ResolvedColumn>> {
		self.columns
			.iter()
			.map(|column| {
				Ok(ResolvedColumn {
					name: column.name.clone(),
					position: column.position,
					logical_type: column.resolve_with(policy, limits)?,
				})
			})
			.collect()
	}

	pub fn resolve(&self) -> Result<Vec<ResolvedColumn>> {
		self.resolve_with(QualifierPolicy::default(), ResolveLimits::default())
	}
}

impl Deref for TableSchema {
	type Target = [ColumnDescriptor];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl FromIterator<ColumnDescriptor> for TableSchema {
	fn from_iter<T: IntoIterator<Item = ColumnDescriptor>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
