// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use indexmap::IndexMap;
use tracing::{instrument, warn};

use super::{LogicalType, PrimitiveEntry, PrimitiveKind, QualifierPolicy, TypeEntry, TypePointer, TypeTable};
use crate::error::{Error, Result};

pub const DEFAULT_MAX_TYPE_ENTRIES: usize = 4096;
pub const DEFAULT_MAX_TYPE_DEPTH: usize = 128;

/// Ceilings applied to one resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveLimits {
	/// Longest type table accepted.
	pub max_entries: usize,
	/// Most entries on one root-to-leaf path, root and leaf included.
	pub max_depth: usize,
}

impl Default for ResolveLimits {
	fn default() -> Self {
		Self {
			max_entries: DEFAULT_MAX_TYPE_ENTRIES,
			max_depth: DEFAULT_MAX_TYPE_DEPTH,
		}
	}
}

/// Resolves a root pointer of a [`TypeTable`] into a [`LogicalType`].
///
/// Cycle detection only looks at the pointers on the current descent path,
/// so two branches reaching the same entry is fine while an entry reaching
/// itself is not. Entries that resolved completely are cached for the rest
/// of the call and handed out as shared `Arc`s. Nesting deeper than
/// [`ResolveLimits::max_depth`] is rejected, which also bounds the recursion
/// of `Display` and drop on the result.
pub struct Resolver<'a> {
	table: &'a TypeTable,
	policy: QualifierPolicy,
	limits: ResolveLimits,
}

struct Descent {
	path: Vec<TypePointer>,
	resolved: HashMap<TypePointer, Arc<LogicalType>>,
}

impl<'a> Resolver<'a> {
	pub fn new(table: &'a TypeTable) -> Self {
		Self {
			table,
			policy: QualifierPolicy::default(),
			limits: ResolveLimits::default(),
		}
	}

	pub fn with_policy(mut self, policy: QualifierPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn with_limits(mut self, limits: ResolveLimits) -> Self {
		self.limits = limits;
		self
	}

	pub fn with_max_entries(mut self, max_entries: usize) -> Self {
		self.limits.max_entries = max_entries;
		self
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.limits.max_depth = max_depth;
		self
	}

	#[instrument(name = "type::resolve", level = "trace", skip(self), fields(entries = self.table.len()))]
	pub fn resolve(&self, root: TypePointer) -> Result<Arc<LogicalType>> {
		if self.table.len() > self.limits.max_entries {
			return Err(Error::OversizedInput {
				what: "type table",
				found: self.table.len(),
				limit: self.limits.max_entries,
			});
		}

		let mut descent = Descent {
			path: Vec::new(),
			resolved: HashMap::new(),
		};
		self.resolve_pointer(root, &mut descent)
	}

	fn resolve_pointer(&self, pointer: TypePointer, descent: &mut Descent) -> Result<Arc<LogicalType>> {
		if let Some(done) = descent.resolved.get(&pointer) {
			return Ok(done.clone());
		}

		if let Some(start) = descent.path.iter().position(|p| *p == pointer) {
			let mut chain = descent.path[start..].to_vec();
			chain.push(pointer);
			return Err(Error::CyclicType {
				chain,
			});
		}

		if descent.path.len() >= self.limits.max_depth {
			return Err(Error::OversizedInput {
				what: "type nesting depth",
				found: descent.path.len() + 1,
				limit: self.limits.max_depth,
			});
		}

		let entry = self.table.get(pointer)?;

		descent.path.push(pointer);
		let result = self.resolve_entry(pointer, entry, descent);
		descent.path.pop();

		let resolved = Arc::new(result?);
		descent.resolved.insert(pointer, resolved.clone());
		Ok(resolved)
	}

	fn resolve_entry(&self, pointer: TypePointer, entry: &TypeEntry, descent: &mut Descent) -> Result<LogicalType> {
		match entry {
			TypeEntry::Primitive(primitive) => self.resolve_primitive(pointer, primitive),
			TypeEntry::Array {
				element,
			} => Ok(LogicalType::Array(self.resolve_pointer(*element, descent)?)),
			TypeEntry::Map {
				key,
				value,
			} => {
				let key = self.resolve_pointer(*key, descent)?;
				let value = self.resolve_pointer(*value, descent)?;
				Ok(LogicalType::Map {
					key,
					value,
				})
			}
			TypeEntry::Struct {
				fields,
			} => Ok(LogicalType::Struct(self.resolve_members(fields, descent)?)),
			TypeEntry::Union {
				members,
			} => Ok(LogicalType::Union(self.resolve_members(members, descent)?)),
			TypeEntry::UserDefined {
				class_name,
			} => Ok(LogicalType::UserDefined {
				class_name: class_name.clone(),
			}),
		}
	}

	fn resolve_members(
		&self,
		members: &IndexMap<String, TypePointer>,
		descent: &mut Descent,
	) -> Result<Vec<(String, Arc<LogicalType>)>> {
		members.iter().map(|(name, ptr)| Ok((name.clone(), self.resolve_pointer(*ptr, descent)?))).collect()
	}

	fn resolve_primitive(&self, pointer: TypePointer, entry: &PrimitiveEntry) -> Result<LogicalType> {
		let kind = PrimitiveKind::from_code(entry.type_code).ok_or_else(|| Error::MalformedTypeEntry {
			pointer,
			reason: format!("type id {} is not a primitive type", entry.type_code),
		})?;

		if let PrimitiveKind::Other(code) = kind {
			warn!(pointer, code, "unknown primitive type id, passing through");
		}

		if let Err(err) = entry.qualifiers.validate() {
			match self.policy {
				QualifierPolicy::Strict => return Err(err),
				QualifierPolicy::Permissive => {
					warn!(pointer, %err, "malformed type qualifier, passing through");
				}
			}
		}

		Ok(LogicalType::Primitive {
			kind,
			qualifiers: entry.qualifiers.clone(),
		})
	}
}

/// Resolves `root` with the default policy and limits.
pub fn resolve(table: &TypeTable, root: TypePointer) -> Result<Arc<LogicalType>> {
	Resolver::new(table).resolve(root)
}

impl TypeTable {
	pub fn resolve(&self, root: TypePointer) -> Result<Arc<LogicalType>> {
		resolve(self, root)
	}
}
