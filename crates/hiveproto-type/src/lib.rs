// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Type system of the HiveServer2 wire protocol.
//!
//! Result schemas arrive as a flat [`TypeTable`] whose entries reference each
//! other by [`TypePointer`]. The [`Resolver`] turns a root pointer into a fully
//! dereferenced [`LogicalType`]. Individual cells are represented as
//! [`ScalarValue`].

pub mod error;
pub mod types;
pub mod util;
pub mod value;

pub use error::{Error, Result};
pub use types::{
	ColumnDescriptor, LogicalType, PrimitiveEntry, PrimitiveKind, QualifierPolicy, ResolveLimits, ResolvedColumn, Resolver,
	TableSchema, TypeEntry, TypePointer, TypeQualifierValue, TypeQualifiers, TypeTable, resolve,
};
pub use value::{ColumnKind, OrderedF64, ScalarValue};
