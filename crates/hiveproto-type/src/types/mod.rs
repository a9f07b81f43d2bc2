// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod kind;
mod logical;
mod qualifier;
mod resolve;
mod schema;
mod table;

pub use kind::PrimitiveKind;
pub use logical::LogicalType;
pub use qualifier::{
	CHARACTER_MAXIMUM_LENGTH, PRECISION, QualifierPolicy, SCALE, TypeQualifierValue, TypeQualifiers,
};
pub use resolve::{DEFAULT_MAX_TYPE_DEPTH, DEFAULT_MAX_TYPE_ENTRIES, ResolveLimits, Resolver, resolve};
pub use schema::{ColumnDescriptor, ResolvedColumn, TableSchema};
pub use table::{PrimitiveEntry, TypeEntry, TypePointer, TypeTable};
