// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_type::{
	QualifierPolicy, ResolveLimits,
	types::{DEFAULT_MAX_TYPE_DEPTH, DEFAULT_MAX_TYPE_ENTRIES},
};
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_ROWS: usize = 1 << 24;

/// Limits and policies applied while decoding result batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
	/// Largest row count accepted for one batch.
	///
	/// Default: 16_777_216
	pub max_rows: usize,

	/// Largest null bitmap accepted for one column, in bytes. When unset the
	/// ceiling follows `max_rows`.
	///
	/// Default: `max_rows / 8 + 1`
	pub max_null_bitmap_bytes: Option<usize>,

	/// Largest type table accepted for one column.
	///
	/// Default: 4096
	pub max_type_entries: usize,

	/// Deepest type nesting accepted for one column, counted in entries from
	/// root to leaf.
	///
	/// Default: 128
	pub max_type_depth: usize,

	/// Handling of qualifiers with a value of the wrong kind.
	///
	/// Default: permissive
	pub qualifier_policy: QualifierPolicy,

	/// Accept null bitmaps shorter than the row count requires and read the
	/// missing trailing bits as "not null".
	///
	/// Default: false
	pub lenient_null_bitmap: bool,
}

impl Default for DecoderConfig {
	fn default() -> Self {
		Self {
			max_rows: DEFAULT_MAX_ROWS,
			max_null_bitmap_bytes: None,
			max_type_entries: DEFAULT_MAX_TYPE_ENTRIES,
			max_type_depth: DEFAULT_MAX_TYPE_DEPTH,
			qualifier_policy: QualifierPolicy::Permissive,
			lenient_null_bitmap: false,
		}
	}
}

impl DecoderConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_rows(mut self, max_rows: usize) -> Self {
		self.max_rows = max_rows;
		self
	}

	pub fn max_null_bitmap_bytes(mut self, max_null_bitmap_bytes: usize) -> Self {
		self.max_null_bitmap_bytes = Some(max_null_bitmap_bytes);
		self
	}

	pub fn max_type_entries(mut self, max_type_entries: usize) -> Self {
		self.max_type_entries = max_type_entries;
		self
	}

	pub fn max_type_depth(mut self, max_type_depth: usize) -> Self {
		self.max_type_depth = max_type_depth;
		self
	}

	pub fn qualifier_policy(mut self, policy: QualifierPolicy) -> Self {
		self.qualifier_policy = policy;
		self
	}

	pub fn lenient_null_bitmap(mut self, lenient: bool) -> Self {
		self.lenient_null_bitmap = lenient;
		self
	}

	/// The effective null bitmap ceiling in bytes.
	pub fn null_bitmap_limit(&self) -> usize {
		self.max_null_bitmap_bytes.unwrap_or(self.max_rows / 8 + 1)
	}

	pub fn resolve_limits(&self) -> ResolveLimits {
		ResolveLimits {
			max_entries: self.max_type_entries,
			max_depth: self.max_type_depth,
		}
	}
}
