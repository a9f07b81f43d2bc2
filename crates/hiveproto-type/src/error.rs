// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::types::TypePointer;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("type pointer {pointer} is out of range for a type table of {len} entries")]
	DanglingPointer {
		pointer: TypePointer,
		len: usize,
	},

	#[error("cyclic type definition: {}", format_chain(.chain))]
	CyclicType {
		chain: Vec<TypePointer>,
	},

	#[error("type qualifier '{name}' expects a {expected} value but found a {found} value")]
	MalformedQualifier {
		name: String,
		expected: &'static str,
		found: &'static str,
	},

	#[error("malformed type entry at {pointer}: {reason}")]
	MalformedTypeEntry {
		pointer: TypePointer,
		reason: String,
	},

	#[error("{what} of {found} exceeds the limit of {limit}")]
	OversizedInput {
		what: &'static str,
		found: usize,
		limit: usize,
	},
}

impl Error {
	/// Stable diagnostic code of this error.
	pub fn code(&self) -> &'static str {
		match self {
			Error::DanglingPointer {
				..
			} => "TYPE_001",
			Error::CyclicType {
				..
			} => "TYPE_002",
			Error::MalformedQualifier {
				..
			} => "TYPE_003",
			Error::MalformedTypeEntry {
				..
			} => "TYPE_004",
			Error::OversizedInput {
				..
			} => "TYPE_005",
		}
	}
}

fn format_chain(chain: &[TypePointer]) -> String {
	chain.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" -> ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cyclic_message_lists_chain() {
		let err = Error::CyclicType {
			chain: vec![0, 1, 0],
		};
		assert_eq!(err.to_string(), "cyclic type definition: 0 -> 1 -> 0");
		assert_eq!(err.code(), "TYPE_002");
	}

	#[test]
	fn test_dangling_message() {
		let err = Error::DanglingPointer {
			pointer: 99,
			len: 5,
		};
		assert_eq!(err.to_string(), "type pointer 99 is out of range for a type table of 5 entries");
	}
}
