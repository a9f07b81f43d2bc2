// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// An `f64` with total equality: every NaN equals every other NaN and
/// `-0.0` equals `0.0`. Hashing agrees with equality.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn new(value: f64) -> Self {
		Self(value)
	}

	pub fn value(&self) -> f64 {
		self.0
	}

	fn canonical_bits(&self) -> u64 {
		if self.0.is_nan() {
			f64::NAN.to_bits()
		} else if self.0 == 0.0 {
			0
		} else {
			self.0.to_bits()
		}
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.canonical_bits() == other.canonical_bits()
	}
}

impl Eq for OrderedF64 {}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.canonical_bits().hash(state)
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<f64> for OrderedF64 {
	fn from(value: f64) -> Self {
		Self(value)
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> Self {
		value.0
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_nan_equals_nan() {
		assert_eq!(OrderedF64::new(f64::NAN), OrderedF64::new(-f64::NAN));
	}

	#[test]
	fn test_signed_zero() {
		assert_eq!(OrderedF64::new(0.0), OrderedF64::new(-0.0));

		let mut set = HashSet::new();
		set.insert(OrderedF64::new(0.0));
		assert!(set.contains(&OrderedF64::new(-0.0)));
	}

	#[test]
	fn test_distinct_values() {
		assert_ne!(OrderedF64::new(1.5), OrderedF64::new(2.5));
		assert_eq!(*OrderedF64::new(1.5), 1.5);
	}
}
