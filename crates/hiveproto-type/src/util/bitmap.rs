// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Packed null-presence bits of a wire column.
///
/// Row `i` lives in bit `i % 8` of byte `i / 8`, least significant bit first,
/// so bit 0 of every byte belongs to a row index divisible by 8. A set bit
/// marks the row as null.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NullBitmap {
	bytes: Vec<u8>,
}

impl NullBitmap {
	/// Number of bytes needed to cover `rows` rows.
	pub fn byte_len(rows: usize) -> usize {
		rows.div_ceil(8)
	}

	/// A zeroed bitmap covering `rows` rows (no row is null).
	pub fn with_rows(rows: usize) -> Self {
		Self {
			bytes: vec![0u8; Self::byte_len(rows)],
		}
	}

	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self {
			bytes,
		}
	}

	pub fn set_null(&mut self, row: usize) {
		let byte = row >> 3;
		if byte >= self.bytes.len() {
			self.bytes.resize(byte + 1, 0);
		}
		self.bytes[byte] |= 1u8 << (row & 7);
	}

	pub fn is_null(&self, row: usize) -> bool {
		Self::is_null_in(&self.bytes, row)
	}

	/// Reads the bit for `row` from a borrowed wire buffer. Rows beyond the
	/// end of the buffer read as not null.
	pub fn is_null_in(bytes: &[u8], row: usize) -> bool {
		match bytes.get(row >> 3) {
			Some(byte) => (byte >> (row & 7)) & 1 == 1,
			None => false,
		}
	}

	/// Counts null rows among the first `rows` rows of `bytes`.
	pub fn count_nulls_in(bytes: &[u8], rows: usize) -> usize {
		(0..rows).filter(|&row| Self::is_null_in(bytes, row)).count()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

impl From<NullBitmap> for Vec<u8> {
	fn from(bitmap: NullBitmap) -> Self {
		bitmap.bytes
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_byte_len() {
		assert_eq!(NullBitmap::byte_len(0), 0);
		assert_eq!(NullBitmap::byte_len(1), 1);
		assert_eq!(NullBitmap::byte_len(8), 1);
		assert_eq!(NullBitmap::byte_len(9), 2);
		assert_eq!(NullBitmap::byte_len(16), 2);
		assert_eq!(NullBitmap::byte_len(17), 3);
	}

	#[test]
	fn test_lsb_first_bit_order() {
		let bytes = [0b0000_0101u8];
		let nulls: Vec<bool> = (0..8).map(|row| NullBitmap::is_null_in(&bytes, row)).collect();
		assert_eq!(nulls, vec![true, false, true, false, false, false, false, false]);
	}

	#[test]
	fn test_second_byte_starts_at_row_eight() {
		let bytes = [0u8, 0b1000_0001];
		assert!(!NullBitmap::is_null_in(&bytes, 7));
		assert!(NullBitmap::is_null_in(&bytes, 8));
		assert!(NullBitmap::is_null_in(&bytes, 15));
		assert!(!NullBitmap::is_null_in(&bytes, 9));
	}

	#[test]
	fn test_rows_past_buffer_are_not_null() {
		let bytes = [0xffu8];
		assert!(NullBitmap::is_null_in(&bytes, 7));
		assert!(!NullBitmap::is_null_in(&bytes, 8));
		assert!(!NullBitmap::is_null_in(&[], 0));
	}

	#[test]
	fn test_set_null() {
		let mut bitmap = NullBitmap::with_rows(10);
		assert_eq!(bitmap.as_bytes(), &[0, 0]);

		bitmap.set_null(0);
		bitmap.set_null(2);
		bitmap.set_null(9);

		assert_eq!(bitmap.as_bytes(), &[0b0000_0101, 0b0000_0010]);
		assert!(bitmap.is_null(9));
		assert!(!bitmap.is_null(8));
	}

	#[test]
	fn test_set_null_grows() {
		let mut bitmap = NullBitmap::default();
		bitmap.set_null(17);
		assert_eq!(bitmap.into_bytes(), vec![0, 0, 0b0000_0010]);
	}

	#[test]
	fn test_count_nulls() {
		let bytes = [0b1111_0000u8, 0b0000_0001];
		assert_eq!(NullBitmap::count_nulls_in(&bytes, 9), 5);
		assert_eq!(NullBitmap::count_nulls_in(&bytes, 8), 4);
		assert_eq!(NullBitmap::count_nulls_in(&bytes, 4), 0);
	}
}
