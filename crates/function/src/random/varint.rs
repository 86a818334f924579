// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Longest unsigned LEB128 encoding of a `u64`.
pub const MAX_VARINT_LEN64: usize = 10;

/// Encodes `value` as unsigned LEB128 into a zero-padded buffer of
/// [`MAX_VARINT_LEN64`] bytes. The whole buffer, padding included, is what
/// gets hashed.
pub fn put_uvarint(value: u64) -> [u8; MAX_VARINT_LEN64] {
	let mut buf = [0u8; MAX_VARINT_LEN64];
	put_uvarint_into(&mut buf, value);
	buf
}

/// Writes `value` as unsigned LEB128 over the front of `buf` and returns
/// the number of bytes written. Bytes past that are left as they were.
pub fn put_uvarint_into(buf: &mut [u8; MAX_VARINT_LEN64], mut value: u64) -> usize {
	let mut idx = 0;
	loop {
		let mut byte = (value & 0x7f) as u8;
		value >>= 7;
		if value != 0 {
			byte |= 0x80;
		}
		buf[idx] = byte;
		idx += 1;
		if value == 0 {
			break;
		}
	}
	idx
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero() {
		assert_eq!(put_uvarint(0), [0u8; 10]);
	}

	#[test]
	fn test_single_byte() {
		assert_eq!(put_uvarint(5), [5u8, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(put_uvarint(127), [0x7fu8, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn test_multi_byte() {
		assert_eq!(put_uvarint(128), [0x80u8, 0x01, 0, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(put_uvarint(300), [0xacu8, 0x02, 0, 0, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn test_into_keeps_trailing_bytes() {
		let mut buf = put_uvarint(u64::MAX);
		assert_eq!(put_uvarint_into(&mut buf, 0), 1);
		assert_eq!(buf[0], 0x00);
		assert!(buf[1..9].iter().all(|b| *b == 0xff));
		assert_eq!(buf[9], 0x01);

		assert_eq!(put_uvarint_into(&mut buf, 300), 2);
		assert_eq!(buf[..3], [0xacu8, 0x02, 0xff]);
	}

	#[test]
	fn test_max_fills_buffer() {
		let buf = put_uvarint(u64::MAX);
		assert!(buf[..9].iter().all(|b| *b == 0xff));
		assert_eq!(buf[9], 0x01);
	}
}
