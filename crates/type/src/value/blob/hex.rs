// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use ::hex::encode;

use super::Blob;

impl Blob {
	pub fn to_hex(&self) -> String {
		format!("0x{}", encode(self.as_bytes()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_hex() {
		let blob = Blob::new(b"Hello".to_vec());
		assert_eq!(blob.to_hex(), "0x48656c6c6f");
	}

	#[test]
	fn test_to_hex_empty() {
		assert_eq!(Blob::empty().to_hex(), "0x");
	}
}
