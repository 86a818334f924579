// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Error, error::diagnostic::value::invalid_length, value::blob::Blob};

macro_rules! impl_fixed_bytes {
	($name:ident, $len:expr, $kind:expr) => {
		impl $name {
			pub const LEN: usize = $len;

			pub const fn new(bytes: [u8; $len]) -> Self {
				Self(bytes)
			}

			pub const fn zero() -> Self {
				Self([0u8; $len])
			}

			pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
				let array: [u8; $len] = bytes
					.try_into()
					.map_err(|_| crate::error!(invalid_length($kind, $len, bytes.len())))?;
				Ok(Self(array))
			}

			pub fn as_bytes(&self) -> &[u8] {
				&self.0
			}

			pub fn is_zero(&self) -> bool {
				self.0.iter().all(|b| *b == 0)
			}
		}

		impl From<[u8; $len]> for $name {
			fn from(bytes: [u8; $len]) -> Self {
				Self(bytes)
			}
		}

		impl From<$name> for Blob {
			fn from(value: $name) -> Self {
				Blob::from_slice(&value.0)
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				write!(f, "0x{}", ::hex::encode(self.0))
			}
		}
	};
}

/// A 20-byte account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

/// A 32-byte digest, e.g. a block hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash([u8; 32]);

impl_fixed_bytes!(Address, 20, "Address");
impl_fixed_bytes!(Hash, 32, "Hash");

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_address_from_slice() {
		let address = Address::from_slice(&[0xab; 20]).unwrap();
		assert_eq!(address.as_bytes(), &[0xab; 20]);
	}

	#[test]
	fn test_address_from_slice_wrong_length() {
		let err = Address::from_slice(&[0xab; 19]).unwrap_err();
		assert_eq!(err.code(), "VALUE_001");
	}

	#[test]
	fn test_hash_zero() {
		assert!(Hash::zero().is_zero());
		assert!(!Hash::new([1u8; 32]).is_zero());
	}

	#[test]
	fn test_display() {
		let address = Address::new([0x11; 20]);
		assert_eq!(address.to_string(), format!("0x{}", "11".repeat(20)));
	}

	#[test]
	fn test_into_blob_copies_bytes() {
		let blob: Blob = Hash::new([7u8; 32]).into();
		assert_eq!(blob.as_bytes(), &[7u8; 32]);
	}
}
