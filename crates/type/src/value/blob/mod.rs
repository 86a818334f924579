// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub(crate) mod hex;

/// An owned, immutable byte buffer.
///
/// Cloning copies the bytes, so a blob replicated into several rows never
/// shares storage with any other row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob(Vec<u8>);

impl Blob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn empty() -> Self {
		Self(Vec::new())
	}

	pub fn from_slice(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self::new(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self::from_slice(bytes)
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clone_is_independent() {
		let original = Blob::new(vec![1, 2, 3]);
		let copy = original.clone();
		assert_eq!(original, copy);
		assert_ne!(original.as_bytes().as_ptr(), copy.as_bytes().as_ptr());
	}

	#[test]
	fn test_display_as_hex() {
		assert_eq!(Blob::from_slice(b"Hi").to_string(), "0x4869");
		assert_eq!(Blob::empty().to_string(), "0x");
	}
}
