// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Error, error::TypeError};

mod decode;

const FIXED_BASE: u8 = 0x10;
const UFIXED_BASE: u8 = 0x60;
const FIXED_RANGE: u8 = 0x50;

/// The major classification of a column type.
///
/// `Fixed` and `Ufixed` carry the size class of the fixed-point value; the
/// number of fractional digits lives in the minor part of the [`DataType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTypeMajor {
	Pending,
	Special,
	Bool,
	Address,
	Int,
	Uint,
	FixedBytes,
	DynamicBytes,
	Fixed(u8),
	Ufixed(u8),
}

impl DataTypeMajor {
	pub const fn to_u8(self) -> u8 {
		match self {
			DataTypeMajor::Pending => 0x00,
			DataTypeMajor::Special => 0x01,
			DataTypeMajor::Bool => 0x02,
			DataTypeMajor::Address => 0x03,
			DataTypeMajor::Int => 0x04,
			DataTypeMajor::Uint => 0x05,
			DataTypeMajor::FixedBytes => 0x06,
			DataTypeMajor::DynamicBytes => 0x07,
			DataTypeMajor::Fixed(size) => FIXED_BASE.wrapping_add(size),
			DataTypeMajor::Ufixed(size) => UFIXED_BASE.wrapping_add(size),
		}
	}

	pub const fn from_u8(value: u8) -> Option<Self> {
		match value {
			0x00 => Some(DataTypeMajor::Pending),
			0x01 => Some(DataTypeMajor::Special),
			0x02 => Some(DataTypeMajor::Bool),
			0x03 => Some(DataTypeMajor::Address),
			0x04 => Some(DataTypeMajor::Int),
			0x05 => Some(DataTypeMajor::Uint),
			0x06 => Some(DataTypeMajor::FixedBytes),
			0x07 => Some(DataTypeMajor::DynamicBytes),
			v if v >= FIXED_BASE && v < FIXED_BASE + FIXED_RANGE => Some(DataTypeMajor::Fixed(v - FIXED_BASE)),
			v if v >= UFIXED_BASE && v < UFIXED_BASE + FIXED_RANGE => {
				Some(DataTypeMajor::Ufixed(v - UFIXED_BASE))
			}
			_ => None,
		}
	}
}

/// A column type tag: a major classification plus a minor refinement
/// (byte width minus one for sized integers and byte arrays, fractional
/// digits for fixed-point numbers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataType {
	major: DataTypeMajor,
	minor: u8,
}

impl DataType {
	pub const UINT64: DataType = DataType::compose(DataTypeMajor::Uint, 7);
	pub const UINT256: DataType = DataType::compose(DataTypeMajor::Uint, 31);
	pub const BYTES32: DataType = DataType::compose(DataTypeMajor::FixedBytes, 31);
	pub const ADDRESS: DataType = DataType::compose(DataTypeMajor::Address, 0);
	pub const DYNAMIC_BYTES: DataType = DataType::compose(DataTypeMajor::DynamicBytes, 0);

	pub const fn compose(major: DataTypeMajor, minor: u8) -> Self {
		Self {
			major,
			minor,
		}
	}

	pub const fn major(self) -> DataTypeMajor {
		self.major
	}

	pub const fn minor(self) -> u8 {
		self.minor
	}

	pub const fn decompose(self) -> (DataTypeMajor, u8) {
		(self.major, self.minor)
	}

	pub const fn to_u16(self) -> u16 {
		((self.major.to_u8() as u16) << 8) | self.minor as u16
	}

	/// Encoded width in bytes, for types with a fixed width.
	pub fn byte_width(self) -> Option<usize> {
		match self.major {
			DataTypeMajor::Int | DataTypeMajor::Uint | DataTypeMajor::FixedBytes => Some(self.minor as usize + 1),
			DataTypeMajor::Fixed(size) | DataTypeMajor::Ufixed(size) => Some(size as usize + 1),
			DataTypeMajor::Address => Some(20),
			DataTypeMajor::Bool => Some(1),
			DataTypeMajor::Pending | DataTypeMajor::Special | DataTypeMajor::DynamicBytes => None,
		}
	}
}

impl TryFrom<u16> for DataType {
	type Error = Error;

	fn try_from(tag: u16) -> Result<Self, Self::Error> {
		let major = DataTypeMajor::from_u8((tag >> 8) as u8).ok_or(TypeError::UnknownTag {
			tag,
		})?;
		Ok(DataType::compose(major, tag as u8))
	}
}

impl From<DataType> for u16 {
	fn from(value: DataType) -> Self {
		value.to_u16()
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let bits = |n: u8| (n as u32 + 1) * 8;
		match self.major {
			DataTypeMajor::Pending => f.write_str("pending"),
			DataTypeMajor::Special => f.write_str("special"),
			DataTypeMajor::Bool => f.write_str("bool"),
			DataTypeMajor::Address => f.write_str("address"),
			DataTypeMajor::Int => write!(f, "int{}", bits(self.minor)),
			DataTypeMajor::Uint => write!(f, "uint{}", bits(self.minor)),
			DataTypeMajor::FixedBytes => write!(f, "bytes{}", self.minor as u32 + 1),
			DataTypeMajor::DynamicBytes => f.write_str("bytes"),
			DataTypeMajor::Fixed(size) => write!(f, "fixed{}x{}", bits(size), self.minor),
			DataTypeMajor::Ufixed(size) => write!(f, "ufixed{}x{}", bits(size), self.minor),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compose_and_decompose() {
		let dt = DataType::compose(DataTypeMajor::Uint, 31);
		assert_eq!(dt.decompose(), (DataTypeMajor::Uint, 31));
		assert_eq!(dt.to_u16(), 0x051f);
	}

	#[test]
	fn test_try_from_u16() {
		assert_eq!(DataType::try_from(0x0300).unwrap(), DataType::ADDRESS);
		assert_eq!(DataType::try_from(0x1203).unwrap(), DataType::compose(DataTypeMajor::Fixed(2), 3));
		assert_eq!(DataType::try_from(0x6100).unwrap().major(), DataTypeMajor::Ufixed(1));
	}

	#[test]
	fn test_try_from_unknown_major() {
		let err = DataType::try_from(0x0800).unwrap_err();
		assert_eq!(err.code(), "TYPE_001");
		assert!(DataType::try_from(0xb000).is_err());
	}

	#[test]
	fn test_byte_width() {
		assert_eq!(DataType::UINT256.byte_width(), Some(32));
		assert_eq!(DataType::UINT64.byte_width(), Some(8));
		assert_eq!(DataType::BYTES32.byte_width(), Some(32));
		assert_eq!(DataType::ADDRESS.byte_width(), Some(20));
		assert_eq!(DataType::DYNAMIC_BYTES.byte_width(), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(DataType::UINT256.to_string(), "uint256");
		assert_eq!(DataType::UINT64.to_string(), "uint64");
		assert_eq!(DataType::BYTES32.to_string(), "bytes32");
		assert_eq!(DataType::DYNAMIC_BYTES.to_string(), "bytes");
		assert_eq!(DataType::compose(DataTypeMajor::Fixed(1), 2).to_string(), "fixed16x2");
	}
}
