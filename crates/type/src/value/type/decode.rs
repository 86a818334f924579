// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use num_bigint::{BigInt, Sign};

use super::{DataType, DataTypeMajor};
use crate::{Error, error::TypeError, value::decimal::Decimal};

impl DataType {
	/// Decodes big-endian bytes into a number of this type.
	///
	/// Signed types use two's complement. Fixed-point types scale the
	/// integer by the minor part (number of fractional digits).
	pub fn decode(self, bytes: &[u8]) -> Result<Decimal, Error> {
		let (signed, scale) = match self.major() {
			DataTypeMajor::Int => (true, 0),
			DataTypeMajor::Uint => (false, 0),
			DataTypeMajor::Fixed(_) => (true, self.minor()),
			DataTypeMajor::Ufixed(_) => (false, self.minor()),
			_ => {
				return Err(TypeError::NotNumeric {
					data_type: self,
				}
				.into());
			}
		};

		let mantissa = if signed {
			BigInt::from_signed_bytes_be(bytes)
		} else {
			BigInt::from_bytes_be(Sign::Plus, bytes)
		};

		Ok(Decimal::from_scaled(mantissa, scale as i64))
	}
}
