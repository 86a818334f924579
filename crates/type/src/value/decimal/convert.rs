// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use num_traits::ToPrimitive;

use crate::{Error, error::NumberError, value::decimal::Decimal};

pub trait SafeConvert<T> {
	fn checked_convert(self) -> Option<T>;
}

impl SafeConvert<u64> for &Decimal {
	fn checked_convert(self) -> Option<u64> {
		if !self.is_integer() {
			return None;
		}
		let (int_part, _) = self.inner().with_scale(0).into_bigint_and_exponent();
		int_part.to_u64()
	}
}

impl Decimal {
	/// Converts to `u64`, failing for fractional or out of range values.
	pub fn to_u64(&self) -> Result<u64, Error> {
		if let Some(value) = self.checked_convert() {
			return Ok(value);
		}

		let text = self.to_string();
		let err = if self.is_integer() {
			NumberError::OutOfRange {
				text,
				target: "UINT64",
			}
		} else {
			NumberError::NotIntegral {
				text,
				target: "UINT64",
			}
		};
		Err(err.into())
	}
}

#[cfg(test)]
mod tests {
	use num_bigint::BigInt;

	use super::*;

	#[test]
	fn test_checked_convert_happy() {
		let x = Decimal::from(42i64);
		let y: Option<u64> = (&x).checked_convert();
		assert_eq!(y, Some(42));
	}

	#[test]
	fn test_checked_convert_u64_max() {
		let x = Decimal::from(u64::MAX);
		assert_eq!(x.to_u64().unwrap(), u64::MAX);
	}

	#[test]
	fn test_checked_convert_negative() {
		let x = Decimal::from(-1i64);
		let err = x.to_u64().unwrap_err();
		assert_eq!(err.code(), "NUMBER_002");
	}

	#[test]
	fn test_checked_convert_too_large() {
		let x = Decimal::from(BigInt::from(u64::MAX) + BigInt::from(1u8));
		let err = x.to_u64().unwrap_err();
		assert_eq!(err.code(), "NUMBER_002");
	}

	#[test]
	fn test_checked_convert_fractional() {
		let x = Decimal::from_scaled(BigInt::from(9995), 1);
		let err = x.to_u64().unwrap_err();
		assert_eq!(err.code(), "NUMBER_003");
	}

	#[test]
	fn test_checked_convert_integral_with_scale() {
		let x = Decimal::from_scaled(BigInt::from(9990), 1);
		assert_eq!(x.to_u64().unwrap(), 999);
	}
}
