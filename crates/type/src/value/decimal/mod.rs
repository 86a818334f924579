// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Sub,
	str::FromStr,
};

use bigdecimal::BigDecimal as BigDecimalInner;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::Error;

mod convert;
mod parse;

pub use convert::SafeConvert;
pub use parse::parse_decimal;

/// Number of blocks below the current height at which block hashes stop
/// being queryable (exclusive).
pub const BLOCK_HASH_DEPTH: i64 = 257;

/// An arbitrary-precision decimal number.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Decimal(BigDecimalInner);

impl Decimal {
	pub fn new(value: BigDecimalInner) -> Self {
		Self(value)
	}

	pub fn zero() -> Self {
		Self(BigDecimalInner::from(0))
	}

	/// Builds `mantissa * 10^-scale`.
	pub fn from_scaled(mantissa: BigInt, scale: i64) -> Self {
		Self(BigDecimalInner::new(mantissa, scale))
	}

	pub fn inner(&self) -> &BigDecimalInner {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimalInner {
		self.0
	}

	/// True when the value has no fractional part.
	pub fn is_integer(&self) -> bool {
		self.0.with_scale(0) == self.0
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self(BigDecimalInner::from(value))
	}
}

impl From<u64> for Decimal {
	fn from(value: u64) -> Self {
		Self(BigDecimalInner::from(value))
	}
}

impl From<BigInt> for Decimal {
	fn from(value: BigInt) -> Self {
		Self(BigDecimalInner::new(value, 0))
	}
}

impl From<&BigInt> for Decimal {
	fn from(value: &BigInt) -> Self {
		Self::from(value.clone())
	}
}

impl FromStr for Decimal {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_decimal(s)
	}
}

impl Sub<&Decimal> for &Decimal {
	type Output = Decimal;

	fn sub(self, rhs: &Decimal) -> Decimal {
		Decimal(&self.0 - &rhs.0)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
