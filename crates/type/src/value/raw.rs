// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{blob::Blob, decimal::Decimal};

/// A single typed scalar. Which variant is meaningful follows from the
/// declared type of the column that holds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Raw {
	/// Integers and fixed-point numbers
	Numeric(Decimal),
	/// Hashes, addresses and byte strings
	Binary(Blob),
}

impl Raw {
	pub fn numeric(value: impl Into<Decimal>) -> Self {
		Raw::Numeric(value.into())
	}

	pub fn binary(value: impl Into<Blob>) -> Self {
		Raw::Binary(value.into())
	}

	pub fn as_numeric(&self) -> Option<&Decimal> {
		match self {
			Raw::Numeric(value) => Some(value),
			Raw::Binary(_) => None,
		}
	}

	pub fn as_binary(&self) -> Option<&Blob> {
		match self {
			Raw::Binary(value) => Some(value),
			Raw::Numeric(_) => None,
		}
	}

	pub fn kind(&self) -> &'static str {
		match self {
			Raw::Numeric(_) => "numeric",
			Raw::Binary(_) => "binary",
		}
	}
}

impl Display for Raw {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Raw::Numeric(value) => Display::fmt(value, f),
			Raw::Binary(value) => Display::fmt(value, f),
		}
	}
}
