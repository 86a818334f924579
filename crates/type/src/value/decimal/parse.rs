// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal as BigDecimalInner;

use crate::{Error, error::NumberError, value::decimal::Decimal};

pub fn parse_decimal(text: &str) -> Result<Decimal, Error> {
	// Fast path: check if we need any string processing
	let needs_trimming = text.as_bytes().first().map_or(false, |&b| b.is_ascii_whitespace())
		|| text.as_bytes().last().map_or(false, |&b| b.is_ascii_whitespace());
	let has_underscores = text.as_bytes().contains(&b'_');

	let value = match (needs_trimming, has_underscores) {
		(false, false) => Cow::Borrowed(text),
		(true, false) => Cow::Borrowed(text.trim()),
		(false, true) => Cow::Owned(text.replace('_', "")),
		(true, true) => Cow::Owned(text.trim().replace('_', "")),
	};

	let invalid = || NumberError::InvalidFormat {
		text: text.to_string(),
	};

	if value.is_empty() {
		return Err(invalid().into());
	}

	let big_decimal = BigDecimalInner::from_str(&value).map_err(|_| Error::from(invalid()))?;

	Ok(Decimal::new(big_decimal))
}
