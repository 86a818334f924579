// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builders and extractors for operands in tests.

use sqlvm_type::{Blob, DataType, Decimal, Operand, Raw, Tuple};

/// A single uint256 height broadcast to every row.
pub fn immediate_height(height: impl Into<Decimal>) -> Operand {
	Operand::immediate(vec![DataType::UINT256], Tuple::single(Raw::numeric(height)))
}

/// One uint256 height per row.
pub fn height_column<I, D>(heights: I) -> Operand
where
	I: IntoIterator<Item = D>,
	D: Into<Decimal>,
{
	let data = heights.into_iter().map(|h| Tuple::single(Raw::numeric(h))).collect();
	Operand::column(vec![DataType::UINT256], data)
}

/// The first column of every row as a number.
///
/// # Panics
/// Panics if a row is empty or holds bytes.
pub fn numbers(operand: &Operand) -> Vec<Decimal> {
	operand
		.data()
		.iter()
		.map(|tuple| match tuple.first() {
			Some(Raw::Numeric(value)) => value.clone(),
			other => panic!("expected a numeric value, got {:?}", other),
		})
		.collect()
}

/// The first column of every row as bytes.
///
/// # Panics
/// Panics if a row is empty or holds a number.
pub fn binaries(operand: &Operand) -> Vec<Blob> {
	operand
		.data()
		.iter()
		.map(|tuple| match tuple.first() {
			Some(Raw::Binary(value)) => value.clone(),
			other => panic!("expected a binary value, got {:?}", other),
		})
		.collect()
}
