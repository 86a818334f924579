// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row production for built-ins.
//!
//! Every built-in answers with a column operand of exactly `row_count` rows.
//! A [`Constant`] evaluates once and repeats its value; a [`Generator`] (or
//! any other [`RowSource`]) is asked for each row in ascending order, so
//! sources with side effects see a well-defined sequence.

use sqlvm_type::{DataType, Operand, Raw, Tuple};
use tracing::trace;

use crate::error::FunctionResult;

/// Supplies the value of one row at a time.
pub trait RowSource {
	fn next_row(&mut self, row: usize) -> FunctionResult<Raw>;
}

/// The same value in every row. Each row gets its own copy.
pub struct Constant(Raw);

impl Constant {
	pub fn new(value: Raw) -> Self {
		Self(value)
	}
}

impl RowSource for Constant {
	fn next_row(&mut self, _row: usize) -> FunctionResult<Raw> {
		Ok(self.0.clone())
	}
}

/// Calls a closure once per row.
pub struct Generator<F>(F);

impl<F> Generator<F>
where
	F: FnMut(usize) -> FunctionResult<Raw>,
{
	pub fn new(producer: F) -> Self {
		Self(producer)
	}
}

impl<F> RowSource for Generator<F>
where
	F: FnMut(usize) -> FunctionResult<Raw>,
{
	fn next_row(&mut self, row: usize) -> FunctionResult<Raw> {
		(self.0)(row)
	}
}

/// Builds a non-immediate operand of `row_count` single-column rows.
///
/// Stops at the first failing row and returns only the error.
pub fn produce(meta: Vec<DataType>, mut source: impl RowSource, row_count: usize) -> FunctionResult<Operand> {
	let mut data = Vec::with_capacity(row_count);
	for row in 0..row_count {
		data.push(Tuple::single(source.next_row(row)?));
	}
	trace!(row_count, "produced rows");
	Ok(Operand::column(meta, data))
}

#[cfg(test)]
mod tests {
	use sqlvm_type::{Blob, error::diagnostic::number::invalid_number_format};

	use super::*;
	use crate::{FunctionError, FunctionId};

	#[test]
	fn test_constant_fills_every_row() {
		let raw = Raw::binary(vec![0xaau8, 0xbb]);
		let op = produce(vec![DataType::DYNAMIC_BYTES], Constant::new(raw.clone()), 4).unwrap();

		assert!(!op.is_immediate());
		assert_eq!(op.len(), 4);
		assert_eq!(op.meta(), &[DataType::DYNAMIC_BYTES]);
		for tuple in op.data() {
			assert_eq!(tuple.width(), 1);
			assert_eq!(tuple[0], raw);
		}
	}

	#[test]
	fn test_constant_rows_are_independent_copies() {
		let op = produce(vec![DataType::DYNAMIC_BYTES], Constant::new(Raw::binary(vec![1u8, 2, 3])), 2).unwrap();
		let first = op.value(0, 0).and_then(Raw::as_binary).unwrap();
		let second = op.value(1, 0).and_then(Raw::as_binary).unwrap();
		assert_eq!(first, second);
		assert_ne!(first.as_bytes().as_ptr(), second.as_bytes().as_ptr());
	}

	#[test]
	fn test_zero_rows() {
		let op = produce(vec![DataType::UINT256], Constant::new(Raw::numeric(1i64)), 0).unwrap();
		assert!(op.is_empty());
		assert!(!op.is_immediate());
	}

	#[test]
	fn test_generator_runs_in_row_order() {
		let mut seen = Vec::new();
		let op = produce(
			vec![DataType::UINT256],
			Generator::new(|row| {
				seen.push(row);
				Ok(Raw::numeric(row as i64 * 10))
			}),
			3,
		)
		.unwrap();

		assert_eq!(seen, vec![0, 1, 2]);
		assert_eq!(op.value(2, 0), Some(&Raw::numeric(20i64)));
	}

	#[test]
	fn test_generator_error_stops_production() {
		let mut calls = 0;
		let result = produce(
			vec![DataType::DYNAMIC_BYTES],
			Generator::new(|row| {
				calls += 1;
				if row == 1 {
					return Err(FunctionError::Type(sqlvm_type::Error(invalid_number_format("x"))));
				}
				Ok(Raw::binary(Blob::empty()))
			}),
			5,
		);

		assert!(matches!(result, Err(FunctionError::Type(_))));
		assert_eq!(calls, 2);
	}

	#[test]
	fn test_generator_error_carries_function() {
		let result = produce(
			vec![DataType::BYTES32],
			Generator::new(|row| {
				Err(FunctionError::MissingRow {
					function: FunctionId::BlockHash,
					row,
					available: 0,
				})
			}),
			1,
		);
		assert_eq!(result.unwrap_err().function(), Some(FunctionId::BlockHash));
	}
}
