// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Decimal, Hash, Operand, Raw, value::decimal::BLOCK_HASH_DEPTH};
use tracing::{instrument, trace};

use crate::{
	ContextFunction, FunctionContext, FunctionId,
	context::ExecutionContext,
	error::{FunctionError, FunctionResult},
	produce::{Constant, Generator, produce},
};

/// Hash of a recent block, or 32 zero bytes for heights outside the
/// queryable window `(current - depth, current)`.
pub struct BlockHash {
	depth: Decimal,
}

impl BlockHash {
	pub fn new() -> Self {
		Self::with_depth(BLOCK_HASH_DEPTH as u64)
	}

	pub fn with_depth(depth: u64) -> Self {
		Self {
			depth: Decimal::from(depth),
		}
	}

	fn lookup(
		&self,
		exec: &dyn ExecutionContext,
		function: FunctionId,
		height: &Decimal,
		current: &Decimal,
	) -> FunctionResult<Raw> {
		let lower = current - &self.depth;
		if height > &lower && height < current {
			let number = height.to_u64().map_err(|source| FunctionError::NumericConversion {
				function,
				value: height.clone(),
				source,
			})?;
			return Ok(Raw::binary(exec.block_hash(number)));
		}

		trace!(%height, %current, "block outside hash window");
		Ok(Raw::binary(Hash::zero()))
	}
}

fn height_at(function: FunctionId, operand: &Operand, row: usize) -> FunctionResult<&Decimal> {
	match operand.value(row, 0) {
		Some(Raw::Numeric(height)) => Ok(height),
		Some(other) => Err(FunctionError::InvalidOperandType {
			function,
			index: 0,
			expected: "numeric",
			actual: other.kind(),
		}),
		None => Err(FunctionError::MissingRow {
			function,
			row,
			available: operand.len(),
		}),
	}
}

impl ContextFunction for BlockHash {
	#[instrument(name = "function::block_hash", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let function = ctx.function;
		if ctx.operands.len() != 1 {
			return Err(FunctionError::InvalidOperandNum {
				function,
				expected: 1,
				actual: ctx.operands.len(),
			});
		}

		let input = &ctx.operands[0];
		let exec: &dyn ExecutionContext = &*ctx.exec;
		let current = Decimal::from(exec.block_number());
		let meta = vec![self.return_type()];

		if input.is_immediate() {
			let height = height_at(function, input, 0)?;
			let hash = self.lookup(exec, function, height, &current)?;
			return produce(meta, Constant::new(hash), ctx.row_count);
		}

		produce(
			meta,
			Generator::new(|row| {
				let height = height_at(function, input, row)?;
				self.lookup(exec, function, height, &current)
			}),
			ctx.row_count,
		)
	}

	fn return_type(&self) -> DataType {
		DataType::BYTES32
	}

	fn arity(&self) -> usize {
		1
	}
}
