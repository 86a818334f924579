// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Decimal, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext,
	error::FunctionResult,
	produce::{Constant, produce},
};

/// Block time. Also serves `NOW`.
pub struct BlockTimestamp;

impl BlockTimestamp {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for BlockTimestamp {
	#[instrument(
		name = "function::block_timestamp",
		level = "trace",
		skip_all,
		fields(function = %ctx.function, row_count = ctx.row_count)
	)]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let value = Decimal::from(ctx.exec.time());
		produce(vec![self.return_type()], Constant::new(Raw::Numeric(value)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::UINT256
	}
}
