// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Decimal, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext,
	error::FunctionResult,
	produce::{Constant, produce},
};

pub struct BlockNumber;

impl BlockNumber {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for BlockNumber {
	#[instrument(name = "function::block_number", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let value = Decimal::from(ctx.exec.block_number());
		produce(vec![self.return_type()], Constant::new(Raw::Numeric(value)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::UINT256
	}
}
