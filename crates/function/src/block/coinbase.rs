// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext,
	error::FunctionResult,
	produce::{Constant, produce},
};

pub struct BlockCoinbase;

impl BlockCoinbase {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for BlockCoinbase {
	#[instrument(name = "function::block_coinbase", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let coinbase = ctx.exec.coinbase();
		produce(vec![self.return_type()], Constant::new(Raw::binary(coinbase)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::ADDRESS
	}
}
