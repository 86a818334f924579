// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use sqlvm_type::{DataType, Decimal, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext, FunctionId,
	error::{FunctionError, FunctionResult},
	produce::{Constant, produce},
};

pub struct BlockGasLimit;

impl BlockGasLimit {
	pub fn new() -> Self {
		Self
	}
}

/// Limits that fit a signed 64-bit integer convert directly; larger ones go
/// through their decimal text.
fn gas_limit_to_decimal(function: FunctionId, gas_limit: u64) -> FunctionResult<Decimal> {
	match i64::try_from(gas_limit) {
		Ok(signed) => Ok(Decimal::from(signed)),
		Err(_) => from_text(function, gas_limit),
	}
}

fn from_text(function: FunctionId, gas_limit: u64) -> FunctionResult<Decimal> {
	let text = gas_limit.to_string();
	Decimal::from_str(&text).map_err(|source| FunctionError::NumericParse {
		function,
		text,
		source,
	})
}

impl ContextFunction for BlockGasLimit {
	#[instrument(name = "function::block_gas_limit", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let value = gas_limit_to_decimal(ctx.function, ctx.exec.gas_limit())?;
		produce(vec![self.return_type()], Constant::new(Raw::Numeric(value)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::UINT64
	}
}
