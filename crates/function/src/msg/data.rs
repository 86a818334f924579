// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{Blob, DataType, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext,
	error::FunctionResult,
	produce::{Constant, produce},
};

pub struct MsgData;

impl MsgData {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for MsgData {
	#[instrument(
		name = "function::msg_data",
		level = "trace",
		skip_all,
		fields(row_count = ctx.row_count, input_len = ctx.exec.input().len())
	)]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let input = Blob::from_slice(ctx.exec.input());
		produce(vec![self.return_type()], Constant::new(Raw::Binary(input)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::DYNAMIC_BYTES
	}
}
