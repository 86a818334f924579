// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext,
	error::FunctionResult,
	produce::{Constant, produce},
};

/// The immediate caller, which differs from the transaction origin when
/// one contract calls another.
pub struct MsgSender;

impl MsgSender {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for MsgSender {
	#[instrument(name = "function::msg_sender", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let caller = ctx.exec.caller();
		produce(vec![self.return_type()], Constant::new(Raw::binary(caller)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::ADDRESS
	}
}
