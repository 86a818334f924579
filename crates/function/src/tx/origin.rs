// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Operand, Raw};
use tracing::instrument;

use crate::{
	ContextFunction, FunctionContext,
	error::FunctionResult,
	produce::{Constant, produce},
};

/// The account that signed the transaction.
pub struct TxOrigin;

impl TxOrigin {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for TxOrigin {
	#[instrument(name = "function::tx_origin", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		let origin = ctx.exec.origin();
		produce(vec![self.return_type()], Constant::new(Raw::binary(origin)), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::ADDRESS
	}
}
