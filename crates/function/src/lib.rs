// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{DataType, Operand};

pub mod block;
pub mod config;
pub mod context;
pub mod error;
pub mod msg;
pub mod produce;
pub mod random;
pub mod registry;
pub mod tx;

pub use config::{ArityPolicy, FunctionsConfig};
pub use context::ExecutionContext;
pub use error::{FunctionError, FunctionResult};
pub use produce::{Constant, Generator, RowSource, produce};
pub use registry::{FunctionId, Functions, FunctionsBuilder};

/// Everything a built-in sees during one invocation.
pub struct FunctionContext<'a> {
	/// The id the caller used; aliases keep their own id.
	pub function: FunctionId,
	pub exec: &'a mut dyn ExecutionContext,
	pub operands: &'a [Operand],
	/// Number of rows the caller expects back.
	pub row_count: usize,
}

/// A built-in whose result is derived from the execution context.
///
/// Implementations return an operand of exactly `row_count` rows typed by
/// [`ContextFunction::return_type`], or an error and no partial result.
pub trait ContextFunction: Send + Sync {
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand>;

	fn return_type(&self) -> DataType;

	/// Number of operands the function takes.
	fn arity(&self) -> usize {
		0
	}
}
