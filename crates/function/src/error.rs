// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_type::{
	Decimal, Diagnostic, Error, IntoDiagnostic,
	error::diagnostic::function::{arity_mismatch, invalid_operand_type, missing_row},
};

use crate::registry::FunctionId;

pub type FunctionResult<T> = Result<T, FunctionError>;

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
	#[error("function {function} expects {expected} operands, got {actual}")]
	InvalidOperandNum {
		function: FunctionId,
		expected: usize,
		actual: usize,
	},

	#[error("function {function} cannot convert {value} to a block number")]
	NumericConversion {
		function: FunctionId,
		value: Decimal,
		#[source]
		source: Error,
	},

	#[error("function {function} cannot parse '{text}' as a decimal")]
	NumericParse {
		function: FunctionId,
		text: String,
		#[source]
		source: Error,
	},

	#[error("function {function} operand {index} must be {expected}, got {actual}")]
	InvalidOperandType {
		function: FunctionId,
		index: usize,
		expected: &'static str,
		actual: &'static str,
	},

	#[error("function {function} requested row {row} of an operand with {available} rows")]
	MissingRow {
		function: FunctionId,
		row: usize,
		available: usize,
	},

	#[error(transparent)]
	Type(#[from] Error),
}

impl FunctionError {
	/// The function that raised the error, when known.
	pub fn function(&self) -> Option<FunctionId> {
		match self {
			FunctionError::InvalidOperandNum {
				function,
				..
			}
			| FunctionError::NumericConversion {
				function,
				..
			}
			| FunctionError::NumericParse {
				function,
				..
			}
			| FunctionError::InvalidOperandType {
				function,
				..
			}
			| FunctionError::MissingRow {
				function,
				..
			} => Some(*function),
			FunctionError::Type(_) => None,
		}
	}
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			FunctionError::InvalidOperandNum {
				function,
				expected,
				actual,
			} => arity_mismatch(function.name(), expected, actual),
			FunctionError::NumericConversion {
				function,
				value,
				source,
			} => {
				let mut diagnostic = source.0;
				diagnostic.notes.push(format!("{} received block number {}", function, value));
				diagnostic
			}
			FunctionError::NumericParse {
				function,
				text,
				source,
			} => {
				let mut diagnostic = source.0;
				diagnostic.notes.push(format!("{} could not represent '{}'", function, text));
				diagnostic
			}
			FunctionError::InvalidOperandType {
				function,
				index,
				expected,
				actual,
			} => invalid_operand_type(function.name(), index, expected, actual),
			FunctionError::MissingRow {
				function,
				row,
				available,
			} => missing_row(function.name(), row, available),
			FunctionError::Type(err) => err.0,
		}
	}
}

impl From<FunctionError> for Error {
	fn from(err: FunctionError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use sqlvm_type::error::diagnostic::number::number_out_of_range;

	use super::*;

	#[test]
	fn test_arity_error_maps_to_function_diagnostic() {
		let err = FunctionError::InvalidOperandNum {
			function: FunctionId::BlockHash,
			expected: 1,
			actual: 2,
		};
		assert_eq!(err.function(), Some(FunctionId::BlockHash));

		let err: Error = err.into();
		assert_eq!(err.code(), "FUNCTION_002");
		assert!(err.message.contains("BLOCK_HASH"));
	}

	#[test]
	fn test_conversion_keeps_number_code() {
		let err = FunctionError::NumericConversion {
			function: FunctionId::BlockHash,
			value: Decimal::from(-1i64),
			source: Error(number_out_of_range("-1", "uint64")),
		};
		let diagnostic = err.into_diagnostic();
		assert_eq!(diagnostic.code, "NUMBER_002");
		assert_eq!(diagnostic.notes.len(), 1);
	}

	#[test]
	fn test_type_error_is_transparent() {
		let inner = Error(number_out_of_range("x", "uint64"));
		let err = FunctionError::from(inner.clone());
		assert_eq!(err.to_string(), inner.to_string());
		assert!(err.function().is_none());
	}
}
