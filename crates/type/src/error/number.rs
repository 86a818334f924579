// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{
	Diagnostic, Error, IntoDiagnostic,
	diagnostic::number::{invalid_number_format, number_not_integral, number_out_of_range},
};

/// Failures while parsing or narrowing decimal numbers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumberError {
	#[error("'{text}' is not a valid decimal number")]
	InvalidFormat {
		text: String,
	},

	#[error("{text} does not fit into {target}")]
	OutOfRange {
		text: String,
		target: &'static str,
	},

	#[error("{text} has a fractional part and cannot become {target}")]
	NotIntegral {
		text: String,
		target: &'static str,
	},
}

impl IntoDiagnostic for NumberError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			NumberError::InvalidFormat {
				text,
			} => invalid_number_format(&text),
			NumberError::OutOfRange {
				text,
				target,
			} => number_out_of_range(&text, target),
			NumberError::NotIntegral {
				text,
				target,
			} => number_not_integral(&text, target),
		}
	}
}

impl From<NumberError> for Error {
	fn from(err: NumberError) -> Self {
		Error(err.into_diagnostic())
	}
}
