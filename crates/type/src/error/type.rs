// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{
	Diagnostic, Error, IntoDiagnostic,
	diagnostic::r#type::{undecodable_data_type, unknown_data_type},
};
use crate::value::r#type::DataType;

/// Failures while interpreting type tags.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("unknown data type tag 0x{tag:04x}")]
	UnknownTag {
		tag: u16,
	},

	#[error("bytes cannot be decoded as {data_type}")]
	NotNumeric {
		data_type: DataType,
	},
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::UnknownTag {
				tag,
			} => unknown_data_type(tag),
			TypeError::NotNumeric {
				data_type,
			} => undecodable_data_type(&data_type.to_string()),
		}
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes() {
		let err: Error = TypeError::UnknownTag {
			tag: 0x0800,
		}
		.into();
		assert_eq!(err.code(), "TYPE_001");

		let err: Error = TypeError::NotNumeric {
			data_type: DataType::BYTES32,
		}
		.into();
		assert_eq!(err.code(), "TYPE_002");
		assert!(err.message.contains("bytes32"));
	}
}
