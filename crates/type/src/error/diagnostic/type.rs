// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Type tag carries a major classification that is not defined
pub fn unknown_data_type(tag: u16) -> Diagnostic {
	Diagnostic {
		code: "TYPE_001".to_string(),
		message: format!("Unknown data type tag: 0x{:04x}", tag),
		label: Some("unknown major type".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Bytes cannot be decoded into a number under the given type
pub fn undecodable_data_type(data_type: &str) -> Diagnostic {
	Diagnostic {
		code: "TYPE_002".to_string(),
		message: format!("Cannot decode bytes as a number of type {}", data_type),
		label: Some("not a numeric type".to_string()),
		help: Some("Only integer and fixed-point types decode into numbers".to_string()),
		notes: vec![],
		cause: None,
	}
}
