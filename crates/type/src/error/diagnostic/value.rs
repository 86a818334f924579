// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Byte sequence does not have the length required by a fixed-size value
pub fn invalid_length(kind: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "VALUE_001".to_string(),
		message: format!("{} requires exactly {} bytes, got {}", kind, expected, actual),
		label: Some("invalid length".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
