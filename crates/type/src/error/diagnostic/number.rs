// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn invalid_number_format(text: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_001".to_string(),
		message: "invalid number format".to_string(),
		label: Some(format!("'{}' is not a valid decimal number", text)),
		help: Some("use decimal format (e.g., 123, -456, 123.45, 1.23e-4)".to_string()),
		notes: vec!["valid: 123".to_string(), "valid: -67.89".to_string(), "valid: 1.23e-4".to_string()],
		cause: None,
	}
}

pub fn number_out_of_range(text: &str, target: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_002".to_string(),
		message: "number out of range".to_string(),
		label: Some(format!("value '{}' exceeds the valid range for type {}", text, target)),
		help: Some(format!("use a value that fits into {}", target)),
		notes: vec![],
		cause: None,
	}
}

pub fn number_not_integral(text: &str, target: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_003".to_string(),
		message: "number is not integral".to_string(),
		label: Some(format!("value '{}' has a fractional part and cannot become {}", text, target)),
		help: Some("use a whole number".to_string()),
		notes: vec![],
		cause: None,
	}
}
