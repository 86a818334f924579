// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Function is not recognized or does not exist
pub fn unknown_function(name: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Unknown function: {}", name),
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function called with wrong number of operands
pub fn arity_mismatch(function: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("Function {} expects {} operands, got {}", function, expected, actual),
		label: Some("wrong number of operands".to_string()),
		help: Some(format!("Provide exactly {} operands to function {}", expected, function)),
		notes: vec![],
		cause: None,
	}
}

/// Operand holds a value of the wrong kind for the function
pub fn invalid_operand_type(function: &str, index: usize, expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_004".to_string(),
		message: format!(
			"Function {} operand {} has invalid type: expected {}, got {}",
			function,
			index + 1,
			expected,
			actual
		),
		label: Some("invalid operand type".to_string()),
		help: Some(format!("Provide an operand of type: {}", expected)),
		notes: vec![],
		cause: None,
	}
}

/// Column operand holds fewer rows than the call requested
pub fn missing_row(function: &str, row: usize, available: usize) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_006".to_string(),
		message: format!("Function {} requested row {} but the operand holds {} rows", function, row, available),
		label: Some("missing input row".to_string()),
		help: Some("Column operands must provide one row per requested result row".to_string()),
		notes: vec![],
		cause: None,
	}
}
