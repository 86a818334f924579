// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod function;
pub mod number;
pub mod render;
pub mod r#type;
pub mod value;

/// A structured description of a failure, rendered for humans by
/// [`render::DefaultRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attaches the diagnostic that led to this one.
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}
