// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;
mod number;
mod r#type;

pub use diagnostic::{Diagnostic, render::DefaultRenderer};
pub use number::NumberError;
pub use r#type::TypeError;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}
}

impl std::error::Error for Error {}

/// Converts a domain specific error into a renderable diagnostic.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		self.0
	}
}
