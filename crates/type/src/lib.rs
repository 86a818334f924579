// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic, NumberError, TypeError};
pub use value::{Address, Blob, DataType, DataTypeMajor, Decimal, Hash, Operand, Raw, SafeConvert, Tuple};

pub type Result<T> = std::result::Result<T, Error>;
