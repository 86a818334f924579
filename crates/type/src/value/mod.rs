// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod blob;
pub mod decimal;
mod fixed;
mod operand;
mod raw;
mod tuple;
pub mod r#type;

pub use blob::Blob;
pub use decimal::{Decimal, SafeConvert};
pub use fixed::{Address, Hash};
pub use operand::Operand;
pub use raw::Raw;
pub use tuple::Tuple;
pub use r#type::{DataType, DataTypeMajor};
