// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{raw::Raw, r#type::DataType, tuple::Tuple};

/// An evaluation result: typed rows plus the declared column types.
///
/// An immediate operand holds a single row that stands for every row a
/// consumer asks for. A column operand holds one row per requested row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
	is_immediate: bool,
	meta: Vec<DataType>,
	data: Vec<Tuple>,
	register_index: Option<usize>,
}

impl Operand {
	pub fn immediate(meta: Vec<DataType>, tuple: Tuple) -> Self {
		debug_assert_eq!(meta.len(), tuple.width(), "tuple width must match declared columns");
		Self {
			is_immediate: true,
			meta,
			data: vec![tuple],
			register_index: None,
		}
	}

	pub fn column(meta: Vec<DataType>, data: Vec<Tuple>) -> Self {
		debug_assert!(data.iter().all(|t| t.width() == meta.len()), "tuple width must match declared columns");
		Self {
			is_immediate: false,
			meta,
			data,
			register_index: None,
		}
	}

	/// Records the register this operand is read from or written to.
	pub fn with_register(mut self, index: usize) -> Self {
		self.register_index = Some(index);
		self
	}

	pub fn is_immediate(&self) -> bool {
		self.is_immediate
	}

	pub fn meta(&self) -> &[DataType] {
		&self.meta
	}

	pub fn data(&self) -> &[Tuple] {
		&self.data
	}

	pub fn register_index(&self) -> Option<usize> {
		self.register_index
	}

	/// Number of stored rows; always 1 for an immediate operand.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Row `idx` as seen by a consumer. Immediate operands broadcast their
	/// single row to every index.
	pub fn row(&self, idx: usize) -> Option<&Tuple> {
		if self.is_immediate {
			self.data.first()
		} else {
			self.data.get(idx)
		}
	}

	pub fn value(&self, row: usize, column: usize) -> Option<&Raw> {
		self.row(row).and_then(|tuple| tuple.get(column))
	}
}

impl Display for Operand {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let types = self.meta.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");
		write!(f, "[{}]", types)?;
		if self.is_immediate {
			f.write_str(" immediate")?;
		}
		for tuple in &self.data {
			write!(f, "\n{}", tuple)?;
		}
		Ok(())
	}
}
