// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::value::raw::Raw;

const TUPLE_JOIN: &str = "|";

/// One row: a fixed-width sequence of scalars, one per declared column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuple(Vec<Raw>);

impl Tuple {
	pub fn new(values: Vec<Raw>) -> Self {
		Self(values)
	}

	pub fn single(value: Raw) -> Self {
		Self(vec![value])
	}

	pub fn width(&self) -> usize {
		self.0.len()
	}
}

impl Deref for Tuple {
	type Target = [Raw];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Raw>> for Tuple {
	fn from(values: Vec<Raw>) -> Self {
		Self::new(values)
	}
}

impl Display for Tuple {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for (idx, raw) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str(TUPLE_JOIN)?;
			}
			Display::fmt(raw, f)?;
		}
		Ok(())
	}
}
