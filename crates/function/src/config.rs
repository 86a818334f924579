// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use sqlvm_type::value::decimal::BLOCK_HASH_DEPTH;

/// How the registry treats operand counts for functions that take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArityPolicy {
	/// Zero-operand functions ignore whatever operands they are given.
	#[default]
	Lenient,
	/// Every call must pass exactly the declared number of operands.
	Strict,
}

/// Configuration for the built-in function table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsConfig {
	/// Blocks at or below `current - block_hash_depth` hash to zero.
	pub block_hash_depth: u64,

	pub arity: ArityPolicy,
}

impl Default for FunctionsConfig {
	fn default() -> Self {
		Self {
			block_hash_depth: BLOCK_HASH_DEPTH as u64,
			arity: ArityPolicy::default(),
		}
	}
}

impl FunctionsConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn block_hash_depth(mut self, depth: u64) -> Self {
		self.block_hash_depth = depth;
		self
	}

	pub fn arity(mut self, policy: ArityPolicy) -> Self {
		self.arity = policy;
		self
	}
}
