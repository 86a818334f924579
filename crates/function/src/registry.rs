// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
	str::FromStr,
	sync::Arc,
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sqlvm_type::{DataType, Error, Operand, error::diagnostic::function::unknown_function};
use tracing::{debug, instrument};

use crate::{
	ContextFunction, FunctionContext,
	block::{BlockCoinbase, BlockGasLimit, BlockHash, BlockNumber, BlockTimestamp},
	config::{ArityPolicy, FunctionsConfig},
	context::ExecutionContext,
	error::{FunctionError, FunctionResult},
	msg::{MsgData, MsgSender},
	random::Rand,
	tx::TxOrigin,
};

/// Numeric identifier of a built-in, as encoded in compiled programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum FunctionId {
	BlockHash = 0,
	BlockNumber = 1,
	BlockTimestamp = 2,
	BlockCoinbase = 3,
	BlockGasLimit = 4,
	MsgSender = 5,
	MsgData = 6,
	TxOrigin = 7,
	Now = 8,
	Rand = 9,
}

impl FunctionId {
	pub const ALL: [FunctionId; 10] = [
		FunctionId::BlockHash,
		FunctionId::BlockNumber,
		FunctionId::BlockTimestamp,
		FunctionId::BlockCoinbase,
		FunctionId::BlockGasLimit,
		FunctionId::MsgSender,
		FunctionId::MsgData,
		FunctionId::TxOrigin,
		FunctionId::Now,
		FunctionId::Rand,
	];

	pub const fn to_u16(self) -> u16 {
		self as u16
	}

	pub const fn name(self) -> &'static str {
		match self {
			FunctionId::BlockHash => "BLOCK_HASH",
			FunctionId::BlockNumber => "BLOCK_NUMBER",
			FunctionId::BlockTimestamp => "BLOCK_TIMESTAMP",
			FunctionId::BlockCoinbase => "BLOCK_COINBASE",
			FunctionId::BlockGasLimit => "BLOCK_GAS_LIMIT",
			FunctionId::MsgSender => "MSG_SENDER",
			FunctionId::MsgData => "MSG_DATA",
			FunctionId::TxOrigin => "TX_ORIGIN",
			FunctionId::Now => "NOW",
			FunctionId::Rand => "RAND",
		}
	}
}

impl Display for FunctionId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl TryFrom<u16> for FunctionId {
	type Error = Error;

	fn try_from(value: u16) -> Result<Self, Self::Error> {
		FunctionId::ALL
			.into_iter()
			.find(|id| id.to_u16() == value)
			.ok_or_else(|| sqlvm_type::error!(unknown_function(&format!("#{}", value))))
	}
}

impl From<FunctionId> for u16 {
	fn from(value: FunctionId) -> Self {
		value.to_u16()
	}
}

/// Accepts both `BLOCK_HASH` and `BLOCKHASH`, in any case.
impl FromStr for FunctionId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted: String = s.chars().filter(|c| *c != '_').collect::<String>().to_ascii_uppercase();
		FunctionId::ALL
			.into_iter()
			.find(|id| id.name().replace('_', "") == wanted)
			.ok_or_else(|| sqlvm_type::error!(unknown_function(s)))
	}
}

static STANDARD: Lazy<Functions> = Lazy::new(|| Functions::with_config(FunctionsConfig::default()));

/// The dispatch table from [`FunctionId`] to evaluator.
pub struct Functions {
	functions: HashMap<FunctionId, Arc<dyn ContextFunction>>,
	config: FunctionsConfig,
}

impl Functions {
	pub fn builder() -> FunctionsBuilder {
		FunctionsBuilder::new()
	}

	/// The built-in table with default configuration, built on first use.
	pub fn standard() -> &'static Functions {
		&STANDARD
	}

	/// All built-ins, configured by `config`. `NOW` shares the
	/// `BLOCK_TIMESTAMP` evaluator.
	pub fn with_config(config: FunctionsConfig) -> Functions {
		FunctionsBuilder::new()
			.register(FunctionId::BlockHash, BlockHash::with_depth(config.block_hash_depth))
			.register(FunctionId::BlockNumber, BlockNumber::new())
			.register(FunctionId::BlockTimestamp, BlockTimestamp::new())
			.register(FunctionId::BlockCoinbase, BlockCoinbase::new())
			.register(FunctionId::BlockGasLimit, BlockGasLimit::new())
			.register(FunctionId::MsgSender, MsgSender::new())
			.register(FunctionId::MsgData, MsgData::new())
			.register(FunctionId::TxOrigin, TxOrigin::new())
			.alias(FunctionId::Now, FunctionId::BlockTimestamp)
			.register(FunctionId::Rand, Rand::new())
			.config(config)
			.build()
	}

	pub fn config(&self) -> &FunctionsConfig {
		&self.config
	}

	pub fn get(&self, id: FunctionId) -> Option<&dyn ContextFunction> {
		self.functions.get(&id).map(|f| f.as_ref())
	}

	pub fn contains(&self, id: FunctionId) -> bool {
		self.functions.contains_key(&id)
	}

	/// Declared result type of `id`, if registered.
	pub fn return_type(&self, id: FunctionId) -> Option<DataType> {
		self.get(id).map(|f| f.return_type())
	}

	/// Evaluates `id` against `exec`, returning `row_count` rows.
	#[instrument(
		name = "functions::call",
		level = "debug",
		skip(self, exec, operands),
		fields(function = %id, operands = operands.len())
	)]
	pub fn call(
		&self,
		id: FunctionId,
		exec: &mut dyn ExecutionContext,
		operands: &[Operand],
		row_count: usize,
	) -> FunctionResult<Operand> {
		let Some(function) = self.get(id) else {
			return Err(FunctionError::Type(sqlvm_type::error!(unknown_function(id.name()))));
		};

		if self.config.arity == ArityPolicy::Strict && operands.len() != function.arity() {
			return Err(FunctionError::InvalidOperandNum {
				function: id,
				expected: function.arity(),
				actual: operands.len(),
			});
		}

		let result = function.evaluate(FunctionContext {
			function: id,
			exec,
			operands,
			row_count,
		});

		match &result {
			Ok(operand) => debug!(rows = operand.len(), "function evaluated"),
			Err(err) => debug!(error = %err, "function failed"),
		}
		result
	}
}

/// Assembles a [`Functions`] table.
pub struct FunctionsBuilder {
	functions: HashMap<FunctionId, Arc<dyn ContextFunction>>,
	config: FunctionsConfig,
}

impl Default for FunctionsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl FunctionsBuilder {
	pub fn new() -> Self {
		Self {
			functions: HashMap::new(),
			config: FunctionsConfig::default(),
		}
	}

	pub fn config(mut self, config: FunctionsConfig) -> Self {
		self.config = config;
		self
	}

	/// Registers `function` under `id`, replacing any earlier entry.
	pub fn register<F>(mut self, id: FunctionId, function: F) -> Self
	where
		F: ContextFunction + 'static,
	{
		self.functions.insert(id, Arc::new(function));
		self
	}

	/// Makes `alias` dispatch to the evaluator already registered as `target`.
	/// Does nothing if `target` is not registered.
	pub fn alias(mut self, alias: FunctionId, target: FunctionId) -> Self {
		if let Some(function) = self.functions.get(&target).cloned() {
			self.functions.insert(alias, function);
		}
		self
	}

	pub fn build(self) -> Functions {
		Functions {
			functions: self.functions,
			config: self.config,
		}
	}
}
