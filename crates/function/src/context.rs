// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use num_bigint::BigInt;
use sqlvm_type::{Address, Hash};

/// Read access to the block and transaction that a statement executes in,
/// plus the one piece of state built-ins mutate: the randomness call index.
///
/// The host owns the context; a function borrows it for the duration of a
/// single call.
pub trait ExecutionContext {
	/// Height of the block being built.
	fn block_number(&self) -> &BigInt;

	/// Block time, in the host's native units.
	fn time(&self) -> &BigInt;

	fn coinbase(&self) -> Address;

	fn gas_limit(&self) -> u64;

	/// External account that signed the transaction.
	fn origin(&self) -> Address;

	/// Current nonce of `address` in the state database.
	fn nonce(&self, address: &Address) -> u64;

	/// Immediate caller of the contract.
	fn caller(&self) -> Address;

	/// Call data of the current message.
	fn input(&self) -> &[u8];

	/// Hash of block `number`. Only asked for heights inside the
	/// queryable window below the current block.
	fn block_hash(&self, number: u64) -> Hash;

	/// Per-block randomness seed.
	fn randomness(&self) -> &[u8];

	fn rand_call_index(&self) -> u64;

	fn set_rand_call_index(&mut self, index: u64);
}
