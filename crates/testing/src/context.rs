// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{cell::RefCell, collections::HashMap};

use num_bigint::BigInt;
use sqlvm_function::ExecutionContext;
use sqlvm_type::{Address, Hash};

/// An in-memory execution context with fixed, inspectable values.
///
/// Block hashes default to [`TestContext::hash_of`]; every height asked
/// for is recorded in `block_hash_requests`.
#[derive(Debug, Clone)]
pub struct TestContext {
	pub block_number: BigInt,
	pub time: BigInt,
	pub coinbase: Address,
	pub gas_limit: u64,
	pub origin: Address,
	pub caller: Address,
	pub input: Vec<u8>,
	pub randomness: Vec<u8>,
	pub nonces: HashMap<Address, u64>,
	pub hashes: HashMap<u64, Hash>,
	pub rand_call_index: u64,
	pub block_hash_requests: RefCell<Vec<u64>>,
}

impl Default for TestContext {
	fn default() -> Self {
		Self {
			block_number: BigInt::from(1000),
			time: BigInt::from(1_700_000_000u64),
			coinbase: Address::new([0x11; 20]),
			gas_limit: 8_000_000,
			origin: Address::new([0x22; 20]),
			caller: Address::new([0x33; 20]),
			input: vec![0xca, 0xfe, 0xba, 0xbe],
			randomness: (0u8..32).collect(),
			nonces: HashMap::new(),
			hashes: HashMap::new(),
			rand_call_index: 0,
			block_hash_requests: RefCell::new(Vec::new()),
		}
	}
}

impl TestContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_block_number(mut self, number: impl Into<BigInt>) -> Self {
		self.block_number = number.into();
		self
	}

	pub fn with_time(mut self, time: impl Into<BigInt>) -> Self {
		self.time = time.into();
		self
	}

	pub fn with_coinbase(mut self, coinbase: Address) -> Self {
		self.coinbase = coinbase;
		self
	}

	pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
		self.gas_limit = gas_limit;
		self
	}

	pub fn with_origin(mut self, origin: Address) -> Self {
		self.origin = origin;
		self
	}

	pub fn with_caller(mut self, caller: Address) -> Self {
		self.caller = caller;
		self
	}

	pub fn with_input(mut self, input: impl Into<Vec<u8>>) -> Self {
		self.input = input.into();
		self
	}

	pub fn with_randomness(mut self, randomness: impl Into<Vec<u8>>) -> Self {
		self.randomness = randomness.into();
		self
	}

	pub fn with_nonce(mut self, address: Address, nonce: u64) -> Self {
		self.nonces.insert(address, nonce);
		self
	}

	pub fn with_hash(mut self, number: u64, hash: Hash) -> Self {
		self.hashes.insert(number, hash);
		self
	}

	pub fn with_rand_call_index(mut self, index: u64) -> Self {
		self.rand_call_index = index;
		self
	}

	/// Default hash of block `number`: its big-endian bytes repeated to fill
	/// 32 bytes, with the last byte forced non-zero.
	pub fn hash_of(number: u64) -> Hash {
		let mut bytes = [0u8; 32];
		for chunk in bytes.chunks_mut(8) {
			chunk.copy_from_slice(&number.to_be_bytes());
		}
		bytes[31] |= 0x01;
		Hash::new(bytes)
	}

	pub fn take_block_hash_requests(&self) -> Vec<u64> {
		self.block_hash_requests.take()
	}
}

impl ExecutionContext for TestContext {
	fn block_number(&self) -> &BigInt {
		&self.block_number
	}

	fn time(&self) -> &BigInt {
		&self.time
	}

	fn coinbase(&self) -> Address {
		self.coinbase
	}

	fn gas_limit(&self) -> u64 {
		self.gas_limit
	}

	fn origin(&self) -> Address {
		self.origin
	}

	fn nonce(&self, address: &Address) -> u64 {
		self.nonces.get(address).copied().unwrap_or_default()
	}

	fn caller(&self) -> Address {
		self.caller
	}

	fn input(&self) -> &[u8] {
		&self.input
	}

	fn block_hash(&self, number: u64) -> Hash {
		self.block_hash_requests.borrow_mut().push(number);
		self.hashes.get(&number).copied().unwrap_or_else(|| Self::hash_of(number))
	}

	fn randomness(&self) -> &[u8] {
		&self.randomness
	}

	fn rand_call_index(&self) -> u64 {
		self.rand_call_index
	}

	fn set_rand_call_index(&mut self, index: u64) {
		self.rand_call_index = index;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hash_of_is_distinct_and_non_zero() {
		assert_ne!(TestContext::hash_of(743), TestContext::hash_of(744));
		assert!(!TestContext::hash_of(0).is_zero());
	}

	#[test]
	fn test_block_hash_prefers_override() {
		let custom = Hash::new([0xab; 32]);
		let ctx = TestContext::new().with_hash(5, custom);
		assert_eq!(ctx.block_hash(5), custom);
		assert_eq!(ctx.block_hash(6), TestContext::hash_of(6));
		assert_eq!(ctx.take_block_hash_requests(), vec![5, 6]);
		assert!(ctx.take_block_hash_requests().is_empty());
	}

	#[test]
	fn test_unknown_nonce_is_zero() {
		let ctx = TestContext::new().with_nonce(Address::new([0x01; 20]), 9);
		assert_eq!(ctx.nonce(&Address::new([0x01; 20])), 9);
		assert_eq!(ctx.nonce(&Address::new([0x02; 20])), 0);
	}
}
