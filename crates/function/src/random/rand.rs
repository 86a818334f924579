// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sha3::{Digest, Keccak256};
use sqlvm_type::{Address, DataType, Operand, Raw};
use tracing::{instrument, trace, warn};

use crate::{
	ContextFunction, FunctionContext,
	context::ExecutionContext,
	error::FunctionResult,
	produce::{RowSource, produce},
	random::varint::{MAX_VARINT_LEN64, put_uvarint, put_uvarint_into},
};

/// One fresh pseudo-random 256-bit value per row.
pub struct Rand;

impl Rand {
	pub fn new() -> Self {
		Self
	}
}

impl ContextFunction for Rand {
	#[instrument(name = "function::rand", level = "trace", skip_all, fields(row_count = ctx.row_count))]
	fn evaluate(&self, ctx: FunctionContext<'_>) -> FunctionResult<Operand> {
		produce(vec![self.return_type()], RandomSource::new(ctx.exec), ctx.row_count)
	}

	fn return_type(&self) -> DataType {
		DataType::UINT256
	}
}

/// `Keccak256(seed || origin || uvarint(nonce) || uvarint(index))`, with
/// both varints in their zero-padded 10-byte form.
pub fn derive_random(seed: &[u8], origin: &Address, nonce: u64, index: u64) -> [u8; 32] {
	keccak_parts(seed, origin, &put_uvarint(nonce), &put_uvarint(index))
}

fn keccak_parts(
	seed: &[u8],
	origin: &Address,
	nonce: &[u8; MAX_VARINT_LEN64],
	index: &[u8; MAX_VARINT_LEN64],
) -> [u8; 32] {
	let mut hasher = Keccak256::new();
	hasher.update(seed);
	hasher.update(origin.as_bytes());
	hasher.update(nonce);
	hasher.update(index);
	hasher.finalize().into()
}

/// Draws values for one RAND call. The seed, origin and origin nonce are
/// read once; the call index is read and advanced on every row.
///
/// The index buffer lives for the whole call and each row's varint is
/// written over its front. Indices only grow within a call, so the buffer
/// always equals the zero-padded encoding, except on the row after the
/// index wraps to 0: that row keeps the trailing bytes of `u64::MAX`.
pub struct RandomSource<'a> {
	exec: &'a mut dyn ExecutionContext,
	seed: Vec<u8>,
	origin: Address,
	nonce: [u8; MAX_VARINT_LEN64],
	index: [u8; MAX_VARINT_LEN64],
}

impl<'a> RandomSource<'a> {
	pub fn new(exec: &'a mut dyn ExecutionContext) -> Self {
		let seed = exec.randomness().to_vec();
		let origin = exec.origin();
		let nonce = put_uvarint(exec.nonce(&origin));
		Self {
			exec,
			seed,
			origin,
			nonce,
			index: [0u8; MAX_VARINT_LEN64],
		}
	}
}

impl RowSource for RandomSource<'_> {
	fn next_row(&mut self, _row: usize) -> FunctionResult<Raw> {
		let index = self.exec.rand_call_index();
		let next = match index.checked_add(1) {
			Some(next) => next,
			None => {
				warn!(index, "randomness call index wrapped");
				0
			}
		};
		self.exec.set_rand_call_index(next);

		put_uvarint_into(&mut self.index, index);
		let digest = keccak_parts(&self.seed, &self.origin, &self.nonce, &self.index);
		trace!(index, "drew random value");
		Ok(Raw::Numeric(DataType::UINT256.decode(&digest)?))
	}
}

#[cfg(test)]
mod tests {
	use sqlvm_type::Decimal;

	use super::*;

	fn seed() -> Vec<u8> {
		(0u8..32).collect()
	}

	#[test]
	fn test_keccak_empty_input() {
		let digest: [u8; 32] = Keccak256::new().finalize().into();
		assert_eq!(
			digest,
			[
				0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
				0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70
			]
		);
	}

	#[test]
	fn test_derive_known_vector() {
		let origin = Address::new([0x22; 20]);
		let digest = derive_random(&seed(), &origin, 5, 0);
		assert_eq!(
			digest,
			[
				0xa3, 0xa4, 0x7c, 0xce, 0xa0, 0xde, 0x87, 0x33, 0x20, 0xe9, 0x8e, 0x76, 0xf9, 0xc2, 0x41, 0x46,
				0x3c, 0xc3, 0xd0, 0x18, 0xf9, 0x39, 0x66, 0xc1, 0xed, 0x54, 0x48, 0x7e, 0x80, 0x47, 0x02, 0x0b
			]
		);

		let value = DataType::UINT256.decode(&digest).unwrap();
		let expected: Decimal =
			"74017618624933601225320586773296553874483423503799047323550679708375567499787".parse().unwrap();
		assert_eq!(value, expected);
	}

	#[test]
	fn test_index_changes_output() {
		let origin = Address::new([0x22; 20]);
		let first = derive_random(&seed(), &origin, 5, 0);
		let second = derive_random(&seed(), &origin, 5, 1);
		assert_ne!(first, second);
		assert_eq!(second[..4], [0xe3u8, 0xa0, 0x55, 0xa0]);
	}

	#[test]
	fn test_inputs_all_feed_the_hash() {
		let origin = Address::new([0x22; 20]);
		let base = derive_random(&seed(), &origin, 5, 0);
		assert_ne!(base, derive_random(&[], &origin, 5, 0));
		assert_ne!(base, derive_random(&seed(), &Address::new([0x23; 20]), 5, 0));
		assert_ne!(base, derive_random(&seed(), &origin, 6, 0));
	}
}
