// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sqlvm_function::{FunctionId, Functions, random::derive_random};
use sqlvm_testing::{TestContext, init_tracing, util::numbers};
use sqlvm_type::{Address, DataType, Decimal, Operand};

const ORIGIN: Address = Address::new([0x22; 20]);

fn context() -> TestContext {
	TestContext::new().with_origin(ORIGIN).with_nonce(ORIGIN, 5)
}

fn rand(ctx: &mut TestContext, row_count: usize) -> Operand {
	Functions::standard().call(FunctionId::Rand, ctx, &[], row_count).unwrap()
}

fn decimal(text: &str) -> Decimal {
	text.parse().unwrap()
}

fn expected(ctx: &TestContext, index: u64) -> Decimal {
	let nonce = ctx.nonces.get(&ctx.origin).copied().unwrap_or_default();
	let digest = derive_random(&ctx.randomness, &ctx.origin, nonce, index);
	DataType::UINT256.decode(&digest).unwrap()
}

#[test]
fn test_known_values() {
	init_tracing();
	let mut ctx = context();

	let result = rand(&mut ctx, 3);

	assert!(!result.is_immediate());
	assert_eq!(result.meta(), &[DataType::UINT256]);
	assert_eq!(
		numbers(&result),
		vec![
			decimal("74017618624933601225320586773296553874483423503799047323550679708375567499787"),
			decimal("102958303147130124404857426016612626704397226405955230171835417249708269877666"),
			decimal("106979520291580234224763183445956942510311493527083146211378910122161319559132"),
		]
	);
	assert_eq!(ctx.rand_call_index, 3);
}

#[test]
fn test_index_carries_across_calls() {
	init_tracing();
	let mut ctx = context();

	let first = rand(&mut ctx, 3);
	let second = rand(&mut ctx, 2);

	assert_eq!(ctx.rand_call_index, 5);
	assert_eq!(numbers(&second), vec![expected(&ctx, 3), expected(&ctx, 4)]);

	let mut all = numbers(&first);
	all.extend(numbers(&second));
	for (i, a) in all.iter().enumerate() {
		for b in &all[i + 1..] {
			assert_ne!(a, b);
		}
	}
}

#[test]
fn test_same_state_same_values() {
	init_tracing();
	let mut a = context().with_rand_call_index(42);
	let mut b = context().with_rand_call_index(42);

	assert_eq!(rand(&mut a, 4), rand(&mut b, 4));
	assert_eq!(a.rand_call_index, b.rand_call_index);
}

#[test]
fn test_zero_rows_leave_index_alone() {
	init_tracing();
	let mut ctx = context().with_rand_call_index(7);

	let result = rand(&mut ctx, 0);

	assert!(result.is_empty());
	assert_eq!(ctx.rand_call_index, 7);
}

#[test]
fn test_index_wraps_within_a_call() {
	init_tracing();
	let mut ctx = context().with_rand_call_index(u64::MAX);

	let result = rand(&mut ctx, 2);

	assert_eq!(ctx.rand_call_index, 1);
	let values = numbers(&result);
	assert_eq!(values[0], expected(&ctx, u64::MAX));
	assert_eq!(
		values[0],
		decimal("59374747026822008386469861765196596539639926472317574992727486927261452873661")
	);
	// index 0 written over the encoding of u64::MAX: 00 ff ff ff ff ff ff ff ff 01
	assert_eq!(
		values[1],
		decimal("97001214610772244662530968441782083531096889583801584993329409074772516124626")
	);
	assert_ne!(values[1], expected(&ctx, 0));
}

#[test]
fn test_index_zero_in_a_new_call_after_wrap() {
	init_tracing();
	let mut ctx = context().with_rand_call_index(u64::MAX);

	rand(&mut ctx, 1);
	assert_eq!(ctx.rand_call_index, 0);

	let result = rand(&mut ctx, 1);

	assert_eq!(numbers(&result), vec![expected(&ctx, 0)]);
	assert_eq!(ctx.rand_call_index, 1);
}

#[test]
fn test_uses_origin_nonce_not_caller_nonce() {
	init_tracing();
	let caller = Address::new([0x33; 20]);
	let mut plain = context().with_caller(caller);
	let mut with_caller_nonce = context().with_caller(caller).with_nonce(caller, 99);
	let mut with_origin_nonce = context().with_nonce(ORIGIN, 6);

	let base = rand(&mut plain, 1);
	assert_eq!(rand(&mut with_caller_nonce, 1), base);
	assert_ne!(rand(&mut with_origin_nonce, 1), base);
}

#[test]
fn test_seed_changes_values() {
	init_tracing();
	let mut a = context();
	let mut b = context().with_randomness(vec![0xffu8; 32]);

	assert_ne!(rand(&mut a, 1), rand(&mut b, 1));
}
