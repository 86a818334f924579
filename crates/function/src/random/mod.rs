// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod rand;
mod varint;

pub use rand::{Rand, RandomSource, derive_random};
pub use varint::{MAX_VARINT_LEN64, put_uvarint, put_uvarint_into};
