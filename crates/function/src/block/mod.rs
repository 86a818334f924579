// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod coinbase;
mod gas_limit;
mod hash;
mod number;
mod timestamp;

pub use coinbase::BlockCoinbase;
pub use gas_limit::BlockGasLimit;
pub use hash::BlockHash;
pub use number::BlockNumber;
pub use timestamp::BlockTimestamp;
