// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod context;
pub mod tracing;
pub mod util;

pub use context::TestContext;
pub use tracing::init_tracing;
