// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Routes `tracing` output through the test harness. Honors `RUST_LOG` and
/// defaults to `warn`. Safe to call from every test.
pub fn init_tracing() {
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
			.with_test_writer()
			.try_init();
	});
}
