// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}
