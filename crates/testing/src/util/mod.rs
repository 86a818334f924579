// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod operand;

pub use operand::{binaries, height_column, immediate_height, numbers};
