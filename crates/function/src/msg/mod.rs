// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod data;
mod sender;

pub use data::MsgData;
pub use sender::MsgSender;
