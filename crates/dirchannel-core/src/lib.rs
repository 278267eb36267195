// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// dirchannel — Core types, wire codec and error definitions shared across all crates.

pub mod codec;
pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::ChannelConfig;
pub use error::DirChannelError;
pub use types::*;
