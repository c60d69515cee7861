// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Marketrow — Core types, filtering, and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use config::AppConfig;
pub use error::MarketrowError;
pub use types::*;
