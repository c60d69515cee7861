// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Marketrow.

use thiserror::Error;

/// Top-level error type for all Marketrow operations.
///
/// Fetch failures keep their cause for diagnostics but are treated
/// uniformly at UI call sites: logged, never surfaced to the user.
#[derive(Debug, Error)]
pub enum MarketrowError {
    // -- Fetch errors --
    #[error("network request failed: {0}")]
    Network(String),

    #[error("backend returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("unexpected response payload: {0}")]
    Decode(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MarketrowError>;
