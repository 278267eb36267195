// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for dirchannel.

use thiserror::Error;

use crate::types::ErrorCode;

/// Top-level error type for all dirchannel operations.
#[derive(Debug, Error)]
pub enum DirChannelError {
    // -- Directory resolution --
    #[error("platform path provider returned no usable directory: {0}")]
    Unavailable(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Channel transport --
    #[error("malformed channel envelope: {0}")]
    Envelope(String),

    #[error("no handler registered for channel {0}")]
    NoHandler(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DirChannelError {
    /// Wire code reported to the caller when this error ends a method call.
    ///
    /// Everything on the resolver side collapses to `UNAVAILABLE`; only a
    /// broken envelope gets its own code.
    pub fn code(&self) -> ErrorCode {
        match self {
            DirChannelError::Envelope(_) => ErrorCode::BadEnvelope,
            _ => ErrorCode::Unavailable,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DirChannelError>;
