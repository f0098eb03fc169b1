// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while parsing or converting core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid format error with detailed description
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Error message describing the format issue
        message: String,
    },

    /// Arithmetic overflow while converting or combining amounts
    #[error("Arithmetic overflow: {message}")]
    Overflow {
        /// Operation that overflowed
        message: String,
    },
}

impl CoreError {
    /// Creates an `InvalidFormat` error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates an `Overflow` error.
    pub fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow {
            message: message.into(),
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
