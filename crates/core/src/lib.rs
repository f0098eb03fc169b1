// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Neo Invoke Core
//!
//! Fundamental types shared by the invocation pipeline.
//!
//! ## Features
//!
//! - **Hash Types**: `UInt160` (script hashes) and `UInt256` (transaction and asset hashes)
//! - **Fixed8**: the eight-decimal fixed-point amount used for GAS and fees
//! - **Invocation Transactions**: the draft transaction assembled before signing
//! - **Error Handling**: `CoreError` and the `CoreResult` alias
//!
//! ## Example
//!
//! ```rust
//! use neo_invoke_core::{Fixed8, UInt160};
//!
//! let hash = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
//! assert!(!hash.is_zero());
//!
//! let gas: Fixed8 = "2.3".parse().unwrap();
//! assert_eq!(gas.ceiling(), Fixed8::from_units(3));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// System-wide constants
pub mod constants;
/// Core error types
pub mod error;
/// Eight-decimal fixed-point amounts
pub mod fixed8;
/// Invocation transaction and its components
pub mod transaction;
/// 160-bit unsigned integer implementation
pub mod uint160;
/// 256-bit unsigned integer implementation
pub mod uint256;

pub use error::{CoreError, CoreResult};
pub use fixed8::Fixed8;
pub use transaction::{
    CoinReference, InvocationTransaction, TransactionAttribute, TransactionAttributeUsage,
    TransactionOutput, Witness,
};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
