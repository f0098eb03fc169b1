// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Invocation transaction module.
//!
//! The draft assembled by the invocation pipeline, broken down into:
//!
//! - `invocation` - the `InvocationTransaction` draft itself
//! - `attributes` - transaction attributes and their usage codes
//! - `components` - coin references, outputs and witnesses attached by the signer

pub mod attributes;
pub mod components;
pub mod invocation;

pub use attributes::{TransactionAttribute, TransactionAttributeUsage};
pub use components::{CoinReference, TransactionOutput, Witness};
pub use invocation::InvocationTransaction;
