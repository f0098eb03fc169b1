// Copyright (C) 2015-2025 The Neo Project.
//
// constants.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Protocol constants used by the core types.

/// Size of a script hash (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;

/// Number of decimal places carried by `Fixed8`
pub const FIXED8_DECIMALS: u32 = 8;

/// Raw `Fixed8` value of one whole unit
pub const FIXED8_ONE: i64 = 100_000_000;

/// Version written into every invocation transaction prepared for a dry run
pub const INVOCATION_TRANSACTION_VERSION: u8 = 1;
