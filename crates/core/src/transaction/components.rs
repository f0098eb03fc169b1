// Copyright (C) 2015-2025 The Neo Project.
//
// components.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Inputs, outputs and witnesses of a transaction.
//!
//! The invocation pipeline never fills these itself; it only makes sure the
//! collections exist so the signer can populate them.

use super::attributes::hex_bytes;
use crate::{Fixed8, UInt160, UInt256};
use serde::{Deserialize, Serialize};

/// Reference to an unspent output of a previous transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinReference {
    /// Hash of the transaction holding the output.
    pub prev_hash: UInt256,
    /// Index of the output within that transaction.
    pub prev_index: u16,
}

/// An output assigning an amount of an asset to a script hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Asset being transferred.
    pub asset_id: UInt256,
    /// Amount transferred.
    pub value: Fixed8,
    /// Receiving script hash.
    pub script_hash: UInt160,
}

/// Invocation and verification scripts proving authorization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// Script pushing the signatures.
    #[serde(with = "hex_bytes")]
    pub invocation_script: Vec<u8>,
    /// Script checking the signatures.
    #[serde(with = "hex_bytes")]
    pub verification_script: Vec<u8>,
}
