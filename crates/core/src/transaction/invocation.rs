// Copyright (C) 2015-2025 The Neo Project.
//
// invocation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The invocation transaction draft.

use super::attributes::{hex_bytes, TransactionAttribute};
use super::components::{CoinReference, TransactionOutput, Witness};
use crate::constants::INVOCATION_TRANSACTION_VERSION;
use crate::Fixed8;
use serde::{Deserialize, Serialize};

/// A transaction that runs a script, as drafted before signing.
///
/// The collections are `None` until first prepared. Once set they belong to
/// whoever populated them (usually the signer) and are never replaced by the
/// pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationTransaction {
    /// Transaction format version.
    pub version: u8,
    /// Script executed by the transaction.
    #[serde(with = "hex_bytes")]
    pub script: Vec<u8>,
    /// GAS paid for execution beyond the free allowance.
    pub gas: Fixed8,
    /// Attributes.
    pub attributes: Option<Vec<TransactionAttribute>>,
    /// Inputs.
    pub inputs: Option<Vec<CoinReference>>,
    /// Outputs.
    pub outputs: Option<Vec<TransactionOutput>>,
    /// Witnesses.
    pub scripts: Option<Vec<Witness>>,
}

impl InvocationTransaction {
    /// Creates an empty draft at the invocation transaction version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: INVOCATION_TRANSACTION_VERSION,
            ..Self::default()
        }
    }

    /// Sets every unset collection to an empty list, leaving populated ones alone.
    pub fn initialize_missing_collections(&mut self) {
        self.attributes.get_or_insert_with(Vec::new);
        self.inputs.get_or_insert_with(Vec::new);
        self.outputs.get_or_insert_with(Vec::new);
        self.scripts.get_or_insert_with(Vec::new);
    }

    /// Returns `true` once every collection has been initialized.
    #[must_use]
    pub fn has_collections(&self) -> bool {
        self.attributes.is_some()
            && self.inputs.is_some()
            && self.outputs.is_some()
            && self.scripts.is_some()
    }

    /// Copy of the draft without witnesses, as handed to a signer.
    #[must_use]
    pub fn without_witnesses(&self) -> Self {
        Self {
            scripts: None,
            ..self.clone()
        }
    }
}
