//! Wallet handoff.

use neo_invoke_core::{Fixed8, InvocationTransaction};
use thiserror::Error;

/// Failures reported by a signer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// The wallet cannot cover the fee
    #[error("Insufficient funds: {required} GAS required")]
    InsufficientFunds {
        /// Amount the signer tried to cover
        required: Fixed8,
    },

    /// No wallet is open
    #[error("No wallet is open")]
    NoWallet,

    /// Any other refusal
    #[error("{0}")]
    Rejected(String),
}

/// Turns a finalized draft into a spendable transaction.
///
/// The signer owns the draft it receives: it may fill in inputs, outputs and
/// witnesses as it sees fit.
pub trait TransactionSigner: Send + Sync {
    /// Attaches inputs and outputs covering `fee` and returns the resulting transaction.
    fn make_transaction(
        &self,
        draft: InvocationTransaction,
        fee: Fixed8,
    ) -> Result<InvocationTransaction, SignerError>;
}
