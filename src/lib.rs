//! # Neo Invoke: contract invocation for Neo wallets
//!
//! Turns a contract call into an executable script, runs it in a sandboxed
//! engine, and derives the fee and the draft transaction handed to a wallet
//! for signing.
//!
//! ## Pipeline
//!
//! contract hash → registry lookup → typed parameters → call script →
//! dry run → fee → draft transaction → signer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_invoke::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run(executor: Arc<dyn DryRunExecutor>, signer: &dyn TransactionSigner) -> Result<(), Box<dyn std::error::Error>> {
//! let registry = MemoryContractRegistry::from_json_str(
//!     r#"[{"hash": "0x0102030405060708090a0b0c0d0e0f1011121314", "parameter_list": [2]}]"#,
//! )?;
//!
//! let mut session = InvocationSession::new(Arc::new(registry), executor, FeeEstimator::default());
//! session.select_contract("0x0102030405060708090a0b0c0d0e0f1011121314")?;
//! session.set_parameter_text(0, "42")?;
//! session.encode_script()?;
//!
//! let plan = session.dry_run()?;
//! println!("network fee: {}", plan.network_fee);
//!
//! let tx = session.build_transaction(signer)?;
//! # let _ = tx;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`neo_invoke_core`] - hashes, `Fixed8` and the invocation transaction
//! - [`neo_invoke_vm`] - opcodes, script building, VM state and dry-run results
//! - [`neo_invoke_contract`] - parameters, registry and the call-script encoder
//! - [`neo_invoke_config`] - fee and logger settings

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_invoke_config as config;
pub use neo_invoke_contract as contract;
pub use neo_invoke_core as core;
pub use neo_invoke_vm as vm;

/// Draft assembly and fee bookkeeping
pub mod builder;
/// Pipeline error types
pub mod error;
/// Dry-run result interpretation
pub mod execution;
/// Dry-run engine seam
pub mod executor;
/// Fee derivation
pub mod fee;
/// Invocation state machine
pub mod session;
/// Wallet handoff seam
pub mod signer;

pub use builder::InvocationBuilder;
pub use error::{InvokeError, InvokeResult};
pub use execution::{interpret, ExecutionDiagnostics};
pub use executor::DryRunExecutor;
pub use fee::{FeeEstimator, FeePlan};
pub use session::{InvocationSession, SessionState};
pub use signer::{SignerError, TransactionSigner};

/// Common imports for invocation tooling
pub mod prelude {
    pub use crate::builder::InvocationBuilder;
    pub use crate::error::{InvokeError, InvokeResult};
    pub use crate::executor::DryRunExecutor;
    pub use crate::fee::{FeeEstimator, FeePlan};
    pub use crate::session::{InvocationSession, SessionState};
    pub use crate::signer::{SignerError, TransactionSigner};
    pub use neo_invoke_contract::{
        ContractParameter, ContractParameterType, ContractParameterValue, ContractRegistry,
        MemoryContractRegistry, ScriptEncoder,
    };
    pub use neo_invoke_core::{Fixed8, InvocationTransaction, UInt160};
    pub use neo_invoke_vm::{ExecutionResult, Script, StackItem, VMState};
}
