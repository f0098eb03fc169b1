//! Per-contract invocation session.
//!
//! A session walks one invocation from contract selection to signer handoff:
//!
//! ```text
//! Empty -> ContractSelected -> ParametersComplete -> ScriptEncoded -> DryRunSucceeded
//!                                                                  \-> DryRunFaulted
//! ```
//!
//! Editing a parameter steps back to `ParametersComplete` (or
//! `ContractSelected` while values are missing) and drops the computed fee.
//! A faulted script cannot be run again until the parameters or the script
//! change.

use crate::builder::InvocationBuilder;
use crate::error::{InvokeError, InvokeResult};
use crate::executor::DryRunExecutor;
use crate::fee::{FeeEstimator, FeePlan};
use crate::signer::TransactionSigner;
use neo_invoke_contract::{
    ContractParameter, ContractParameterValue, ContractRegistry, ContractSignature, ScriptEncoder,
};
use neo_invoke_core::{Fixed8, InvocationTransaction, UInt160};
use neo_invoke_vm::Script;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a session is in the invocation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Nothing selected yet.
    Empty,
    /// A contract is selected and some parameters have no value.
    ContractSelected,
    /// Every parameter has a value.
    ParametersComplete,
    /// A script is ready for a dry run.
    ScriptEncoded,
    /// The last dry run halted and a fee is available.
    DryRunSucceeded,
    /// The last dry run faulted.
    DryRunFaulted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Empty => "Empty",
            SessionState::ContractSelected => "ContractSelected",
            SessionState::ParametersComplete => "ParametersComplete",
            SessionState::ScriptEncoded => "ScriptEncoded",
            SessionState::DryRunSucceeded => "DryRunSucceeded",
            SessionState::DryRunFaulted => "DryRunFaulted",
        };
        f.write_str(name)
    }
}

/// One invocation in progress.
pub struct InvocationSession {
    registry: Arc<dyn ContractRegistry>,
    executor: Arc<dyn DryRunExecutor>,
    state: SessionState,
    contract: Option<ContractSignature>,
    parameters: Vec<ContractParameter>,
    script: Option<Script>,
    builder: InvocationBuilder,
}

impl InvocationSession {
    /// Creates an empty session.
    pub fn new(
        registry: Arc<dyn ContractRegistry>,
        executor: Arc<dyn DryRunExecutor>,
        estimator: FeeEstimator,
    ) -> Self {
        Self {
            registry,
            executor,
            state: SessionState::Empty,
            contract: None,
            parameters: Vec::new(),
            script: None,
            builder: InvocationBuilder::new(estimator),
        }
    }

    /// Reopens an existing draft; its script becomes the current script.
    pub fn from_draft(
        registry: Arc<dyn ContractRegistry>,
        executor: Arc<dyn DryRunExecutor>,
        estimator: FeeEstimator,
        draft: InvocationTransaction,
    ) -> Self {
        let script = Script::new(draft.script.clone());
        debug!(script_len = script.len(), gas = %draft.gas, "reopened invocation draft");

        let mut builder = InvocationBuilder::with_draft(estimator, draft);
        builder.load(&script);
        Self {
            registry,
            executor,
            state: SessionState::ScriptEncoded,
            contract: None,
            parameters: Vec::new(),
            script: Some(script),
            builder,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The selected contract.
    pub fn contract(&self) -> Option<&ContractSignature> {
        self.contract.as_ref()
    }

    /// Parameters of the selected contract, in declared order.
    pub fn parameters(&self) -> &[ContractParameter] {
        &self.parameters
    }

    /// The current script.
    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    /// The current draft.
    pub fn draft(&self) -> Option<&InvocationTransaction> {
        self.builder.draft()
    }

    /// Fee plan of the last successful dry run, if still valid.
    pub fn fee_plan(&self) -> Option<FeePlan> {
        self.builder.fee_plan()
    }

    /// Network fee of the last successful dry run, if still valid.
    pub fn network_fee(&self) -> Option<Fixed8> {
        self.builder.network_fee()
    }

    /// Selects a contract by its hash text (optional `0x`, 40 hex digits).
    pub fn select_contract(&mut self, text: &str) -> InvokeResult<&ContractSignature> {
        let hash = UInt160::parse(text.trim()).map_err(|e| InvokeError::InvalidIdentifier {
            text: text.to_string(),
            reason: e.to_string(),
        })?;
        self.select_contract_hash(&hash)
    }

    /// Selects a contract and creates fresh, unset parameters for it.
    ///
    /// On failure the previous selection is kept.
    pub fn select_contract_hash(&mut self, hash: &UInt160) -> InvokeResult<&ContractSignature> {
        let state = self
            .registry
            .get_contract(hash)
            .ok_or(InvokeError::ContractNotFound(*hash))?;
        let signature = ContractSignature::from_state(&state)?;

        info!(
            contract = %hash,
            name = %signature.name,
            version = %signature.code_version,
            parameters = signature.parameters.len(),
            "selected contract"
        );

        self.parameters = signature.new_parameters();
        self.script = None;
        self.builder.invalidate();
        self.state = self.parameter_state();
        Ok(self.contract.insert(signature))
    }

    /// Sets a parameter to a typed value.
    pub fn set_parameter(&mut self, index: usize, value: ContractParameterValue) -> InvokeResult<()> {
        self.parameter_mut(index)?.set(value)?;
        self.parameters_edited(index);
        Ok(())
    }

    /// Sets a parameter from editor text.
    pub fn set_parameter_text(&mut self, index: usize, text: &str) -> InvokeResult<()> {
        self.parameter_mut(index)?.set_value(text)?;
        self.parameters_edited(index);
        Ok(())
    }

    /// Removes a parameter's value.
    pub fn clear_parameter(&mut self, index: usize) -> InvokeResult<()> {
        self.parameter_mut(index)?.clear();
        self.parameters_edited(index);
        Ok(())
    }

    /// Encodes the call script for the selected contract and prepares the draft.
    pub fn encode_script(&mut self) -> InvokeResult<&Script> {
        let hash = match (&self.contract, self.state) {
            (None, _) | (_, SessionState::DryRunFaulted) => {
                return Err(self.invalid_state("encode the script"));
            }
            (Some(contract), _) => contract.hash,
        };

        let script = ScriptEncoder::encode(&hash, &self.parameters)?;
        Ok(self.install_script(script))
    }

    /// Uses raw bytes as the script, bypassing the encoder.
    pub fn import_script(&mut self, bytes: Vec<u8>) -> &Script {
        debug!(script_len = bytes.len(), "imported script");
        self.install_script(Script::new(bytes))
    }

    /// Uses hex text as the script. Malformed text leaves the session as it was.
    pub fn set_script_hex(&mut self, text: &str) -> InvokeResult<&Script> {
        let script = Script::from_hex(text.trim())?;
        Ok(self.install_script(script))
    }

    /// Runs the current script and prices it. An empty script is never run.
    pub fn dry_run(&mut self) -> InvokeResult<FeePlan> {
        if !matches!(
            self.state,
            SessionState::ScriptEncoded | SessionState::DryRunSucceeded
        ) {
            return Err(self.invalid_state("run the script"));
        }
        let (Some(script), Some(draft)) = (self.script.as_ref(), self.builder.draft()) else {
            return Err(self.invalid_state("run the script"));
        };
        if script.is_empty() {
            return Err(self.invalid_state("run an empty script"));
        }

        debug!(script = %script, "starting dry run");
        let result = self.executor.dry_run(script, draft);

        match self.builder.apply_result(&result) {
            Ok(plan) => {
                self.state = SessionState::DryRunSucceeded;
                Ok(plan)
            }
            Err(err) => {
                self.state = SessionState::DryRunFaulted;
                Err(err)
            }
        }
    }

    /// Returns the priced draft.
    pub fn finalize(&self) -> InvokeResult<InvocationTransaction> {
        if self.state != SessionState::DryRunSucceeded {
            return Err(InvokeError::NotReadyToFinalize);
        }
        self.builder.finalize()
    }

    /// Finalizes and hands the draft, without witnesses, to `signer`.
    pub fn build_transaction(
        &self,
        signer: &dyn TransactionSigner,
    ) -> InvokeResult<InvocationTransaction> {
        let draft = self.finalize()?.without_witnesses();
        let fee = self.builder.estimator().handoff_fee(draft.gas);

        info!(gas = %draft.gas, %fee, "handing draft to signer");
        signer.make_transaction(draft, fee).map_err(|err| {
            warn!(error = %err, "signer refused draft");
            InvokeError::Signer(err)
        })
    }

    fn parameter_mut(&mut self, index: usize) -> InvokeResult<&mut ContractParameter> {
        if self.contract.is_none() {
            return Err(self.invalid_state("edit parameters"));
        }
        let count = self.parameters.len();
        self.parameters.get_mut(index).ok_or_else(|| {
            InvokeError::InvalidParameter(format!(
                "index {index} out of range for {count} parameters"
            ))
        })
    }

    fn parameters_edited(&mut self, index: usize) {
        self.script = None;
        self.builder.invalidate();
        self.state = self.parameter_state();
        debug!(index, state = %self.state, "parameter edited");
    }

    fn parameter_state(&self) -> SessionState {
        if self.parameters.iter().all(ContractParameter::is_complete) {
            SessionState::ParametersComplete
        } else {
            SessionState::ContractSelected
        }
    }

    fn install_script(&mut self, script: Script) -> &Script {
        self.builder.load(&script);
        self.state = SessionState::ScriptEncoded;
        self.script.insert(script)
    }

    fn invalid_state(&self, operation: &'static str) -> InvokeError {
        InvokeError::InvalidState {
            operation,
            state: self.state,
        }
    }
}

impl fmt::Debug for InvocationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationSession")
            .field("state", &self.state)
            .field("contract", &self.contract.as_ref().map(|c| c.hash))
            .field("parameters", &self.parameters)
            .field("script", &self.script)
            .field("builder", &self.builder)
            .finish()
    }
}
