//! Invocation draft assembly.

use crate::error::{InvokeError, InvokeResult};
use crate::execution;
use crate::fee::{FeeEstimator, FeePlan};
use neo_invoke_core::constants::INVOCATION_TRANSACTION_VERSION;
use neo_invoke_core::{Fixed8, InvocationTransaction};
use neo_invoke_vm::{ExecutionResult, Script};
use tracing::debug;

/// Holds the draft transaction and the fee computed for it.
///
/// The fee plan is only present between a successful dry run and the next
/// change to the script, so [`finalize`](Self::finalize) can never hand out a
/// draft priced for a different script.
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
    estimator: FeeEstimator,
    draft: Option<InvocationTransaction>,
    fee: Option<FeePlan>,
}

impl InvocationBuilder {
    /// Creates a builder without a draft.
    pub fn new(estimator: FeeEstimator) -> Self {
        Self {
            estimator,
            draft: None,
            fee: None,
        }
    }

    /// Creates a builder around an existing draft.
    pub fn with_draft(estimator: FeeEstimator, draft: InvocationTransaction) -> Self {
        Self {
            estimator,
            draft: Some(draft),
            fee: None,
        }
    }

    /// Prepares a draft for `script`.
    ///
    /// The version is reset and the script replaced. Collections are only
    /// initialized if unset, so anything a signer populated survives.
    pub fn prepare(script: &Script, prior: Option<InvocationTransaction>) -> InvocationTransaction {
        let mut draft = prior.unwrap_or_default();
        draft.version = INVOCATION_TRANSACTION_VERSION;
        draft.script = script.as_bytes().to_vec();
        draft.initialize_missing_collections();
        draft
    }

    /// Prepares the held draft for a new script and drops any computed fee.
    pub fn load(&mut self, script: &Script) -> &InvocationTransaction {
        self.fee = None;
        let draft = Self::prepare(script, self.draft.take());
        debug!(script_len = draft.script.len(), gas = %draft.gas, "prepared invocation draft");
        self.draft.insert(draft)
    }

    /// Prices a dry-run result and stores the GAS on the draft.
    ///
    /// A faulted result leaves the draft untouched and clears any previous fee.
    pub fn apply_result(&mut self, result: &ExecutionResult) -> InvokeResult<FeePlan> {
        let draft = self.draft.as_mut().ok_or(InvokeError::NotReadyToFinalize)?;

        match execution::interpret(result, &self.estimator, draft.gas) {
            Ok(plan) => {
                draft.gas = plan.gas;
                self.fee = Some(plan);
                Ok(plan)
            }
            Err(err) => {
                self.fee = None;
                Err(err)
            }
        }
    }

    /// Drops the computed fee.
    pub fn invalidate(&mut self) {
        self.fee = None;
    }

    /// The current draft.
    pub fn draft(&self) -> Option<&InvocationTransaction> {
        self.draft.as_ref()
    }

    /// The fee plan from the last successful dry run, if still valid.
    pub fn fee_plan(&self) -> Option<FeePlan> {
        self.fee
    }

    /// The network fee from the last successful dry run, if still valid.
    pub fn network_fee(&self) -> Option<Fixed8> {
        self.fee.map(|plan| plan.network_fee)
    }

    /// The fee estimator in use.
    pub fn estimator(&self) -> &FeeEstimator {
        &self.estimator
    }

    /// Returns the priced draft.
    pub fn finalize(&self) -> InvokeResult<InvocationTransaction> {
        match (&self.draft, self.fee) {
            (Some(draft), Some(_)) => Ok(draft.clone()),
            _ => Err(InvokeError::NotReadyToFinalize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_invoke_core::{TransactionAttribute, TransactionAttributeUsage};
    use neo_invoke_vm::{StackItem, VMState};

    fn script(bytes: &[u8]) -> Script {
        Script::new(bytes.to_vec())
    }

    fn halt(gas: &str) -> ExecutionResult {
        ExecutionResult::new(VMState::HALT, gas.parse().unwrap(), vec![StackItem::Boolean(true)])
    }

    #[test]
    fn test_prepare_new_draft() {
        let draft = InvocationBuilder::prepare(&script(&[0x51]), None);
        assert_eq!(draft.version, 1);
        assert_eq!(draft.script, vec![0x51]);
        assert!(draft.has_collections());
        assert_eq!(draft.attributes, Some(vec![]));
    }

    #[test]
    fn test_prepare_keeps_existing_collections() {
        let attribute = TransactionAttribute::new(TransactionAttributeUsage::Remark(0), b"memo".to_vec());
        let prior = InvocationTransaction {
            version: 0,
            script: vec![0x00],
            attributes: Some(vec![attribute.clone()]),
            ..Default::default()
        };

        let draft = InvocationBuilder::prepare(&script(&[0x52]), Some(prior));
        assert_eq!(draft.version, 1);
        assert_eq!(draft.script, vec![0x52]);
        assert_eq!(draft.attributes, Some(vec![attribute]));
        assert_eq!(draft.inputs, Some(vec![]));
    }

    #[test]
    fn test_finalize_requires_fee() {
        let mut builder = InvocationBuilder::new(FeeEstimator::default());
        assert_eq!(builder.finalize(), Err(InvokeError::NotReadyToFinalize));

        builder.load(&script(&[0x51]));
        assert_eq!(builder.finalize(), Err(InvokeError::NotReadyToFinalize));

        builder.apply_result(&halt("12.3")).unwrap();
        let draft = builder.finalize().unwrap();
        assert_eq!(draft.gas, Fixed8::from_units(3));
        assert_eq!(builder.network_fee(), Some(Fixed8::from_units(3)));

        builder.invalidate();
        assert_eq!(builder.finalize(), Err(InvokeError::NotReadyToFinalize));
    }

    #[test]
    fn test_fault_leaves_gas_untouched() {
        let mut builder = InvocationBuilder::new(FeeEstimator::default());
        builder.load(&script(&[0x51]));
        builder.apply_result(&halt("11")).unwrap();

        let faulted = ExecutionResult::new(VMState::FAULT, Fixed8::from_units(50), vec![]);
        assert!(matches!(
            builder.apply_result(&faulted),
            Err(InvokeError::ExecutionFaulted(_))
        ));
        assert_eq!(builder.draft().unwrap().gas, Fixed8::ONE);
        assert_eq!(builder.fee_plan(), None);
    }

    #[test]
    fn test_reload_keeps_gas_and_drops_fee() {
        let mut builder = InvocationBuilder::new(FeeEstimator::default());
        builder.load(&script(&[0x51]));
        builder.apply_result(&halt("11")).unwrap();

        let draft = builder.load(&script(&[0x52]));
        assert_eq!(draft.gas, Fixed8::ONE);
        assert_eq!(builder.network_fee(), None);
    }
}
