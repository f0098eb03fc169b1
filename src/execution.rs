//! Dry-run result interpretation.

use crate::error::{InvokeError, InvokeResult};
use crate::fee::{FeeEstimator, FeePlan};
use neo_invoke_contract::ContractParameter;
use neo_invoke_core::Fixed8;
use neo_invoke_vm::{ExecutionResult, StackItem, VMState};
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

/// What an engine reported, kept for display when a run faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionDiagnostics {
    /// Final state flags.
    pub state: VMState,
    /// GAS consumed.
    pub gas_consumed: Fixed8,
    /// Evaluation stack, bottom first.
    pub stack: Vec<StackItem>,
}

impl ExecutionDiagnostics {
    /// Captures a result.
    pub fn from_result(result: &ExecutionResult) -> Self {
        Self {
            state: result.state,
            gas_consumed: result.gas_consumed,
            stack: result.stack.clone(),
        }
    }

    /// The stack as typed parameter objects.
    pub fn stack_json(&self) -> Value {
        Value::Array(
            self.stack
                .iter()
                .map(|item| ContractParameter::from(item).to_json())
                .collect(),
        )
    }

    /// Multi-line report of state, GAS and stack.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExecutionDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VM State: {}", self.state)?;
        writeln!(f, "Gas Consumed: {}", self.gas_consumed)?;
        write!(f, "Evaluation Stack: {}", self.stack_json())
    }
}

/// Checks a dry-run result and prices it.
///
/// A result is faulted whenever the FAULT bit is set, whatever else is set
/// with it. A faulted run yields `ExecutionFaulted` and no fee.
pub fn interpret(
    result: &ExecutionResult,
    estimator: &FeeEstimator,
    existing_gas: Fixed8,
) -> InvokeResult<FeePlan> {
    if result.is_faulted() {
        warn!(state = %result.state, gas_consumed = %result.gas_consumed, "dry run faulted");
        return Err(InvokeError::ExecutionFaulted(Box::new(
            ExecutionDiagnostics::from_result(result),
        )));
    }

    let plan = estimator.estimate(result.gas_consumed, existing_gas);
    info!(
        state = %result.state,
        gas_consumed = %result.gas_consumed,
        gas = %plan.gas,
        network_fee = %plan.network_fee,
        "dry run succeeded"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(state: VMState, gas: &str) -> ExecutionResult {
        ExecutionResult::new(state, gas.parse().unwrap(), vec![StackItem::from_int(1)])
    }

    #[test]
    fn test_halt_is_priced() {
        let plan = interpret(&result(VMState::HALT, "10.5"), &FeeEstimator::default(), Fixed8::ZERO)
            .unwrap();
        assert_eq!(plan.gas, Fixed8::ONE);
        assert_eq!(plan.network_fee, Fixed8::ONE);
    }

    #[test]
    fn test_fault_with_other_flags_is_faulted() {
        for state in [
            VMState::FAULT,
            VMState::HALT | VMState::FAULT,
            VMState::FAULT | VMState::BREAK,
        ] {
            let err = interpret(&result(state, "3"), &FeeEstimator::default(), Fixed8::ZERO)
                .unwrap_err();
            let InvokeError::ExecutionFaulted(diagnostics) = err else {
                panic!("expected ExecutionFaulted");
            };
            assert_eq!(diagnostics.state, state);
            assert_eq!(diagnostics.gas_consumed, Fixed8::from_units(3));
        }
    }

    #[test]
    fn test_report() {
        let diagnostics = ExecutionDiagnostics::from_result(&result(VMState::HALT, "10.5"));
        assert_eq!(
            diagnostics.report(),
            "VM State: HALT\nGas Consumed: 10.5\nEvaluation Stack: [{\"type\":\"Integer\",\"value\":\"1\"}]"
        );
    }
}
