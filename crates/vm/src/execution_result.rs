//! Outcome of a dry run.

use crate::stack_item::StackItem;
use crate::vm_state::VMState;
use neo_invoke_core::Fixed8;

/// What an engine reports after running a script to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    /// Final state flags.
    pub state: VMState,
    /// GAS consumed by the run.
    pub gas_consumed: Fixed8,
    /// Evaluation stack, bottom first.
    pub stack: Vec<StackItem>,
}

impl ExecutionResult {
    /// Creates a result.
    pub fn new(state: VMState, gas_consumed: Fixed8, stack: Vec<StackItem>) -> Self {
        Self {
            state,
            gas_consumed,
            stack,
        }
    }

    /// Returns `true` if the `FAULT` flag is set, whatever else is set with it.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.state.is_fault()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_faulted_with_combined_flags() {
        let gas = Fixed8::from_units(1);
        assert!(!ExecutionResult::new(VMState::HALT, gas, vec![]).is_faulted());
        assert!(ExecutionResult::new(VMState::FAULT, gas, vec![]).is_faulted());
        assert!(ExecutionResult::new(VMState::HALT | VMState::FAULT, gas, vec![]).is_faulted());
        assert!(ExecutionResult::new(VMState::BREAK | VMState::FAULT, gas, vec![]).is_faulted());
        assert!(!ExecutionResult::default().is_faulted());
    }
}
