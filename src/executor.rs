//! Dry-run execution.

use neo_invoke_core::InvocationTransaction;
use neo_invoke_vm::{ExecutionResult, Script};

/// Runs a script in a sandbox against current chain state.
///
/// A dry run has no side effects. Implementations may block while the
/// engine runs.
pub trait DryRunExecutor: Send + Sync {
    /// Executes `script` with `container` as the script container.
    fn dry_run(&self, script: &Script, container: &InvocationTransaction) -> ExecutionResult;
}
