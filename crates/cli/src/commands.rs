//! Command implementations.
//!
//! Each command writes its report to the given writer so the binary can
//! print to stdout and tests can capture it.

use anyhow::{bail, Context, Result};
use neo_invoke::{interpret, ExecutionDiagnostics, FeeEstimator, FeePlan, InvokeError};
use neo_invoke_contract::{
    ContractParameter, ContractRegistry, ContractSignature, MemoryContractRegistry, ScriptEncoder,
};
use neo_invoke_core::{Fixed8, UInt160};
use neo_invoke_vm::{ExecutionResult, Script, VMState};
use serde::Deserialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// A dry-run result as recorded by an engine front end.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordedResult {
    /// State flags, e.g. `"HALT"` or `"FAULT, BREAK"`.
    pub state: String,
    /// GAS consumed.
    pub gas_consumed: Fixed8,
    /// Stack items as parameter JSON objects.
    #[serde(default)]
    pub stack: Vec<Value>,
}

impl RecordedResult {
    /// Converts the recording into an engine result.
    pub fn into_execution_result(self) -> Result<ExecutionResult> {
        let state: VMState = self
            .state
            .parse()
            .with_context(|| format!("invalid VM state '{}'", self.state))?;
        let stack = self
            .stack
            .iter()
            .map(|json| {
                ContractParameter::from_json(json)
                    .and_then(|p| p.to_stack_item())
                    .with_context(|| format!("invalid stack item {json}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ExecutionResult::new(state, self.gas_consumed, stack))
    }
}

/// Encodes a call script for a registry contract.
pub fn encode(out: &mut impl Write, registry_path: &Path, contract: &str, args: &[String]) -> Result<()> {
    let text = std::fs::read_to_string(registry_path)
        .with_context(|| format!("failed to read registry {}", registry_path.display()))?;
    let registry = MemoryContractRegistry::from_json_str(&text)?;

    let hash = UInt160::parse(contract.trim()).map_err(|e| InvokeError::InvalidIdentifier {
        text: contract.to_string(),
        reason: e.to_string(),
    })?;
    let state = registry
        .get_contract(&hash)
        .ok_or(InvokeError::ContractNotFound(hash))?;
    let signature = ContractSignature::from_state(&state)?;

    if args.len() != signature.parameters.len() {
        bail!(
            "contract {} takes {} arguments, {} given",
            hash,
            signature.parameters.len(),
            args.len()
        );
    }

    let mut parameters = signature.new_parameters();
    for (index, (parameter, text)) in parameters.iter_mut().zip(args).enumerate() {
        parameter
            .set_value(text)
            .with_context(|| format!("argument {index} ({})", parameter.param_type()))?;
    }

    let script = ScriptEncoder::encode(&hash, &parameters)?;
    info!(contract = %hash, size = script.len(), "encoded script");

    let kinds: Vec<String> = signature.parameters.iter().map(ToString::to_string).collect();
    writeln!(out, "Contract: {}", signature.hash)?;
    writeln!(out, "Name: {}", signature.name)?;
    writeln!(out, "Version: {}", signature.code_version)?;
    writeln!(out, "Author: {}", signature.author)?;
    writeln!(out, "Parameters: [{}]", kinds.join(", "))?;
    writeln!(out, "Returns: {}", signature.return_type)?;
    writeln!(out, "Script: {script}")?;
    Ok(())
}

/// Prints a script file as hex.
pub fn import(out: &mut impl Write, path: &Path) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read script {}", path.display()))?;
    let script = Script::new(bytes);
    writeln!(out, "{script}")?;
    Ok(())
}

/// Prints the fee for a GAS consumption.
pub fn estimate(
    out: &mut impl Write,
    estimator: &FeeEstimator,
    gas_consumed: Fixed8,
    existing_gas: Fixed8,
) -> Result<()> {
    let plan = estimator.estimate(gas_consumed, existing_gas);
    write_plan(out, &plan)
}

/// Prints the diagnostics and fee of a recorded dry run; a faulted run is an error.
pub fn interpret_result(
    out: &mut impl Write,
    estimator: &FeeEstimator,
    path: &Path,
    existing_gas: Fixed8,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read result {}", path.display()))?;
    let recorded: RecordedResult =
        serde_json::from_str(&text).with_context(|| format!("invalid result {}", path.display()))?;
    let result = recorded.into_execution_result()?;

    match interpret(&result, estimator, existing_gas) {
        Ok(plan) => {
            writeln!(out, "{}", ExecutionDiagnostics::from_result(&result))?;
            write_plan(out, &plan)
        }
        Err(InvokeError::ExecutionFaulted(diagnostics)) => {
            bail!("Execution failed\n{diagnostics}")
        }
        Err(err) => Err(err.into()),
    }
}

fn write_plan(out: &mut impl Write, plan: &FeePlan) -> Result<()> {
    writeln!(out, "Gas: {}", plan.gas)?;
    writeln!(out, "Network Fee: {}", plan.network_fee)?;
    Ok(())
}
