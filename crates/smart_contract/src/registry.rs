//! Contract lookup.

use crate::contract_state::ContractState;
use crate::error::{ContractError, ContractResult};
use neo_invoke_core::UInt160;
use std::collections::HashMap;
use tracing::debug;

/// Read-only access to deployed contract metadata.
pub trait ContractRegistry: Send + Sync {
    /// Gets the contract with the specified hash.
    fn get_contract(&self, hash: &UInt160) -> Option<ContractState>;
}

/// A registry held in memory, typically loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct MemoryContractRegistry {
    contracts: HashMap<UInt160, ContractState>,
}

impl MemoryContractRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a contract.
    pub fn insert(&mut self, state: ContractState) {
        self.contracts.insert(state.hash, state);
    }

    /// Number of contracts held.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Returns `true` if no contract is held.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Loads a JSON array of contract records.
    pub fn from_json_str(text: &str) -> ContractResult<Self> {
        let records: Vec<ContractState> =
            serde_json::from_str(text).map_err(|e| ContractError::InvalidRecord(e.to_string()))?;
        let registry: Self = records.into_iter().collect();
        debug!(contracts = registry.len(), "loaded contract registry");
        Ok(registry)
    }
}

impl FromIterator<ContractState> for MemoryContractRegistry {
    fn from_iter<I: IntoIterator<Item = ContractState>>(iter: I) -> Self {
        let mut registry = Self::new();
        for state in iter {
            registry.insert(state);
        }
        registry
    }
}

impl ContractRegistry for MemoryContractRegistry {
    fn get_contract(&self, hash: &UInt160) -> Option<ContractState> {
        self.contracts.get(hash).cloned()
    }
}
