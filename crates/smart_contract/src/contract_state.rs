//! Contract state as a registry stores it, and the call signature derived from it.
//!
//! The registry keeps raw parameter type codes exactly as they were deployed.
//! [`ContractSignature`] decodes them, remapping the legacy array code, so the
//! rest of the pipeline only ever sees known [`ContractParameterType`]s.

use crate::contract_parameter::ContractParameter;
use crate::contract_parameter_type::ContractParameterType;
use crate::error::ContractResult;
use neo_invoke_core::UInt160;
use serde::{Deserialize, Serialize};

/// Represents a deployed smart contract's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractState {
    /// The hash of the contract.
    pub hash: UInt160,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Version string chosen by the author.
    #[serde(default)]
    pub code_version: String,

    /// Author name.
    #[serde(default)]
    pub author: String,

    /// Author contact.
    #[serde(default)]
    pub email: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Raw parameter type codes of the entry point, in declared order.
    #[serde(default)]
    pub parameter_list: Vec<u8>,

    /// Raw return type code.
    #[serde(default = "void_code")]
    pub return_type: u8,
}

fn void_code() -> u8 {
    ContractParameterType::Void as u8
}

impl ContractState {
    /// Creates a contract record with no metadata.
    pub fn new(hash: UInt160, parameter_list: Vec<u8>, return_type: u8) -> Self {
        Self {
            hash,
            parameter_list,
            return_type,
            ..Default::default()
        }
    }
}

/// The decoded call signature of a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSignature {
    /// The hash of the contract.
    pub hash: UInt160,
    /// Display name.
    pub name: String,
    /// Version string.
    pub code_version: String,
    /// Author name.
    pub author: String,
    /// Author contact.
    pub email: String,
    /// Free-form description.
    pub description: String,
    /// Parameter kinds in declared order.
    pub parameters: Vec<ContractParameterType>,
    /// Return kind.
    pub return_type: ContractParameterType,
}

impl ContractSignature {
    /// Decodes a contract record. Fails on any code that is neither known nor the legacy array alias.
    pub fn from_state(state: &ContractState) -> ContractResult<Self> {
        let parameters = state
            .parameter_list
            .iter()
            .map(|code| ContractParameterType::from_declared(*code))
            .collect::<ContractResult<Vec<_>>>()?;

        Ok(Self {
            hash: state.hash,
            name: state.name.clone(),
            code_version: state.code_version.clone(),
            author: state.author.clone(),
            email: state.email.clone(),
            description: state.description.clone(),
            parameters,
            return_type: ContractParameterType::from_declared(state.return_type)?,
        })
    }

    /// Fresh, unset parameters matching the declared kinds.
    pub fn new_parameters(&self) -> Vec<ContractParameter> {
        self.parameters
            .iter()
            .map(|kind| ContractParameter::new(*kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    #[test]
    fn test_signature_remaps_legacy_array() {
        let state = ContractState::new(UInt160::zero(), vec![0x02, 22, 0x10], 0x01);
        let signature = ContractSignature::from_state(&state).unwrap();

        assert_eq!(
            signature.parameters,
            vec![
                ContractParameterType::Integer,
                ContractParameterType::Array,
                ContractParameterType::Array,
            ]
        );
        assert_eq!(signature.return_type, ContractParameterType::Boolean);
    }

    #[test]
    fn test_signature_rejects_unknown_code() {
        let state = ContractState::new(UInt160::zero(), vec![0x02, 0x08], 0xff);
        assert_eq!(
            ContractSignature::from_state(&state),
            Err(ContractError::UnknownParameterType(0x08))
        );
    }

    #[test]
    fn test_new_parameters_are_unset() {
        let state = ContractState::new(UInt160::zero(), vec![0x07, 0x05], 0xff);
        let parameters = ContractSignature::from_state(&state)
            .unwrap()
            .new_parameters();

        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[0].param_type(), ContractParameterType::String);
        assert!(parameters.iter().all(|p| p.value().is_none()));
    }

    #[test]
    fn test_state_json_defaults() {
        let state: ContractState = serde_json::from_str(
            r#"{"hash":"0x0000000000000000000000000000000000000001","parameter_list":[2]}"#,
        )
        .unwrap();
        assert_eq!(state.return_type, 0xff);
        assert_eq!(state.name, "");
        assert_eq!(state.parameter_list, vec![2]);
    }
}
