//! Error types for contract parameters, metadata and encoding.

use crate::contract_parameter_type::ContractParameterType;
use thiserror::Error;

/// Errors raised by the contract layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// At least one parameter, possibly nested in an array, has no value
    #[error("Incomplete parameters: {path} has no value")]
    IncompleteParameters {
        /// Location of the first missing value, e.g. `parameters[1][0]`
        path: String,
    },

    /// The parameter kind cannot be pushed into a script or edited as text
    #[error("Unsupported parameter type: {0}")]
    UnsupportedParameterType(ContractParameterType),

    /// A raw parameter type code that is neither known nor a legacy alias
    #[error("Unknown parameter type code: 0x{0:02x}")]
    UnknownParameterType(u8),

    /// A value whose case does not match the parameter's declared kind
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Declared kind
        expected: ContractParameterType,
        /// Kind carried by the supplied value
        actual: ContractParameterType,
    },

    /// Text or JSON that cannot be turned into a value of the declared kind
    #[error("Invalid {kind} value: {message}")]
    InvalidValue {
        /// Declared kind
        kind: ContractParameterType,
        /// What went wrong
        message: String,
    },

    /// Malformed registry data
    #[error("Invalid contract record: {0}")]
    InvalidRecord(String),
}

impl ContractError {
    /// Creates an `InvalidValue` error.
    pub fn invalid_value(kind: ContractParameterType, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            message: message.into(),
        }
    }
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
