//! Error types for the invocation pipeline.

use crate::execution::ExecutionDiagnostics;
use crate::session::SessionState;
use crate::signer::SignerError;
use neo_invoke_contract::{ContractError, ContractParameterType};
use neo_invoke_core::UInt160;
use neo_invoke_vm::VmError;
use thiserror::Error;

/// Errors raised while building, testing and finalizing an invocation.
///
/// Every variant is recoverable and local to the session that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// Contract identifier text is not a 160-bit hash
    #[error("Invalid contract identifier '{text}': {reason}")]
    InvalidIdentifier {
        /// Text as entered
        text: String,
        /// Why it was rejected
        reason: String,
    },

    /// The registry has no contract with this hash
    #[error("Contract not found: {0}")]
    ContractNotFound(UInt160),

    /// The registry declares a parameter type code that is not known
    #[error("Unknown parameter type code: 0x{0:02x}")]
    UnknownParameterType(u8),

    /// A parameter, possibly nested, has no value
    #[error("Incomplete parameters: {path} has no value")]
    IncompleteParameters {
        /// Location of the first missing value
        path: String,
    },

    /// Script text is not valid hex
    #[error("Malformed script hex: {reason}")]
    MalformedScriptHex {
        /// Why it was rejected
        reason: String,
    },

    /// The dry run ended with the FAULT flag set
    #[error("Execution faulted ({})", .0.state)]
    ExecutionFaulted(Box<ExecutionDiagnostics>),

    /// No fee has been computed since the last change
    #[error("Not ready to finalize: run a successful dry run first")]
    NotReadyToFinalize,

    /// The operation is not allowed in the current session state
    #[error("Cannot {operation} in state {state}")]
    InvalidState {
        /// Operation attempted
        operation: &'static str,
        /// State the session was in
        state: SessionState,
    },

    /// Bad parameter index, kind mismatch or unparseable value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The parameter kind cannot be supplied or encoded
    #[error("Unsupported parameter type: {0}")]
    UnsupportedParameterType(ContractParameterType),

    /// The signer refused the draft
    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),
}

impl From<ContractError> for InvokeError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::IncompleteParameters { path } => Self::IncompleteParameters { path },
            ContractError::UnsupportedParameterType(kind) => Self::UnsupportedParameterType(kind),
            ContractError::UnknownParameterType(code) => Self::UnknownParameterType(code),
            other @ (ContractError::TypeMismatch { .. }
            | ContractError::InvalidValue { .. }
            | ContractError::InvalidRecord(_)) => Self::InvalidParameter(other.to_string()),
        }
    }
}

impl From<VmError> for InvokeError {
    fn from(err: VmError) -> Self {
        match err {
            VmError::MalformedScriptHex { reason } => Self::MalformedScriptHex { reason },
            other => Self::InvalidParameter(other.to_string()),
        }
    }
}

/// Result type for invocation operations.
pub type InvokeResult<T> = Result<T, InvokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_errors_map_to_pipeline_errors() {
        assert_eq!(
            InvokeError::from(ContractError::IncompleteParameters {
                path: "parameters[0]".into()
            }),
            InvokeError::IncompleteParameters {
                path: "parameters[0]".into()
            }
        );
        assert_eq!(
            InvokeError::from(ContractError::UnknownParameterType(9)),
            InvokeError::UnknownParameterType(9)
        );
        assert!(matches!(
            InvokeError::from(ContractError::TypeMismatch {
                expected: ContractParameterType::Integer,
                actual: ContractParameterType::String,
            }),
            InvokeError::InvalidParameter(_)
        ));
    }

    #[test]
    fn test_vm_hex_error_maps_to_malformed_script() {
        let err = VmError::malformed_hex("odd length");
        assert!(matches!(
            InvokeError::from(err),
            InvokeError::MalformedScriptHex { .. }
        ));
    }
}
