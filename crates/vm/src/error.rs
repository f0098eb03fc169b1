//! VM error types.

use thiserror::Error;

/// Errors raised while building or transporting scripts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// Script text is not an even-length string of hex digits
    #[error("Malformed script hex: {reason}")]
    MalformedScriptHex {
        /// What was wrong with the text
        reason: String,
    },

    /// An operation the builder cannot express
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Unknown opcode byte
    #[error("Invalid opcode: 0x{0:02x}")]
    InvalidOpCode(u8),
}

impl VmError {
    /// Creates a `MalformedScriptHex` error.
    pub fn malformed_hex(reason: impl Into<String>) -> Self {
        Self::MalformedScriptHex {
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidOperation` error.
    pub fn invalid_operation_msg(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }
}

/// Result type for VM operations.
pub type VmResult<T> = Result<T, VmError>;
