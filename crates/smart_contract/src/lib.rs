//! # Neo Invoke Contract
//!
//! The contract side of an invocation: the typed arguments a user supplies,
//! the contract metadata that declares them, and the encoder that turns both
//! into a call script.
//!
//! ## Example
//!
//! ```rust
//! use neo_invoke_contract::{ContractParameter, ContractParameterType, ScriptEncoder};
//! use neo_invoke_core::UInt160;
//!
//! let hash = UInt160::parse("0x0102030405060708090a0b0c0d0e0f1011121314").unwrap();
//! let mut amount = ContractParameter::new(ContractParameterType::Integer);
//! amount.set_value("42").unwrap();
//!
//! let script = ScriptEncoder::encode(&hash, &[amount]).unwrap();
//! assert_eq!(&script.to_hex()[..6], "012a67");
//! ```

pub mod contract_parameter;
pub mod contract_parameter_type;
pub mod contract_state;
pub mod encoder;
pub mod error;
pub mod registry;

pub use contract_parameter::{ContractParameter, ContractParameterValue, IntegerValue};
pub use contract_parameter_type::ContractParameterType;
pub use contract_state::{ContractSignature, ContractState};
pub use encoder::ScriptEncoder;
pub use error::{ContractError, ContractResult};
pub use registry::{ContractRegistry, MemoryContractRegistry};
