//! # Neo Invoke VM
//!
//! The virtual-machine side of contract invocation: everything needed to
//! produce a script for the NeoVM and to read back what a dry run reported.
//! The engine itself is an external collaborator and is not part of this crate.
//!
//! ## Features
//!
//! - **OpCodes**: the push, flow-control and array opcodes used by call scripts
//! - **Script Building**: `ScriptBuilder` with the canonical push encodings
//! - **Scripts**: immutable bytecode with lowercase hex transport
//! - **VM State**: the `HALT`/`FAULT`/`BREAK` flag set
//! - **Execution Results**: final state, GAS consumed and the evaluation stack
//!
//! ## Example
//!
//! ```rust
//! use neo_invoke_vm::{OpCode, ScriptBuilder};
//!
//! let mut builder = ScriptBuilder::new();
//! builder.emit_push_int(5).emit_opcode(OpCode::RET);
//! assert_eq!(builder.to_array(), vec![0x55, 0x66]);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// VM error types and result handling
pub mod error;
/// Outcome of a dry run
pub mod execution_result;
/// VM opcode definitions
pub mod op_code;
/// VM script representation and hex transport
pub mod script;
/// Utility for constructing VM bytecode
pub mod script_builder;
/// Values left on the evaluation stack
pub mod stack_item;
/// Execution state flags
pub mod vm_state;

pub use error::{VmError, VmResult};
pub use execution_result::ExecutionResult;
pub use op_code::OpCode;
pub use script::Script;
pub use script_builder::ScriptBuilder;
pub use stack_item::{StackItem, StackItemType};
pub use vm_state::VMState;
