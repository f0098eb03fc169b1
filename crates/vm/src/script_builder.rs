//! Script builder module for the Neo Virtual Machine.
//!
//! This module provides a way to programmatically construct scripts for the Neo VM.

use crate::op_code::OpCode;
use crate::script::Script;
use neo_invoke_core::UInt160;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest payload written with a single length-byte prefix.
const MAX_DIRECT_PUSH: usize = OpCode::PUSHBYTES75 as usize;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    /// The script being built
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    #[inline]
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Number of bytes emitted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Returns `true` if nothing has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Emits a single byte to the script.
    #[inline]
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    #[inline]
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw bytes to the script.
    #[inline]
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits an opcode followed by the provided operand bytes.
    #[inline]
    pub fn emit_instruction(&mut self, opcode: OpCode, operand: &[u8]) -> &mut Self {
        self.emit_opcode(opcode);
        self.emit_bytes(operand)
    }

    /// Emits a push operation with the given data.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= MAX_DIRECT_PUSH {
            // PUSHBYTES1..PUSHBYTES75: the opcode is the length
            self.emit(len as u8);
        } else if len < 0x100 {
            self.emit_opcode(OpCode::PUSHDATA1);
            self.emit(len as u8);
        } else if len < 0x10000 {
            self.emit_opcode(OpCode::PUSHDATA2);
            self.emit_bytes(&(len as u16).to_le_bytes());
        } else {
            self.emit_opcode(OpCode::PUSHDATA4);
            self.emit_bytes(&(len as u32).to_le_bytes());
        }

        self.emit_bytes(data)
    }

    /// Emits a push operation for an integer.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_bigint(&BigInt::from(value))
    }

    /// Emits a push operation for an arbitrary precision integer.
    ///
    /// -1 and 0..=16 have dedicated opcodes; anything else is pushed as its
    /// minimal two's-complement little-endian bytes.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> &mut Self {
        if value.is_zero() {
            return self.emit_opcode(OpCode::PUSH0);
        }
        if value.is_negative() && value.abs().is_one() {
            return self.emit_opcode(OpCode::PUSHM1);
        }
        if let Some(small) = value.to_u8().filter(|v| (1..=16).contains(v)) {
            return self.emit(OpCode::PUSH1 as u8 - 1 + small);
        }

        self.emit_push(&value.to_signed_bytes_le())
    }

    /// Emits a push operation for a boolean.
    #[inline]
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSHT)
        } else {
            self.emit_opcode(OpCode::PUSHF)
        }
    }

    /// Emits a push operation for a string.
    #[inline]
    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    /// Emits a call to another contract.
    pub fn emit_app_call(&mut self, script_hash: &UInt160) -> &mut Self {
        self.emit_instruction(OpCode::APPCALL, script_hash.as_bytes())
    }

    /// Emits a pack operation.
    #[inline]
    pub fn emit_pack(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PACK)
    }

    /// Converts the builder to a script.
    pub fn to_script(&self) -> Script {
        Script::new(self.script.clone())
    }

    /// Converts the builder to a byte array.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Consumes the builder, returning the script.
    pub fn into_script(self) -> Script {
        Script::new(self.script)
    }
}
