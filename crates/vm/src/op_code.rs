//! OpCode definitions.
//!
//! Only the opcodes emitted by call scripts are named here. The `PUSHBYTESn`
//! range (0x01..=0x4b) is not enumerated: the builder writes the length byte
//! directly.

use crate::error::VmError;
use std::fmt;

/// NeoVM opcodes used by invocation scripts.
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// Pushes an empty byte array (also `false` and `0`).
    PUSH0 = 0x00,
    /// Pushes 1 following byte.
    PUSHBYTES1 = 0x01,
    /// Pushes 75 following bytes.
    PUSHBYTES75 = 0x4B,
    /// Next byte holds the number of bytes to push.
    PUSHDATA1 = 0x4C,
    /// Next two bytes hold the number of bytes to push.
    PUSHDATA2 = 0x4D,
    /// Next four bytes hold the number of bytes to push.
    PUSHDATA4 = 0x4E,
    /// Pushes -1.
    PUSHM1 = 0x4F,
    /// Pushes 1 (also `true`).
    PUSH1 = 0x51,
    /// Pushes 2.
    PUSH2 = 0x52,
    /// Pushes 3.
    PUSH3 = 0x53,
    /// Pushes 4.
    PUSH4 = 0x54,
    /// Pushes 5.
    PUSH5 = 0x55,
    /// Pushes 6.
    PUSH6 = 0x56,
    /// Pushes 7.
    PUSH7 = 0x57,
    /// Pushes 8.
    PUSH8 = 0x58,
    /// Pushes 9.
    PUSH9 = 0x59,
    /// Pushes 10.
    PUSH10 = 0x5A,
    /// Pushes 11.
    PUSH11 = 0x5B,
    /// Pushes 12.
    PUSH12 = 0x5C,
    /// Pushes 13.
    PUSH13 = 0x5D,
    /// Pushes 14.
    PUSH14 = 0x5E,
    /// Pushes 15.
    PUSH15 = 0x5F,
    /// Pushes 16.
    PUSH16 = 0x60,

    /// Does nothing.
    NOP = 0x61,
    /// Unconditional jump.
    JMP = 0x62,
    /// Jump if true.
    JMPIF = 0x63,
    /// Jump if false.
    JMPIFNOT = 0x64,
    /// Calls a function in the current script.
    CALL = 0x65,
    /// Returns from the current context.
    RET = 0x66,
    /// Calls another contract by its 20-byte script hash operand.
    APPCALL = 0x67,

    /// Duplicates the top item.
    DUP = 0x76,

    /// Replaces an item in an array or map.
    SETITEM = 0xC4,
    /// Packs `n` items into an array.
    PACK = 0xC1,
    /// Unpacks an array onto the stack.
    UNPACK = 0xC2,
    /// Creates an array of `n` items.
    NEWARRAY = 0xC5,
    /// Creates a struct of `n` items.
    NEWSTRUCT = 0xC6,
    /// Creates an empty map.
    NEWMAP = 0xC7,
    /// Appends an item to an array.
    APPEND = 0xC8,

    /// Faults the VM.
    THROW = 0xF0,
    /// Faults the VM if the top item is false.
    THROWIFNOT = 0xF1,
}

impl OpCode {
    /// Alias of `PUSH1`.
    pub const PUSHT: OpCode = OpCode::PUSH1;
    /// Alias of `PUSH0`.
    pub const PUSHF: OpCode = OpCode::PUSH0;

    /// Returns `true` for opcodes that only push a constant or data.
    #[must_use]
    pub fn is_push(self) -> bool {
        (self as u8) <= OpCode::PUSH16 as u8
    }

    /// Decodes an opcode byte. Lengths inside the `PUSHBYTESn` range are not named.
    #[must_use]
    pub fn from_byte(value: u8) -> Option<Self> {
        use OpCode::*;
        let op = match value {
            0x00 => PUSH0,
            0x01 => PUSHBYTES1,
            0x4B => PUSHBYTES75,
            0x4C => PUSHDATA1,
            0x4D => PUSHDATA2,
            0x4E => PUSHDATA4,
            0x4F => PUSHM1,
            0x51 => PUSH1,
            0x52 => PUSH2,
            0x53 => PUSH3,
            0x54 => PUSH4,
            0x55 => PUSH5,
            0x56 => PUSH6,
            0x57 => PUSH7,
            0x58 => PUSH8,
            0x59 => PUSH9,
            0x5A => PUSH10,
            0x5B => PUSH11,
            0x5C => PUSH12,
            0x5D => PUSH13,
            0x5E => PUSH14,
            0x5F => PUSH15,
            0x60 => PUSH16,
            0x61 => NOP,
            0x62 => JMP,
            0x63 => JMPIF,
            0x64 => JMPIFNOT,
            0x65 => CALL,
            0x66 => RET,
            0x67 => APPCALL,
            0x76 => DUP,
            0xC1 => PACK,
            0xC2 => UNPACK,
            0xC4 => SETITEM,
            0xC5 => NEWARRAY,
            0xC6 => NEWSTRUCT,
            0xC7 => NEWMAP,
            0xC8 => APPEND,
            0xF0 => THROW,
            0xF1 => THROWIFNOT,
            _ => return None,
        };
        Some(op)
    }
}

impl TryFrom<u8> for OpCode {
    type Error = VmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value).ok_or(VmError::InvalidOpCode(value))
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op as u8
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
