//! VM state implementation.
//!
//! The state is a flag set, not a plain enum: an engine may report `FAULT`
//! together with `HALT` or `BREAK`, so callers must test membership with
//! [`VMState::is_fault`] rather than compare for equality.

use crate::error::VmError;
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Indicates the status of the VM.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VMState: u8 {
        /// Indicates that the execution has been completed successfully.
        const HALT = 1 << 0;

        /// Indicates that the execution has ended with an uncaught exception.
        const FAULT = 1 << 1;

        /// Indicates that a breakpoint is currently being hit.
        const BREAK = 1 << 2;
    }
}

impl VMState {
    /// Indicates that the execution is in progress or has not yet begun.
    pub const NONE: VMState = VMState::empty();

    /// No flag is set.
    #[inline]
    pub fn is_none(self) -> bool {
        self.is_empty()
    }

    /// The HALT bit is set.
    #[inline]
    pub fn is_halt(self) -> bool {
        self.contains(VMState::HALT)
    }

    /// The FAULT bit is set, whatever else is set with it.
    #[inline]
    pub fn is_fault(self) -> bool {
        self.contains(VMState::FAULT)
    }

    /// The BREAK bit is set.
    #[inline]
    pub fn is_break(self) -> bool {
        self.contains(VMState::BREAK)
    }
}

impl Default for VMState {
    fn default() -> Self {
        VMState::NONE
    }
}

impl fmt::Display for VMState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        f.write_str(&names.join(", "))
    }
}

impl FromStr for VMState {
    type Err = VmError;

    /// Accepts flag names separated by `,` or `|` (`"HALT, BREAK"`), `NONE`,
    /// or the raw numeric value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(bits) = trimmed.parse::<u8>() {
            return VMState::from_bits(bits).ok_or_else(|| {
                VmError::invalid_operation_msg(format!("unknown VM state bits: {bits}"))
            });
        }

        let mut state = VMState::NONE;
        for name in trimmed.split([',', '|']).map(str::trim) {
            let upper = name.to_ascii_uppercase();
            if upper == "NONE" {
                continue;
            }
            let flag = VMState::from_name(&upper).ok_or_else(|| {
                VmError::invalid_operation_msg(format!("unknown VM state: {name}"))
            })?;
            state |= flag;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert_eq!(VMState::NONE.bits(), 0);
        assert_eq!(VMState::HALT.bits(), 1);
        assert_eq!(VMState::FAULT.bits(), 2);
        assert_eq!(VMState::BREAK.bits(), 4);
    }

    #[test]
    fn test_fault_is_a_bit_test() {
        assert!(VMState::FAULT.is_fault());
        assert!((VMState::FAULT | VMState::HALT).is_fault());
        assert!((VMState::FAULT | VMState::BREAK).is_fault());
        assert!(!VMState::HALT.is_fault());
        assert!(!VMState::NONE.is_fault());
        assert!(VMState::NONE.is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(VMState::HALT.to_string(), "HALT");
        assert_eq!((VMState::HALT | VMState::FAULT).to_string(), "HALT, FAULT");
        assert_eq!(VMState::NONE.to_string(), "NONE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("HALT".parse::<VMState>().unwrap(), VMState::HALT);
        assert_eq!(
            "fault | break".parse::<VMState>().unwrap(),
            VMState::FAULT | VMState::BREAK
        );
        assert_eq!("HALT, FAULT".parse::<VMState>().unwrap(), VMState::HALT | VMState::FAULT);
        assert_eq!("3".parse::<VMState>().unwrap(), VMState::HALT | VMState::FAULT);
        assert_eq!("NONE".parse::<VMState>().unwrap(), VMState::NONE);
        assert!("RUNNING".parse::<VMState>().is_err());
        assert!("8".parse::<VMState>().is_err());
    }
}
