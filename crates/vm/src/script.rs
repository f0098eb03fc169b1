//! Script representation.
//!
//! A `Script` is the immutable bytecode handed to the VM. Its external text
//! form is lowercase hex with no prefix.

use crate::error::{VmError, VmResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Immutable VM bytecode.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Wraps raw bytecode.
    #[inline]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decodes script hex.
    ///
    /// # Errors
    ///
    /// Returns `VmError::MalformedScriptHex` for odd-length text or non-hex characters.
    pub fn from_hex(text: &str) -> VmResult<Self> {
        if text.len() % 2 != 0 {
            return Err(VmError::malformed_hex(format!(
                "odd number of hex digits ({})",
                text.len()
            )));
        }
        hex::decode(text)
            .map(Self)
            .map_err(|e| VmError::malformed_hex(e.to_string()))
    }

    /// Encodes the script as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Borrows the bytecode.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the script, returning the bytecode.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the script has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Script {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Script {
    type Err = VmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_is_lowercase() {
        let script = Script::from_hex("51C1ab").unwrap();
        assert_eq!(script.as_bytes(), &[0x51, 0xc1, 0xab]);
        assert_eq!(script.to_hex(), "51c1ab");
        assert_eq!(script.to_string(), "51c1ab");
    }

    #[test]
    fn test_malformed_hex() {
        assert!(matches!(
            Script::from_hex("515"),
            Err(VmError::MalformedScriptHex { .. })
        ));
        assert!(matches!(
            Script::from_hex("zz"),
            Err(VmError::MalformedScriptHex { .. })
        ));
        assert!(matches!(
            Script::from_hex("0x51"),
            Err(VmError::MalformedScriptHex { .. })
        ));
    }

    #[test]
    fn test_empty_script() {
        let script = Script::from_hex("").unwrap();
        assert!(script.is_empty());
        assert_eq!(script.to_hex(), "");
    }

    proptest! {
        #[test]
        fn test_hex_roundtrip(text in "([0-9a-fA-F]{2}){0,64}") {
            let script = Script::from_hex(&text).unwrap();
            prop_assert_eq!(script.to_hex(), text.to_lowercase());
        }
    }
}
