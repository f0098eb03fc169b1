// Copyright (C) 2015-2025 The Neo Project.
//
// attributes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes carried by invocation transactions.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Usage code of a transaction attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransactionAttributeUsage {
    /// Hash of an additional contract to verify (0x00).
    ContractHash,
    /// Public key for ECDH key exchange, even y (0x02).
    Ecdh02,
    /// Public key for ECDH key exchange, odd y (0x03).
    Ecdh03,
    /// Additional script hash that must sign the transaction (0x20).
    Script,
    /// Vote data (0x30).
    Vote,
    /// Description URL (0x81).
    DescriptionUrl,
    /// Description text (0x90).
    Description,
    /// Free-form hash slot, numbered 1 through 15 (0xa1..=0xaf).
    Hash(u8),
    /// Free-form remark slot, numbered 0 through 15 (0xf0..=0xff).
    Remark(u8),
}

impl TransactionAttributeUsage {
    /// Returns the wire code.
    #[must_use]
    pub fn to_byte(self) -> u8 {
        match self {
            Self::ContractHash => 0x00,
            Self::Ecdh02 => 0x02,
            Self::Ecdh03 => 0x03,
            Self::Script => 0x20,
            Self::Vote => 0x30,
            Self::DescriptionUrl => 0x81,
            Self::Description => 0x90,
            Self::Hash(n) => 0xa0 | (n & 0x0f),
            Self::Remark(n) => 0xf0 | (n & 0x0f),
        }
    }

    /// Decodes a wire code.
    #[must_use]
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::ContractHash),
            0x02 => Some(Self::Ecdh02),
            0x03 => Some(Self::Ecdh03),
            0x20 => Some(Self::Script),
            0x30 => Some(Self::Vote),
            0x81 => Some(Self::DescriptionUrl),
            0x90 => Some(Self::Description),
            0xa1..=0xaf => Some(Self::Hash(value & 0x0f)),
            0xf0..=0xff => Some(Self::Remark(value & 0x0f)),
            _ => None,
        }
    }
}

impl TryFrom<u8> for TransactionAttributeUsage {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value).ok_or_else(|| {
            CoreError::invalid_format(format!("unknown attribute usage 0x{value:02x}"))
        })
    }
}

impl From<TransactionAttributeUsage> for u8 {
    fn from(usage: TransactionAttributeUsage) -> Self {
        usage.to_byte()
    }
}

impl fmt::Display for TransactionAttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(n) => write!(f, "Hash{n}"),
            Self::Remark(0) => write!(f, "Remark"),
            Self::Remark(n) => write!(f, "Remark{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// An attribute attached to a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAttribute {
    /// Usage code.
    pub usage: TransactionAttributeUsage,
    /// Attribute payload.
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

impl TransactionAttribute {
    /// Creates a new attribute.
    pub fn new(usage: TransactionAttributeUsage, data: impl Into<Vec<u8>>) -> Self {
        Self {
            usage,
            data: data.into(),
        }
    }
}

/// Serde adapter storing byte payloads as lowercase hex text.
pub(crate) mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::decode(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_codes_roundtrip() {
        for code in [0x00u8, 0x02, 0x03, 0x20, 0x30, 0x81, 0x90, 0xa1, 0xaf, 0xf0, 0xff] {
            let usage = TransactionAttributeUsage::from_byte(code).unwrap();
            assert_eq!(usage.to_byte(), code);
        }
    }

    #[test]
    fn test_unknown_usage_codes() {
        assert!(TransactionAttributeUsage::from_byte(0x01).is_none());
        assert!(TransactionAttributeUsage::from_byte(0xa0).is_none());
        assert!(TransactionAttributeUsage::try_from(0x50).is_err());
    }

    #[test]
    fn test_attribute_json() {
        let attribute = TransactionAttribute::new(TransactionAttributeUsage::Remark(0), b"hi".to_vec());
        let json = serde_json::to_value(&attribute).unwrap();
        assert_eq!(json["usage"], 0xf0);
        assert_eq!(json["data"], "6869");
        assert_eq!(TransactionAttributeUsage::Remark(0).to_string(), "Remark");
    }
}
