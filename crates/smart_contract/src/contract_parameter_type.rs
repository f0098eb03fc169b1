//! ContractParameterType - the declared kind of a contract argument.

use crate::error::ContractError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Raw code that older contract records use for arrays.
pub const LEGACY_ARRAY_CODE: u8 = 22;

/// Represents the type of a ContractParameter.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractParameterType {
    /// Indicates that the parameter is a signature
    Signature = 0x00,

    /// Indicates that the parameter is of Boolean type
    Boolean = 0x01,

    /// Indicates that the parameter is an integer
    Integer = 0x02,

    /// Indicates that the parameter is a 160-bit hash
    Hash160 = 0x03,

    /// Indicates that the parameter is a 256-bit hash
    Hash256 = 0x04,

    /// Indicates that the parameter is a byte array
    ByteArray = 0x05,

    /// Indicates that the parameter is a public key
    PublicKey = 0x06,

    /// Indicates that the parameter is a string
    String = 0x07,

    /// Indicates that the parameter is an array
    Array = 0x10,

    /// Indicates that the parameter is an interoperable interface
    InteropInterface = 0xf0,

    /// It can be only used as the return type of a method, meaning that the method has no return value
    Void = 0xff,
}

impl ContractParameterType {
    /// Returns the canonical name for this parameter type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::String => "String",
            ContractParameterType::Array => "Array",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_string(s: &str) -> Result<Self, ContractError> {
        match s.to_lowercase().as_str() {
            "signature" => Ok(ContractParameterType::Signature),
            "boolean" | "bool" => Ok(ContractParameterType::Boolean),
            "integer" | "int" => Ok(ContractParameterType::Integer),
            "hash160" => Ok(ContractParameterType::Hash160),
            "hash256" => Ok(ContractParameterType::Hash256),
            "bytearray" | "bytes" => Ok(ContractParameterType::ByteArray),
            "publickey" => Ok(ContractParameterType::PublicKey),
            "string" => Ok(ContractParameterType::String),
            "array" => Ok(ContractParameterType::Array),
            "interopinterface" => Ok(ContractParameterType::InteropInterface),
            "void" => Ok(ContractParameterType::Void),
            _ => Err(ContractError::InvalidRecord(format!(
                "unknown contract parameter type: {s}"
            ))),
        }
    }

    /// Try to convert from u8 value
    pub fn try_from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(ContractParameterType::Signature),
            0x01 => Some(ContractParameterType::Boolean),
            0x02 => Some(ContractParameterType::Integer),
            0x03 => Some(ContractParameterType::Hash160),
            0x04 => Some(ContractParameterType::Hash256),
            0x05 => Some(ContractParameterType::ByteArray),
            0x06 => Some(ContractParameterType::PublicKey),
            0x07 => Some(ContractParameterType::String),
            0x10 => Some(ContractParameterType::Array),
            0xf0 => Some(ContractParameterType::InteropInterface),
            0xff => Some(ContractParameterType::Void),
            _ => None,
        }
    }

    /// Decodes a code from a contract record, mapping the legacy array code to `Array`.
    pub fn from_declared(value: u8) -> Result<Self, ContractError> {
        if value == LEGACY_ARRAY_CODE {
            return Ok(ContractParameterType::Array);
        }
        Self::try_from_u8(value).ok_or(ContractError::UnknownParameterType(value))
    }

    /// Returns `true` for kinds that can be pushed into a call script.
    pub fn is_encodable(&self) -> bool {
        !matches!(
            self,
            ContractParameterType::InteropInterface | ContractParameterType::Void
        )
    }
}

impl std::fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContractParameterType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for ContractParameterType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContractParameterType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ContractParameterType::from_string(&value).map_err(serde::de::Error::custom)
    }
}
