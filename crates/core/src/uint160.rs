// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt160`, a 160-bit unsigned integer.
//!
//! Contract script hashes are `UInt160` values. The bytes are stored in
//! little-endian order, which is also the order pushed into scripts; the text
//! form is big-endian hex.

use crate::constants::ADDRESS_SIZE;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// Represents a 160-bit unsigned integer.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias matching `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Creates a new zero `UInt160`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input length is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; UINT160_SIZE] = value
            .try_into()
            .map_err(|_| CoreError::invalid_format(format!("Invalid length: {}", value.len())))?;
        Ok(Self(bytes))
    }

    /// Gets the little-endian byte representation.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Borrows the little-endian bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parses a `UInt160` from big-endian hex, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input is not exactly 40 hex digits.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(CoreError::invalid_format(format!(
                "expected {} hex characters, got {}",
                UINT160_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes =
            hex::decode(s).map_err(|e| CoreError::invalid_format(format!("Invalid hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt160` to a `0x`-prefixed big-endian hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
