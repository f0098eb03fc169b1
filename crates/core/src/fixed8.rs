// Copyright (C) 2015-2025 The Neo Project.
//
// fixed8.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Eight-decimal fixed-point amounts.
//!
//! GAS consumption, the transaction gas field and network fees are all
//! `Fixed8` values: a signed 64-bit integer counting units of 10^-8. All fee
//! arithmetic stays in this integer domain; decimals only appear at the text
//! boundary.

use crate::constants::{FIXED8_DECIMALS, FIXED8_ONE};
use crate::error::{CoreError, CoreResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fixed-point amount with eight decimal places.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fixed8(i64);

impl Fixed8 {
    /// Zero.
    pub const ZERO: Fixed8 = Fixed8(0);

    /// One whole unit.
    pub const ONE: Fixed8 = Fixed8(FIXED8_ONE);

    /// Smallest positive amount (10^-8).
    pub const SATOSHI: Fixed8 = Fixed8(1);

    /// Largest representable amount.
    pub const MAX: Fixed8 = Fixed8(i64::MAX);

    /// Creates a value from its raw representation (units of 10^-8).
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Creates a value holding `units` whole units, saturating at the numeric bounds.
    #[inline]
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(FIXED8_ONE))
    }

    /// Returns the raw representation (units of 10^-8).
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is exactly zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts a decimal into a `Fixed8`, truncating digits past the eighth decimal place.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Overflow` if the scaled value does not fit in an `i64`.
    pub fn from_decimal(value: Decimal) -> CoreResult<Self> {
        value
            .checked_mul(Decimal::from(FIXED8_ONE))
            .and_then(|scaled| scaled.trunc().to_i64())
            .map(Self)
            .ok_or_else(|| CoreError::overflow(format!("{value} does not fit in Fixed8")))
    }

    /// Converts the amount into an exact decimal.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, FIXED8_DECIMALS)
    }

    /// Rounds up to the next whole unit; whole amounts are returned unchanged.
    ///
    /// Negative fractional amounts move toward zero.
    #[must_use]
    pub const fn ceiling(self) -> Self {
        let remainder = self.0 % FIXED8_ONE;
        if remainder == 0 {
            self
        } else if remainder > 0 {
            Self((self.0 - remainder).saturating_add(FIXED8_ONE))
        } else {
            Self(self.0 - remainder)
        }
    }

    /// Saturating subtraction.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

impl fmt::Debug for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed8({self})")
    }
}

impl FromStr for Fixed8 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| CoreError::invalid_format(format!("invalid amount '{s}': {e}")))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Fixed8 {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Fixed8> for Decimal {
    fn from(value: Fixed8) -> Self {
        value.to_decimal()
    }
}

impl Serialize for Fixed8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fixed8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
