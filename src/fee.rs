//! Network fee derivation from dry-run GAS usage.
//!
//! All arithmetic stays in [`Fixed8`]; there is no floating point anywhere on
//! this path.

use neo_invoke_config::FeeSettings;
use neo_invoke_core::Fixed8;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GAS to attach to the draft and the fee shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeePlan {
    /// Whole units of GAS beyond the free allowance.
    pub gas: Fixed8,
    /// Fee the user pays for this invocation.
    pub network_fee: Fixed8,
}

/// Derives fees from consumed GAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimator {
    min_network_fee: Fixed8,
    free_gas_allowance: Fixed8,
}

impl FeeEstimator {
    /// Creates an estimator with explicit constants.
    pub const fn new(min_network_fee: Fixed8, free_gas_allowance: Fixed8) -> Self {
        Self {
            min_network_fee,
            free_gas_allowance,
        }
    }

    /// Creates an estimator from configured fee settings.
    pub fn from_settings(settings: &FeeSettings) -> Self {
        Self::new(settings.min_network_fee, settings.free_gas_allowance)
    }

    /// Fee charged when no GAS is paid.
    pub fn min_network_fee(&self) -> Fixed8 {
        self.min_network_fee
    }

    /// GAS consumed free of charge.
    pub fn free_gas_allowance(&self) -> Fixed8 {
        self.free_gas_allowance
    }

    /// Prices a dry run.
    ///
    /// `existing_gas` is the draft's gas field before this run. The minimum
    /// network fee is only charged when that field is zero and the run itself
    /// stays within the free allowance.
    pub fn estimate(&self, gas_consumed: Fixed8, existing_gas: Fixed8) -> FeePlan {
        let baseline = if existing_gas.is_zero() {
            self.min_network_fee
        } else {
            Fixed8::ZERO
        };

        let mut gas = gas_consumed.saturating_sub(self.free_gas_allowance);
        if gas.is_negative() {
            gas = Fixed8::ZERO;
        }
        let gas = gas.ceiling();

        let network_fee = if gas.is_zero() { baseline } else { gas };

        debug!(%gas_consumed, %existing_gas, %gas, %network_fee, "estimated fee");
        FeePlan { gas, network_fee }
    }

    /// Fee to hand to the signer along with a draft carrying `draft_gas`.
    pub fn handoff_fee(&self, draft_gas: Fixed8) -> Fixed8 {
        if draft_gas.is_zero() {
            self.min_network_fee
        } else {
            Fixed8::ZERO
        }
    }
}

impl Default for FeeEstimator {
    fn default() -> Self {
        Self::from_settings(&FeeSettings::default())
    }
}
