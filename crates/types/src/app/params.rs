// Path: crates/types/src/app/params.rs

//! Farming module parameters visible to the simulator.

use super::coin::{Coin, Coins};
use crate::DEFAULT_BOND_DENOM;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Default fee charged for creating a private plan, in the bond denomination.
pub const DEFAULT_PRIVATE_PLAN_CREATION_FEE: u128 = 100_000_000;

/// Configuration parameters for the farming module.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// The balance an account must be able to cover before it may act as a plan creator.
    #[serde(default = "default_private_plan_creation_fee")]
    pub private_plan_creation_fee: Coins,
}

fn default_private_plan_creation_fee() -> Coins {
    Coins::from_coins([Coin::new(
        DEFAULT_BOND_DENOM,
        DEFAULT_PRIVATE_PLAN_CREATION_FEE,
    )])
}

impl Default for Params {
    fn default() -> Self {
        Self {
            private_plan_creation_fee: default_private_plan_creation_fee(),
        }
    }
}
