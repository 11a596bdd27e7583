// Path: crates/types/src/app/plan.rs

//! Farming plans.
//!
//! A plan is a closed sum of two payout shapes sharing a common base record.
//! Plans are created and destroyed by the execution layer; the simulator only
//! reads them from a snapshot.

use super::account::Address;
use super::coin::Coins;
use super::dec::{Dec, DecCoins};
use super::timestamp::Timestamp;
use parity_scale_codec::{Decode, Encode, Input, Output};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// The identifier of an existing plan. Zero is not a valid id.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct PlanId(NonZeroU64);

impl PlanId {
    /// Returns `None` for zero.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    /// Returns the numeric id.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Encode for PlanId {
    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.get().encode_to(dest);
    }
}

impl Decode for PlanId {
    fn decode<I: Input>(input: &mut I) -> Result<Self, parity_scale_codec::Error> {
        let raw = u64::decode(input)?;
        Self::new(raw).ok_or_else(|| "PlanId may not be zero".into())
    }
}

impl core::fmt::Display for PlanId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who created a plan.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanType {
    /// Created through governance.
    Public,
    /// Created by an individual account paying the creation fee.
    Private,
}

/// Fields shared by every plan variant.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct BasePlan {
    /// The plan id.
    pub id: PlanId,
    /// Human-readable name.
    pub name: String,
    /// Public or private visibility.
    pub plan_type: PlanType,
    /// The account rewards are paid from.
    pub farming_pool_address: Address,
    /// The account remaining funds go to once the plan terminates.
    pub termination_address: Address,
    /// Per-denomination weights of the staking coins the plan rewards.
    pub staking_coin_weights: DecCoins,
    /// Start of the distribution window.
    pub start_time: Timestamp,
    /// End of the distribution window.
    pub end_time: Timestamp,
}

/// A plan paying a fixed bundle of coins each epoch.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct FixedAmountPlan {
    /// Common plan fields.
    pub base: BasePlan,
    /// Coins distributed per epoch.
    pub epoch_amount: Coins,
}

/// A plan paying a fraction of the farming pool each epoch.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct RatioPlan {
    /// Common plan fields.
    pub base: BasePlan,
    /// Fraction of the pool distributed per epoch.
    pub epoch_ratio: Dec,
}

/// A farming plan.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Plan {
    /// See [`FixedAmountPlan`].
    FixedAmount(FixedAmountPlan),
    /// See [`RatioPlan`].
    Ratio(RatioPlan),
}

impl Plan {
    /// Returns the shared base record.
    pub fn base(&self) -> &BasePlan {
        match self {
            Plan::FixedAmount(p) => &p.base,
            Plan::Ratio(p) => &p.base,
        }
    }

    /// Returns the plan id.
    pub fn id(&self) -> PlanId {
        self.base().id
    }

    /// Returns the plan's visibility.
    pub fn plan_type(&self) -> PlanType {
        self.base().plan_type
    }

    /// Returns true for governance-created plans.
    pub fn is_public(&self) -> bool {
        self.plan_type() == PlanType::Public
    }
}

/// Returns the first public plan in `plans`, in the order given.
pub fn first_public_plan(plans: &[Plan]) -> Option<&Plan> {
    plans.iter().find(|p| p.is_public())
}
