// Path: crates/types/src/app/proposal.rs

//! Governance proposal content for adding, updating and deleting public plans.

use super::account::Address;
use super::coin::Coins;
use super::dec::{Dec, DecCoins};
use super::plan::PlanId;
use super::timestamp::Timestamp;
use crate::error::ProposalError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The router key proposals of this module are dispatched under.
pub const PROPOSAL_ROUTE: &str = "farming";
/// The proposal type string of [`PublicPlanProposal`].
pub const PROPOSAL_TYPE_PUBLIC_PLAN: &str = "PublicPlan";

/// Maximum proposal title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 140;
/// Maximum proposal description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Common accessors every governance proposal body exposes.
pub trait ProposalContent {
    /// The proposal title.
    fn title(&self) -> &str;
    /// The proposal description.
    fn description(&self) -> &str;
    /// The module router key.
    fn proposal_route(&self) -> &'static str;
    /// The proposal type string.
    fn proposal_type(&self) -> &'static str;
    /// Stateless sanity checks.
    fn validate_basic(&self) -> Result<(), ProposalError>;
}

/// How a requested plan pays out each epoch. Exactly one shape is carried.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EpochPayout {
    /// A fixed bundle per epoch.
    Amount(Coins),
    /// A fraction of the farming pool per epoch.
    Ratio(Dec),
}

impl EpochPayout {
    /// Returns the epoch amount for fixed payouts.
    pub fn epoch_amount(&self) -> Option<&Coins> {
        match self {
            EpochPayout::Amount(coins) => Some(coins),
            EpochPayout::Ratio(_) => None,
        }
    }

    /// Returns the epoch ratio for ratio payouts.
    pub fn epoch_ratio(&self) -> Option<Dec> {
        match self {
            EpochPayout::Amount(_) => None,
            EpochPayout::Ratio(ratio) => Some(*ratio),
        }
    }

    fn validate(&self) -> Result<(), ProposalError> {
        match self {
            EpochPayout::Amount(coins) => {
                if coins.is_empty() {
                    return Err(ProposalError::EmptyEpochAmount);
                }
                if !coins.is_valid() {
                    return Err(ProposalError::InvalidEpochAmount(coins.to_string()));
                }
            }
            EpochPayout::Ratio(ratio) => {
                if !ratio.is_positive() || *ratio > Dec::ONE {
                    return Err(ProposalError::InvalidEpochRatio(ratio.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// The plan fields an add or update request sets.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct PlanRequestFields {
    /// Human-readable plan name.
    pub name: String,
    /// The account rewards are paid from.
    pub farming_pool_address: Address,
    /// The account remaining funds go to once the plan terminates.
    pub termination_address: Address,
    /// Per-denomination staking coin weights.
    pub staking_coin_weights: DecCoins,
    /// Start of the distribution window.
    pub start_time: Timestamp,
    /// End of the distribution window.
    pub end_time: Timestamp,
    /// Epoch payout shape.
    pub payout: EpochPayout,
}

impl PlanRequestFields {
    fn validate(&self) -> Result<(), ProposalError> {
        if self.name.is_empty() {
            return Err(ProposalError::EmptyPlanName);
        }
        if self.staking_coin_weights.is_empty() {
            return Err(ProposalError::EmptyStakingCoinWeights);
        }
        if self
            .staking_coin_weights
            .iter()
            .any(|(denom, weight)| !super::coin::is_valid_denom(denom) || weight.is_zero())
        {
            return Err(ProposalError::InvalidStakingCoinWeights);
        }
        if self.start_time >= self.end_time {
            return Err(ProposalError::InvalidPlanWindow {
                start: self.start_time.unix_seconds(),
                end: self.end_time.unix_seconds(),
            });
        }
        self.payout.validate()
    }
}

/// A request to create a new public plan. The id is assigned on execution.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct AddRequestProposal {
    /// The requested plan.
    pub fields: PlanRequestFields,
}

/// A request to replace the mutable fields of an existing public plan.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct UpdateRequestProposal {
    /// The plan being updated.
    pub plan_id: PlanId,
    /// The replacement fields.
    pub fields: PlanRequestFields,
}

/// A request to delete an existing public plan.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequestProposal {
    /// The plan being deleted.
    pub plan_id: PlanId,
}

impl AddRequestProposal {
    /// Creates an add request.
    pub fn new(fields: PlanRequestFields) -> Self {
        Self { fields }
    }
}

impl UpdateRequestProposal {
    /// Creates an update request for `plan_id`.
    pub fn new(plan_id: PlanId, fields: PlanRequestFields) -> Self {
        Self { plan_id, fields }
    }
}

impl DeleteRequestProposal {
    /// Creates a delete request for `plan_id`.
    pub fn new(plan_id: PlanId) -> Self {
        Self { plan_id }
    }
}

/// A batch governance payload mutating the set of public plans.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct PublicPlanProposal {
    /// Proposal title.
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// Plans to create, in order.
    pub add_requests: Vec<AddRequestProposal>,
    /// Plans to update, in order.
    pub update_requests: Vec<UpdateRequestProposal>,
    /// Plans to delete, in order.
    pub delete_requests: Vec<DeleteRequestProposal>,
}

impl PublicPlanProposal {
    /// Creates a proposal from its parts.
    pub fn new(
        title: String,
        description: String,
        add_requests: Vec<AddRequestProposal>,
        update_requests: Vec<UpdateRequestProposal>,
        delete_requests: Vec<DeleteRequestProposal>,
    ) -> Self {
        Self {
            title,
            description,
            add_requests,
            update_requests,
            delete_requests,
        }
    }
}

impl ProposalContent for PublicPlanProposal {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn proposal_route(&self) -> &'static str {
        PROPOSAL_ROUTE
    }

    fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE_PUBLIC_PLAN
    }

    fn validate_basic(&self) -> Result<(), ProposalError> {
        if self.title.trim().is_empty() {
            return Err(ProposalError::EmptyTitle);
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ProposalError::TitleTooLong(MAX_TITLE_LENGTH));
        }
        if self.description.trim().is_empty() {
            return Err(ProposalError::EmptyDescription);
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ProposalError::DescriptionTooLong(MAX_DESCRIPTION_LENGTH));
        }
        if self.add_requests.is_empty()
            && self.update_requests.is_empty()
            && self.delete_requests.is_empty()
        {
            return Err(ProposalError::NoRequests);
        }
        for req in &self.add_requests {
            req.fields.validate()?;
        }
        for req in &self.update_requests {
            req.fields.validate()?;
        }
        Ok(())
    }
}
