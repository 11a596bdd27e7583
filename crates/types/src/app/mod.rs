// Path: crates/types/src/app/mod.rs
//! Core application-level data structures for the farming module.

/// Data structures for on-chain identity: `Address` and `Account`.
pub mod account;
/// Fungible asset amounts and bundles.
pub mod coin;
/// Fixed-point decimals and decimal coin bundles.
pub mod dec;
/// Farming module parameters.
pub mod params;
/// The plan sum type and its variants.
pub mod plan;
/// Governance proposal content for public plans.
pub mod proposal;
/// Block timestamps and calendar arithmetic.
pub mod timestamp;

pub use account::{Account, Address};
pub use coin::{Coin, Coins};
pub use dec::{Dec, DecCoins};
pub use params::Params;
pub use plan::{
    first_public_plan, BasePlan, FixedAmountPlan, Plan, PlanId, PlanType, RatioPlan,
};
pub use proposal::{
    AddRequestProposal, DeleteRequestProposal, EpochPayout, PlanRequestFields, ProposalContent,
    PublicPlanProposal, UpdateRequestProposal, PROPOSAL_ROUTE, PROPOSAL_TYPE_PUBLIC_PLAN,
};
pub use timestamp::Timestamp;
