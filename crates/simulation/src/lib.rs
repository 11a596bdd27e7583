// Path: crates/simulation/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Farming Simulation
//!
//! Seed-driven generators of public plan governance proposals for fuzzing the
//! farming module.
//!
//! Each generator takes an explicit [`SimRng`], the current block time, the
//! harness's candidate accounts and a mutable view of chain state, and returns
//! `Ok(Some(proposal))`, `Ok(None)` when the draw cannot produce a valid
//! proposal this round, or `Err` for environment faults.

pub mod account;
pub mod contents;
pub mod funding;
pub mod gate;
pub mod proposals;
pub mod randomness;

pub use account::{random_acc, random_accounts, SimAccount};
pub use contents::{proposal_contents, select_weighted, WeightedProposalContent};
pub use proposals::{
    simulate_add_public_plan_proposal, simulate_delete_public_plan_proposal,
    simulate_update_public_plan_proposal,
};
pub use randomness::SimRng;
