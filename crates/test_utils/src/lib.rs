// Path: crates/test_utils/src/lib.rs
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

//! # Farming Test Utilities
//!
//! An in-memory chain implementing every collaborator trait the generators
//! consume, plan builders, and assertion macros.

pub mod assertions;
pub mod fixtures;

pub use fixtures::{MockChain, PlanBuilder};
