// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]

//! # Farming Types
//!
//! The foundational library for the farming plan simulator, containing the
//! account, coin, plan and proposal data structures, error types, and
//! configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `farming-types` is a dependency of every other crate in
//! the workspace. Collaborator traits live in `farming-api` and the proposal
//! generators in `farming-simulation`; both speak only in the types defined
//! here.

/// The bond denomination staked on the chain under simulation.
pub const DEFAULT_BOND_DENOM: &str = "stake";

/// Core application-level data structures: accounts, coins, plans and proposals.
pub mod app;
/// The canonical, deterministic binary codec used to compare generated payloads.
pub mod codec;
/// Simulation configuration, including operation weights and module parameters.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
