// Path: crates/api/src/lib.rs

//! # Farming API Crate Lints
//!
//! Panics are disallowed in non-test code to promote robust error handling.
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
//! # Farming API
//!
//! The collaborator traits the proposal generators consume. Concrete ledgers,
//! and the in-memory test double in `farming-test-utils`, implement them.

/// Account lookup.
pub mod account;
/// Balance queries and the simulation-only funding hook.
pub mod bank;
/// Farming module parameter and plan queries.
pub mod farming;

pub use account::AccountKeeper;
pub use bank::BankKeeper;
pub use farming::FarmingKeeper;

/// Everything a proposal generator needs from chain state.
///
/// Blanket-implemented for any type providing the three keeper traits.
pub trait SimState: AccountKeeper + BankKeeper + FarmingKeeper {}

impl<T: AccountKeeper + BankKeeper + FarmingKeeper + ?Sized> SimState for T {}

/// A curated set of the most commonly used traits.
pub mod prelude {
    pub use crate::{AccountKeeper, BankKeeper, FarmingKeeper, SimState};
}
