// Path: crates/simulation/src/gate.rs
//! The affordability gate shared by every generator.

use farming_types::app::Coins;

/// Returns true if `spendable` covers `fee` in every denomination.
///
/// Pure and draws no randomness. An unaffordable actor is the common case and
/// makes the caller abstain, never fail.
pub fn is_affordable(spendable: &Coins, fee: &Coins) -> bool {
    spendable.checked_sub(fee).is_some()
}
