// Path: crates/simulation/src/funding.rs
//! Funds a proposer with freshly minted pool coins.
//!
//! Add and update proposals reference real denominations in their epoch
//! amounts, so before composing them the proposer is credited with three pool
//! denominations plus some of the bond denomination.

use crate::randomness::SimRng;
use farming_api::BankKeeper;
use farming_types::app::{Address, Coin, Coins};
use farming_types::error::BankError;
use farming_types::DEFAULT_BOND_DENOM;

/// Pool denominations minted for proposers, in draw order.
pub const POOL_DENOMS: [&str; 3] = ["pool1", "pool2", "pool3"];

/// Lower bound of each minted amount.
pub const MIN_MINT_AMOUNT: u128 = 100_000_000_000_000;
/// Upper bound (exclusive) of each minted amount.
pub const MAX_MINT_AMOUNT: u128 = 1_000_000_000_000_000;

/// The bundle credited to a proposer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCoins {
    coins: Coins,
}

impl PoolCoins {
    /// All minted coins, bond denomination included.
    pub fn coins(&self) -> &Coins {
        &self.coins
    }

    /// Draws one of the minted pool denominations. Consumes exactly one draw.
    ///
    /// Returns `None` only if the bundle holds none of [`POOL_DENOMS`].
    pub fn random_pool_denom(&self, rng: &mut SimRng) -> Option<&'static str> {
        rng.index(POOL_DENOMS.len())
            .and_then(|i| POOL_DENOMS.get(i).copied())
            .filter(|denom| self.coins.amount_of(denom) > 0)
    }
}

/// Mints a random bundle and credits it to `address`.
///
/// Draws one amount per pool denomination, in [`POOL_DENOMS`] order, then one
/// for the bond denomination.
pub fn mint_pool_coins<B: BankKeeper + ?Sized>(
    rng: &mut SimRng,
    bank: &mut B,
    address: &Address,
) -> Result<PoolCoins, BankError> {
    let coins: Coins = POOL_DENOMS
        .iter()
        .copied()
        .chain(std::iter::once(DEFAULT_BOND_DENOM))
        .map(|denom| {
            Coin::new(
                denom,
                rng.rand_int_between(MIN_MINT_AMOUNT, MAX_MINT_AMOUNT - 1),
            )
        })
        .collect();

    bank.mint_and_credit(address, &coins)?;
    tracing::trace!(target: "farming::sim", %address, %coins, "minted pool coins");
    Ok(PoolCoins { coins })
}
