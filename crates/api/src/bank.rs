// Path: crates/api/src/bank.rs
//! Defines the `BankKeeper` trait.

use farming_types::app::{Address, Coins};
use farming_types::error::BankError;

/// Balance queries plus the simulation-only mint hook.
pub trait BankKeeper {
    /// Returns the balance of `address` that is not locked or vesting.
    fn spendable_coins(&self, address: &Address) -> Coins;

    /// Mints `coins` into existence and credits them to `address`.
    ///
    /// Only simulations call this. Implementations must leave balances
    /// untouched when they return an error.
    fn mint_and_credit(&mut self, address: &Address, coins: &Coins) -> Result<(), BankError>;
}

impl<T: BankKeeper + ?Sized> BankKeeper for Box<T> {
    fn spendable_coins(&self, address: &Address) -> Coins {
        (**self).spendable_coins(address)
    }

    fn mint_and_credit(&mut self, address: &Address, coins: &Coins) -> Result<(), BankError> {
        (**self).mint_and_credit(address, coins)
    }
}
