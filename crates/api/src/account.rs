// Path: crates/api/src/account.rs
//! Defines the `AccountKeeper` trait.

use farming_types::app::{Account, Address};
use farming_types::error::StateError;

/// Read access to the account store.
pub trait AccountKeeper {
    /// Looks up an account. Failing for an address drawn from a valid
    /// candidate pool is an environment fault.
    fn get_account(&self, address: &Address) -> Result<Account, StateError>;
}

impl<T: AccountKeeper + ?Sized> AccountKeeper for Box<T> {
    fn get_account(&self, address: &Address) -> Result<Account, StateError> {
        (**self).get_account(address)
    }
}
