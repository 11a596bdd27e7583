// Path: crates/simulation/src/account.rs
//! Candidate actors supplied by the harness.

use crate::randomness::SimRng;
use farming_types::app::account::ADDRESS_LEN;
use farming_types::app::Address;
use farming_types::error::SimulationError;
use farming_types::prelude::OptionExt;
use rand::RngCore;

/// An account the harness controls and may draw as a proposer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimAccount {
    /// The account's address.
    pub address: Address,
}

impl SimAccount {
    /// Wraps an address.
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

/// Generates `n` accounts with random addresses.
pub fn random_accounts(rng: &mut SimRng, n: usize) -> Vec<SimAccount> {
    (0..n)
        .map(|_| {
            let mut bytes = [0u8; ADDRESS_LEN];
            rng.fill_bytes(&mut bytes);
            SimAccount::new(Address(bytes))
        })
        .collect()
}

/// Picks one account uniformly at random. Consumes exactly one draw.
pub fn random_acc<'a>(
    rng: &mut SimRng,
    accounts: &'a [SimAccount],
) -> Result<&'a SimAccount, SimulationError> {
    rng.index(accounts.len())
        .and_then(|i| accounts.get(i))
        .required(SimulationError::EmptyAccountPool)
}
