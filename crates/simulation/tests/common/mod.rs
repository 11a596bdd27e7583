// Path: crates/simulation/tests/common/mod.rs
#![allow(dead_code)]

use farming_simulation::{random_accounts, SimAccount, SimRng};
use farming_test_utils::fixtures::stake;
use farming_test_utils::MockChain;
use farming_types::app::{Coins, Timestamp};

/// 2022-01-01T00:00:00Z
pub const BLOCK_TIME: Timestamp = Timestamp(1_640_995_200);

/// A balance comfortably above the default creation fee.
pub const RICH: u128 = 1_000_000_000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A chain with `n` accounts all holding `balance`, drawn from a setup seed
/// separate from the generator seed.
pub fn chain_with_accounts(n: usize, balance: Coins) -> (MockChain, Vec<SimAccount>) {
    let accounts = random_accounts(&mut SimRng::new(0xACC0), n);
    let mut chain = MockChain::new();
    for acc in &accounts {
        chain.add_account(acc.address, balance.clone());
    }
    (chain, accounts)
}

pub fn rich_chain(n: usize) -> (MockChain, Vec<SimAccount>) {
    chain_with_accounts(n, stake(RICH))
}

/// Every end time a generated plan may have.
pub fn allowed_end_times(start: Timestamp) -> Vec<Timestamp> {
    (1..=28).map(|m| start.add_months(m).unwrap()).collect()
}
