// Path: crates/types/src/app/account.rs

//! Defines the canonical `Address` and the `Account` record the simulator reads.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Length in bytes of an account address.
pub const ADDRESS_LEN: usize = 20;

/// An opaque, fixed-size account identifier.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Derives a deterministic address from a numeric seed.
    ///
    /// The seed is spread over the address bytes little-endian and the
    /// remaining bytes are filled with a fixed pattern, so distinct seeds
    /// always produce distinct addresses.
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0xA5u8; ADDRESS_LEN];
        for (dst, src) in bytes.iter_mut().zip(seed.to_le_bytes()) {
            *dst = src;
        }
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// An account known to the ledger.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// The account's address.
    pub address: Address,
    /// The ledger-assigned account number.
    pub account_number: u64,
}

impl Account {
    /// Creates a new account record.
    pub fn new(address: Address, account_number: u64) -> Self {
        Self {
            address,
            account_number,
        }
    }
}
