// Path: crates/types/src/app/dec.rs

//! Non-negative fixed-point decimals with 18 fractional digits.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of fractional digits carried by `Dec`.
pub const DEC_PRECISION: u32 = 18;

const DEC_SCALE: u128 = 10u128.pow(DEC_PRECISION);

/// A non-negative decimal stored as an integer count of 10^-18 units.
#[derive(
    Serialize,
    Deserialize,
    Encode,
    Decode,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(transparent)]
pub struct Dec(u128);

impl Dec {
    /// Zero.
    pub const ZERO: Dec = Dec(0);
    /// One.
    pub const ONE: Dec = Dec(DEC_SCALE);

    /// Builds `value * 10^-prec`. Returns `None` if `prec` exceeds
    /// `DEC_PRECISION` or the result overflows.
    pub fn with_prec(value: u64, prec: u32) -> Option<Self> {
        if prec > DEC_PRECISION {
            return None;
        }
        let factor = 10u128.pow(DEC_PRECISION - prec);
        (value as u128).checked_mul(factor).map(Self)
    }

    /// Builds `tenths / 10`.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths as u128 * (DEC_SCALE / 10))
    }

    /// Builds a whole-number decimal.
    pub fn from_int(value: u64) -> Self {
        Self(value as u128 * DEC_SCALE)
    }

    /// Returns true if the value is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the value is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl core::fmt::Display for Dec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / DEC_SCALE,
            self.0 % DEC_SCALE,
            width = DEC_PRECISION as usize
        )
    }
}

/// A sorted mapping of denomination to decimal weight.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct DecCoins(BTreeMap<String, Dec>);

impl DecCoins {
    /// Returns an empty set of weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set of weights from `(denom, weight)` pairs. Later duplicates
    /// replace earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Dec)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// A single denomination carrying the whole weight.
    pub fn single(denom: impl Into<String>, weight: Dec) -> Self {
        Self::from_pairs([(denom.into(), weight)])
    }

    /// Returns true if no weights are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the weight of `denom`, if set.
    pub fn weight_of(&self, denom: &str) -> Option<Dec> {
        self.0.get(denom).copied()
    }

    /// Returns the denominations in sorted order.
    pub fn denoms(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Iterates over `(denom, weight)` in denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Dec)> + '_ {
        self.0.iter().map(|(denom, weight)| (denom.as_str(), *weight))
    }
}
