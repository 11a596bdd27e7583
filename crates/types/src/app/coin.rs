// Path: crates/types/src/app/coin.rs

//! Fungible asset amounts.
//!
//! `Coins` is always kept sorted by denomination with no zero entries, so two
//! bundles holding the same assets compare and encode identically.
//!
//! Amounts travel through serde as decimal strings, since neither TOML nor
//! JSON consumers can be relied on to carry 128-bit integers. Plain integers
//! up to `u64::MAX` are accepted on input.

use parity_scale_codec::{Decode, Encode, Input};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Serde adapter for `u128` amounts: written as a decimal string, read from
/// either a string or an unsigned integer.
pub mod amount_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Writes `value` as a decimal string.
    pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Reads a decimal string or an unsigned integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum AmountInput {
            String(String),
            Number(u64),
        }

        match AmountInput::deserialize(deserializer)? {
            AmountInput::String(raw) => raw.parse::<u128>().map_err(D::Error::custom),
            AmountInput::Number(value) => Ok(u128::from(value)),
        }
    }
}

/// Returns true if `denom` is a well-formed denomination: an ASCII letter
/// followed by 2 to 127 characters from `[a-zA-Z0-9/:._-]`.
pub fn is_valid_denom(denom: &str) -> bool {
    let mut chars = denom.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (3..=128).contains(&denom.len())
        && first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}

/// A single denomination and amount.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coin {
    /// The asset denomination.
    pub denom: String,
    /// The amount in base units.
    #[serde(with = "amount_string")]
    pub amount: u128,
}

impl Coin {
    /// Creates a coin.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl core::fmt::Display for Coin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A sorted, zero-free bundle of coins.
#[derive(Encode, Clone, Debug, Default, PartialEq, Eq)]
pub struct Coins(BTreeMap<String, u128>);

impl Coins {
    /// Returns an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bundle from individual coins. Duplicate denominations are
    /// summed (saturating) and zero amounts are dropped.
    pub fn from_coins(coins: impl IntoIterator<Item = Coin>) -> Self {
        let mut map = BTreeMap::new();
        for coin in coins {
            let entry = map.entry(coin.denom).or_insert(0u128);
            *entry = entry.saturating_add(coin.amount);
        }
        map.retain(|_, amount| *amount > 0);
        Self(map)
    }

    /// Returns true if the bundle holds no assets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct denominations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the amount held of `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0.get(denom).copied().unwrap_or(0)
    }

    /// Returns the denominations in sorted order.
    pub fn denoms(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Returns the coin at `index` in denomination order.
    pub fn get(&self, index: usize) -> Option<Coin> {
        self.0
            .iter()
            .nth(index)
            .map(|(denom, amount)| Coin::new(denom.clone(), *amount))
    }

    /// Iterates over the coins in denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u128)> + '_ {
        self.0.iter().map(|(denom, amount)| (denom.as_str(), *amount))
    }

    /// Adds two bundles, returning `None` on overflow.
    pub fn checked_add(&self, other: &Coins) -> Option<Coins> {
        let mut out = self.0.clone();
        for (denom, amount) in &other.0 {
            let entry = out.entry(denom.clone()).or_insert(0);
            *entry = entry.checked_add(*amount)?;
        }
        Some(Self(out))
    }

    /// Subtracts `other` from `self`, returning `None` if any denomination
    /// would go negative.
    pub fn checked_sub(&self, other: &Coins) -> Option<Coins> {
        let mut out = self.0.clone();
        for (denom, amount) in &other.0 {
            let held = out.get(denom).copied().unwrap_or(0);
            let rest = held.checked_sub(*amount)?;
            if rest == 0 {
                out.remove(denom);
            } else {
                out.insert(denom.clone(), rest);
            }
        }
        Some(Self(out))
    }

    /// Returns true if every denomination is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.keys().all(|d| is_valid_denom(d))
    }
}

impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        Self::from_coins(iter)
    }
}

// Rejects zero amounts so decoded bundles keep the zero-free invariant.
impl Decode for Coins {
    fn decode<I: Input>(input: &mut I) -> Result<Self, parity_scale_codec::Error> {
        let map = BTreeMap::<String, u128>::decode(input)?;
        if map.values().any(|amount| *amount == 0) {
            return Err("Coins may not contain zero amounts".into());
        }
        Ok(Self(map))
    }
}

impl Serialize for Coins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(denom, amount)| (denom, amount.to_string())),
        )
    }
}

// Same zero-free rule as `Decode`, so config and JSON input cannot smuggle in
// a bundle that compares unequal to its normalized form.
impl<'de> Deserialize<'de> for Coins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(transparent)]
        struct Amount(#[serde(with = "amount_string")] u128);

        let raw = BTreeMap::<String, Amount>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (denom, Amount(amount)) in raw {
            if amount == 0 {
                return Err(D::Error::custom(format!(
                    "Coins may not contain zero amounts: {}",
                    denom
                )));
            }
            map.insert(denom, amount);
        }
        Ok(Self(map))
    }
}

impl core::fmt::Display for Coins {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (denom, amount) in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}{}", amount, denom)?;
            first = false;
        }
        Ok(())
    }
}
