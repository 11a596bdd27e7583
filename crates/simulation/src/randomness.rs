// Path: crates/simulation/src/randomness.rs
//! Deterministic randomness for reproducible simulations.
//!
//! Every draw a generator makes goes through a [`SimRng`] passed in by the
//! caller. Two runs with the same seed make the same draws in the same order
//! and therefore produce the same proposals.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seed used by [`SimRng::with_default_seed`].
pub const DEFAULT_SEED: u64 = 12345;

/// Seeded random source threaded explicitly through the generators.
pub struct SimRng {
    rng: StdRng,
}

impl SimRng {
    /// Creates a generator from a `u64` seed.
    pub fn new(seed: u64) -> Self {
        let mut seed_array = [0u8; 32];
        for (dst, src) in seed_array.iter_mut().zip(seed.to_le_bytes()) {
            *dst = src;
        }

        Self {
            rng: StdRng::from_seed(seed_array),
        }
    }

    /// Creates a generator with [`DEFAULT_SEED`].
    pub fn with_default_seed() -> Self {
        Self::new(DEFAULT_SEED)
    }

    /// Draws uniformly from `[min, max]`, both ends inclusive.
    pub fn rand_int_between<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.gen_range(min..=max)
    }

    /// Draws an index in `[0, len)`, or `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    /// Draws an unbiased boolean.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Draws an ASCII alphanumeric string of exactly `len` characters.
    pub fn rand_string_of_length(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
