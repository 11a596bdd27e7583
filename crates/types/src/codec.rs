// crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for generated payloads.
//!
//! This module provides simple wrappers around `parity-scale-codec` (SCALE). The
//! simulator's reproducibility guarantee is stated in terms of these bytes: the
//! same seed, snapshot and candidate accounts must yield the same encoding.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into a deterministic, canonical byte representation using SCALE codec.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from a canonical byte representation using SCALE codec.
///
/// Fails on any decoding error, including trailing bytes, returning a
/// descriptive string.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}
