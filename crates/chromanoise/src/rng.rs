//! Deterministic RNG construction using PCG32 with BLAKE3 seed derivation.
//!
//! The transform itself never owns randomness; callers pass a `&mut Pcg32`
//! into every invocation. This module provides the canonical way to build
//! that generator from a 32-bit seed, plus a derivation helper so that
//! independent consumers of one base seed (for example, each file in a
//! dataset pass) get independent streams.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 generator from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed from a base seed and a string key.
///
/// Uses BLAKE3 over the little-endian seed bytes concatenated with the key,
/// truncated to 32 bits. The same (seed, key) pair always yields the same
/// derived seed; distinct keys yield unrelated streams.
///
/// # Arguments
/// * `base_seed` - The caller's base seed
/// * `key` - A stable identifier for the consumer (for example a file name)
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().expect("hash is 32 bytes");
    u32::from_le_bytes(bytes)
}
