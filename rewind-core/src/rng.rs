//! Seeding and permutation helpers.
//!
//! Every sampler owns its generator; nothing here touches a process-wide RNG
//! unless no seed is given, in which case a fresh generator is seeded from
//! system entropy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Builds a generator from an optional seed, falling back to entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Derives an independent seed for the `stream`-th generator built from one
/// base seed, so sibling samplers configured with the same seed do not share
/// a random sequence.
pub fn derive_seed(seed: Option<u64>, stream: u64) -> Option<u64> {
    seed.map(|seed| seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

/// Returns a uniform random permutation of `0..len`.
pub fn permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Checks that `order` contains every index of `0..len` exactly once.
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        if index >= len || seen[index] {
            return false;
        }
        seen[index] = true;
    }
    true
}

#[cfg(test)]
#[path = "rng_test.rs"]
mod tests;
