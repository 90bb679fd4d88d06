//! Randomness primitives driving every probabilistic decision in wordmash.
//!
//! Two operations: a both-ends-inclusive bounded integer draw, and a weighted
//! one-in-N coin. Everything is generic over [`rand::Rng`] so callers can
//! inject a seeded [`SmallRng`](rand::rngs::SmallRng) for reproducible runs
//! and deterministic tests.

use mash_core::{MashError, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Largest accepted denominator for [`one_in_n_chance`].
pub const MAX_CHANCE_DENOMINATOR: u32 = 100;

/// Uniform integer in `[min, max]`, both ends inclusive.
///
/// Callers guarantee `min <= max`; the bound is debug-asserted rather than
/// surfaced as an error because every call site establishes it structurally
/// from a known string length.
pub fn random_int_inclusive<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
    debug_assert!(min <= max, "random_int_inclusive: min {min} > max {max}");
    rng.random_range(min..=max)
}

/// True with probability exactly 1/n.
///
/// Valid domain is `1..=100`; anything else is an `InvalidArgument`. `n == 1`
/// is always true.
///
/// Implemented by shuffling a collection of `n` flags containing exactly one
/// `true` and reading the first element. The uniform shuffle makes each call
/// exactly 1/n rather than an approximation, which matters because the
/// decoration chances compound (a 1-in-4 gate nested inside a 1-in-2 gate).
pub fn one_in_n_chance<R: Rng>(rng: &mut R, n: u32) -> Result<bool> {
    if n < 1 || n > MAX_CHANCE_DENOMINATOR {
        return Err(MashError::InvalidArgument {
            parameter: "n",
            constraint: "1 <= n <= 100",
            value: n.to_string(),
        });
    }

    let mut flags = vec![false; n as usize];
    flags[0] = true;
    flags.shuffle(rng);
    Ok(flags[0])
}
