//! Random source for the shuffler.
//!
//! The source pipeline drew uniform integers by rejection sampling two
//! 31-bit draws composed into 62 bits, to avoid the modulo bias of a
//! single draw. `rand`'s `StdRng` already draws full-width integers with
//! Lemire's unbiased reduction (see `Rng::gen_range`), so it is used
//! directly rather than hand-rolling the rejection loop; the PRNG choice
//! and the optional fixed seed are both recorded here for reproducibility,
//! per this pipeline's explicit invitation to substitute a modern
//! generator for the original one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds the shuffler's PRNG: seeded deterministically if `seed` is
/// given (for reproducible runs and tests), otherwise seeded from the
/// operating system's entropy source.
#[must_use]
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Shuffles `items` in place via Fisher-Yates, applied to the full
/// populated length (not `n - 1` or `n - 2`, which the source this
/// pipeline is modeled on did, leaving the last couple of records of
/// every chunk fixed).
pub fn fisher_yates<T>(items: &mut [T], rng: &mut impl Rng) {
    let n = items.len();
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
