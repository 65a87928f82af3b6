//! Memory-budget planning: turns a user-facing gigabyte ceiling into the
//! concrete sizing knobs the accumulator and shuffler need.
//!
//! The accumulator's dense table is only worth bounding in terms of how
//! many *distinct context words* `N` it can hold per target word before
//! the expected number of distinct pairs for a vocabulary of that size
//! would blow the budget; that bound has no closed form, so `N` is found
//! by fixed-point iteration on the approximation that a vocabulary of `N`
//! words has about `N * (ln N + gamma)` words which occur at least once
//! as some other word's neighbor (the harmonic-number divergence of
//! `Expected[distinct pairs]`).

/// Constant in the `N * (ln N + GAMMA)` approximation of the harmonic sum
/// `Sum_{w=1..N} min(N, N/w)`. Taken as given rather than the textbook
/// Euler-Mascheroni constant (0.5772...); the approximation this pipeline
/// inherited uses this value, and the computed M is a heuristic seed, not
/// an exact bound, so the discrepancy is immaterial.
const GAMMA: f64 = 0.154_431_329_8;

const INITIAL_N: f64 = 100_000.0;
const CONVERGENCE_THRESHOLD: f64 = 1e-3;
const MAX_ITERATIONS: usize = 1000;

/// Bytes of overhead the dense table and overflow buffer must share out of
/// a gigabyte, per `SPEC_FULL.md` Sec. 4.2: the dense table gets 85%, the
/// rest is headroom for the overflow buffer and bookkeeping.
const DENSE_TABLE_SHARE: f64 = 0.85;

/// Fraction of the memory budget the shuffler's in-memory array may use,
/// per `SPEC_FULL.md` Sec. 4.3.
const SHUFFLE_ARRAY_SHARE: f64 = 0.95;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Bytes occupied by one dense-table cell (an `f64` accumulator).
const DENSE_CELL_BYTES: f64 = 8.0;

/// Sizing parameters derived from a memory budget for the co-occurrence
/// accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccumulatorMemoryPlan {
    /// Row/column extent of the dense table: pairs `(w1, w2)` with
    /// `w1 * w2 < max_product` are accumulated densely.
    pub max_product: i64,
    /// Capacity threshold at which an overflow buffer is sorted and
    /// flushed to a run file.
    pub overflow_length: usize,
}

/// Solves `N = R / (ln N + GAMMA)` by fixed-point iteration starting from
/// [`INITIAL_N`], stopping once successive iterates differ by less than
/// [`CONVERGENCE_THRESHOLD`].
fn solve_harmonic_fixed_point(target: f64) -> f64 {
    let mut n = INITIAL_N;
    for _ in 0..MAX_ITERATIONS {
        let next = target / (n.ln() + GAMMA);
        if (next - n).abs() < CONVERGENCE_THRESHOLD {
            return next;
        }
        n = next;
    }
    n
}

impl AccumulatorMemoryPlan {
    /// Derives dense-table and overflow sizing from a memory budget of
    /// `memory_limit_gib` gigabytes.
    #[must_use]
    pub fn from_budget(memory_limit_gib: f64) -> Self {
        let r = DENSE_TABLE_SHARE * memory_limit_gib * BYTES_PER_GIB / DENSE_CELL_BYTES;
        let n = solve_harmonic_fixed_point(r);
        let max_product = n.round() as i64;
        let overflow_length = (r / 6.0).round() as usize;
        Self {
            max_product,
            overflow_length,
        }
    }
}

/// Number of records the shuffler's in-memory buffer may hold, derived
/// from a memory budget of `memory_limit_gib` gigabytes and the on-disk
/// size of one record in bytes.
#[must_use]
pub fn shuffle_array_size(memory_limit_gib: f64, record_size: usize) -> usize {
    (SHUFFLE_ARRAY_SHARE * memory_limit_gib * BYTES_PER_GIB / record_size as f64).floor() as usize
}
