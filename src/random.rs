//! Random source helpers.
//!
//! Nothing in this crate touches a global generator: every stochastic
//! operation takes `&mut R where R: Rng`, and the runners build their
//! generator here from an explicit seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Draws a uniform integer gene in `[0, gene_max]`.
///
/// `gene_max` is validated non-negative by callers; a negative bound
/// collapses to 0.
pub fn random_gene<R: Rng>(gene_max: i64, rng: &mut R) -> i64 {
    rng.random_range(0..=gene_max.max(0))
}

/// Returns `true` with probability `p`.
///
/// Draws one uniform value in `[0, 1)` and compares it against `p`, so
/// `p = 0` never fires and `p = 1` always does.
pub fn chance<R: Rng>(p: f64, rng: &mut R) -> bool {
    rng.random_range(0.0..1.0) < p
}
