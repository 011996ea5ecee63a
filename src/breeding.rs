//! Parent-pool selection shared by both engines.
//!
//! A new generation is seeded with a parent pool made of two parts:
//!
//! 1. **Elites**: the `floor(n * preserve_percent)` best individuals, taken
//!    from the front of a population sorted ascending by fitness.
//! 2. **Non-optimal extras**: `floor(n * non_optimal)` individuals drawn
//!    uniformly, with replacement, from the whole population (elites
//!    included). They keep diversity in the pool.
//!
//! The pool is copied unchanged into the next generation (true elitism),
//! and the remainder is filled with offspring of parents drawn uniformly
//! from the pool.

use crate::error::{EvolveError, Result};
use rand::Rng;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rates controlling how one generation produces the next.
///
/// # Examples
///
/// ```
/// use evosearch::BreedingConfig;
///
/// let breeding = BreedingConfig::default()
///     .with_preserve_percent(0.25)
///     .with_non_optimal(0.1)
///     .with_mutation_percent(0.02);
/// assert!(breeding.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreedingConfig {
    /// Fraction of the population kept as elites (0.0–1.0).
    pub preserve_percent: f64,

    /// Fraction of the population added to the pool at random (0.0–1.0).
    pub non_optimal: f64,

    /// Per-locus (GA) or per-node (GP) mutation probability (0.0–1.0).
    pub mutation_percent: f64,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            preserve_percent: 0.2,
            non_optimal: 0.0,
            mutation_percent: 0.05,
        }
    }
}

impl BreedingConfig {
    /// Sets the elite fraction.
    pub fn with_preserve_percent(mut self, p: f64) -> Self {
        self.preserve_percent = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random-extras fraction.
    pub fn with_non_optimal(mut self, p: f64) -> Self {
        self.non_optimal = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_percent(mut self, p: f64) -> Self {
        self.mutation_percent = p.clamp(0.0, 1.0);
        self
    }

    /// Checks that every rate lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_rate("preserve_percent", self.preserve_percent)?;
        check_rate("non_optimal", self.non_optimal)?;
        check_rate("mutation_percent", self.mutation_percent)?;
        Ok(())
    }

    /// Returns `(elites, extras)` for a population of `n`.
    pub fn pool_sizes(&self, n: usize) -> (usize, usize) {
        let elites = (n as f64 * self.preserve_percent).floor() as usize;
        let extras = (n as f64 * self.non_optimal).floor() as usize;
        (elites, extras)
    }

    /// Checks that a population of `n` yields a usable parent pool.
    ///
    /// The pool must be non-empty, and must fit inside the next
    /// generation so that its size stays exactly `n`.
    pub fn validate_for(&self, n: usize) -> Result<()> {
        self.validate()?;
        let (elites, extras) = self.pool_sizes(n);
        let parents = elites + extras;
        if parents == 0 {
            return Err(EvolveError::EmptyParentPool);
        }
        if parents > n {
            return Err(EvolveError::ParentPoolOverflow {
                parents,
                population: n,
            });
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EvolveError::InvalidRate { name, value })
    }
}

/// Builds the parent pool from a population sorted best-first.
///
/// # Errors
///
/// [`EvolveError::EmptyParentPool`] when no parent is selected, and
/// [`EvolveError::ParentPoolOverflow`] when the pool would not fit in the
/// next generation.
pub fn parent_pool<T: Clone, R: Rng>(
    sorted: &[T],
    config: &BreedingConfig,
    rng: &mut R,
) -> Result<Vec<T>> {
    let n = sorted.len();
    config.validate_for(n)?;
    let (elites, extras) = config.pool_sizes(n);

    let mut pool: Vec<T> = sorted[..elites].to_vec();
    for _ in 0..extras {
        pool.push(sorted[rng.random_range(0..n)].clone());
    }
    Ok(pool)
}

/// Orders fitness values ascending (lower is better).
///
/// NaN of either sign ranks after every number, so a failed evaluation
/// can never become the fittest individual.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

/// Picks one parent uniformly, with replacement.
///
/// The pool is non-empty whenever it comes from [`parent_pool`].
pub fn pick_parent<'a, T, R: Rng>(pool: &'a [T], rng: &mut R) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}
