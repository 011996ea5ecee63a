//! Core types for the integer-vector GA.
//!
//! The contract between the engine and a problem is a single fitness
//! evaluator: [`GeneFitness`] maps a chromosome to a scalar, lower being
//! better.

/// One locus value. Genes always lie in `[0, gene_max]`.
pub type Gene = i64;

/// Scores a chromosome.
///
/// Implementations must be deterministic for a fixed input, otherwise
/// population statistics stop meaning anything. Lower fitness is
/// considered better (minimization); for maximization, negate the score.
///
/// Any `Fn(&[Gene]) -> f64` is a `GeneFitness`:
///
/// ```
/// use evosearch::ga::{Gene, GeneFitness};
///
/// let negative_sum = |c: &[Gene]| -(c.iter().sum::<Gene>() as f64);
/// assert_eq!(negative_sum.evaluate(&[1, 2, 3]), -6.0);
/// ```
pub trait GeneFitness {
    /// Returns the fitness of `chromosome`.
    fn evaluate(&self, chromosome: &[Gene]) -> f64;
}

impl<F> GeneFitness for F
where
    F: Fn(&[Gene]) -> f64,
{
    fn evaluate(&self, chromosome: &[Gene]) -> f64 {
        self(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(c: &[Gene]) -> f64 {
        c.iter().sum::<Gene>() as f64
    }

    #[test]
    fn test_fn_item_is_fitness() {
        assert_eq!(total.evaluate(&[4, 5]), 9.0);
    }

    #[test]
    fn test_capturing_closure_is_fitness() {
        let target = 10.0;
        let distance = move |c: &[Gene]| (target - total(c)).abs();
        assert_eq!(distance.evaluate(&[3, 3]), 4.0);
    }
}
