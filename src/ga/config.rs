//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::breeding::BreedingConfig;
use crate::error::{EvolveError, Result};
use crate::ga::types::Gene;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use evosearch::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.gene_max, 10);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evosearch::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_individual_length(2)
///     .with_gene_max(20)
///     .with_preserve_percent(0.25)
///     .with_mutation_percent(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of genes per chromosome.
    pub individual_length: usize,

    /// Inclusive upper bound of every gene.
    pub gene_max: Gene,

    /// Elitism, random extras and mutation rates.
    pub breeding: BreedingConfig,

    /// Optional cap on generations produced after generation 0.
    ///
    /// `None` keeps evolving until convergence, with no upper bound.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            individual_length: 10,
            gene_max: 10,
            breeding: BreedingConfig::default(),
            max_generations: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_individual_length(mut self, n: usize) -> Self {
        self.individual_length = n;
        self
    }

    /// Sets the inclusive gene bound.
    pub fn with_gene_max(mut self, max: Gene) -> Self {
        self.gene_max = max;
        self
    }

    /// Replaces all breeding rates at once.
    pub fn with_breeding(mut self, breeding: BreedingConfig) -> Self {
        self.breeding = breeding;
        self
    }

    /// Sets the elite fraction.
    pub fn with_preserve_percent(mut self, p: f64) -> Self {
        self.breeding = self.breeding.with_preserve_percent(p);
        self
    }

    /// Sets the random-extras fraction.
    pub fn with_non_optimal(mut self, p: f64) -> Self {
        self.breeding = self.breeding.with_non_optimal(p);
        self
    }

    /// Sets the per-locus mutation probability.
    pub fn with_mutation_percent(mut self, p: f64) -> Self {
        self.breeding = self.breeding.with_mutation_percent(p);
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Fails on an empty population, a negative gene bound, a rate outside
    /// `[0, 1]`, or rates that yield an empty or oversized parent pool.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolveError::InvalidPopulationSize(self.population_size));
        }
        if self.gene_max < 0 {
            return Err(EvolveError::NegativeGeneMax(self.gene_max));
        }
        self.breeding.validate_for(self.population_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.individual_length, 10);
        assert_eq!(config.gene_max, 10);
        assert_eq!(config.breeding, BreedingConfig::default());
        assert!(config.max_generations.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(8)
            .with_individual_length(3)
            .with_gene_max(5)
            .with_preserve_percent(0.5)
            .with_non_optimal(0.25)
            .with_mutation_percent(0.0)
            .with_max_generations(12)
            .with_seed(42);

        assert_eq!(config.population_size, 8);
        assert_eq!(config.individual_length, 3);
        assert_eq!(config.gene_max, 5);
        assert!((config.breeding.preserve_percent - 0.5).abs() < 1e-12);
        assert!((config.breeding.non_optimal - 0.25).abs() < 1e-12);
        assert!((config.breeding.mutation_percent - 0.0).abs() < 1e-12);
        assert_eq!(config.max_generations, Some(12));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(EvolveError::InvalidPopulationSize(0)));
    }

    #[test]
    fn test_validate_negative_gene_max() {
        let config = GaConfig::default().with_gene_max(-1);
        assert_eq!(config.validate(), Err(EvolveError::NegativeGeneMax(-1)));
    }

    #[test]
    fn test_validate_zero_gene_max_is_fine() {
        assert!(GaConfig::default().with_gene_max(0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_parent_pool() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_preserve_percent(0.1);
        assert_eq!(config.validate(), Err(EvolveError::EmptyParentPool));
    }

    #[test]
    fn test_validate_full_preservation() {
        let config = GaConfig::default().with_preserve_percent(1.0);
        assert!(config.validate().is_ok());
    }
}
