//! GP configuration.

use crate::breeding::BreedingConfig;
use crate::error::{EvolveError, Result};
use crate::gp::trend::TREND_WINDOW;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for Genetic Programming.
///
/// # Defaults
///
/// ```
/// use evosearch::gp::GpConfig;
///
/// let config = GpConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_depth, 3);
/// assert_eq!(config.trend_window, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpConfig {
    /// Number of trees in every generation.
    pub population_size: usize,

    /// Depth limit for the subtrees of a freshly generated tree.
    pub max_depth: usize,

    /// Elitism, random extras and mutation rates.
    pub breeding: BreedingConfig,

    /// Depth limit for subtrees grown by the insert operator.
    pub insert_depth: usize,

    /// Number of generations in the trailing average.
    pub trend_window: usize,

    /// Optional cap on generations after the bootstrap phase.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GpConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_depth: 3,
            breeding: BreedingConfig::default(),
            insert_depth: 3,
            trend_window: TREND_WINDOW,
            max_generations: None,
            seed: None,
        }
    }
}

impl GpConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the depth limit for freshly generated subtrees.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
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

    /// Sets the probability used by every tree mutation operator.
    pub fn with_mutation_percent(mut self, p: f64) -> Self {
        self.breeding = self.breeding.with_mutation_percent(p);
        self
    }

    /// Sets the depth limit for subtrees grown by insertion.
    pub fn with_insert_depth(mut self, depth: usize) -> Self {
        self.insert_depth = depth;
        self
    }

    /// Sets the number of generations in the trailing average.
    pub fn with_trend_window(mut self, window: usize) -> Self {
        self.trend_window = window;
        self
    }

    /// Caps the number of generations after the bootstrap.
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
    /// Fails on an empty population, a zero trend window, or breeding
    /// rates that are out of range or yield an unusable parent pool.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolveError::InvalidPopulationSize(self.population_size));
        }
        if self.trend_window == 0 {
            return Err(EvolveError::InvalidTrendWindow);
        }
        self.breeding.validate_for(self.population_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GpConfig::default();
        assert_eq!(config.insert_depth, 3);
        assert_eq!(config.breeding, BreedingConfig::default());
        assert!(config.max_generations.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GpConfig::default()
            .with_population_size(30)
            .with_max_depth(2)
            .with_insert_depth(1)
            .with_trend_window(3)
            .with_preserve_percent(0.3)
            .with_non_optimal(0.1)
            .with_mutation_percent(0.2)
            .with_max_generations(40)
            .with_seed(42);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.insert_depth, 1);
        assert_eq!(config.trend_window, 3);
        assert!((config.breeding.mutation_percent - 0.2).abs() < 1e-12);
        assert_eq!(config.max_generations, Some(40));
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_errors() {
        assert_eq!(
            GpConfig::default().with_population_size(0).validate(),
            Err(EvolveError::InvalidPopulationSize(0))
        );
        assert_eq!(
            GpConfig::default().with_trend_window(0).validate(),
            Err(EvolveError::InvalidTrendWindow)
        );
        assert_eq!(
            GpConfig::default()
                .with_population_size(3)
                .with_preserve_percent(0.2)
                .validate(),
            Err(EvolveError::EmptyParentPool)
        );
    }
}
