//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives generations until the average fitness stops
//! strictly increasing from one generation to the next.

use super::config::GaConfig;
use super::individual::Individual;
use super::population::Population;
use super::types::GeneFitness;
use crate::error::Result;
use crate::random::rng_from_seed;
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest individual of the final generation.
    pub fittest: Individual,

    /// Fitness of `fittest`.
    pub best_fitness: f64,

    /// Average fitness of the final generation.
    pub avg_fitness: f64,

    /// Generations produced after generation 0.
    pub generations: usize,

    /// Whether the run stopped at `max_generations` instead of converging.
    pub capped: bool,

    /// Average fitness of every generation, generation 0 first.
    pub fitness_history: Vec<f64>,
}

impl fmt::Display for GaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fittest individual has a fitness of {}", self.best_fitness)
    }
}

/// Executes the GA evolutionary loop.
///
/// The loop compares each generation's average fitness against the
/// previous one, starting from a sentinel of `0.0`, and continues only
/// while `last < next`. It stops as soon as the newest average fails to
/// strictly exceed the previous average.
///
/// # Usage
///
/// ```
/// use evosearch::ga::{GaConfig, GaRunner, Gene};
///
/// let distance = |c: &[Gene]| (c.iter().sum::<Gene>() as f64 - 12.0).abs();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_individual_length(3)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&distance, &config).unwrap();
/// assert_eq!(result.best_fitness, result.fittest.fitness());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn run<F>(fitness: &F, config: &GaConfig) -> Result<GaResult>
    where
        F: GeneFitness + ?Sized,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(fitness, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn run_with_rng<F, R>(fitness: &F, config: &GaConfig, rng: &mut R) -> Result<GaResult>
    where
        F: GeneFitness + ?Sized,
        R: Rng,
    {
        config.validate()?;

        let mut generation = Population::from_random(
            config.population_size,
            config.individual_length,
            config.gene_max,
            fitness,
            rng,
        )?;

        let mut last_fitness = 0.0;
        let mut next_fitness = generation.avg_fitness();
        let mut fitness_history = vec![next_fitness];
        let mut generations = 0usize;
        let mut capped = false;

        while last_fitness < next_fitness {
            if config.max_generations.is_some_and(|cap| generations >= cap) {
                warn!("stopping after {generations} generations without convergence");
                capped = true;
                break;
            }

            generation = generation.new_population(&config.breeding, rng)?;
            generations += 1;
            last_fitness = next_fitness;
            next_fitness = generation.avg_fitness();
            fitness_history.push(next_fitness);

            debug!(
                "generation {generations}: avg fitness {next_fitness}, best fitness {}",
                generation.best_fitness()
            );
        }

        info!(
            "Fittest individual has a fitness of {}",
            generation.best_fitness()
        );

        Ok(GaResult {
            fittest: generation.fittest().clone(),
            best_fitness: generation.best_fitness(),
            avg_fitness: generation.avg_fitness(),
            generations,
            capped,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
