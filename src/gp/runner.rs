//! GP evolutionary loop execution.
//!
//! [`GpRunner`] smooths the per-generation average fitness with a
//! [`TrendBuffer`] and keeps evolving while the newest average stays below
//! the trailing mean.

use super::config::GpConfig;
use super::eval::TreeFitness;
use super::individual::Individual;
use super::population::Population;
use super::trend::TrendBuffer;
use crate::error::Result;
use crate::random::rng_from_seed;
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;

/// Result of a GP run.
#[derive(Debug, Clone)]
pub struct GpResult {
    /// The final, evaluated generation.
    pub population: Population,

    /// The fittest tree of the final generation.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Most recent value pushed into the trend window.
    pub latest_trend_fitness: f64,

    /// New generations bred, bootstrap included.
    pub generations: usize,

    /// Whether the run stopped at `max_generations` instead of converging.
    pub capped: bool,

    /// Average fitness of every evaluated generation, in order.
    pub fitness_history: Vec<f64>,
}

impl fmt::Display for GpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fittest individual has a fitness of {}", self.best_fitness)?;
        write!(
            f,
            "Population has an average fitness of {}",
            self.latest_trend_fitness
        )
    }
}

/// Executes the GP evolutionary loop.
///
/// 1. Bootstrap: `trend_window` times, evaluate the current generation,
///    push its average into the zero-filled window and breed the next one.
/// 2. Evaluate the generation left by the bootstrap and compare its
///    average against the window mean. This value is not pushed.
/// 3. While the newest average is below the trailing mean, breed,
///    evaluate, push and recompute the mean.
///
/// `max_generations` caps the iterations of step 3 only.
///
/// # Usage
///
/// ```
/// use evosearch::gp::{GpConfig, GpRunner, TargetFitness};
///
/// let config = GpConfig::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GpRunner::run(&TargetFitness::default(), &config).unwrap();
/// assert_eq!(result.population.len(), 30);
/// assert!(result.generations >= config.trend_window);
/// ```
pub struct GpRunner;

impl GpRunner {
    /// Runs GP with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn run<F>(fitness: &F, config: &GpConfig) -> Result<GpResult>
    where
        F: TreeFitness + ?Sized,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(fitness, config, &mut rng)
    }

    /// Runs GP drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn run_with_rng<F, R>(fitness: &F, config: &GpConfig, rng: &mut R) -> Result<GpResult>
    where
        F: TreeFitness + ?Sized,
        R: Rng,
    {
        config.validate()?;

        let mut generation = Population::from_random(config.population_size, config.max_depth, rng)?;
        let mut window = TrendBuffer::new(config.trend_window)?;
        let mut fitness_history = Vec::new();
        let mut generations = 0usize;

        for _ in 0..config.trend_window {
            let avg = generation.eval(fitness);
            window.push(avg);
            fitness_history.push(avg);
            generation = generation.new_population(&config.breeding, config.insert_depth, rng)?;
            generations += 1;
            debug!("bootstrap generation {generations}: avg fitness {avg}");
        }

        let mut trailing = window.mean();
        let mut next_fitness = generation.eval(fitness);
        fitness_history.push(next_fitness);
        let mut loop_generations = 0usize;
        let mut capped = false;

        while next_fitness < trailing {
            if config.max_generations.is_some_and(|cap| loop_generations >= cap) {
                warn!("stopping after {loop_generations} generations past bootstrap without convergence");
                capped = true;
                break;
            }

            generation = generation.new_population(&config.breeding, config.insert_depth, rng)?;
            generations += 1;
            loop_generations += 1;
            next_fitness = generation.eval(fitness);
            window.push(next_fitness);
            fitness_history.push(next_fitness);
            trailing = window.mean();

            debug!("generation {generations}: avg fitness {next_fitness}, trailing mean {trailing}");
        }

        let best = generation.fittest()?.clone();
        let best_fitness = best.fitness().unwrap_or(f64::INFINITY);
        let latest_trend_fitness = window.latest();

        info!("Fittest individual has a fitness of {best_fitness}");
        info!("Population has an average fitness of {latest_trend_fitness}");

        Ok(GpResult {
            population: generation,
            best,
            best_fitness,
            latest_trend_fitness,
            generations,
            capped,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvolveError;
    use crate::gp::eval::{EvalError, TargetFitness};
    use crate::gp::tree::Node;
    use crate::random::create_rng;

    fn constant(_: &Node) -> std::result::Result<f64, EvalError> {
        Ok(1.0)
    }

    #[test]
    fn test_constant_fitness_stops_after_bootstrap() {
        // Window mean is 1.0 after five pushes of 1.0; 1.0 < 1.0 is false.
        let config = GpConfig::default().with_population_size(10).with_seed(42);
        let result = GpRunner::run(&constant, &config).unwrap();
        assert_eq!(result.generations, 5);
        assert!(!result.capped);
        assert_eq!(result.fitness_history, vec![1.0; 6]);
        assert_eq!(result.latest_trend_fitness, 1.0);
        assert_eq!(result.best_fitness, 1.0);
    }

    #[test]
    fn test_result_is_evaluated_and_sorted() {
        let config = GpConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_seed(42);
        let result = GpRunner::run(&TargetFitness::default(), &config).unwrap();

        assert!(result.population.is_evaluated());
        assert_eq!(result.best.fitness(), Some(result.best_fitness));
        assert_eq!(result.population.fittest().unwrap(), &result.best);
        let values: Vec<f64> = result
            .population
            .iter()
            .map(|ind| ind.fitness().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.fitness_history.len(), result.generations + 1);
    }

    #[test]
    fn test_stop_condition_holds_when_not_capped() {
        let config = GpConfig::default()
            .with_population_size(20)
            .with_max_generations(200)
            .with_seed(3);
        let result = GpRunner::run(&TargetFitness::default(), &config).unwrap();
        if !result.capped {
            let h = &result.fitness_history;
            let last = h[h.len() - 1];
            // The sixth average is compared but never pushed.
            let pushed: Vec<f64> = h
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != 5)
                .map(|(_, v)| *v)
                .collect();
            let mean = pushed[pushed.len() - 5..].iter().sum::<f64>() / 5.0;
            assert!(last >= mean, "{last} < {mean}");
        }
    }

    #[test]
    fn test_generation_cap() {
        // A fitness that drops every generation never reaches the mean.
        let counter = std::cell::Cell::new(0u64);
        let falling = |_: &Node| -> std::result::Result<f64, EvalError> {
            counter.set(counter.get() + 1);
            Ok(-(counter.get() as f64))
        };
        let config = GpConfig::default()
            .with_population_size(4)
            .with_preserve_percent(0.5)
            .with_max_generations(3)
            .with_seed(1);
        let result = GpRunner::run(&falling, &config).unwrap();
        assert!(result.capped);
        assert_eq!(result.generations, 5 + 3);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = GpConfig::default().with_trend_window(0);
        assert_eq!(
            GpRunner::run(&constant, &config).unwrap_err(),
            EvolveError::InvalidTrendWindow
        );
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        let config = GpConfig::default()
            .with_population_size(12)
            .with_max_generations(20);
        let fitness = TargetFitness::default();
        let a = GpRunner::run_with_rng(&fitness, &config, &mut create_rng(9)).unwrap();
        let b = GpRunner::run_with_rng(&fitness, &config, &mut create_rng(9)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_summary_lines() {
        let config = GpConfig::default().with_population_size(5).with_seed(5);
        let result = GpRunner::run(&constant, &config).unwrap();
        assert_eq!(
            result.to_string(),
            "Fittest individual has a fitness of 1\nPopulation has an average fitness of 1"
        );
    }
}
