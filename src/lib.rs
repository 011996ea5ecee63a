//! Evolutionary search engines.
//!
//! Two independent engines share one generational loop shape: build a
//! random population, score it, select parents, recombine and mutate into
//! the next generation, and repeat until the fitness signal converges.
//!
//! - **Genetic Algorithm ([`ga`])**: fixed-length integer-vector
//!   chromosomes, uniform crossover, per-locus mutation. Stops when the
//!   average fitness no longer strictly increases.
//! - **Genetic Programming ([`gp`])**: binary expression trees over
//!   `+ - * /` and the digits `0..=9`. Stops when the newest average
//!   fitness reaches its trailing mean.
//!
//! Fitness is always minimized. Both engines take their randomness from
//! an injectable [`rand::Rng`] so runs can be reproduced from a seed.
//!
//! ```
//! use evosearch::ga::{GaConfig, GaRunner, Gene};
//! use evosearch::gp::{GpConfig, GpRunner, TargetFitness};
//!
//! let spread = |c: &[Gene]| c.iter().map(|&g| (g - 5).abs() as f64).sum::<f64>();
//! let ga = GaRunner::run(&spread, &GaConfig::default().with_seed(1).with_max_generations(20)).unwrap();
//! assert_eq!(ga.fittest.len(), 10);
//!
//! let gp = GpRunner::run(
//!     &TargetFitness::default(),
//!     &GpConfig::default().with_seed(1).with_max_generations(20),
//! )
//! .unwrap();
//! assert!(gp.best_fitness >= 0.0);
//! ```

pub mod breeding;
pub mod error;
pub mod ga;
pub mod gp;
pub mod random;

pub use breeding::BreedingConfig;
pub use error::{EvolveError, Result};
