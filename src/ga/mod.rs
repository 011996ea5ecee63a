//! Fixed-length integer-vector Genetic Algorithm.
//!
//! Candidates are chromosomes of `individual_length` integer genes in
//! `[0, gene_max]`, scored by a user-supplied [`GeneFitness`] (lower is
//! better).
//!
//! # Key Types
//!
//! - [`Individual`]: a chromosome with its cached fitness; uniform
//!   per-locus crossover and per-locus mutation
//! - [`Population`]: one generation, sorted best-first, with best and
//!   average fitness
//! - [`GaConfig`]: population shape, breeding rates, seed, generation cap
//! - [`GaRunner`]: the convergence loop
//!
//! # Submodules
//!
//! - [`line_fit`]: fitting `y = slope * x + intercept` to sample points
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod individual;
pub mod line_fit;
mod population;
mod runner;
mod types;

pub use config::GaConfig;
pub use individual::Individual;
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use types::{Gene, GeneFitness};
