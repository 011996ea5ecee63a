//! Error types shared by both engines.

use thiserror::Error;

/// Errors raised while constructing or advancing a population.
///
/// Every variant is a precondition failure: none of them is recovered
/// internally, and no operation is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolveError {
    #[error("population size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("gene_max must be non-negative, got {0}")]
    NegativeGeneMax(i64),

    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("expected {expected} individuals, got {actual}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    #[error("parent pool is empty: preserve_percent and non_optimal select no parents")]
    EmptyParentPool,

    #[error("parent pool of {parents} exceeds population size {population}")]
    ParentPoolOverflow { parents: usize, population: usize },

    #[error("chromosome lengths differ: {left} vs {right}")]
    ChromosomeLengthMismatch { left: usize, right: usize },

    #[error("population has not been evaluated for this generation")]
    Unevaluated,

    #[error("fitness target must be finite and non-zero, got {0}")]
    InvalidTarget(f64),

    #[error("trend window must hold at least one value")]
    InvalidTrendWindow,
}

pub type Result<T> = std::result::Result<T, EvolveError>;
