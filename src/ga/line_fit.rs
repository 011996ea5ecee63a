//! Straight-line fitting with the GA.
//!
//! A two-gene chromosome `[slope, intercept]` describes the line
//! `y = slope * x + intercept`. Its fitness is the summed distance from
//! each sample point to the line's value at the same `x`.

use super::config::GaConfig;
use super::runner::GaRunner;
use super::types::Gene;
use crate::error::Result;

/// Sample points to fit a line through.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFit {
    points: Vec<(f64, f64)>,
}

/// Best line found by [`LineFit::evolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineFitResult {
    /// First gene of the fittest chromosome.
    pub slope: Gene,

    /// Second gene of the fittest chromosome.
    pub intercept: Gene,

    /// Summed point-to-line distance of the fittest line.
    pub fitness: f64,

    /// Generations bred after generation 0.
    pub generations: usize,
}

impl LineFit {
    /// Wraps `(x, y)` sample points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// The sample points, in insertion order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Summed Euclidean distance between every point and the line.
    ///
    /// Missing genes read as 0.
    pub fn distance_sum(&self, chromosome: &[Gene]) -> f64 {
        let slope = chromosome.first().copied().unwrap_or(0) as f64;
        let intercept = chromosome.get(1).copied().unwrap_or(0) as f64;
        self.points
            .iter()
            .map(|&(x, y)| distance((x, slope * x + intercept), (x, y)))
            .sum()
    }

    /// Runs the GA with two-gene chromosomes and returns the fittest line.
    ///
    /// `config.individual_length` is overridden to 2.
    pub fn evolve(&self, config: &GaConfig) -> Result<LineFitResult> {
        let config = config.clone().with_individual_length(2);
        let fitness = |c: &[Gene]| self.distance_sum(c);
        let result = GaRunner::run(&fitness, &config)?;
        Ok(LineFitResult {
            slope: result.fittest.chromosome()[0],
            intercept: result.fittest.chromosome()[1],
            fitness: result.best_fitness,
            generations: result.generations,
        })
    }
}

fn distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    ((p1.0 - p2.0).powi(2) + (p1.1 - p2.1).powi(2)).sqrt()
}
