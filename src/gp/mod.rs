//! Genetic Programming over binary arithmetic expression trees.
//!
//! Programs are trees whose internal nodes are `+ - * /` and whose leaves
//! are the digits `0..=9`. Fitness is supplied by a [`TreeFitness`]
//! (lower is better); the default, [`TargetFitness`], measures the
//! relative distance of the expression's value to 10.
//!
//! # Key Types
//!
//! - [`Node`] / [`Expr`]: the tree representation
//! - [`Individual`]: a tree with its per-generation fitness and the
//!   mutation, insert, prune and crossover operators
//! - [`Population`]: one generation; evaluated and sorted on demand
//! - [`TrendBuffer`]: the trailing window of average fitness
//! - [`GpConfig`] / [`GpRunner`]: configuration and the convergence loop
//!
//! # References
//!
//! - Koza (1992), *Genetic Programming: On the Programming of Computers
//!   by Means of Natural Selection*

mod config;
pub mod eval;
mod individual;
mod population;
mod runner;
pub mod tree;
mod trend;

pub use config::GpConfig;
pub use eval::{default_fitness, to_infix, EvalError, TargetFitness, TreeFitness, PENALTY_FITNESS};
pub use individual::Individual;
pub use population::Population;
pub use runner::{GpResult, GpRunner};
pub use tree::{build_tree, Expr, Func, Node};
pub use trend::{TrendBuffer, TREND_WINDOW};
