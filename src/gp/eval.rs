//! Arithmetic evaluation of expression trees and the default fitness.
//!
//! A tree is flattened in order into an infix token stream (`2 + 3 * 4`)
//! and the stream is evaluated with the usual precedence: `*` and `/` bind
//! tighter than `+` and `-`, and operators of equal precedence associate
//! left. The tree's nesting does not group the stream; only the token
//! order matters.
//!
//! Evaluation failures are returned as [`EvalError`]. The fitness
//! boundary ([`score`]) turns any failure into [`PENALTY_FITNESS`] so the
//! generational loop always proceeds.

use super::tree::{Expr, Func, Node};
use crate::error::{EvolveError, Result};
use log::debug;
use thiserror::Error;

/// Fitness assigned to a tree whose evaluation fails.
pub const PENALTY_FITNESS: f64 = 1_000_000.0;

/// Value the default fitness steers towards.
pub const DEFAULT_TARGET: f64 = 10.0;

/// Why an expression could not be evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,

    #[error("malformed token stream at position {0}")]
    Malformed(usize),
}

/// One infix token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Num(u8),
    Op(Func),
}

/// Flattens a tree in order.
pub fn tokens(tree: &Node) -> Vec<Token> {
    let mut out = Vec::with_capacity(tree.size());
    push_node(tree, &mut out);
    out
}

fn push_node(node: &Node, out: &mut Vec<Token>) {
    push_expr(&node.left, out);
    out.push(Token::Op(node.func));
    push_expr(&node.right, out);
}

fn push_expr(expr: &Expr, out: &mut Vec<Token>) {
    match expr {
        Expr::Terminal(t) => out.push(Token::Num(*t)),
        Expr::Node(node) => push_node(node, out),
    }
}

/// The infix token stream joined by spaces, e.g. `2 + 3 * 4`.
pub fn to_infix(tree: &Node) -> String {
    tokens(tree)
        .iter()
        .map(|t| match t {
            Token::Num(n) => n.to_string(),
            Token::Op(f) => f.symbol().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evaluates a tree's infix form.
pub fn evaluate(tree: &Node) -> std::result::Result<f64, EvalError> {
    evaluate_tokens(&tokens(tree))
}

/// Evaluates an infix token stream.
pub fn evaluate_tokens(tokens: &[Token]) -> std::result::Result<f64, EvalError> {
    let mut pos = 0;
    let value = sum(tokens, &mut pos)?;
    if pos != tokens.len() {
        return Err(EvalError::Malformed(pos));
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

fn sum(tokens: &[Token], pos: &mut usize) -> std::result::Result<f64, EvalError> {
    let mut acc = product(tokens, pos)?;
    while let Some(&Token::Op(func @ (Func::Add | Func::Sub))) = tokens.get(*pos) {
        *pos += 1;
        let rhs = product(tokens, pos)?;
        acc = if func == Func::Add { acc + rhs } else { acc - rhs };
    }
    Ok(acc)
}

fn product(tokens: &[Token], pos: &mut usize) -> std::result::Result<f64, EvalError> {
    let mut acc = number(tokens, pos)?;
    while let Some(&Token::Op(func @ (Func::Mul | Func::Div))) = tokens.get(*pos) {
        *pos += 1;
        let rhs = number(tokens, pos)?;
        acc = if func == Func::Mul {
            acc * rhs
        } else if rhs == 0.0 {
            return Err(EvalError::DivisionByZero);
        } else {
            acc / rhs
        };
    }
    Ok(acc)
}

fn number(tokens: &[Token], pos: &mut usize) -> std::result::Result<f64, EvalError> {
    match tokens.get(*pos) {
        Some(&Token::Num(n)) => {
            *pos += 1;
            Ok(f64::from(n))
        }
        _ => Err(EvalError::Malformed(*pos)),
    }
}

/// Scores an expression tree. Lower is better.
///
/// Any `Fn(&Node) -> Result<f64, EvalError>` is a `TreeFitness`.
pub trait TreeFitness {
    fn evaluate(&self, tree: &Node) -> std::result::Result<f64, EvalError>;
}

impl<F> TreeFitness for F
where
    F: Fn(&Node) -> std::result::Result<f64, EvalError>,
{
    fn evaluate(&self, tree: &Node) -> std::result::Result<f64, EvalError> {
        self(tree)
    }
}

/// Relative distance to a target value: `|target - value| / |target|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFitness {
    target: f64,
}

impl TargetFitness {
    /// # Errors
    ///
    /// [`EvolveError::InvalidTarget`] for a zero or non-finite target.
    pub fn new(target: f64) -> Result<Self> {
        if target == 0.0 || !target.is_finite() {
            return Err(EvolveError::InvalidTarget(target));
        }
        Ok(Self { target })
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Default for TargetFitness {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
        }
    }
}

impl TreeFitness for TargetFitness {
    fn evaluate(&self, tree: &Node) -> std::result::Result<f64, EvalError> {
        let value = evaluate(tree)?;
        Ok((self.target - value).abs() / self.target.abs())
    }
}

/// Applies `fitness`, mapping any failure or non-finite score to
/// [`PENALTY_FITNESS`].
pub fn score<F: TreeFitness + ?Sized>(fitness: &F, tree: &Node) -> f64 {
    match fitness.evaluate(tree) {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            debug!("fitness of {tree} is {value}, using penalty");
            PENALTY_FITNESS
        }
        Err(err) => {
            debug!("fitness of {tree} failed ({err}), using penalty");
            PENALTY_FITNESS
        }
    }
}

/// The default fitness: distance to [`DEFAULT_TARGET`], penalty on failure.
pub fn default_fitness(tree: &Node) -> f64 {
    score(&TargetFitness::default(), tree)
}
