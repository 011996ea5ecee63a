//! GP individual: an expression tree and its per-generation fitness.

use super::eval::{score, TreeFitness};
use super::tree::{random_terminal, Expr, Func, Node};
use crate::breeding::compare_fitness;
use crate::random::chance;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// A candidate program.
///
/// The root is always an operator. Fitness is not computed at
/// construction: it is `None` until [`eval`](Individual::eval) runs for
/// the current generation, and every structural operator clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    tree: Node,
    fitness: Option<f64>,
}

impl Individual {
    /// A random operator root with two subtrees of at most `max_depth`
    /// operator levels each.
    pub fn from_random<R: Rng>(max_depth: usize, rng: &mut R) -> Self {
        Self::from_tree(Node::random(max_depth, rng))
    }

    /// Wraps an existing tree, unevaluated.
    pub fn from_tree(tree: Node) -> Self {
        Self {
            tree,
            fitness: None,
        }
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn into_tree(self) -> Node {
        self.tree
    }

    /// Fitness for the current generation, if evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Scores the tree and caches the result.
    ///
    /// Evaluation failures yield
    /// [`PENALTY_FITNESS`](super::eval::PENALTY_FITNESS).
    pub fn eval<F: TreeFitness + ?Sized>(&mut self, fitness: &F) -> f64 {
        let value = score(fitness, &self.tree);
        self.fitness = Some(value);
        value
    }

    pub(crate) fn clear_fitness(&mut self) {
        self.fitness = None;
    }

    /// Orders by fitness ascending; unevaluated individuals sort last.
    pub fn compare(&self, other: &Individual) -> Ordering {
        compare_fitness(
            self.fitness.unwrap_or(f64::INFINITY),
            other.fitness.unwrap_or(f64::INFINITY),
        )
    }

    /// Terminal mutation followed by function mutation.
    pub fn mutate<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        self.mutate_terms(probability, rng);
        self.mutate_funcs(probability, rng);
    }

    /// Replaces each terminal with a fresh one with probability `probability`.
    pub fn mutate_terms<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        mutate_terms(&mut self.tree, probability, rng);
        self.fitness = None;
    }

    /// Replaces each operator's symbol with probability `probability`.
    pub fn mutate_funcs<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        mutate_funcs(&mut self.tree, probability, rng);
        self.fitness = None;
    }

    /// Grows new subtrees.
    ///
    /// At each operator, with probability `probability` one child (fair
    /// coin) is replaced by a fresh operator whose subtrees have at most
    /// `depth` levels, and only the other child is visited further.
    /// Otherwise both children are visited.
    pub fn insert<R: Rng>(&mut self, probability: f64, depth: usize, rng: &mut R) {
        insert(&mut self.tree, probability, depth, rng);
        self.fitness = None;
    }

    /// Collapses subtrees to terminals.
    ///
    /// At each operator, with probability `probability` one child (fair
    /// coin) is replaced by a random terminal. Both children are then
    /// visited.
    pub fn prune<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        prune(&mut self.tree, probability, rng);
        self.fitness = None;
    }

    /// Swaps the left or right subtree (fair coin) of the two roots.
    ///
    /// Both children own deep copies of their trees; neither shares
    /// structure with a parent.
    pub fn crossover<R: Rng>(&self, other: &Individual, rng: &mut R) -> [Individual; 2] {
        let mut tree1 = self.tree.clone();
        let mut tree2 = other.tree.clone();
        if rng.random_range(0..2) == 0 {
            std::mem::swap(&mut tree1.left, &mut tree2.left);
        } else {
            std::mem::swap(&mut tree1.right, &mut tree2.right);
        }
        [Individual::from_tree(tree1), Individual::from_tree(tree2)]
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

fn mutate_terms<R: Rng>(node: &mut Node, p: f64, rng: &mut R) {
    for child in [&mut node.left, &mut node.right] {
        if let Expr::Terminal(t) = child {
            if chance(p, rng) {
                *t = random_terminal(rng);
            }
        }
    }
    for child in [&mut node.left, &mut node.right] {
        if let Expr::Node(inner) = child {
            mutate_terms(inner, p, rng);
        }
    }
}

fn mutate_funcs<R: Rng>(node: &mut Node, p: f64, rng: &mut R) {
    if chance(p, rng) {
        node.func = Func::random(rng);
    }
    for child in [&mut node.left, &mut node.right] {
        if let Expr::Node(inner) = child {
            mutate_funcs(inner, p, rng);
        }
    }
}

fn insert<R: Rng>(node: &mut Node, p: f64, depth: usize, rng: &mut R) {
    if chance(p, rng) {
        let (replaced, kept) = if chance(0.5, rng) {
            (&mut node.right, &mut node.left)
        } else {
            (&mut node.left, &mut node.right)
        };
        *replaced = Expr::Node(Box::new(Node::random(depth, rng)));
        if let Expr::Node(inner) = kept {
            insert(inner, p, depth, rng);
        }
    } else {
        for child in [&mut node.left, &mut node.right] {
            if let Expr::Node(inner) = child {
                insert(inner, p, depth, rng);
            }
        }
    }
}

fn prune<R: Rng>(node: &mut Node, p: f64, rng: &mut R) {
    if chance(p, rng) {
        let target = if chance(0.5, rng) {
            &mut node.right
        } else {
            &mut node.left
        };
        *target = Expr::Terminal(random_terminal(rng));
    }
    for child in [&mut node.left, &mut node.right] {
        if let Expr::Node(inner) = child {
            prune(inner, p, rng);
        }
    }
}
