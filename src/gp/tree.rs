//! Binary expression trees over `{+, -, *, /}` and the digits `0..=9`.
//!
//! Leaves are always terminals; there are no empty children. A
//! [`Node`] is an operator with exactly two children, and an [`Expr`] is
//! either a terminal or a boxed node.

use rand::Rng;
use std::fmt;

/// The closed terminal set.
pub const TERMINALS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// A binary arithmetic function symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Add,
    Sub,
    Mul,
    Div,
}

impl Func {
    /// The closed function set.
    pub const ALL: [Func; 4] = [Func::Add, Func::Sub, Func::Mul, Func::Div];

    /// Draws a function symbol uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Func {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn symbol(self) -> char {
        match self {
            Func::Add => '+',
            Func::Sub => '-',
            Func::Mul => '*',
            Func::Div => '/',
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Draws a terminal uniformly from [`TERMINALS`].
pub fn random_terminal<R: Rng>(rng: &mut R) -> u8 {
    TERMINALS[rng.random_range(0..TERMINALS.len())]
}

/// A subtree: a terminal leaf or an operator node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Terminal(u8),
    Node(Box<Node>),
}

/// An operator with exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub func: Func,
    pub left: Expr,
    pub right: Expr,
}

impl Expr {
    pub fn terminal(value: u8) -> Self {
        Expr::Terminal(value)
    }

    pub fn node(func: Func, left: Expr, right: Expr) -> Self {
        Expr::Node(Box::new(Node::new(func, left, right)))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Expr::Terminal(_))
    }

    /// Operator levels on the longest path; a terminal has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Terminal(_) => 0,
            Expr::Node(node) => node.depth(),
        }
    }

    /// Total number of terminals and operators.
    pub fn size(&self) -> usize {
        match self {
            Expr::Terminal(_) => 1,
            Expr::Node(node) => node.size(),
        }
    }
}

impl Node {
    pub fn new(func: Func, left: Expr, right: Expr) -> Self {
        Self { func, left, right }
    }

    /// An operator with a random symbol and two subtrees grown by
    /// [`build_tree`] with `max_depth`.
    pub fn random<R: Rng>(max_depth: usize, rng: &mut R) -> Self {
        let func = Func::random(rng);
        let left = build_tree(max_depth, rng);
        let right = build_tree(max_depth, rng);
        Self { func, left, right }
    }

    pub fn depth(&self) -> usize {
        1 + self.left.depth().max(self.right.depth())
    }

    pub fn size(&self) -> usize {
        1 + self.left.size() + self.right.size()
    }
}

/// Grows a random subtree of at most `max_depth` operator levels.
///
/// At each level below the limit the builder returns a terminal with
/// probability 0.5 and otherwise an operator whose two children are grown
/// independently one level deeper. At the limit it always returns a
/// terminal.
pub fn build_tree<R: Rng>(max_depth: usize, rng: &mut R) -> Expr {
    grow(max_depth, 0, rng)
}

fn grow<R: Rng>(max_depth: usize, depth: usize, rng: &mut R) -> Expr {
    if depth >= max_depth || rng.random_range(0.0..1.0) > 0.5 {
        return Expr::Terminal(random_terminal(rng));
    }
    let func = Func::random(rng);
    let left = grow(max_depth, depth + 1, rng);
    let right = grow(max_depth, depth + 1, rng);
    Expr::node(func, left, right)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Terminal(t) => write!(f, "{t}"),
            Expr::Node(node) => write!(f, "{node}"),
        }
    }
}

/// Prefix form, e.g. `(+ 2 (* 3 4))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.func, self.left, self.right)
    }
}
