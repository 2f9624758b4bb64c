//! Expression tree
//!
//! Every node owns its children outright. Trees are built bottom-up by the parser and never
//! mutated afterwards.
//!
//! An [Expr] can be evaluated ([Expr::eval]) and printed (its `Display` impl renders fully
//! parenthesised infix, so the tree shape is visible in the text).

use super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// Binary operators, grouped by precedence level in the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }

    /// IEEE-754 arithmetic; dividing by zero gives an infinity or NaN
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An arithmetic expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Expr {
    Literal {
        value: f64,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: f64) -> Self {
        Expr::Literal { value }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Add, left, right)
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Mul, left, right)
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Div, left, right)
    }

    pub fn eval(&self) -> f64 {
        match self {
            Expr::Literal { value } => *value,
            Expr::Binary { op, left, right } => op.apply(left.eval(), right.eval()),
        }
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal { .. } => 0,
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Literal { .. } => 1,
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { value } => write!(f, "{}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

impl AstNode for Expr {
    fn node_type(&self) -> &'static str {
        match self {
            Expr::Literal { .. } => "literal",
            Expr::Binary { op, .. } => op.name(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Expr::Literal { value } => value.to_string(),
            Expr::Binary { op, .. } => op.symbol().to_string(),
        }
    }

    fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Literal { .. } => Vec::new(),
            Expr::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }
}
