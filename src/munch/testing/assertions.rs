//! Fluent assertion API for expression trees

use crate::munch::ast::{AstNode, BinaryOp, Expr};

/// Create an assertion builder for an expression
pub fn assert_expr(expr: &Expr) -> ExprAssertion<'_> {
    ExprAssertion {
        expr,
        context: "root".to_string(),
    }
}

pub struct ExprAssertion<'a> {
    expr: &'a Expr,
    context: String,
}

impl<'a> ExprAssertion<'a> {
    /// Assert this node is a literal with exactly `expected`
    pub fn literal(self, expected: f64) -> Self {
        match self.expr {
            Expr::Literal { value } => assert_eq!(
                *value, expected,
                "{}: Expected literal {}, found literal {}",
                self.context, expected, value
            ),
            other => panic!(
                "{}: Expected literal {}, found {} {}",
                self.context,
                expected,
                other.node_type(),
                other
            ),
        }
        self
    }

    /// Assert this node is a binary operation with operator `expected`
    pub fn binary(self, expected: BinaryOp) -> Self {
        match self.expr {
            Expr::Binary { op, .. } => assert_eq!(
                *op,
                expected,
                "{}: Expected {} node, found {} node {}",
                self.context,
                expected.name(),
                op.name(),
                self.expr
            ),
            Expr::Literal { value } => panic!(
                "{}: Expected {} node, found literal {}",
                self.context,
                expected.name(),
                value
            ),
        }
        self
    }

    /// Assert on the left operand
    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        let child = self.operand(0, "left");
        assertion(child);
        self
    }

    /// Assert on the right operand
    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        let child = self.operand(1, "right");
        assertion(child);
        self
    }

    /// Assert the printed form
    pub fn prints(self, expected: &str) -> Self {
        assert_eq!(
            self.expr.to_string(),
            expected,
            "{}: printed form differs",
            self.context
        );
        self
    }

    /// Assert the evaluated value
    pub fn evaluates_to(self, expected: f64) -> Self {
        let actual = self.expr.eval();
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: Expected {} to evaluate to {}, got {}",
            self.context,
            self.expr,
            expected,
            actual
        );
        self
    }

    fn operand(&self, index: usize, side: &str) -> ExprAssertion<'a> {
        let expr: &'a Expr = self.expr;
        match expr {
            Expr::Binary { left, right, .. } => ExprAssertion {
                expr: if index == 0 { left } else { right },
                context: format!("{}.{}", self.context, side),
            },
            Expr::Literal { value } => panic!(
                "{}: Expected a binary node with a {} operand, found literal {}",
                self.context, side, value
            ),
        }
    }
}
