use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Position};

/// Binary operators, grouped by precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Relational
    Less,
    Equal,
    // Additive
    Plus,
    Minus,
    // Multiplicative
    Times,
    Over,
}

impl Operator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Less => Some(Operator::Less),
            TokenKind::Equals => Some(Operator::Equal),
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Dash => Some(Operator::Minus),
            TokenKind::Star => Some(Operator::Times),
            TokenKind::Slash => Some(Operator::Over),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::Equal => "=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Over => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operation Expression
/// A binary operation. Either operand is absent when it could not be parsed.
///
/// Operator chains nest to the left, one level per operand. Dropping and
/// `node_count` walk the tree with an explicit stack; the derived `Clone`,
/// `PartialEq` and the tree listing recurse and are bounded by the thread stack.
#[derive(Debug, Clone, PartialEq)]
pub struct OpExpr {
    pub operator: Operator,
    pub left: Option<Box<Expr>>,
    pub right: Option<Box<Expr>>,
    pub position: Position,
}

impl Drop for OpExpr {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Expr>> = self.left.take().into_iter().collect();
        pending.extend(self.right.take());

        while let Some(mut expr) = pending.pop() {
            if let Expr::Op(op) = expr.as_mut() {
                pending.extend(op.left.take());
                pending.extend(op.right.take());
            }
        }
    }
}

/// Constant Expression
/// An integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstExpr {
    pub value: i32,
    pub position: Position,
}

/// Identifier Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IdExpr {
    pub name: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Op(OpExpr),
    Const(ConstExpr),
    Id(IdExpr),
}

impl Expr {
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Op(op) => &op.position,
            Expr::Const(constant) => &constant.position,
            Expr::Id(id) => &id.position,
        }
    }

    /// Number of nodes in this expression tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(expr) = pending.pop() {
            count += 1;
            if let Expr::Op(op) = expr {
                pending.extend(op.left.as_deref());
                pending.extend(op.right.as_deref());
            }
        }

        count
    }
}
