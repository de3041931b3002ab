use crate::Position;

use super::{ast::StmtSequence, expressions::Expr};

/// `if` exp `then` stmt-sequence [`else` stmt-sequence] `end`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Option<Expr>,
    pub then_body: StmtSequence,
    /// `None` when the statement has no `else` branch.
    pub else_body: Option<StmtSequence>,
    pub position: Position,
}

/// `repeat` stmt-sequence `until` exp
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub body: StmtSequence,
    pub condition: Option<Expr>,
    pub position: Position,
}

/// ID `:=` exp
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: String,
    pub value: Option<Expr>,
    pub position: Position,
}

/// `read` ID
#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    /// `None` when `read` was not followed by an identifier.
    pub name: Option<String>,
    pub position: Position,
}

/// `write` exp
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub value: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    If(IfStmt),
    Repeat(RepeatStmt),
    Assign(AssignStmt),
    Read(ReadStmt),
    Write(WriteStmt),
}

impl Stmt {
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::If(stmt) => &stmt.position,
            Stmt::Repeat(stmt) => &stmt.position,
            Stmt::Assign(stmt) => &stmt.position,
            Stmt::Read(stmt) => &stmt.position,
            Stmt::Write(stmt) => &stmt.position,
        }
    }

    /// Number of nodes in this statement's tree, the statement included.
    pub fn node_count(&self) -> usize {
        let expr_count = |expr: &Option<Expr>| expr.as_ref().map_or(0, Expr::node_count);

        1 + match self {
            Stmt::If(stmt) => {
                expr_count(&stmt.condition)
                    + stmt.then_body.node_count()
                    + stmt.else_body.as_ref().map_or(0, StmtSequence::node_count)
            }
            Stmt::Repeat(stmt) => stmt.body.node_count() + expr_count(&stmt.condition),
            Stmt::Assign(stmt) => expr_count(&stmt.value),
            Stmt::Read(_) => 0,
            Stmt::Write(stmt) => expr_count(&stmt.value),
        }
    }
}
