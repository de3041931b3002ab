use std::slice::Iter;

use super::statements::Stmt;

/// An ordered sequence of statements.
///
/// The root of every parse and the body of `if`, `else` and `repeat`.
/// Statements the parser could not build are simply not present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StmtSequence {
    pub body: Vec<Stmt>,
}

impl StmtSequence {
    pub fn new() -> Self {
        StmtSequence { body: Vec::new() }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.body.push(stmt);
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn first(&self) -> Option<&Stmt> {
        self.body.first()
    }

    /// Number of nodes across every statement tree in the sequence.
    pub fn node_count(&self) -> usize {
        self.body.iter().map(Stmt::node_count).sum()
    }
}

impl<'a> IntoIterator for &'a StmtSequence {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}

impl IntoIterator for StmtSequence {
    type Item = Stmt;
    type IntoIter = std::vec::IntoIter<Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.into_iter()
    }
}
