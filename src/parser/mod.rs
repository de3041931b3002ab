//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that turns a token
//! stream into a `StmtSequence`. Every grammar rule is a function taking the
//! shared `Parser` state, and every rule returns a tree value even when the
//! input is malformed:
//!
//! - Statement parsing (sequences, `if`, `repeat`, assignment, `read`, `write`)
//! - Expression parsing (comparison, additive and multiplicative levels, factors)
//! - Error reporting with token-level resynchronisation
//!
//! The grammar is LL(1): a single lookahead token selects every production.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
