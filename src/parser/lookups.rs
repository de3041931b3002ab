use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::expressions::Operator, lexer::tokens::TokenKind};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Relational,
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::Equals, BindingPower::Relational);
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map
    };
}

/// Tokens that end a statement sequence.
pub const STMT_SEQUENCE_FOLLOW: [TokenKind; 4] = [
    TokenKind::EOF,
    TokenKind::End,
    TokenKind::Else,
    TokenKind::Until,
];

/// Tokens that may legally follow a complete expression.
pub const EXPRESSION_FOLLOW: [TokenKind; 7] = [
    TokenKind::CloseParen,
    TokenKind::Then,
    TokenKind::End,
    TokenKind::Until,
    TokenKind::Else,
    TokenKind::EOF,
    TokenKind::Semicolon,
];

/// The operator `kind` denotes if it is a binary operator of precedence `bp`.
pub fn binary_operator(kind: TokenKind, bp: BindingPower) -> Option<Operator> {
    match BP_LOOKUP.get(&kind) {
        Some(power) if *power == bp => Operator::from_token_kind(kind),
        _ => None,
    }
}

pub fn ends_stmt_sequence(kind: TokenKind) -> bool {
    STMT_SEQUENCE_FOLLOW.contains(&kind)
}

pub fn ends_expression(kind: TokenKind) -> bool {
    EXPRESSION_FOLLOW.contains(&kind)
}
