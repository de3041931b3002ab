use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedStatementStart { .. } => "UnexpectedStatementStart",
            ErrorImpl::UnexpectedFactor { .. } => "UnexpectedFactor",
            ErrorImpl::UnexpectedExpressionTail { .. } => "UnexpectedExpressionTail",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("expected {}", expected))
            }
            ErrorImpl::UnexpectedStatementStart { .. } => ErrorTip::Suggestion(String::from(
                "a statement starts with `if`, `repeat`, `read`, `write` or an identifier",
            )),
            ErrorImpl::UnexpectedFactor { .. } => ErrorTip::Suggestion(String::from(
                "expected a number, an identifier or `(`",
            )),
            ErrorImpl::UnexpectedExpressionTail { .. } => ErrorTip::Suggestion(String::from(
                "did you miss an operator or a semicolon?",
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(String::from(
                "is it above the integer limit?",
            )),
            ErrorImpl::TrailingInput { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Syntax error at line {}: {}",
            self.position.line(),
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The `found` fields hold the offending token's description, as produced
/// by `Token::describe`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token -> {found}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("unexpected token -> {found}")]
    UnexpectedStatementStart { found: String },
    #[error("unexpected token -> {found}")]
    UnexpectedFactor { found: String },
    #[error("unexpected token -> {found}")]
    UnexpectedExpressionTail { found: String },
    #[error("integer out of range -> {found}")]
    NumberParseError { found: String },
    #[error("Code ends before file")]
    TrailingInput { found: String },
}
