use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// A character sequence the scanner could not recognise.
    Error,

    Number,
    Identifier,

    Assignment, // :=
    Equals,     // =
    Less,       // <
    Plus,
    Dash,
    Star,
    Slash,
    OpenParen,
    CloseParen,
    Semicolon,

    // Reserved
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
        )
    }

    /// The fixed source text of symbols and reserved words.
    pub fn lexeme(&self) -> Option<&'static str> {
        let lexeme = match self {
            TokenKind::Assignment => ":=",
            TokenKind::Equals => "=",
            TokenKind::Less => "<",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::EOF | TokenKind::Error | TokenKind::Number | TokenKind::Identifier => {
                return None
            }
        };

        Some(lexeme)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "end of file"),
            TokenKind::Error => write!(f, "a valid token"),
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Identifier => write!(f, "an identifier"),
            _ => write!(f, "`{}`", self.lexeme().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.line()
    }

    /// The textual form used in diagnostics and the scan trace.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("EOF"),
            TokenKind::Error => format!("ERROR: {}", self.value),
            TokenKind::Number => format!("NUM, val= {}", self.value),
            TokenKind::Identifier => format!("ID, name= {}", self.value),
            kind if kind.is_reserved() => format!("reserved word: {}", self.value),
            _ => self.value.clone(),
        }
    }
}
