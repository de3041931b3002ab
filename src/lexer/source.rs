use std::{rc::Rc, vec::IntoIter};

use crate::{Position, MK_TOKEN};

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

/// A producer of tokens for the parser's single-token lookahead.
///
/// Once the input is exhausted a source must keep returning `EOF` tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A `TokenSource` over an already scanned token list.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    last_position: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            last_position: Position(1, Rc::new(String::from("shell"))),
        }
    }

    /// Scans `source` and wraps the resulting tokens.
    pub fn from_source(source: String, file: Option<String>) -> Self {
        TokenStream::new(tokenize(source, file))
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last_position = token.position.clone();
                token
            }
            None => MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                self.last_position.clone()
            ),
        }
    }
}
