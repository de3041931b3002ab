//! Parser state and the parsing entry points.
//!
//! The `Parser` owns everything a parse session mutates: the token source,
//! the single lookahead token, and the error reporter holding the failure
//! flag. Grammar rules in `stmt` and `expr` receive it by `&mut`.

use log::{info, trace};

use crate::{
    ast::ast::StmtSequence,
    errors::{
        errors::{Error, ErrorImpl},
        reporter::ErrorReporter,
    },
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt_sequence;

/// The main parser structure that maintains parsing state.
pub struct Parser<S: TokenSource> {
    /// Where further tokens are pulled from
    source: S,
    /// The lookahead token
    token: Token,
    /// Diagnostics reported so far
    reporter: ErrorReporter,
    /// Number of tokens consumed from the lookahead
    consumed: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser and primes the lookahead with the first token.
    pub fn new(mut source: S, reporter: ErrorReporter) -> Self {
        let token = source.next_token();
        Parser {
            source,
            token,
            reporter,
            consumed: 0,
        }
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Pulls the next token into the lookahead and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let previous = std::mem::replace(&mut self.token, next);
        self.consumed += 1;

        trace!("Consumed {} at line {}", previous.describe(), previous.line());
        previous
    }

    /// Consumes the lookahead if it is of the expected kind.
    ///
    /// On a mismatch an `UnexpectedToken` error is reported and the lookahead
    /// is left in place for the enclosing rule to decide on. Returns whether
    /// the token matched.
    pub fn expect(&mut self, expected_kind: TokenKind) -> bool {
        if self.token.kind == expected_kind {
            self.advance();
            return true;
        }

        self.report_here(ErrorImpl::UnexpectedToken {
            expected: expected_kind,
            found: self.token.describe(),
        });
        false
    }

    /// Reports an error at the position of the lookahead token.
    pub fn report_here(&mut self, error: ErrorImpl) {
        let position = self.get_position();
        self.report(error, position);
    }

    pub fn report(&mut self, error: ErrorImpl, position: Position) {
        self.reporter.report(Error::new(error, position));
    }

    /// Returns the position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.token.position.clone()
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn has_errors(&self) -> bool {
        self.reporter.has_errors()
    }

    pub fn errors(&self) -> &[Error] {
        self.reporter.errors()
    }

    pub fn into_reporter(self) -> ErrorReporter {
        self.reporter
    }
}

/// Parses a token stream into a syntax tree.
///
/// Errors never stop the parse; they are recorded in the returned parser,
/// whose `has_errors` tells whether the tree is fit for later stages.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its diagnostics)
/// - The root statement sequence
pub fn parse<S: TokenSource>(source: S) -> (Parser<S>, StmtSequence) {
    parse_with_reporter(source, ErrorReporter::new())
}

/// Like `parse`, reporting through the given `reporter`.
pub fn parse_with_reporter<S: TokenSource>(
    source: S,
    reporter: ErrorReporter,
) -> (Parser<S>, StmtSequence) {
    let mut parser = Parser::new(source, reporter);
    info!("Beginning parse phase");

    let tree = parse_stmt_sequence(&mut parser);

    if parser.current_token_kind() != TokenKind::EOF {
        let found = parser.current_token().describe();
        parser.report_here(ErrorImpl::TrailingInput { found });
    }

    info!(
        "Parsed {} top-level statements with {} errors",
        tree.len(),
        parser.errors().len()
    );
    (parser, tree)
}
