use log::debug;

use crate::{
    ast::{
        ast::StmtSequence,
        statements::{AssignStmt, IfStmt, ReadStmt, RepeatStmt, Stmt, WriteStmt},
    },
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, lookups::ends_stmt_sequence, parser::Parser};

/// stmt-sequence → statement { `;` statement }
///
/// Statements that fail to parse are left out of the sequence; the loop
/// continues until a follow token (`EOF`, `end`, `else`, `until`).
pub fn parse_stmt_sequence<S: TokenSource>(parser: &mut Parser<S>) -> StmtSequence {
    let mut sequence = StmtSequence::new();

    if let Some(stmt) = parse_stmt(parser) {
        sequence.push(stmt);
    }

    while !ends_stmt_sequence(parser.current_token_kind()) {
        let consumed = parser.consumed();

        parser.expect(TokenKind::Semicolon);
        if let Some(stmt) = parse_stmt(parser) {
            sequence.push(stmt);
        }

        debug_assert!(
            parser.consumed() > consumed,
            "statement sequence made no progress at line {}",
            parser.get_position().line()
        );
    }

    sequence
}

/// Dispatches on the lookahead to a statement production.
///
/// A token no statement starts with is reported and skipped, and the
/// statement is absent.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    debug!(
        "Entering statement at line {} on {}",
        parser.get_position().line(),
        parser.current_token().describe()
    );

    match parser.current_token_kind() {
        TokenKind::If => Some(Stmt::If(parse_if_stmt(parser))),
        TokenKind::Repeat => Some(Stmt::Repeat(parse_repeat_stmt(parser))),
        TokenKind::Identifier => parse_assign_stmt(parser).map(Stmt::Assign),
        TokenKind::Read => Some(Stmt::Read(parse_read_stmt(parser))),
        TokenKind::Write => Some(Stmt::Write(parse_write_stmt(parser))),
        _ => {
            let found = parser.current_token().describe();
            parser.report_here(ErrorImpl::UnexpectedStatementStart { found });
            parser.advance();
            None
        }
    }
}

pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> IfStmt {
    let position = parser.get_position();

    parser.expect(TokenKind::If);
    let condition = parse_expr(parser);
    parser.expect(TokenKind::Then);
    let then_body = parse_stmt_sequence(parser);

    // A nested `if` claims the `else` before its enclosing one sees it.
    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.expect(TokenKind::Else);
        Some(parse_stmt_sequence(parser))
    } else {
        None
    };

    parser.expect(TokenKind::End);

    IfStmt {
        condition,
        then_body,
        else_body,
        position,
    }
}

pub fn parse_repeat_stmt<S: TokenSource>(parser: &mut Parser<S>) -> RepeatStmt {
    let position = parser.get_position();

    parser.expect(TokenKind::Repeat);
    let body = parse_stmt_sequence(parser);
    parser.expect(TokenKind::Until);
    let condition = parse_expr(parser);

    RepeatStmt {
        body,
        condition,
        position,
    }
}

/// Returns `None` when the lookahead is not an identifier.
pub fn parse_assign_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<AssignStmt> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return None;
    }

    let position = parser.get_position();
    let name = parser.current_token().value.clone();

    parser.expect(TokenKind::Identifier);
    parser.expect(TokenKind::Assignment);
    let value = parse_expr(parser);

    Some(AssignStmt {
        name,
        value,
        position,
    })
}

pub fn parse_read_stmt<S: TokenSource>(parser: &mut Parser<S>) -> ReadStmt {
    let position = parser.get_position();

    parser.expect(TokenKind::Read);
    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.current_token().value.clone())
    } else {
        None
    };
    parser.expect(TokenKind::Identifier);

    ReadStmt { name, position }
}

pub fn parse_write_stmt<S: TokenSource>(parser: &mut Parser<S>) -> WriteStmt {
    let position = parser.get_position();

    parser.expect(TokenKind::Write);
    let value = parse_expr(parser);

    WriteStmt { value, position }
}
