//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Statement sequences and every statement production
//! - Operator precedence and associativity
//! - Dangling `else` resolution
//! - Error reporting and resynchronisation
//! - Termination on streams that mismatch over and over

use std::rc::Rc;

use crate::{
    ast::{ast::StmtSequence, expressions::Expr, statements::Stmt},
    errors::{
        errors::{Error, ErrorImpl},
        reporter::ErrorReporter,
    },
    lexer::{
        source::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    expr::parse_expr,
    parser::{parse, Parser},
    stmt::parse_assign_stmt,
};

const ALL_KINDS: [TokenKind; 22] = [
    TokenKind::EOF,
    TokenKind::Error,
    TokenKind::Number,
    TokenKind::Identifier,
    TokenKind::Assignment,
    TokenKind::Equals,
    TokenKind::Less,
    TokenKind::Plus,
    TokenKind::Dash,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::Semicolon,
    TokenKind::If,
    TokenKind::Then,
    TokenKind::Else,
    TokenKind::End,
    TokenKind::Repeat,
    TokenKind::Until,
    TokenKind::Read,
    TokenKind::Write,
];

fn parse_source(source: &str) -> (Vec<Error>, StmtSequence) {
    let tokens = TokenStream::from_source(source.to_string(), Some("test.tny".to_string()));
    let (parser, tree) = parse(tokens);
    (parser.into_reporter().into_errors(), tree)
}

fn expr_parser(source: &str) -> Parser<TokenStream> {
    let tokens = TokenStream::from_source(source.to_string(), Some("test.tny".to_string()));
    Parser::new(tokens, ErrorReporter::new())
}

fn token(kind: TokenKind) -> Token {
    let value = match kind {
        TokenKind::Identifier => "x",
        TokenKind::Number => "1",
        TokenKind::Error => "@",
        TokenKind::EOF => "EOF",
        _ => kind.lexeme().unwrap_or_default(),
    };

    Token {
        kind,
        value: value.to_string(),
        position: Position(1, Rc::new("test.tny".to_string())),
    }
}

fn stream(kinds: &[TokenKind]) -> TokenStream {
    TokenStream::new(kinds.iter().copied().map(token).collect())
}

#[test]
fn test_parse_read_assign_write() {
    let (errors, tree) = parse_source("read x; x := x + 1; write x");

    assert!(errors.is_empty());
    assert_eq!(tree.len(), 3);
    assert_eq!(
        tree.to_string(),
        "Read: x\n\
         Assign to: x\n\
         \x20 Op: +\n\
         \x20   Id: x\n\
         \x20   Const: 1\n\
         Write\n\
         \x20 Id: x\n"
    );
}

#[test]
fn test_parse_if_without_else() {
    let (errors, tree) = parse_source("if x then write x end");

    assert!(errors.is_empty());
    match tree.first() {
        Some(Stmt::If(stmt)) => {
            assert!(matches!(&stmt.condition, Some(Expr::Id(id)) if id.name == "x"));
            assert_eq!(stmt.then_body.len(), 1);
            assert!(matches!(stmt.then_body.first(), Some(Stmt::Write(_))));
            assert!(stmt.else_body.is_none());
        }
        other => panic!("Expected if statement, found {:?}", other),
    }
}

#[test]
fn test_parse_if_with_else() {
    let (errors, tree) = parse_source("if x < 1 then write 1 else write 2; write 3 end");

    assert!(errors.is_empty());
    match tree.first() {
        Some(Stmt::If(stmt)) => {
            assert_eq!(stmt.then_body.len(), 1);
            assert_eq!(stmt.else_body.as_ref().map(StmtSequence::len), Some(2));
        }
        other => panic!("Expected if statement, found {:?}", other),
    }
}

#[test]
fn test_parse_repeat_missing_condition() {
    let (errors, tree) = parse_source("repeat x := 1 until");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Syntax error at line 1: unexpected token -> EOF"
    );
    match tree.first() {
        Some(Stmt::Repeat(stmt)) => {
            assert_eq!(stmt.body.len(), 1);
            assert!(stmt.condition.is_none());
        }
        other => panic!("Expected repeat statement, found {:?}", other),
    }
}

#[test]
fn test_parse_repeat() {
    let (errors, tree) = parse_source("repeat x := x - 1; write x until x = 0");

    assert!(errors.is_empty());
    assert_eq!(
        tree.to_string(),
        "Repeat\n\
         \x20 Assign to: x\n\
         \x20   Op: -\n\
         \x20     Id: x\n\
         \x20     Const: 1\n\
         \x20 Write\n\
         \x20   Id: x\n\
         \x20 Op: =\n\
         \x20   Id: x\n\
         \x20   Const: 0\n"
    );
}

#[test]
fn test_term_chain_keeps_every_operand() {
    let mut parser = expr_parser("a * b * c");
    let expr = parse_expr(&mut parser);

    assert!(!parser.has_errors());
    assert_eq!(
        expr.map(|expr| expr.to_string()).unwrap_or_default(),
        "Op: *\n\
         \x20 Op: *\n\
         \x20   Id: a\n\
         \x20   Id: b\n\
         \x20 Id: c\n"
    );
}

#[test]
fn test_long_term_chain() {
    let mut parser = expr_parser("a / b * c / d");
    let expr = parse_expr(&mut parser);

    assert!(!parser.has_errors());
    assert_eq!(expr.as_ref().map(Expr::node_count), Some(7));
}

#[test]
fn test_subtraction_is_left_associative() {
    let mut parser = expr_parser("1 - 2 - 3");
    let expr = parse_expr(&mut parser);

    assert!(!parser.has_errors());
    assert_eq!(
        expr.map(|expr| expr.to_string()).unwrap_or_default(),
        "Op: -\n\
         \x20 Op: -\n\
         \x20   Const: 1\n\
         \x20   Const: 2\n\
         \x20 Const: 3\n"
    );
}

#[test]
fn test_precedence_cascade() {
    let mut parser = expr_parser("1 + 2 * 3 < 4");
    let expr = parse_expr(&mut parser);

    assert!(!parser.has_errors());
    assert_eq!(
        expr.map(|expr| expr.to_string()).unwrap_or_default(),
        "Op: <\n\
         \x20 Op: +\n\
         \x20   Const: 1\n\
         \x20   Op: *\n\
         \x20     Const: 2\n\
         \x20     Const: 3\n\
         \x20 Const: 4\n"
    );
}

#[test]
fn test_parenthesised_expression_has_no_wrapper() {
    let mut parser = expr_parser("(1 + 2) * 3");
    let expr = parse_expr(&mut parser);

    assert!(!parser.has_errors());
    match expr {
        Some(Expr::Op(op)) => {
            assert_eq!(op.operator.symbol(), "*");
            assert!(matches!(op.left.as_deref(), Some(Expr::Op(inner)) if inner.operator.symbol() == "+"));
            assert!(matches!(op.right.as_deref(), Some(Expr::Const(constant)) if constant.value == 3));
        }
        other => panic!("Expected operation, found {:?}", other),
    }
}

#[test]
fn test_comparison_does_not_chain() {
    let (errors, tree) = parse_source("write a < b < c");

    assert!(!errors.is_empty());
    assert_eq!(
        tree.first().map(|stmt| stmt.to_string()).unwrap_or_default(),
        "Write\n\
         \x20 Op: <\n\
         \x20   Id: a\n\
         \x20   Id: b\n"
    );
}

#[test]
fn test_dangling_else_binds_innermost_if() {
    let (errors, tree) = parse_source("if a then if b then write 1 else write 2 end end");

    assert!(errors.is_empty());
    let Some(Stmt::If(outer)) = tree.first() else {
        panic!("Expected if statement");
    };
    assert!(outer.else_body.is_none());

    let Some(Stmt::If(inner)) = outer.then_body.first() else {
        panic!("Expected nested if statement");
    };
    let else_body = inner.else_body.as_ref().expect("inner if should own the else");
    assert!(matches!(else_body.first(), Some(Stmt::Write(_))));
}

#[test]
fn test_missing_separator_reports_once() {
    let (errors, tree) = parse_source("read x write y");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: String::from("reserved word: write"),
        }
    );
    assert!(matches!(tree.first(), Some(Stmt::Read(read)) if read.name.as_deref() == Some("x")));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_unrecognised_statement_start_is_skipped() {
    let (errors, tree) = parse_source("then; read x");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedStatementStart");
    assert_eq!(tree.len(), 1);
    assert!(matches!(tree.first(), Some(Stmt::Read(_))));
}

#[test]
fn test_scanner_error_token_is_reported() {
    let (errors, tree) = parse_source("@; write 1");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Syntax error at line 1: unexpected token -> ERROR: @"
    );
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_empty_program_reports_missing_statement() {
    let (errors, tree) = parse_source("");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedStatementStart");
    assert!(tree.is_empty());
}

#[test]
fn test_read_without_identifier() {
    let (errors, tree) = parse_source("read");

    assert_eq!(errors.len(), 1);
    assert!(matches!(tree.first(), Some(Stmt::Read(read)) if read.name.is_none()));
}

#[test]
fn test_unexpected_expression_tail_is_skipped() {
    let (errors, tree) = parse_source("write x y");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedExpressionTail");
    assert_eq!(tree.to_string(), "Write\n  Id: x\n");
}

#[test]
fn test_number_out_of_range() {
    let (errors, tree) = parse_source("write 99999999999");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "NumberParseError");
    assert!(matches!(tree.first(), Some(Stmt::Write(write)) if write.value.is_none()));
}

#[test]
fn test_trailing_input_is_reported() {
    let (errors, tree) = parse_source("read x end");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "TrailingInput");
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_error_line_numbers() {
    let (errors, _) = parse_source("read x;\n\nwrite");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_position().line(), 3);
}

#[test]
fn test_expect_mismatch_keeps_lookahead() {
    let mut parser = Parser::new(stream(&[TokenKind::Write]), ErrorReporter::new());

    assert!(!parser.expect(TokenKind::Semicolon));
    assert_eq!(parser.current_token_kind(), TokenKind::Write);
    assert_eq!(parser.consumed(), 0);
    assert_eq!(parser.errors().len(), 1);

    assert!(parser.expect(TokenKind::Write));
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    assert_eq!(parser.consumed(), 1);
}

#[test]
fn test_assign_requires_identifier() {
    let mut parser = Parser::new(stream(&[TokenKind::Write]), ErrorReporter::new());

    assert!(parse_assign_stmt(&mut parser).is_none());
    assert_eq!(parser.consumed(), 0);
    assert!(!parser.has_errors());
}

#[test]
fn test_parse_is_deterministic() {
    let source = "read x; if 0 < x then repeat x := x - 1 until x = 0 end; write x";
    let (first_errors, first) = parse_source(source);
    let (second_errors, second) = parse_source(source);

    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
}

#[test]
fn test_repeated_mismatches_terminate() {
    let streams: [&[TokenKind]; 5] = [
        &[TokenKind::Assignment; 16],
        &[TokenKind::If; 16],
        &[TokenKind::OpenParen; 16],
        &[TokenKind::Then, TokenKind::Until, TokenKind::Then, TokenKind::Until],
        &[TokenKind::Repeat, TokenKind::Repeat, TokenKind::End, TokenKind::Else],
    ];

    for kinds in streams {
        let (parser, _) = parse(stream(kinds));
        assert!(parser.has_errors(), "{:?} should be rejected", kinds);
    }
}

#[test]
fn test_every_short_stream_terminates() {
    for first in ALL_KINDS {
        for second in ALL_KINDS {
            for third in ALL_KINDS {
                let kinds = [first, second, third];
                let (parser, _) = parse(stream(&kinds));

                if !parser.has_errors() {
                    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
                }
            }
        }
    }
}

#[test]
fn test_long_operator_chain_parses_and_drops() {
    let operands = 200_000;
    let mut source = String::from("x := 1");
    for _ in 0..operands {
        source.push_str(" - 1");
    }

    let (errors, tree) = parse_source(&source);

    assert!(errors.is_empty());
    // Assign node, one Op per operator and one Const per operand.
    assert_eq!(tree.node_count(), 1 + operands + (operands + 1));
    drop(tree);
}
