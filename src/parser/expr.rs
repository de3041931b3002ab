use crate::{
    ast::expressions::{ConstExpr, Expr, IdExpr, OpExpr},
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{
    lookups::{binary_operator, ends_expression, BindingPower},
    parser::Parser,
};

type OperandParser<S> = fn(&mut Parser<S>) -> Option<Expr>;

/// exp → simple-exp [ (`<` | `=`) simple-exp ]
///
/// At most one comparison is accepted. Anything after the left side that
/// neither compares nor ends the expression is reported and skipped.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let left = parse_simple_expr(parser);
    let kind = parser.current_token_kind();

    if let Some(operator) = binary_operator(kind, BindingPower::Relational) {
        let position = parser.get_position();
        parser.advance();
        let right = parse_simple_expr(parser);

        return Some(Expr::Op(OpExpr {
            operator,
            left: left.map(Box::new),
            right: right.map(Box::new),
            position,
        }));
    }

    if !ends_expression(kind) {
        let found = parser.current_token().describe();
        parser.report_here(ErrorImpl::UnexpectedExpressionTail { found });
        parser.advance();
    }

    left
}

/// simple-exp → term { (`+` | `-`) term }
pub fn parse_simple_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    parse_left_assoc(parser, BindingPower::Additive, parse_term)
}

/// term → factor { (`*` | `/`) factor }
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    parse_left_assoc(parser, BindingPower::Multiplicative, parse_factor)
}

/// Folds a left-associative chain of `bp` operators: `a - b - c` becomes
/// `(a - b) - c`. Every new operation takes the tree built so far as its
/// left operand.
fn parse_left_assoc<S: TokenSource>(
    parser: &mut Parser<S>,
    bp: BindingPower,
    operand: OperandParser<S>,
) -> Option<Expr> {
    let mut left = operand(parser);

    while let Some(operator) = binary_operator(parser.current_token_kind(), bp) {
        let position = parser.get_position();
        parser.advance();
        let right = operand(parser);

        left = Some(Expr::Op(OpExpr {
            operator,
            left: left.map(Box::new),
            right: right.map(Box::new),
            position,
        }));
    }

    left
}

/// factor → NUM | ID | `(` exp `)`
///
/// Any other token is reported and skipped, and the factor is absent.
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();

            match token.value.parse::<i32>() {
                Ok(value) => Some(Expr::Const(ConstExpr {
                    value,
                    position: token.position,
                })),
                Err(_) => {
                    let found = token.describe();
                    parser.report(ErrorImpl::NumberParseError { found }, token.position);
                    None
                }
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();

            Some(Expr::Id(IdExpr {
                name: token.value,
                position: token.position,
            }))
        }
        TokenKind::OpenParen => {
            parser.expect(TokenKind::OpenParen);
            let expr = parse_expr(parser);
            parser.expect(TokenKind::CloseParen);
            expr
        }
        _ => {
            let found = parser.current_token().describe();
            parser.report_here(ErrorImpl::UnexpectedFactor { found });
            parser.advance();
            None
        }
    }
}
