use super::*;
use crate::munch::ast::{BinaryOp, Expr, Position};
use crate::munch::error::{Expected, ParseError};
use crate::munch::lexer::{lex, TokenKind, TokenSequence};
use crate::munch::testing::{assert_expr, kinds, token_sequence};

fn parse_str(source: &str) -> Result<Expr, ParseError> {
    let tokens = lex(source).expect("source should lex");
    parse(&tokens)
}

#[test]
fn test_single_literal() {
    let expr = parse_str("4.5").unwrap();
    assert_eq!(expr, Expr::literal(4.5));
}

#[test]
fn test_product_binds_tighter_than_sum() {
    let expr = parse_str("3.0+2.0*4.0").unwrap();

    assert_expr(&expr)
        .binary(BinaryOp::Add)
        .left(|l| {
            l.literal(3.0);
        })
        .right(|r| {
            r.binary(BinaryOp::Mul)
                .left(|l| {
                    l.literal(2.0);
                })
                .right(|r| {
                    r.literal(4.0);
                });
        })
        .prints("(3 + (2 * 4))")
        .evaluates_to(11.0);
}

#[test]
fn test_subtraction_groups_to_the_right() {
    let expr = parse_str("5.0-3.0-2.0").unwrap();

    assert_eq!(
        expr,
        Expr::sub(
            Expr::literal(5.0),
            Expr::sub(Expr::literal(3.0), Expr::literal(2.0))
        )
    );
    assert_expr(&expr).evaluates_to(4.0);
}

#[test]
fn test_division_groups_to_the_right() {
    let expr = parse_str("8.0/4.0/2.0").unwrap();

    assert_expr(&expr)
        .binary(BinaryOp::Div)
        .left(|l| {
            l.literal(8.0);
        })
        .right(|r| {
            r.binary(BinaryOp::Div);
        })
        .evaluates_to(4.0);
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse_str("(1.0+2.0)*3.0").unwrap();

    assert_eq!(
        expr,
        Expr::mul(
            Expr::add(Expr::literal(1.0), Expr::literal(2.0)),
            Expr::literal(3.0)
        )
    );
    assert_expr(&expr).evaluates_to(9.0);
}

#[test]
fn test_nested_parentheses() {
    let expr = parse_str("((((.5))))").unwrap();
    assert_eq!(expr, Expr::literal(0.5));
}

#[test]
fn test_whitespace_between_tokens() {
    let spaced = parse_str(" 1.0 *\t( 2.0 -\n0.5 ) ").unwrap();
    let tight = parse_str("1.0*(2.0-0.5)").unwrap();
    assert_eq!(spaced, tight);
}

#[test]
fn test_empty_input_needs_an_operand() {
    let err = parse(&TokenSequence::empty()).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: Expected::Operand
        }
    );
}

#[test]
fn test_missing_close_paren() {
    let err = parse_str("(1.0+2.0").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: Expected::Token(TokenKind::RParen)
        }
    );
}

#[test]
fn test_wrong_token_where_close_paren_expected() {
    let err = parse_str("(1.0 2.0)").unwrap_err();
    match err {
        ParseError::UnexpectedToken {
            expected, found, ..
        } => {
            assert_eq!(expected, Expected::Token(TokenKind::RParen));
            assert_eq!(found, TokenKind::Num);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_trailing_token_is_rejected() {
    let err = parse_str("3.0+2.0)").unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingToken {
            found: TokenKind::RParen,
            lexeme: ")".to_string(),
            position: Position::new(0, 7),
        }
    );
}

#[test]
fn test_operator_without_left_operand() {
    let err = parse_str("*2.0").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Operand,
            found: TokenKind::Times,
            lexeme: "*".to_string(),
            position: Position::new(0, 0),
        }
    );
}

#[test]
fn test_operator_without_right_operand() {
    let err = parse_str("1.0 -").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: Expected::Operand
        }
    );
}

#[test]
fn test_empty_parentheses() {
    let err = parse_str("()").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Operand,
            found: TokenKind::RParen,
            ..
        }
    ));
}

#[test]
fn test_integer_lexemes_from_a_hand_built_sequence() {
    // "5 - 3 - 2" laid out by hand; the reference grammar itself needs a decimal point
    let tokens = token_sequence(&[
        (TokenKind::Num, "5"),
        (TokenKind::Minus, "-"),
        (TokenKind::Num, "3"),
        (TokenKind::Minus, "-"),
        (TokenKind::Num, "2"),
    ]);
    let expr = parse(&tokens).unwrap();

    assert_expr(&expr)
        .binary(BinaryOp::Sub)
        .left(|l| {
            l.literal(5.0);
        })
        .right(|r| {
            r.binary(BinaryOp::Sub)
                .left(|l| {
                    l.literal(3.0);
                })
                .right(|r| {
                    r.literal(2.0);
                });
        })
        .evaluates_to(4.0);
}

#[test]
fn test_unparseable_number_lexeme() {
    let tokens = token_sequence(&[(TokenKind::Num, "1..2")]);
    let err = parse(&tokens).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidNumber {
            lexeme: "1..2".to_string(),
            position: Position::new(0, 0),
        }
    );
}

#[test]
fn test_parse_leaves_input_untouched() {
    let tokens = lex("1.0 + 2.0").unwrap();
    let before = kinds(&tokens);
    parse(&tokens).unwrap();
    assert_eq!(kinds(&tokens), before);
}

#[test]
fn test_consume_matching_token() {
    let tokens = token_sequence(&[(TokenKind::LParen, "("), (TokenKind::Num, "1")]);
    let (token, rest) = consume(&tokens, TokenKind::LParen).unwrap();

    assert_eq!(token.kind, TokenKind::LParen);
    assert_eq!(kinds(&rest), vec![TokenKind::Num]);
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_consume_mismatch_and_end() {
    let tokens = token_sequence(&[(TokenKind::Plus, "+")]);

    let err = consume(&tokens, TokenKind::Num).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Token(TokenKind::Num),
            found: TokenKind::Plus,
            ..
        }
    ));

    let err = consume(&TokenSequence::empty(), TokenKind::Num).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: Expected::Token(TokenKind::Num)
        }
    );
}

#[test]
fn test_long_right_chain() {
    let source = vec!["1.0"; 200].join("+");
    let expr = parse_str(&source).unwrap();
    assert_eq!(expr.eval(), 200.0);
    assert_eq!(expr.depth(), 199);
}
