//! End-to-end parsing through the reference lexer

use munch::munch::error::{Expected, FrontendError, ParseError};
use munch::munch::testing::assert_expr;
use munch::munch::{evaluate_source, parse_source, BinaryOp, Expr, TokenKind};
use rstest::rstest;

#[rstest]
#[case::precedence("3.0+2.0*4.0", 11.0)]
#[case::right_grouped_sub("5.0-3.0-2.0", 4.0)]
#[case::right_grouped_div("8.0/4.0/2.0", 4.0)]
#[case::parens("(1.0+2.0)*3.0", 9.0)]
#[case::explicit_left_grouping("(5.0-3.0)-2.0", 0.0)]
#[case::nested("((2.0))*((.5+.5))", 2.0)]
#[case::mixed("1.5*2.0-.5/.25", 1.0)]
fn test_evaluation(#[case] source: &str, #[case] expected: f64) {
    assert_eq!(evaluate_source(source).unwrap(), expected);
}

#[rstest]
#[case("3.0+2.0*4.0", "(3 + (2 * 4))")]
#[case("5.0-3.0-2.0", "(5 - (3 - 2))")]
#[case("(1.0+2.0)*3.0", "((1 + 2) * 3)")]
#[case("2.5", "2.5")]
fn test_printed_form(#[case] source: &str, #[case] printed: &str) {
    assert_eq!(parse_source(source).unwrap().to_string(), printed);
}

#[test]
fn test_tree_shape_of_mixed_expression() {
    let expr = parse_source("1.0 - 2.0 * 3.0 + 4.0").unwrap();

    // 1 - ((2 * 3) + 4)
    assert_expr(&expr)
        .binary(BinaryOp::Sub)
        .left(|l| {
            l.literal(1.0);
        })
        .right(|r| {
            r.binary(BinaryOp::Add)
                .left(|l| {
                    l.binary(BinaryOp::Mul).evaluates_to(6.0);
                })
                .right(|r| {
                    r.literal(4.0);
                });
        })
        .evaluates_to(-9.0);
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert_eq!(evaluate_source("1.0/0.0").unwrap(), f64::INFINITY);
    assert!(evaluate_source("0.0/0.0").unwrap().is_nan());
}

#[test]
fn test_lex_error_wins_over_parse_error() {
    // ")" alone would be a parse error, but '@' is never reached by the parser
    let err = parse_source(") @").unwrap_err();
    match err {
        FrontendError::Lex(lex) => {
            assert_eq!(lex.character, '@');
            assert_eq!(lex.offset, 2);
        }
        other => panic!("expected a lexical error, got {other}"),
    }
}

#[test]
fn test_missing_paren_reports_expectation() {
    let err = parse_source("(1.0+2.0").unwrap_err();
    assert_eq!(
        err,
        FrontendError::Parse(ParseError::UnexpectedEnd {
            expected: Expected::Token(TokenKind::RParen),
        })
    );
    insta::assert_snapshot!(err.to_string(), @"parse error: expected ')', found end of input");
}

#[test]
fn test_trailing_input_is_rejected() {
    let err = parse_source("3.0+2.0)").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"parse error: unexpected ')' ")" at 0:7 after a complete expression"#
    );
}

#[test]
fn test_deep_nesting() {
    let depth = 100;
    let source = format!("{}1.5{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_source(&source).unwrap(), Expr::literal(1.5));
}
