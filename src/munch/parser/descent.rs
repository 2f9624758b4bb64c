//! The three grammar levels and the token-consuming primitive

use crate::munch::ast::Expr;
use crate::munch::error::{Expected, ParseError};
use crate::munch::lexer::{Token, TokenKind, TokenSequence};

/// A parsed value together with the input that follows it
type Step<T> = Result<(T, TokenSequence), ParseError>;

/// Parse a whole token sequence as one sum-level expression.
///
/// Every token must be used; a leftover token is an error.
pub fn parse(tokens: &TokenSequence) -> Result<Expr, ParseError> {
    log::debug!("parsing {} tokens", tokens.len());
    let (expr, rest) = parse_sum(tokens)?;

    match rest.current() {
        None => Ok(expr),
        Some(token) => Err(ParseError::TrailingToken {
            found: token.kind,
            lexeme: token.lexeme.clone(),
            position: token.position,
        }),
    }
}

/// Take the lookahead token if it is `expected`
pub fn consume(tokens: &TokenSequence, expected: TokenKind) -> Step<Token> {
    match tokens.current() {
        Some(token) if token.kind == expected => {
            log::trace!("consume {:?} {:?}", token.kind, token.lexeme);
            Ok((token.clone(), tokens.advance()))
        }
        Some(token) => Err(ParseError::UnexpectedToken {
            expected: Expected::Token(expected),
            found: token.kind,
            lexeme: token.lexeme.clone(),
            position: token.position,
        }),
        None => Err(ParseError::UnexpectedEnd {
            expected: Expected::Token(expected),
        }),
    }
}

/// sum := product (('+' | '-') sum)?
fn parse_sum(tokens: &TokenSequence) -> Step<Expr> {
    let (product, rest) = parse_product(tokens)?;

    match rest.current().map(|t| t.kind) {
        Some(kind) if kind.is_additive() => {
            let (_, rest) = consume(&rest, kind)?;
            let (sum, rest) = parse_sum(&rest)?;
            let expr = match kind {
                TokenKind::Plus => Expr::add(product, sum),
                _ => Expr::sub(product, sum),
            };
            Ok((expr, rest))
        }
        _ => Ok((product, rest)),
    }
}

/// product := literal (('*' | '/') product)?
fn parse_product(tokens: &TokenSequence) -> Step<Expr> {
    let (literal, rest) = parse_literal(tokens)?;

    match rest.current().map(|t| t.kind) {
        Some(kind) if kind.is_multiplicative() => {
            let (_, rest) = consume(&rest, kind)?;
            let (product, rest) = parse_product(&rest)?;
            let expr = match kind {
                TokenKind::Times => Expr::mul(literal, product),
                _ => Expr::div(literal, product),
            };
            Ok((expr, rest))
        }
        _ => Ok((literal, rest)),
    }
}

/// literal := NUM | '(' sum ')'
fn parse_literal(tokens: &TokenSequence) -> Step<Expr> {
    match tokens.current() {
        Some(token) if token.kind == TokenKind::Num => {
            let (num, rest) = consume(tokens, TokenKind::Num)?;
            let value = num
                .lexeme
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber {
                    lexeme: num.lexeme.clone(),
                    position: num.position,
                })?;
            Ok((Expr::literal(value), rest))
        }
        Some(token) if token.kind == TokenKind::LParen => {
            let (_, rest) = consume(tokens, TokenKind::LParen)?;
            let (inner, rest) = parse_sum(&rest)?;
            let (_, rest) = consume(&rest, TokenKind::RParen)?;
            Ok((inner, rest))
        }
        Some(token) => Err(ParseError::UnexpectedToken {
            expected: Expected::Operand,
            found: token.kind,
            lexeme: token.lexeme.clone(),
            position: token.position,
        }),
        None => Err(ParseError::UnexpectedEnd {
            expected: Expected::Operand,
        }),
    }
}
