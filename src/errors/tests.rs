//! Unit tests for error handling.
//!
//! This module contains tests for error messages, names and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};

#[test]
fn test_missing_prefix_handler_error() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Semicolon,
        },
        Token::new(TokenKind::Semicolon, ";"),
    );

    assert_eq!(error.get_error_name(), "MissingPrefixHandler");
    assert_eq!(error.to_string(), "no prefix parse function for ; found");
    assert_eq!(error.get_tip().to_string(), "`;` cannot start an expression");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            got: TokenKind::Assignment,
        },
        Token::new(TokenKind::Assignment, "="),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got = instead"
    );
    assert_eq!(error.get_tip().to_string(), "Unexpected token: `=`");
    assert_eq!(error.get_token().kind, TokenKind::Assignment);
}

#[test]
fn test_unexpected_end_of_input_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            got: TokenKind::EOF,
        },
        Token::eof(),
    );

    assert_eq!(error.get_tip().to_string(), "Input ended before `)`");
}

#[test]
fn test_malformed_integer_error() {
    let error = Error::new(
        ErrorImpl::MalformedInteger {
            literal: "99999999999999999999".to_string(),
        },
        Token::new(TokenKind::Integer, "99999999999999999999"),
    );

    assert_eq!(error.get_error_name(), "MalformedInteger");
    assert_eq!(
        error.to_string(),
        r#"could not parse "99999999999999999999" as integer"#
    );
    assert!(matches!(error.get_kind(), ErrorImpl::MalformedInteger { .. }));
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Token::new(TokenKind::Illegal, "@"),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 256 },
        Token::new(TokenKind::Dash, "-"),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nesting exceeds 256 levels");
    assert_eq!(
        error.get_tip().to_string(),
        "Split the expression up with `let` bindings"
    );
}
