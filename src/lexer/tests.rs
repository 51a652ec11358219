//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Operators and punctuation
//! - Comments
//! - Error cases

use pretty_assertions::assert_eq;

use super::{lexer::tokenize, tokens::{Token, TokenKind}};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let return fn true false if else while"),
        vec![
            TokenKind::Let,
            TokenKind::Return,
            TokenKind::Function,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore letter").unwrap();

    let literals = tokens.iter().map(|token| token.literal.as_str()).collect::<Vec<_>>();
    assert_eq!(literals, vec!["foo", "bar", "baz_123", "_underscore", "letter", ""]);
    assert!(tokens[..5].iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 838383").unwrap();

    assert_eq!(tokens[0], Token::new(TokenKind::Integer, "42"));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "0"));
    assert_eq!(tokens[2], Token::new(TokenKind::Integer, "838383"));
    assert_eq!(tokens[3], Token::eof());
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= == ! != < > + - * / . , ; :"),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(
        kinds("a==b!=!c"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("( ) { } [ ]"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "two words" """#).unwrap();

    assert_eq!(tokens[0], Token::new(TokenKind::String, "hello"));
    assert_eq!(tokens[1], Token::new(TokenKind::String, "two words"));
    assert_eq!(tokens[2], Token::new(TokenKind::String, ""));
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""line\nnext\t\"quoted\" \\ \q""#).unwrap();

    assert_eq!(tokens[0].literal, "line\nnext\t\"quoted\" \\ \\q");
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("let x = 5; // trailing comment\n// full line\nx"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let add = fn(x, y) { x + y; };\nlet result = add(five, ten);";
    let tokens = tokenize(source).unwrap();

    let rendered = tokens
        .iter()
        .map(|token| token.literal.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(
        rendered,
        "let add = fn ( x , y ) { x + y ; } ; let result = add ( five , ten ) ; "
    );
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(tokenize("").unwrap(), vec![Token::eof()]);
    assert_eq!(tokenize("  \n\t ").unwrap(), vec![Token::eof()]);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("let x = 5 @ 3;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_token(), &Token::new(TokenKind::Illegal, "@"));
    assert_eq!(error.to_string(), r#"unrecognised token: "@""#);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize(r#"let s = "open"#).unwrap_err();
    assert_eq!(error.get_token().literal, "\"");
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Integer.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert_eq!(TokenKind::Function.to_string(), "fn");
}
