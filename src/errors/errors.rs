use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// A diagnostic produced while tokenizing or parsing.
///
/// Carries the offending token alongside the error kind. The `Display`
/// output is the human-readable message collected by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    token: Token,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        Error {
            internal_error: error_impl,
            token,
        }
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MissingPrefixHandler { .. } => "MissingPrefixHandler",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MalformedInteger { .. } => "MalformedInteger",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MissingPrefixHandler { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::UnexpectedToken { expected, got } => {
                if *got == TokenKind::EOF {
                    ErrorTip::Suggestion(format!("Input ended before `{}`", expected))
                } else {
                    ErrorTip::Suggestion(format!("Unexpected token: `{}`", self.token.literal))
                }
            }
            ErrorImpl::MalformedInteger { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(
                "Split the expression up with `let` bindings".to_string(),
            ),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("no prefix parse function for {kind} found")]
    MissingPrefixHandler { kind: TokenKind },
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    MalformedInteger { literal: String },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
