//! Parser driver for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. It owns the token stream,
//! exposes a two-token window over it (`current` and `peek`) and holds the
//! lookup tables that map token kinds to parsing handlers:
//! - Statement handlers
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for tokens that continue one
//!
//! Binding strength comes from the static precedence table in `lookups`.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{
        create_token_lookups, precedence_of, InfixHandler, InfixLookup, Precedence,
        PrefixHandler, PrefixLookup,
    },
    stmt::{create_stmt_lookups, parse_stmt, StmtHandler, StmtLookup},
};

/// How many expressions may be open at once before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// The parser exclusively owns its tokens. Handlers leave `current` on the
/// last token of whatever they parsed; the driver steps past it.
pub struct Parser {
    /// The tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Number of expressions currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
}

impl Parser {
    /// Creates a parser with empty lookup tables.
    ///
    /// A missing trailing `EOF` token is supplied.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            tokens.push(Token::eof());
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
        }
    }

    /// Creates a parser with the language's full grammar registered.
    pub fn with_default_lookups(tokens: Vec<Token>) -> Self {
        let mut parser = Parser::new(tokens);
        create_stmt_lookups(&mut parser);
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one. At the end of input this is `EOF`.
    pub fn peek_token(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token().kind
    }

    /// Moves the window one token forward. Stays put on `EOF`.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token_kind() == kind
    }

    /// Advances if the next token is of the expected kind.
    ///
    /// # Returns
    ///
    /// An `UnexpectedToken` error naming both kinds if it is not; the window
    /// is left where it was.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    got: self.peek_token_kind(),
                },
                self.peek_token().clone(),
            ))
        }
    }

    /// Opens one more level of expression nesting.
    ///
    /// # Returns
    ///
    /// A `NestingTooDeep` error at the current token once
    /// `MAX_NESTING_DEPTH` levels are open; the depth is left unchanged.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_token().clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Closes a level opened by `enter_nesting`.
    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current_token_kind())
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token_kind())
    }

    /// Returns the statement handler registered for a token kind.
    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Returns the prefix handler registered for a token kind.
    pub fn prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    /// Returns the infix handler registered for a token kind.
    pub fn infix_handler(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Registers a statement handler for a token, replacing any previous one.
    pub fn register_stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a prefix handler for a token, replacing any previous one.
    pub fn register_prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler for a token, replacing any previous one.
    ///
    /// The operator's binding strength is taken from the precedence table;
    /// a kind the table does not know binds at `Lowest` and never continues
    /// an expression.
    pub fn register_infix(&mut self, kind: TokenKind, infix_fn: InfixHandler) {
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Parses every statement up to `EOF`.
    ///
    /// A statement that fails is dropped and its error recorded; parsing
    /// resumes at the following token.
    ///
    /// # Returns
    ///
    /// The program together with the errors in the order they were raised.
    /// Any error means the program must not be evaluated.
    pub fn parse_program(&mut self) -> (Program, Vec<Error>) {
        let mut program = Program::default();
        let mut errors = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            trace!(token = %self.current_token(), "parsing statement");
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(%error, "dropping statement");
                    errors.push(error);
                    // A terminator right after the failure belongs to the dropped statement
                    if self.peek_token_is(TokenKind::Semicolon) {
                        self.advance();
                    }
                }
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = errors.len(),
            "parsed program"
        );
        (program, errors)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// registers the default grammar, and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The root Program, holding every statement that parsed cleanly
/// - The collected errors, empty on success
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Error>) {
    Parser::with_default_lookups(tokens).parse_program()
}
