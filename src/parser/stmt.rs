use std::collections::HashMap;

use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

pub fn create_stmt_lookups(parser: &mut Parser) {
    parser.register_stmt(TokenKind::Let, parse_let_stmt);
    parser.register_stmt(TokenKind::Return, parse_return_stmt);
}

/// Parses the statement starting at the current token. Anything without a
/// registered statement handler is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(handler) = parser.stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier::from_token(parser.current_token().clone());

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` with the current token on `{`, leaving it on `}`.
/// A block cut short by the end of input ends there.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt { token, statements })
}
