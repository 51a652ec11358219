use tracing::trace;

use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            ArrayLiteral, BooleanLiteral, CallExpr, FieldExpr, FunctionLiteral, HashLiteral,
            Identifier, IfExpr, IndexExpr, InfixExpr, IntegerLiteral, PrefixExpr, StringLiteral,
            WhileExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Pratt loop: parses an expression whose operators all bind tighter than
/// `precedence`.
///
/// Each infix handler parses its right side at its own precedence, so an
/// operator of equal strength ends that side and chains nest to the left.
///
/// Every call counts as one level of nesting, released again on both the
/// success and the error path.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<ExprWrapper, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, precedence);
    parser.leave_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Result<ExprWrapper, Error> {
    let kind = parser.current_token_kind();
    let prefix = parser.prefix_handler(kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::MissingPrefixHandler { kind },
            parser.current_token().clone(),
        )
    })?;

    let mut left = prefix(parser)?;

    while precedence < parser.peek_precedence() {
        let Some(infix) = parser.infix_handler(parser.peek_token_kind()) else {
            break;
        };

        parser.advance();
        trace!(operator = %parser.current_token_kind(), "infix dispatch");
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Ok(ExprWrapper::new(Identifier::from_token(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(ExprWrapper::new(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::MalformedInteger {
                literal: token.literal.clone(),
            },
            token,
        )),
    }
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let value = token.literal.clone();

    Ok(ExprWrapper::new(StringLiteral { token, value }))
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Ok(ExprWrapper::new(BooleanLiteral {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

/// `-x`, `!x`: the operand is parsed at `Prefix`, so only a tighter
/// call or index can bind into it.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        token,
        operator,
        right,
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Ok(ExprWrapper::new(InfixExpr {
        token,
        operator,
        left,
        right,
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `(<condition>)` with the current token just before `(`.
fn parse_condition(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let condition = parse_condition(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_while_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let condition = parse_condition(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(ExprWrapper::new(WhileExpr {
        token,
        condition,
        body,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(ExprWrapper::new(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the current token on `(`, leaving it on `)`.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier::from_token(parser.current_token().clone()));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::from_token(parser.current_token().clone()));
    }

    parser.expect_peek(TokenKind::CloseParen)?;
    Ok(parameters)
}

/// Parses comma-separated expressions up to `end`, with the current token on
/// the opening delimiter.
fn parse_expression_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<ExprWrapper>, Error> {
    let mut list = Vec::new();

    if parser.peek_token_is(end) {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(end)?;
    Ok(list)
}

pub fn parse_call_expr(parser: &mut Parser, function: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expression_list(parser, TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(CallExpr {
        token,
        function,
        arguments,
    }))
}

pub fn parse_array_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let elements = parse_expression_list(parser, TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(ArrayLiteral { token, elements }))
}

pub fn parse_index_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let index = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(IndexExpr { token, left, index }))
}

pub fn parse_field_expr(parser: &mut Parser, object: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let field = Identifier::from_token(parser.current_token().clone());

    Ok(ExprWrapper::new(FieldExpr {
        token,
        object,
        field,
    }))
}

pub fn parse_hash_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let mut pairs = Vec::new();

    while !parser.peek_token_is(TokenKind::CloseCurly) {
        parser.advance();
        let key = parse_expr(parser, Precedence::Lowest)?;

        parser.expect_peek(TokenKind::Colon)?;
        parser.advance();
        let value = parse_expr(parser, Precedence::Lowest)?;

        pairs.push((key, value));

        if !parser.peek_token_is(TokenKind::CloseCurly) {
            parser.expect_peek(TokenKind::Comma)?;
        }
    }

    parser.expect_peek(TokenKind::CloseCurly)?;
    Ok(ExprWrapper::new(HashLiteral { token, pairs }))
}
