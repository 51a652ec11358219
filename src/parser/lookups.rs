use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::ExprWrapper, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
    Index,       // a[i] a.b
}

lazy_static! {
    static ref PRECEDENCES: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, Precedence::Equals);
        map.insert(TokenKind::NotEquals, Precedence::Equals);
        map.insert(TokenKind::Less, Precedence::LessGreater);
        map.insert(TokenKind::Greater, Precedence::LessGreater);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Dash, Precedence::Sum);
        map.insert(TokenKind::Slash, Precedence::Product);
        map.insert(TokenKind::Star, Precedence::Product);
        map.insert(TokenKind::OpenParen, Precedence::Call);
        map.insert(TokenKind::OpenBracket, Precedence::Index);
        map.insert(TokenKind::Dot, Precedence::Index);
        map
    };
}

/// Looks up the binding strength of a token kind. Unmapped kinds bind at `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCES.get(&kind).copied().unwrap_or(Precedence::Lowest)
}

pub type PrefixHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type InfixHandler = fn(&mut Parser, ExprWrapper) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.register_prefix(TokenKind::Identifier, parse_identifier);
    parser.register_prefix(TokenKind::Integer, parse_integer_literal);
    parser.register_prefix(TokenKind::String, parse_string_literal);
    parser.register_prefix(TokenKind::True, parse_boolean_literal);
    parser.register_prefix(TokenKind::False, parse_boolean_literal);

    // Unary
    parser.register_prefix(TokenKind::Not, parse_prefix_expr);
    parser.register_prefix(TokenKind::Dash, parse_prefix_expr);

    // Grouping, control flow and composite literals
    parser.register_prefix(TokenKind::OpenParen, parse_grouped_expr);
    parser.register_prefix(TokenKind::If, parse_if_expr);
    parser.register_prefix(TokenKind::While, parse_while_expr);
    parser.register_prefix(TokenKind::Function, parse_function_literal);
    parser.register_prefix(TokenKind::OpenBracket, parse_array_literal);
    parser.register_prefix(TokenKind::OpenCurly, parse_hash_literal);

    // Relational
    parser.register_infix(TokenKind::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::NotEquals, parse_infix_expr);
    parser.register_infix(TokenKind::Less, parse_infix_expr);
    parser.register_infix(TokenKind::Greater, parse_infix_expr);

    // Additive and multiplicative
    parser.register_infix(TokenKind::Plus, parse_infix_expr);
    parser.register_infix(TokenKind::Dash, parse_infix_expr);
    parser.register_infix(TokenKind::Slash, parse_infix_expr);
    parser.register_infix(TokenKind::Star, parse_infix_expr);

    // Call, index and member
    parser.register_infix(TokenKind::OpenParen, parse_call_expr);
    parser.register_infix(TokenKind::OpenBracket, parse_index_expr);
    parser.register_infix(TokenKind::Dot, parse_field_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
