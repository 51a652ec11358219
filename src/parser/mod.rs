//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, calls, indexing,
//!   literals, conditionals, loops and function literals)
//! - Error collection without stopping the parse
//!
//! Every token kind maps to at most one prefix and one infix handler, and
//! operator strength comes from a single precedence table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
