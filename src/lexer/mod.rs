//! Lexical analysis module.
//!
//! Converts source text into the token stream consumed by the parser:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, integer and string literals
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
