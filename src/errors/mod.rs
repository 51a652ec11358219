//! Error types for the front end.
//!
//! Diagnostics are plain data: the lexer returns one as its `Err`, and the
//! parser collects them in order while it keeps going. Each error carries
//! the token it was raised on and a suggestion for display.

pub mod errors;

#[cfg(test)]
mod tests;
