#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod object;
pub mod parser;
