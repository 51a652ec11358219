/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node traits, type tags and the boxed wrappers
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes and the `Program` root
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
