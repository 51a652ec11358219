use std::{
    any::Any,
    fmt::{self, Display},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// Root of the tree: the statements of a source file in order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Let Statement
/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: ExprWrapper,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// Return Statement
/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: ExprWrapper,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token_literal(), self.value)
    }
}

/// Expression Statement
/// A bare expression in statement position, e.g. `x + 10;`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Block Statement
/// `{ <statements> }`, the body of conditionals, loops and functions.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
