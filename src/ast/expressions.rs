use std::{
    any::Any,
    fmt::{self, Display},
};

use crate::lexer::tokens::Token;

use super::{
    ast::{join, Expr, ExprType, ExprWrapper, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier
/// Names a binding, both in `let` targets and as an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for Identifier {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for IntegerLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Boolean Literal
#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for BooleanLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// String Literal
/// `value` holds the text with escapes already resolved by the lexer.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl Node for StringLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for StringLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// OPERATORS

/// Prefix Expression
/// `<operator><right>`, e.g. `-a` or `!ok`. Renders as `(-a)`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// `<left> <operator> <right>`. Renders as `(a + b)`.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub operator: String,
    pub left: ExprWrapper,
    pub right: ExprWrapper,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for InfixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// CONTROL FLOW

/// If Expression
/// `if (<condition>) { ... } else { ... }`
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for IfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

/// While Expression
/// `while (<condition>) { ... }`
#[derive(Debug, Clone)]
pub struct WhileExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub body: BlockStmt,
}

impl Node for WhileExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for WhileExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::While
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for WhileExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while{} {}", self.condition, self.body)
    }
}

// FUNCTIONS

/// Function Literal
/// `fn(<parameters>) { ... }`
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for FunctionLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            join(&self.parameters),
            self.body
        )
    }
}

/// Call Expression
/// `<function>(<arguments>)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The `(` token
    pub token: Token,
    pub function: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, join(&self.arguments))
    }
}

// COLLECTIONS

/// Array Literal
/// `[<elements>]`
#[derive(Debug, Clone)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<ExprWrapper>,
}

impl Node for ArrayLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for ArrayLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Array
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join(&self.elements))
    }
}

/// Index Expression
/// `<left>[<index>]`. Renders as `(left[index])`.
#[derive(Debug, Clone)]
pub struct IndexExpr {
    /// The `[` token
    pub token: Token,
    pub left: ExprWrapper,
    pub index: ExprWrapper,
}

impl Node for IndexExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for IndexExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Index
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

/// Field Expression
/// `<object>.<field>`, key lookup by name. Renders as `(object.field)`.
#[derive(Debug, Clone)]
pub struct FieldExpr {
    /// The `.` token
    pub token: Token,
    pub object: ExprWrapper,
    pub field: Identifier,
}

impl Node for FieldExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for FieldExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Field
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for FieldExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}.{})", self.object, self.field)
    }
}

/// Hash Literal
/// `{<key>: <value>, ...}`, pairs kept in source order.
#[derive(Debug, Clone)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(ExprWrapper, ExprWrapper)>,
}

impl Node for HashLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Expr for HashLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Hash
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}:{}", key, value))
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}
