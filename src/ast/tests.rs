//! Unit tests for the AST module.
//!
//! Builds trees by hand and checks token literals, type tags and the
//! canonical rendering.

use pretty_assertions::assert_eq;

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{BlockStmt, ExpressionStmt, LetStmt, Program, ReturnStmt},
};

fn identifier(name: &str) -> Identifier {
    Identifier::from_token(Token::new(TokenKind::Identifier, name))
}

fn integer(value: i64) -> IntegerLiteral {
    IntegerLiteral {
        token: Token::new(TokenKind::Integer, value.to_string()),
        value,
    }
}

#[test]
fn test_let_statement_rendering() {
    let program = Program {
        statements: vec![StmtWrapper::new(LetStmt {
            token: Token::new(TokenKind::Let, "let"),
            name: identifier("myVar"),
            value: ExprWrapper::new(identifier("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_rendering() {
    let stmt = ReturnStmt {
        token: Token::new(TokenKind::Return, "return"),
        value: ExprWrapper::new(integer(5)),
    };

    assert_eq!(stmt.to_string(), "return 5;");
    assert_eq!(stmt.get_stmt_type(), StmtType::ReturnStmt);
}

#[test]
fn test_operator_rendering_is_parenthesized() {
    let negated = PrefixExpr {
        token: Token::new(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: ExprWrapper::new(identifier("a")),
    };
    let product = InfixExpr {
        token: Token::new(TokenKind::Star, "*"),
        operator: "*".to_string(),
        left: ExprWrapper::new(negated.clone()),
        right: ExprWrapper::new(identifier("b")),
    };

    assert_eq!(negated.to_string(), "(-a)");
    assert_eq!(product.to_string(), "((-a) * b)");
    assert_eq!(product.token_literal(), "*");
    assert_eq!(product.get_expr_type(), ExprType::Infix);
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            StmtWrapper::new(ExpressionStmt {
                token: Token::new(TokenKind::Integer, "1"),
                expression: ExprWrapper::new(integer(1)),
            }),
            StmtWrapper::new(ExpressionStmt {
                token: Token::new(TokenKind::Identifier, "x"),
                expression: ExprWrapper::new(identifier("x")),
            }),
        ],
    };

    assert_eq!(program.to_string(), "1x");
    assert_eq!(program.token_literal(), "1");
    assert_eq!(program.len(), 2);
}

#[test]
fn test_block_statement_rendering() {
    let block = BlockStmt {
        token: Token::new(TokenKind::OpenCurly, "{"),
        statements: vec![StmtWrapper::new(ReturnStmt {
            token: Token::new(TokenKind::Return, "return"),
            value: ExprWrapper::new(identifier("x")),
        })],
    };

    assert_eq!(block.to_string(), "return x;");
    assert_eq!(block.get_stmt_type(), StmtType::BlockStmt);
    assert_eq!(block.iter().count(), 1);
}

#[test]
fn test_wrappers_clone_deeply() {
    let original = StmtWrapper::new(LetStmt {
        token: Token::new(TokenKind::Let, "let"),
        name: identifier("x"),
        value: ExprWrapper::new(integer(10)),
    });
    let copy = original.clone();

    assert_eq!(copy.to_string(), original.to_string());
    assert_eq!(copy.get_stmt_type(), StmtType::LetStmt);

    let let_stmt = copy.downcast_ref::<LetStmt>().unwrap();
    assert_eq!(let_stmt.value.downcast_ref::<IntegerLiteral>().unwrap().value, 10);
    assert!(copy.downcast_ref::<ReturnStmt>().is_none());
}
