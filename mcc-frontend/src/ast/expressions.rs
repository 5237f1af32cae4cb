//! Expression AST nodes
//! 
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::{BinaryOp, UnaryOp};
use crate::lexer::Token;
use mcc_common::Type;
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    /// Operator token (literal, identifier, operator or type keyword)
    pub token: Token,
    pub expr_type: Option<Type>, // Filled during semantic analysis
    pub is_array: bool,          // Filled during semantic analysis
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Integer literal
    IntLiteral(i64),
    
    /// Character literal
    CharLiteral(u8),
    
    /// Real literal
    FloatLiteral(f64),
    
    /// String literal
    StringLiteral(String),
    
    /// Identifier reference
    Identifier {
        name: String,
    },
    
    /// Array element `base[index]`
    ArrayIndex {
        base: Box<Expression>,
        index: Box<Expression>,
    },
    
    /// Unary operation or cast
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    
    /// Binary operation or assignment
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    
    /// Ternary conditional operator (condition ? then_expr : else_expr)
    Ternary {
        condition: Box<Expression>,
        then_expr: Box<Expression>,
        else_expr: Box<Expression>,
    },
    
    /// Function call; the callee is the operator token's text
    Call {
        name: String,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// A fresh node with no derived type yet
    pub fn new(kind: ExpressionKind, token: Token) -> Self {
        Self {
            kind,
            token,
            expr_type: None,
            is_array: false,
        }
    }
    
    /// Derived type, treating an unanalyzed node as `Error`
    pub fn derived_type(&self) -> Type {
        self.expr_type.unwrap_or(Type::Error)
    }
}
