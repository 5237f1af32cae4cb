//! Statement AST nodes
//! 
//! This module defines statement nodes and statement blocks.

use super::expressions::Expression;
use crate::lexer::Token;
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    /// First token of the statement
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Expression statement
    Expression(Expression),
    
    /// Local variable declaration; the variables live in the function's locals
    Declaration {
        variables: Vec<String>,
    },
    
    /// If statement
    If {
        condition: Expression,
        then_branch: Block,
        else_branch: Option<Block>,
    },
    
    /// For loop, every clause optional
    For {
        init: Option<Expression>,
        condition: Option<Expression>,
        step: Option<Expression>,
        body: Block,
    },
    
    /// While loop
    While {
        condition: Expression,
        body: Block,
    },
    
    /// Do-while loop
    DoWhile {
        body: Block,
        condition: Expression,
    },
    
    /// Break statement
    Break,
    
    /// Continue statement
    Continue,
    
    /// Return statement
    Return(Option<Expression>),
}

/// Ordered statement sequence: a function body or a braced group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }
    
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
