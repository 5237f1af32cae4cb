//! Operator definitions
//! 
//! This module defines binary and unary operators used in expressions.

use crate::lexer::TokenType;
use mcc_common::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators, including the assignment forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add, Sub, Mul, Div, Mod,
    
    // Bitwise
    BitAnd, BitOr,
    
    // Logical
    LogicalAnd, LogicalOr,
    
    // Comparison
    Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual,
    
    // Assignment
    Assign, AddAssign, SubAssign, MulAssign, DivAssign,
}

impl BinaryOp {
    /// Assignment-class operator for an lvalue suffix token
    pub fn assignment_from_token(token_type: &TokenType) -> Option<Self> {
        match token_type {
            TokenType::Equal => Some(BinaryOp::Assign),
            TokenType::StarEqual => Some(BinaryOp::MulAssign),
            TokenType::SlashEqual => Some(BinaryOp::DivAssign),
            TokenType::PlusEqual => Some(BinaryOp::AddAssign),
            TokenType::MinusEqual => Some(BinaryOp::SubAssign),
            _ => None,
        }
    }
    
    /// Comparison and logical operators always yield `int`
    pub fn yields_int(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal | BinaryOp::NotEqual | BinaryOp::Less | BinaryOp::Greater
                | BinaryOp::LessEqual | BinaryOp::GreaterEqual
                | BinaryOp::LogicalAnd | BinaryOp::LogicalOr
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
            BinaryOp::MulAssign => "*=",
            BinaryOp::DivAssign => "/=",
        };
        write!(f, "{}", op_str)
    }
}

/// Unary operators, including type casts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    // Arithmetic
    Plus, Minus,
    
    // Bitwise
    BitNot,
    
    // Logical
    LogicalNot,
    
    // Address-of and dereference
    AddressOf, Deref,
    
    // Increment/decrement
    PreIncrement, PreDecrement, PostIncrement, PostDecrement,
    
    /// `(type) operand`
    Cast(Type),
}

impl UnaryOp {
    /// Prefix operator for a token at the start of a unary expression
    pub fn prefix_from_token(token_type: &TokenType) -> Option<Self> {
        match token_type {
            TokenType::Ampersand => Some(UnaryOp::AddressOf),
            TokenType::Star => Some(UnaryOp::Deref),
            TokenType::Plus => Some(UnaryOp::Plus),
            TokenType::Minus => Some(UnaryOp::Minus),
            TokenType::Tilde => Some(UnaryOp::BitNot),
            TokenType::Bang => Some(UnaryOp::LogicalNot),
            TokenType::PlusPlus => Some(UnaryOp::PreIncrement),
            TokenType::MinusMinus => Some(UnaryOp::PreDecrement),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Minus => write!(f, "-"),
            UnaryOp::BitNot => write!(f, "~"),
            UnaryOp::LogicalNot => write!(f, "!"),
            UnaryOp::AddressOf => write!(f, "&"),
            UnaryOp::Deref => write!(f, "*"),
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => write!(f, "++"),
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => write!(f, "--"),
            UnaryOp::Cast(target) => write!(f, "({})", target),
        }
    }
}
