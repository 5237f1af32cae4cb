//! Binary expression parsing with operator precedence

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use mcc_common::CompilerError;

type Operand = fn(&mut Parser) -> Result<Expression, CompilerError>;
type Operator = fn(&TokenType) -> Option<BinaryOp>;

impl Parser {
    /// Parse conditional expression.
    ///
    /// Each `?:` wraps the result built so far as its condition, so
    /// `a ? b : c ? d : e` is `(a ? b : c) ? d : e`.
    pub fn parse_conditional_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut condition = self.parse_logical_or_expression()?;

        while self.check(&TokenType::Question) {
            let token = self.advance();
            let then_expr = self.parse_logical_or_expression()?;
            self.expect(TokenType::Colon, ":")?;
            let else_expr = self.parse_logical_or_expression()?;

            let kind = ExpressionKind::Ternary {
                condition: Box::new(condition),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
            };
            condition = self.expression(kind, token);
        }

        Ok(condition)
    }

    /// Parse logical OR expression
    pub fn parse_logical_or_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_logical_and_expression, |t| match t {
            TokenType::PipePipe => Some(BinaryOp::LogicalOr),
            _ => None,
        })
    }

    /// Parse logical AND expression
    pub fn parse_logical_and_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_bitwise_or_expression, |t| match t {
            TokenType::AmpersandAmpersand => Some(BinaryOp::LogicalAnd),
            _ => None,
        })
    }

    /// Parse bitwise OR expression
    pub fn parse_bitwise_or_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_bitwise_and_expression, |t| match t {
            TokenType::Pipe => Some(BinaryOp::BitOr),
            _ => None,
        })
    }

    /// Parse bitwise AND expression
    pub fn parse_bitwise_and_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_equality_expression, |t| match t {
            TokenType::Ampersand => Some(BinaryOp::BitAnd),
            _ => None,
        })
    }

    /// Parse equality expression
    pub fn parse_equality_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_relational_expression, |t| match t {
            TokenType::EqualEqual => Some(BinaryOp::Equal),
            TokenType::BangEqual => Some(BinaryOp::NotEqual),
            _ => None,
        })
    }

    /// Parse relational expression
    pub fn parse_relational_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_additive_expression, |t| match t {
            TokenType::Less => Some(BinaryOp::Less),
            TokenType::Greater => Some(BinaryOp::Greater),
            TokenType::LessEqual => Some(BinaryOp::LessEqual),
            TokenType::GreaterEqual => Some(BinaryOp::GreaterEqual),
            _ => None,
        })
    }

    /// Parse additive expression
    pub fn parse_additive_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_multiplicative_expression, |t| match t {
            TokenType::Plus => Some(BinaryOp::Add),
            TokenType::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    /// Parse multiplicative expression
    pub fn parse_multiplicative_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_left_assoc(Self::parse_unary_expression, |t| match t {
            TokenType::Star => Some(BinaryOp::Mul),
            TokenType::Slash => Some(BinaryOp::Div),
            TokenType::Percent => Some(BinaryOp::Mod),
            _ => None,
        })
    }

    /// One precedence level: operands from the next tighter level, folded
    /// to the left while the current token is one of this level's operators.
    fn parse_left_assoc(&mut self, operand: Operand, operator: Operator) -> Result<Expression, CompilerError> {
        let mut left = operand(self)?;

        while let Some(op) = operator(&self.peek().token_type) {
            let token = self.advance();
            let right = operand(self)?;
            left = self.binary_expression(op, left, right, token);
        }

        Ok(left)
    }
}
