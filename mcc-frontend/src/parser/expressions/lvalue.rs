//! Lvalue parsing: identifier, optional index, optional assignment or
//! postfix suffix

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::Parser;
use mcc_common::CompilerError;

impl Parser {
    /// Parse the rest of an lvalue whose identifier has been consumed.
    ///
    /// The suffix is checked once: `x = y = 1` only works because the right
    /// side of `=` is itself a full expression.
    pub(crate) fn parse_lvalue(&mut self, name: String, token: Token) -> Result<Expression, CompilerError> {
        let mut target = self.expression(ExpressionKind::Identifier { name }, token.clone());

        if self.match_token(&TokenType::LeftBracket) {
            let index = self.parse_expression()?;
            self.expect(TokenType::RightBracket, "]")?;

            let kind = ExpressionKind::ArrayIndex {
                base: Box::new(target),
                index: Box::new(index),
            };
            target = self.expression(kind, token);
        }

        if let Some(op) = BinaryOp::assignment_from_token(&self.peek().token_type) {
            let op_token = self.advance();
            let value = self.parse_expression()?;
            return Ok(self.binary_expression(op, target, value, op_token));
        }

        let postfix = match self.peek().token_type {
            TokenType::PlusPlus => Some(UnaryOp::PostIncrement),
            TokenType::MinusMinus => Some(UnaryOp::PostDecrement),
            _ => None,
        };
        if let Some(op) = postfix {
            let op_token = self.advance();
            return Ok(self.unary_expression(op, target, op_token));
        }

        Ok(target)
    }
}
