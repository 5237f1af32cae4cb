//! Unary expression parsing

use crate::ast::*;
use crate::parser::Parser;
use mcc_common::CompilerError;

impl Parser {
    /// Parse unary expression: prefix operators over a primary expression
    pub fn parse_unary_expression(&mut self) -> Result<Expression, CompilerError> {
        if let Some(op) = UnaryOp::prefix_from_token(&self.peek().token_type) {
            let token = self.advance();
            let operand = self.parse_unary_expression()?;
            return Ok(self.unary_expression(op, operand, token));
        }

        self.parse_primary_expression()
    }
}
