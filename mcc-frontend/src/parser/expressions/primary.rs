//! Primary expression parsing

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use mcc_common::CompilerError;

impl Parser {
    /// Parse primary expression: literals, identifiers, calls, casts and
    /// parenthesized expressions
    pub fn parse_primary_expression(&mut self) -> Result<Expression, CompilerError> {
        let token = self.advance();

        let kind = match token.token_type.clone() {
            TokenType::IntLiteral(value) => ExpressionKind::IntLiteral(value),
            TokenType::CharLiteral(value) => ExpressionKind::CharLiteral(value),
            TokenType::FloatLiteral(value) => ExpressionKind::FloatLiteral(value),
            TokenType::StringLiteral(value) => ExpressionKind::StringLiteral(value),
            TokenType::Identifier(name) => {
                return if self.check(&TokenType::LeftParen) {
                    self.parse_call(name, token)
                } else {
                    self.parse_lvalue(name, token)
                };
            }
            TokenType::LeftParen => return self.parse_parenthesized(),
            _ => {
                return Err(ParseError::UnexpectedToken {
                    expected: "identifier (within expression)".to_string(),
                    found: token,
                }
                .into());
            }
        };

        Ok(self.expression(kind, token))
    }

    /// After `(`: a cast if a type keyword follows, otherwise a grouped
    /// expression
    fn parse_parenthesized(&mut self) -> Result<Expression, CompilerError> {
        if let Some(target) = self.peek().token_type.as_type() {
            let type_token = self.advance();
            self.expect(TokenType::RightParen, ")")?;
            let operand = self.parse_unary_expression()?;
            return Ok(self.unary_expression(UnaryOp::Cast(target), operand, type_token));
        }

        let expr = self.parse_expression()?;
        self.expect(TokenType::RightParen, ")")?;
        Ok(expr)
    }

    /// Parse the argument list of a call to `name`
    fn parse_call(&mut self, name: String, token: Token) -> Result<Expression, CompilerError> {
        self.expect(TokenType::LeftParen, "(")?;

        let mut arguments = Vec::new();
        if !self.check(&TokenType::RightParen) {
            arguments.push(self.parse_expression()?);
            while self.match_token(&TokenType::Comma) {
                arguments.push(self.parse_expression()?);
            }
        }
        self.expect(TokenType::RightParen, ")")?;

        Ok(self.expression(ExpressionKind::Call { name, arguments }, token))
    }
}
