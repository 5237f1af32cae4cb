//! Statement parsing
//!
//! Statements are parsed into the block that owns them. The function being
//! built is passed down explicitly so local declarations land in its locals.

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::Parser;
use crate::symbols::{DeclarationKind, Function};
use mcc_common::CompilerError;

impl Parser {
    /// Parse statements into `block` until a closing brace.
    ///
    /// An empty statement (`;`) is consumed and ends this call early. Callers
    /// that loop until `}` simply resume, but a function body does not, so
    /// `int f() { ; return 0; }` is rejected at `return`.
    pub fn parse_statements(
        &mut self,
        function: &mut Function,
        block: &mut Block,
    ) -> Result<(), CompilerError> {
        while !self.check(&TokenType::RightBrace) {
            let token = self.peek().clone();

            if token.token_type == TokenType::Semicolon {
                self.advance();
                return Ok(());
            }

            if let Some(declared_type) = token.token_type.as_type() {
                self.advance();
                let (name, name_token) = self.expect_identifier()?;
                let variables = self.parse_variable_declaration(
                    DeclarationKind::LocalVariable,
                    declared_type,
                    name,
                    name_token,
                    &mut function.locals,
                )?;
                let statement = self.statement(StatementKind::Declaration { variables }, token);
                block.push(statement);
                continue;
            }

            let statement = self.parse_statement(function)?;
            block.push(statement);
        }

        Ok(())
    }

    /// Parse one statement that is neither empty nor a declaration
    pub fn parse_statement(&mut self, function: &mut Function) -> Result<Statement, CompilerError> {
        let token = self.peek().clone();

        let kind = match &token.token_type {
            TokenType::Break => {
                self.advance();
                self.expect(TokenType::Semicolon, ";")?;
                StatementKind::Break
            }
            TokenType::Continue => {
                self.advance();
                self.expect(TokenType::Semicolon, ";")?;
                StatementKind::Continue
            }
            TokenType::Return => {
                self.advance();
                self.parse_return_statement()?
            }
            TokenType::If => {
                self.advance();
                self.parse_if_statement(function)?
            }
            TokenType::For => {
                self.advance();
                self.parse_for_statement(function)?
            }
            TokenType::While => {
                self.advance();
                self.parse_while_statement(function)?
            }
            TokenType::Do => {
                self.advance();
                self.parse_do_while_statement(function)?
            }
            _ => {
                let expr = self.parse_expression()?;
                self.expect(TokenType::Semicolon, ";")?;
                StatementKind::Expression(expr)
            }
        };

        Ok(self.statement(kind, token))
    }

    /// A braced group, or exactly one statement
    pub fn parse_statement_or_block(&mut self, function: &mut Function) -> Result<Block, CompilerError> {
        let mut block = Block::new();

        if self.match_token(&TokenType::LeftBrace) {
            while !self.check(&TokenType::RightBrace) {
                self.parse_statements(function, &mut block)?;
            }
            self.advance();
        } else if self.match_token(&TokenType::Semicolon) {
            // empty body
        } else {
            let statement = self.parse_statement(function)?;
            block.push(statement);
        }

        Ok(block)
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<StatementKind, CompilerError> {
        let value = if self.check(&TokenType::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(TokenType::Semicolon, ";")?;
        Ok(StatementKind::Return(value))
    }

    /// Parse if statement
    fn parse_if_statement(&mut self, function: &mut Function) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::LeftParen, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::RightParen, ")")?;

        let then_branch = self.parse_statement_or_block(function)?;

        let else_branch = if self.match_token(&TokenType::Else) {
            Some(self.parse_statement_or_block(function)?)
        } else {
            None
        };

        Ok(StatementKind::If { condition, then_branch, else_branch })
    }

    /// Parse for statement
    fn parse_for_statement(&mut self, function: &mut Function) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::LeftParen, "(")?;

        let init = self.parse_optional_expression(&TokenType::Semicolon)?;
        self.expect(TokenType::Semicolon, ";")?;

        let condition = self.parse_optional_expression(&TokenType::Semicolon)?;
        self.expect(TokenType::Semicolon, ";")?;

        let step = self.parse_optional_expression(&TokenType::RightParen)?;
        self.expect(TokenType::RightParen, ")")?;

        let body = self.parse_statement_or_block(function)?;

        Ok(StatementKind::For { init, condition, step, body })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self, function: &mut Function) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::LeftParen, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::RightParen, ")")?;

        let body = self.parse_statement_or_block(function)?;

        Ok(StatementKind::While { condition, body })
    }

    /// Parse do-while statement
    fn parse_do_while_statement(&mut self, function: &mut Function) -> Result<StatementKind, CompilerError> {
        let body = self.parse_statement_or_block(function)?;

        self.expect(TokenType::While, "while")?;
        self.expect(TokenType::LeftParen, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::RightParen, ")")?;
        self.expect(TokenType::Semicolon, ";")?;

        Ok(StatementKind::DoWhile { body, condition })
    }

    /// An expression, unless the next token is `terminator`
    fn parse_optional_expression(
        &mut self,
        terminator: &TokenType,
    ) -> Result<Option<Expression>, CompilerError> {
        if self.check(terminator) {
            Ok(None)
        } else {
            self.parse_expression().map(Some)
        }
    }

    fn statement(&self, kind: StatementKind, token: Token) -> Statement {
        Statement {
            kind,
            token,
        }
    }
}
