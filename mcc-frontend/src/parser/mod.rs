//! Recursive Descent Parser
//! 
//! Parses a token stream into a `Program`: global variables, functions and
//! their bodies. The parser owns the token cursor; every grammar rule looks
//! at most one token ahead and there is no backtracking.

pub mod errors;
pub mod declarations;
pub mod statements;
pub mod expressions;

use crate::lexer::{Token, TokenType};
use crate::symbols::{DeclarationEntry, DeclarationKind};
use mcc_common::SourceLocation;
use std::collections::VecDeque;

pub use errors::ParseError;

/// Parser over one complete token stream
pub struct Parser {
    pub(crate) tokens: VecDeque<Token>,
    pub(crate) declarations: Vec<DeclarationEntry>,
    eof: Token,
}

impl Parser {
    /// Create a new parser. The stream is terminated with an `EndOfFile`
    /// sentinel if it does not already end with one.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_location = tokens
            .last()
            .map(|t| t.location.clone())
            .unwrap_or_else(SourceLocation::dummy);
        let eof = Token::eof(eof_location);
        
        let mut tokens: VecDeque<Token> = tokens.into();
        if !matches!(tokens.back().map(|t| &t.token_type), Some(TokenType::EndOfFile)) {
            tokens.push_back(eof.clone());
        }
        
        Self {
            tokens,
            declarations: Vec::new(),
            eof,
        }
    }
    
    /// Peek at current token without consuming
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.front().unwrap_or(&self.eof)
    }
    
    /// Get current token and advance. The cursor never moves past the
    /// end-of-file sentinel.
    pub(crate) fn advance(&mut self) -> Token {
        if self.check(&TokenType::EndOfFile) {
            return self.peek().clone();
        }
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }
    
    /// Check if current token matches expected type
    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        std::mem::discriminant(&self.peek().token_type) == std::mem::discriminant(token_type)
    }
    
    /// Consume token if it matches expected type
    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }
    
    /// Expect and consume a specific token type
    pub(crate) fn expect(&mut self, token_type: TokenType, expected: &str) -> Result<Token, ParseError> {
        if self.check(&token_type) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(expected))
        }
    }
    
    /// Expect an identifier and return its name and token
    pub(crate) fn expect_identifier(&mut self) -> Result<(String, Token), ParseError> {
        let name = match &self.peek().token_type {
            TokenType::Identifier(name) => name.clone(),
            _ => return Err(self.error_expected("identifier")),
        };
        Ok((name, self.advance()))
    }
    
    /// Syntax error at the current token
    pub(crate) fn error_expected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.peek().clone(),
        }
    }
    
    /// Record a declared identifier for the declaration listing
    pub(crate) fn record_declaration(&mut self, kind: DeclarationKind, name: &str, token: &Token) {
        self.declarations.push(DeclarationEntry {
            kind,
            name: name.to_string(),
            location: token.location.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use mcc_common::CompilerError;

    fn parser_for(input: &str) -> Parser {
        let tokens = Lexer::new(input, "test.c").tokenize().unwrap();
        Parser::new(tokens)
    }

    #[test]
    fn test_cursor_peek_does_not_consume() {
        let mut parser = parser_for("int x");
        assert!(parser.check(&TokenType::Int));
        assert!(parser.check(&TokenType::Int));
        assert_eq!(parser.advance().text, "int");
        assert!(parser.check(&TokenType::Identifier(String::new())));
    }

    #[test]
    fn test_cursor_stops_at_end_of_file() {
        let mut parser = parser_for("x");
        parser.advance();
        assert!(parser.check(&TokenType::EndOfFile));
        parser.advance();
        parser.advance();
        assert!(parser.check(&TokenType::EndOfFile));
    }

    #[test]
    fn test_missing_sentinel_is_added() {
        let mut tokens = Lexer::new("x", "test.c").tokenize().unwrap();
        tokens.pop();
        let mut parser = Parser::new(tokens);
        parser.advance();
        assert!(parser.check(&TokenType::EndOfFile));
    }

    #[test]
    fn test_expect_reports_offending_text() {
        let mut parser = parser_for("int x }");
        parser.advance();
        parser.advance();
        let err: CompilerError = parser.expect(TokenType::Semicolon, ";").unwrap_err().into();
        match err {
            CompilerError::SyntaxError { text, expected, location } => {
                assert_eq!(text, "}");
                assert_eq!(expected, ";");
                assert_eq!(location.line, 1);
            }
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }
}
