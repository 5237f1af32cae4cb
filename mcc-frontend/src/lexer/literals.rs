//! Literal parsing for the lexer
//! 
//! This module handles parsing of integer, real, character, and string literals.

use crate::lexer::{Lexer, TokenType};
use mcc_common::CompilerError;

impl Lexer {
    /// Tokenize an integer or real literal
    pub fn tokenize_number(&mut self) -> Result<TokenType, CompilerError> {
        let start_location = self.current_location();
        let mut number = String::new();
        
        // Handle hex prefix
        if self.current_char() == Some('0') && matches!(self.peek_char(1), Some('x') | Some('X')) {
            self.advance(); // '0'
            self.advance(); // 'x'
            
            while let Some(ch) = self.current_char() {
                if ch.is_ascii_hexdigit() {
                    number.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
            
            let value = i64::from_str_radix(&number, 16)
                .map_err(|_| CompilerError::lexer_error(
                    format!("Invalid hex literal: 0x{}", number),
                    start_location,
                ))?;
            
            return Ok(TokenType::IntLiteral(value));
        }
        
        self.take_digits(&mut number);
        
        let mut is_real = false;
        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
            is_real = true;
            number.push('.');
            self.advance();
            self.take_digits(&mut number);
        }
        
        if matches!(self.current_char(), Some('e') | Some('E')) {
            let sign = matches!(self.peek_char(1), Some('+') | Some('-'));
            let digit_at = if sign { 2 } else { 1 };
            if self.peek_char(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                is_real = true;
                number.push('e');
                self.advance();
                if sign {
                    if let Some(ch) = self.advance() {
                        number.push(ch);
                    }
                }
                self.take_digits(&mut number);
            }
        }
        
        if is_real {
            let value = number.parse::<f64>()
                .map_err(|_| CompilerError::lexer_error(
                    format!("Invalid real literal: {}", number),
                    start_location,
                ))?;
            return Ok(TokenType::FloatLiteral(value));
        }
        
        let value = number.parse::<i64>()
            .map_err(|_| CompilerError::lexer_error(
                format!("Invalid integer literal: {}", number),
                start_location,
            ))?;
        
        Ok(TokenType::IntLiteral(value))
    }
    
    fn take_digits(&mut self, number: &mut String) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }
    
    /// Decode the character after a backslash
    fn escape_sequence(&mut self, what: &str) -> Result<char, CompilerError> {
        let escaped = match self.current_char() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('\'') => '\'',
            Some('"') => '"',
            Some(c) => {
                return Err(CompilerError::lexer_error(
                    format!("Invalid escape sequence: \\{}", c),
                    self.current_location(),
                ));
            }
            None => {
                return Err(CompilerError::lexer_error(
                    format!("Unterminated {}", what),
                    self.current_location(),
                ));
            }
        };
        self.advance();
        Ok(escaped)
    }
    
    /// Tokenize a character literal. The value must fit in one ASCII byte.
    pub fn tokenize_char_literal(&mut self) -> Result<TokenType, CompilerError> {
        self.advance(); // Skip opening quote
        
        let char_location = self.current_location();
        let ch = match self.current_char() {
            Some('\\') => {
                self.advance(); // Skip backslash
                self.escape_sequence("character literal")?
            }
            Some(ch) if ch != '\'' && ch != '\n' => {
                self.advance();
                ch
            }
            _ => {
                return Err(CompilerError::lexer_error(
                    "Empty character literal".to_string(),
                    self.current_location(),
                ));
            }
        };
        
        if self.current_char() != Some('\'') {
            return Err(CompilerError::lexer_error(
                "Unterminated character literal".to_string(),
                self.current_location(),
            ));
        }
        
        self.advance(); // Skip closing quote
        
        if !ch.is_ascii() {
            return Err(CompilerError::lexer_error(
                format!("Character literal is not ASCII: '{}'", ch),
                char_location,
            ));
        }
        Ok(TokenType::CharLiteral(ch as u8))
    }
    
    /// Tokenize a string literal
    pub fn tokenize_string_literal(&mut self) -> Result<TokenType, CompilerError> {
        self.advance(); // Skip opening quote
        let mut string = String::new();
        
        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(TokenType::StringLiteral(string));
                }
                '\n' => break,
                '\\' => {
                    self.advance(); // Skip backslash
                    string.push(self.escape_sequence("string literal")?);
                }
                _ => {
                    string.push(ch);
                    self.advance();
                }
            }
        }
        
        Err(CompilerError::lexer_error(
            "Unterminated string literal".to_string(),
            self.current_location(),
        ))
    }
}
