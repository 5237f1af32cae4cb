//! Lexer
//!
//! Tokenizes source text into a stream of tokens terminated by an
//! `EndOfFile` sentinel. Whitespace and comments are dropped here, so the
//! parser only ever sees tokens the grammar can use.

pub mod token;
pub mod literals;
pub mod comments;

pub use token::{Token, TokenType};

use mcc_common::{CompilerError, SourceLocation};
use std::collections::HashMap;

/// Lexer over one source file
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    filename: String,
    keywords: HashMap<String, TokenType>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str, filename: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            filename: filename.to_string(),
            keywords: HashMap::new(),
        };

        lexer.initialize_keywords();
        lexer
    }

    /// Initialize keyword map
    fn initialize_keywords(&mut self) {
        let keywords = [
            ("int", TokenType::Int),
            ("char", TokenType::Char),
            ("float", TokenType::Float),
            ("void", TokenType::Void),
            ("break", TokenType::Break),
            ("continue", TokenType::Continue),
            ("do", TokenType::Do),
            ("else", TokenType::Else),
            ("for", TokenType::For),
            ("if", TokenType::If),
            ("return", TokenType::Return),
            ("while", TokenType::While),
        ];

        for (keyword, token_type) in keywords {
            self.keywords.insert(keyword.to_string(), token_type);
        }
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        if let Some(ch) = self.current_char() {
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(&self.filename, self.line, self.column)
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), CompilerError> {
        loop {
            match (self.current_char(), self.peek_char(1)) {
                (Some(ch), _) if ch.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Tokenize an identifier or keyword
    fn tokenize_identifier(&mut self) -> TokenType {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check if it's a keyword
        if let Some(keyword_token) = self.keywords.get(&identifier) {
            keyword_token.clone()
        } else {
            TokenType::Identifier(identifier)
        }
    }

    /// Consume `next` if it follows, yielding `matched`, otherwise `single`
    fn one_or_two(&mut self, next: char, matched: TokenType, single: TokenType) -> TokenType {
        self.advance();
        if self.current_char() == Some(next) {
            self.advance();
            matched
        } else {
            single
        }
    }

    /// Get next token
    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_trivia()?;

        let start_location = self.current_location();
        let start_position = self.position;

        let token_type = match self.current_char() {
            None => return Ok(Token::eof(start_location)),

            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                self.tokenize_identifier()
            }

            Some(ch) if ch.is_ascii_digit() => {
                self.tokenize_number()?
            }

            Some('\'') => {
                self.tokenize_char_literal()?
            }

            Some('"') => {
                self.tokenize_string_literal()?
            }

            Some('+') => {
                self.advance();
                if self.current_char() == Some('+') {
                    self.advance();
                    TokenType::PlusPlus
                } else if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::PlusEqual
                } else {
                    TokenType::Plus
                }
            }

            Some('-') => {
                self.advance();
                if self.current_char() == Some('-') {
                    self.advance();
                    TokenType::MinusMinus
                } else if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::MinusEqual
                } else {
                    TokenType::Minus
                }
            }

            Some('*') => self.one_or_two('=', TokenType::StarEqual, TokenType::Star),
            Some('/') => self.one_or_two('=', TokenType::SlashEqual, TokenType::Slash),
            Some('&') => self.one_or_two('&', TokenType::AmpersandAmpersand, TokenType::Ampersand),
            Some('|') => self.one_or_two('|', TokenType::PipePipe, TokenType::Pipe),
            Some('!') => self.one_or_two('=', TokenType::BangEqual, TokenType::Bang),
            Some('=') => self.one_or_two('=', TokenType::EqualEqual, TokenType::Equal),
            Some('<') => self.one_or_two('=', TokenType::LessEqual, TokenType::Less),
            Some('>') => self.one_or_two('=', TokenType::GreaterEqual, TokenType::Greater),

            Some('%') => { self.advance(); TokenType::Percent }
            Some('~') => { self.advance(); TokenType::Tilde }
            Some('?') => { self.advance(); TokenType::Question }
            Some(':') => { self.advance(); TokenType::Colon }
            Some('(') => { self.advance(); TokenType::LeftParen }
            Some(')') => { self.advance(); TokenType::RightParen }
            Some('{') => { self.advance(); TokenType::LeftBrace }
            Some('}') => { self.advance(); TokenType::RightBrace }
            Some('[') => { self.advance(); TokenType::LeftBracket }
            Some(']') => { self.advance(); TokenType::RightBracket }
            Some(';') => { self.advance(); TokenType::Semicolon }
            Some(',') => { self.advance(); TokenType::Comma }

            Some(ch) => {
                return Err(CompilerError::lexer_error(
                    format!("Unexpected character: {}", ch),
                    start_location,
                ));
            }
        };

        let text: String = self.input[start_position..self.position].iter().collect();

        Ok(Token::new(token_type, text, start_location))
    }

    /// Tokenize entire input into a vector of tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token_type, TokenType::EndOfFile);
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        log::trace!("{}: {} tokens", self.filename, tokens.len());
        Ok(tokens)
    }
}
