//! Comment skipping for the lexer

use crate::lexer::Lexer;
use mcc_common::CompilerError;

impl Lexer {
    /// Skip a `//` comment up to (not including) the newline
    pub(crate) fn skip_line_comment(&mut self) {
        self.advance(); // Skip first '/'
        self.advance(); // Skip second '/'
        
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }
    
    /// Skip a `/* */` comment
    pub(crate) fn skip_block_comment(&mut self) -> Result<(), CompilerError> {
        let start_location = self.current_location();
        self.advance(); // Skip '/'
        self.advance(); // Skip '*'
        
        while let Some(ch) = self.current_char() {
            if ch == '*' && self.peek_char(1) == Some('/') {
                self.advance(); // Skip '*'
                self.advance(); // Skip '/'
                return Ok(());
            }
            self.advance();
        }
        
        Err(CompilerError::lexer_error(
            "Unterminated block comment".to_string(),
            start_location,
        ))
    }
}
