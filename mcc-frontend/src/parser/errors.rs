//! Parse error types
//! 
//! The grammar is LL(1) with no recovery: the first token that does not fit
//! the rule being parsed ends the parse.

use crate::lexer::Token;
use mcc_common::CompilerError;

/// Parse error types specific to the parser
#[derive(Debug, Clone)]
pub enum ParseError {
    UnexpectedToken {
        expected: String,
        found: Token,
    },
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedToken { expected, found } => {
                CompilerError::syntax_error(expected, found.text, found.location)
            }
        }
    }
}
