//! Error handling for the mini C compiler
//!
//! Every phase reports the first problem it finds and stops. Syntax and
//! semantic errors render exactly like the diagnostics the driver prints
//! before exiting with a failure status.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Lexer error in file {} line {}: {}", .location.filename, .location.line, .message)]
    LexError {
        location: SourceLocation,
        message: String,
    },

    /// The current token is not what the grammar rule requires
    #[error(
        "Parser error in file {} line {} at text {}\n\tExpected '{}'",
        .location.filename, .location.line, .text, .expected
    )]
    SyntaxError {
        location: SourceLocation,
        text: String,
        expected: String,
    },

    /// A declaration violates one of the program invariants
    #[error(
        "Type checking error in file {} line {} at text {}\n\t{}",
        .location.filename, .location.line, .text, .message
    )]
    SemanticError {
        location: SourceLocation,
        text: String,
        message: String,
    },

    /// A listing file could not be created or written
    #[error("\tCouldn't open file for output: {path}")]
    OutputError { path: String, message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl CompilerError {
    /// Create a lexer error
    pub fn lexer_error(message: String, location: SourceLocation) -> Self {
        CompilerError::LexError { location, message }
    }

    /// Create a syntax error for the offending token text
    pub fn syntax_error(expected: String, text: String, location: SourceLocation) -> Self {
        CompilerError::SyntaxError { location, text, expected }
    }

    /// Create a semantic error for the offending identifier
    pub fn semantic_error(message: String, text: String, location: SourceLocation) -> Self {
        CompilerError::SemanticError { location, text, message }
    }

    /// Location of the offending text, if the error has one
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            CompilerError::LexError { location, .. }
            | CompilerError::SyntaxError { location, .. }
            | CompilerError::SemanticError { location, .. } => Some(location),
            CompilerError::OutputError { .. } | CompilerError::IoError { .. } => None,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_rendering() {
        let err = CompilerError::syntax_error(
            ";".to_string(),
            "}".to_string(),
            SourceLocation::new("test.c", 3, 7),
        );
        assert_eq!(
            err.to_string(),
            "Parser error in file test.c line 3 at text }\n\tExpected ';'"
        );
    }

    #[test]
    fn test_semantic_error_rendering() {
        let err = CompilerError::semantic_error(
            "variable redeclared".to_string(),
            "a".to_string(),
            SourceLocation::new("test.c", 1, 12),
        );
        assert_eq!(
            err.to_string(),
            "Type checking error in file test.c line 1 at text a\n\tvariable redeclared"
        );
        assert_eq!(err.location().map(|l| l.line), Some(1));
    }

    #[test]
    fn test_output_error_has_no_location() {
        let err = CompilerError::OutputError {
            path: "/nope/out.txt".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert!(err.location().is_none());
        assert_eq!(err.to_string(), "\tCouldn't open file for output: /nope/out.txt");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: CompilerError = io.into();
        assert_eq!(err, CompilerError::IoError { message: "boom".to_string() });
    }
}
