//! Mini C Compiler - Frontend
//!
//! This crate provides the frontend components for the mini C compiler:
//! - Lexer: tokenizes source text
//! - Parser: builds the program's symbol tables and function bodies
//! - AST: expression and statement trees
//! - Semantic analysis: declaration checks and expression types
//! - Listing: declaration and type reports

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod symbols;
pub mod semantic;
pub mod listing;

pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Parser, ParseError};
pub use ast::{
    Block, Expression, ExpressionKind, Statement, StatementKind,
    BinaryOp, UnaryOp
};
pub use symbols::{DeclarationEntry, DeclarationKind, Function, Program, Variable};
pub use semantic::{SemanticAnalyzer, SemanticError};

use mcc_common::CompilerError;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Tokenize source code
    pub fn tokenize_source(source: &str, filename: &str) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source, filename);
        lexer.tokenize()
    }

    /// Parse an already tokenized program
    pub fn parse_tokens(tokens: Vec<Token>) -> Result<Program, CompilerError> {
        let mut parser = Parser::new(tokens);
        parser.parse_program()
    }

    /// Parse source code into a program
    pub fn parse_source(source: &str, filename: &str) -> Result<Program, CompilerError> {
        let tokens = Self::tokenize_source(source, filename)?;
        Self::parse_tokens(tokens)
    }

    /// Parse and analyze source code
    pub fn analyze_source(source: &str, filename: &str) -> Result<Program, CompilerError> {
        let mut program = Self::parse_source(source, filename)?;

        let mut analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&mut program)?;

        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcc_common::Type;

    #[test]
    fn test_frontend_parse_simple_function() {
        let source = r#"
int main() {
    return 42;
}
"#;

        let program = Frontend::parse_source(source, "main.c").unwrap();
        assert_eq!(program.functions.len(), 1);

        let main = &program.functions[0];
        assert_eq!(main.name, "main");
        assert_eq!(main.return_type, Type::Int);
        assert_eq!(main.location.line, 2);
    }

    #[test]
    fn test_frontend_tokenize() {
        let tokens = Frontend::tokenize_source("int x; x = 42;", "main.c").unwrap();

        // int, x, ;, x, =, 42, ;, EOF
        assert_eq!(tokens.len(), 8);
        assert!(matches!(tokens[0].token_type, TokenType::Int));
        assert!(matches!(tokens[1].token_type, TokenType::Identifier(_)));
        assert!(matches!(tokens[4].token_type, TokenType::Equal));
        assert!(matches!(tokens[5].token_type, TokenType::IntLiteral(42)));
        assert!(matches!(tokens[7].token_type, TokenType::EndOfFile));
    }

    #[test]
    fn test_parse_tokens_without_sentinel() {
        let mut tokens = Frontend::tokenize_source("int g;", "main.c").unwrap();
        tokens.pop();

        let program = Frontend::parse_tokens(tokens).unwrap();
        assert_eq!(program.globals.len(), 1);
    }

    #[test]
    fn test_frontend_analyze_types_return_value() {
        let source = r#"
float half(int n) {
    return (float) n / 2;
}
"#;

        let program = Frontend::analyze_source(source, "main.c").unwrap();
        match &program.functions[0].body.statements[0].kind {
            StatementKind::Return(Some(expr)) => assert_eq!(expr.expr_type, Some(Type::Float)),
            other => panic!("Expected return statement, got {:?}", other),
        }
    }
}
