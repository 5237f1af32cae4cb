//! Declaration and function parsing
//!
//! Top level is a sequence of `type identifier` heads. A `(` after the head
//! makes it a function definition, anything else a global variable
//! declaration handled by the shared declarator-list rule.

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::Parser;
use crate::symbols::{DeclarationKind, Function, Program, Variable};
use log::debug;
use mcc_common::{CompilerError, Type};

impl Parser {
    /// Parse a complete program up to the end-of-file sentinel
    pub fn parse_program(&mut self) -> Result<Program, CompilerError> {
        let mut program = Program::new();

        while !self.check(&TokenType::EndOfFile) {
            self.parse_top_level_item(&mut program)?;
        }

        program.declarations = std::mem::take(&mut self.declarations);

        debug!(
            "parsed {} global variable(s) and {} function(s)",
            program.globals.len(),
            program.functions.len()
        );
        Ok(program)
    }

    /// Parse a top-level item (function definition or global declaration)
    fn parse_top_level_item(&mut self, program: &mut Program) -> Result<(), CompilerError> {
        let declared_type = self.parse_type_keyword("function or global declaration")?;
        let (name, name_token) = self.expect_identifier()?;

        if self.match_token(&TokenType::LeftParen) {
            self.record_declaration(DeclarationKind::Function, &name, &name_token);
            let function = self.parse_function_definition(declared_type, name, name_token)?;
            program.functions.push(function);
        } else {
            self.parse_variable_declaration(
                DeclarationKind::GlobalVariable,
                declared_type,
                name,
                name_token,
                &mut program.globals,
            )?;
        }

        Ok(())
    }

    /// Consume a type keyword and return the type it names
    pub(crate) fn parse_type_keyword(&mut self, expected: &str) -> Result<Type, CompilerError> {
        match self.peek().token_type.as_type() {
            Some(declared_type) => {
                self.advance();
                Ok(declared_type)
            }
            None => Err(self.error_expected(expected).into()),
        }
    }

    /// Parse the rest of a function definition after its opening `(`
    fn parse_function_definition(
        &mut self,
        return_type: Type,
        name: String,
        name_token: Token,
    ) -> Result<Function, CompilerError> {
        let mut function = Function::new(return_type, name, name_token.location);

        self.parse_formal_parameters(&mut function)?;
        self.expect(TokenType::RightParen, ")")?;

        self.expect(TokenType::LeftBrace, "{")?;
        let mut body = Block::new();
        self.parse_statements(&mut function, &mut body)?;
        self.expect(TokenType::RightBrace, "}")?;
        function.body = body;

        debug!(
            "function {}: {} parameter(s), {} local(s), {} statement(s)",
            function.name,
            function.parameters.len(),
            function.locals.len(),
            function.body.len()
        );
        Ok(function)
    }

    /// Parse `type name[]?` parameters separated by commas, up to `)`
    fn parse_formal_parameters(&mut self, function: &mut Function) -> Result<(), CompilerError> {
        while !self.check(&TokenType::RightParen) {
            let param_type = self.parse_type_keyword("type")?;
            let (name, token) = self.expect_identifier()?;
            self.record_declaration(DeclarationKind::Parameter, &name, &token);

            let mut parameter = Variable::new(param_type, name, token.location);
            if self.match_token(&TokenType::LeftBracket) {
                parameter.is_array = true;
                self.expect(TokenType::RightBracket, "]")?;
            }
            function.parameters.push(parameter);

            if !self.match_token(&TokenType::Comma) && !self.check(&TokenType::RightParen) {
                return Err(self.error_expected(")").into());
            }
        }

        Ok(())
    }

    /// Shared declarator-list rule for globals and locals.
    ///
    /// The first declarator's name has already been consumed. Each declared
    /// name is recorded into `variables` before its `[n]` suffix is read, so
    /// the suffix only flips `is_array` on the entry just pushed. Returns the
    /// declared names in order.
    pub(crate) fn parse_variable_declaration(
        &mut self,
        kind: DeclarationKind,
        declared_type: Type,
        first_name: String,
        first_token: Token,
        variables: &mut Vec<Variable>,
    ) -> Result<Vec<String>, CompilerError> {
        self.record_declaration(kind, &first_name, &first_token);
        variables.push(Variable::new(declared_type, first_name.clone(), first_token.location));
        let mut names = vec![first_name];

        loop {
            match self.peek().token_type {
                TokenType::Semicolon => {
                    self.advance();
                    return Ok(names);
                }
                TokenType::Comma => {
                    self.advance();
                    let (name, token) = self.expect_identifier()?;
                    self.record_declaration(kind, &name, &token);
                    variables.push(Variable::new(declared_type, name.clone(), token.location));
                    names.push(name);
                }
                TokenType::LeftBracket => {
                    self.advance();
                    if let Some(last) = variables.last_mut() {
                        last.is_array = true;
                    }
                    // The length is checked for shape only and not kept
                    self.expect(TokenType::IntLiteral(0), "integer literal")?;
                    self.expect(TokenType::RightBracket, "]")?;
                }
                _ => return Err(self.error_expected(";").into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Result<Program, CompilerError> {
        let tokens = Lexer::new(input, "test.c").tokenize()?;
        Parser::new(tokens).parse_program()
    }

    fn expected_of(err: CompilerError) -> String {
        match err {
            CompilerError::SyntaxError { expected, .. } => expected,
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_global_declarator_list() {
        let program = parse("float a, b, c;").unwrap();
        let names: Vec<_> = program.globals.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(program.globals.iter().all(|v| v.var_type == Type::Float));
        assert!(program.globals.iter().all(|v| !v.is_array));
    }

    #[test]
    fn test_array_declarators() {
        let program = parse("int a[10], b, c[0];").unwrap();
        let arrays: Vec<_> = program.globals.iter().map(|v| v.is_array).collect();
        assert_eq!(arrays, vec![true, false, true]);
    }

    #[test]
    fn test_array_length_must_be_integer_literal() {
        let err = parse("int a[n];").unwrap_err();
        assert_eq!(expected_of(err), "integer literal");
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse("int a int b;").unwrap_err();
        assert_eq!(expected_of(err), ";");
    }

    #[test]
    fn test_top_level_requires_type() {
        let err = parse("x = 3;").unwrap_err();
        assert_eq!(expected_of(err), "function or global declaration");
    }

    #[test]
    fn test_function_parameters() {
        let program = parse("void f(int a, char s[], float x) { }").unwrap();
        assert_eq!(program.functions.len(), 1);

        let f = &program.functions[0];
        assert_eq!(f.name, "f");
        assert_eq!(f.return_type, Type::Void);
        let params: Vec<_> = f
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.var_type, p.is_array))
            .collect();
        assert_eq!(
            params,
            vec![("a", Type::Int, false), ("s", Type::Char, true), ("x", Type::Float, false)]
        );
    }

    #[test]
    fn test_parameter_needs_type() {
        let err = parse("int f(a) { }").unwrap_err();
        assert_eq!(expected_of(err), "type");
    }

    #[test]
    fn test_functions_in_source_order() {
        let program = parse("int a() { } char b() { } float c() { }").unwrap();
        let names: Vec<_> = program.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_declaration_record_order() {
        let program = parse("int g;\nint f(int p) {\n  int l, m[2];\n}").unwrap();
        let records: Vec<_> = program
            .declarations
            .iter()
            .map(|d| (d.kind, d.name.as_str(), d.location.line))
            .collect();
        assert_eq!(
            records,
            vec![
                (DeclarationKind::GlobalVariable, "g", 1),
                (DeclarationKind::Function, "f", 2),
                (DeclarationKind::Parameter, "p", 2),
                (DeclarationKind::LocalVariable, "l", 3),
                (DeclarationKind::LocalVariable, "m", 3),
            ]
        );
    }
}
