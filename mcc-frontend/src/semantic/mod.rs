//! Semantic Analysis
//!
//! Runs once over a fully parsed program. Globals are checked first, then
//! every function in declaration order: its declarations are validated and
//! then every expression in its body gets a derived type. Declaration
//! violations stop the pass at the first one found; untypeable expressions
//! only get `Type::Error`.

pub mod builtins;
pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod scope;
pub mod statements;

use crate::symbols::{Function, Program};
use log::debug;
use mcc_common::CompilerError;

pub use builtins::{lookup_builtin, BuiltinFunction, BUILTIN_FUNCTIONS};
pub use errors::SemanticError;
pub use scope::{FunctionSignature, Scope};

use expressions::ExpressionAnalyzer;
use statements::StatementAnalyzer;

/// Semantic analyzer context
#[derive(Debug, Default)]
pub struct SemanticAnalyzer;

impl SemanticAnalyzer {
    /// Create a new semantic analyzer
    pub fn new() -> Self {
        Self
    }

    /// Analyze a program, writing derived types into its expressions.
    ///
    /// Running it again over the same program derives the same types.
    pub fn analyze(&mut self, program: &mut Program) -> Result<(), CompilerError> {
        let Program { globals, functions, .. } = program;

        declarations::check_globals(globals)?;

        // Snapshot before any body is walked so calls can refer forward
        let signatures: Vec<FunctionSignature> = functions.iter().map(FunctionSignature::of).collect();

        for (index, function) in functions.iter_mut().enumerate() {
            declarations::check_function(function, &signatures[..index])?;

            debug!("analyzing function {}", function.name);
            let Function { parameters, locals, body, .. } = function;
            let scope = Scope {
                locals: locals.as_slice(),
                parameters: parameters.as_slice(),
                globals: globals.as_slice(),
                functions: &signatures,
            };
            StatementAnalyzer::new(ExpressionAnalyzer::new(scope)).analyze_block(body);
        }

        debug!("semantic analysis done: {} function(s)", functions.len());
        Ok(())
    }
}
