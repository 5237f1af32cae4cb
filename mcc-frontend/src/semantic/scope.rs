//! Name resolution context for one function body

use crate::symbols::{Function, Variable};
use mcc_common::Type;

/// Call signature of a user-defined function, captured before any body is
/// analyzed so calls may refer to functions defined later in the file
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<(Type, bool)>,
}

impl FunctionSignature {
    pub fn of(function: &Function) -> Self {
        Self {
            name: function.name.clone(),
            return_type: function.return_type,
            parameters: function
                .parameters
                .iter()
                .map(|p| (p.var_type, p.is_array))
                .collect(),
        }
    }

    /// Same parameter count, and each parameter's type and array-ness equal
    /// to the argument's
    pub fn accepts(&self, arguments: &[(Type, bool)]) -> bool {
        self.parameters.as_slice() == arguments
    }
}

/// Everything an expression in one function body can refer to
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub locals: &'a [Variable],
    pub parameters: &'a [Variable],
    pub globals: &'a [Variable],
    pub functions: &'a [FunctionSignature],
}

impl<'a> Scope<'a> {
    /// Resolve a variable: locals, then parameters, then globals
    pub fn lookup_variable(&self, name: &str) -> Option<&'a Variable> {
        let find = |table: &'a [Variable]| table.iter().find(|v| v.name == name);
        find(self.locals)
            .or_else(|| find(self.parameters))
            .or_else(|| find(self.globals))
    }

    /// First user function with this name whose parameters fit `arguments`
    pub fn lookup_function(&self, name: &str, arguments: &[(Type, bool)]) -> Option<&'a FunctionSignature> {
        self.functions
            .iter()
            .find(|f| f.name == name && f.accepts(arguments))
    }
}
