//! Semantic analysis error definitions
//!
//! Every variant names the offending identifier and where it was declared.
//! The first one found ends the analysis.

use mcc_common::{CompilerError, SourceLocation};

/// Declaration invariants the analyzer enforces
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticError {
    VoidVariable {
        name: String,
        location: SourceLocation,
    },
    VariableRedeclared {
        name: String,
        location: SourceLocation,
    },
    LocalShadowsParameter {
        name: String,
        location: SourceLocation,
    },
    VoidParameter {
        name: String,
        location: SourceLocation,
    },
    ParameterRedeclared {
        name: String,
        location: SourceLocation,
    },
    FunctionRedefined {
        name: String,
        location: SourceLocation,
    },
}

impl SemanticError {
    /// Diagnostic text printed under the location line
    pub fn message(&self) -> &'static str {
        match self {
            SemanticError::VoidVariable { .. } => "variables cannot have type void",
            SemanticError::VariableRedeclared { .. } => "variable redeclared",
            SemanticError::LocalShadowsParameter { .. } => {
                "variable cannot have the same name as a parameter"
            }
            SemanticError::VoidParameter { .. } => "parameters cannot have type void",
            SemanticError::ParameterRedeclared { .. } => "parameter redeclared",
            SemanticError::FunctionRedefined { .. } => "function with the same name already exists",
        }
    }
}

impl From<SemanticError> for CompilerError {
    fn from(err: SemanticError) -> Self {
        let message = err.message().to_string();
        match err {
            SemanticError::VoidVariable { name, location }
            | SemanticError::VariableRedeclared { name, location }
            | SemanticError::LocalShadowsParameter { name, location }
            | SemanticError::VoidParameter { name, location }
            | SemanticError::ParameterRedeclared { name, location }
            | SemanticError::FunctionRedefined { name, location } => {
                CompilerError::semantic_error(message, name, location)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_identifier_and_location() {
        let err: CompilerError = SemanticError::VariableRedeclared {
            name: "a".to_string(),
            location: SourceLocation::new("prog.c", 4, 5),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Type checking error in file prog.c line 4 at text a\n\tvariable redeclared"
        );
    }

    #[test]
    fn test_messages() {
        let location = SourceLocation::dummy();
        let shadow = SemanticError::LocalShadowsParameter { name: "p".to_string(), location: location.clone() };
        let function = SemanticError::FunctionRedefined { name: "f".to_string(), location };

        assert_eq!(shadow.message(), "variable cannot have the same name as a parameter");
        assert_eq!(function.message(), "function with the same name already exists");
    }
}
