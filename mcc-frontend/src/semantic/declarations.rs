//! Declaration invariants
//!
//! Checked in declaration order so the reported identifier is always the
//! later of two clashing declarations.

use crate::semantic::errors::SemanticError;
use crate::semantic::scope::FunctionSignature;
use crate::symbols::{Function, Variable};
use mcc_common::Type;

/// Globals: none void, no name twice. The void check comes first for each
/// variable, so `int x; void x;` reports the void type.
pub fn check_globals(globals: &[Variable]) -> Result<(), SemanticError> {
    for (index, variable) in globals.iter().enumerate() {
        check_not_void(variable)?;
        check_not_redeclared(variable, &globals[..index])?;
    }
    Ok(())
}

/// Locals, then parameters, then the function's name against the functions
/// declared before it
pub fn check_function(function: &Function, earlier: &[FunctionSignature]) -> Result<(), SemanticError> {
    for (index, local) in function.locals.iter().enumerate() {
        check_not_void(local)?;
        check_not_redeclared(local, &function.locals[..index])?;

        if function.parameter(&local.name).is_some() {
            return Err(SemanticError::LocalShadowsParameter {
                name: local.name.clone(),
                location: local.location.clone(),
            });
        }
    }

    for (index, parameter) in function.parameters.iter().enumerate() {
        if parameter.var_type == Type::Void {
            return Err(SemanticError::VoidParameter {
                name: parameter.name.clone(),
                location: parameter.location.clone(),
            });
        }

        if function.parameters[..index].iter().any(|p| p.name == parameter.name) {
            return Err(SemanticError::ParameterRedeclared {
                name: parameter.name.clone(),
                location: parameter.location.clone(),
            });
        }
    }

    if earlier.iter().any(|f| f.name == function.name) {
        return Err(SemanticError::FunctionRedefined {
            name: function.name.clone(),
            location: function.location.clone(),
        });
    }

    Ok(())
}

fn check_not_void(variable: &Variable) -> Result<(), SemanticError> {
    if variable.var_type == Type::Void {
        return Err(SemanticError::VoidVariable {
            name: variable.name.clone(),
            location: variable.location.clone(),
        });
    }
    Ok(())
}

fn check_not_redeclared(variable: &Variable, earlier: &[Variable]) -> Result<(), SemanticError> {
    if earlier.iter().any(|v| v.name == variable.name) {
        return Err(SemanticError::VariableRedeclared {
            name: variable.name.clone(),
            location: variable.location.clone(),
        });
    }
    Ok(())
}
