//! Declared and derived types of the language
//! 
//! The language only knows four concrete scalar types. Array-ness is carried
//! next to the type as a flag by variables and expressions, never inside it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared type, or the type derived for an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Int,
    Char,
    Float,
    Void,
    /// Produced when type derivation fails. Never satisfies a constraint.
    Error,
}

impl Type {
    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Char => write!(f, "char"),
            Type::Float => write!(f, "float"),
            Type::Void => write!(f, "void"),
            Type::Error => write!(f, "error"),
        }
    }
}
