//! Built-in function table
//!
//! Standard library calls every program may use without declaring them.
//! They are consulted only after no user function matched a call.

use mcc_common::Type;

/// Signature of one built-in function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinFunction {
    pub name: &'static str,
    /// Parameter types with their array-ness
    pub parameters: &'static [(Type, bool)],
    pub return_type: Type,
}

pub const BUILTIN_FUNCTIONS: &[BuiltinFunction] = &[
    BuiltinFunction { name: "getchar", parameters: &[], return_type: Type::Int },
    BuiltinFunction { name: "putchar", parameters: &[(Type::Int, false)], return_type: Type::Int },
    BuiltinFunction { name: "getint", parameters: &[], return_type: Type::Int },
    BuiltinFunction { name: "putint", parameters: &[(Type::Int, false)], return_type: Type::Void },
    BuiltinFunction { name: "getfloat", parameters: &[], return_type: Type::Float },
    BuiltinFunction { name: "putfloat", parameters: &[(Type::Float, false)], return_type: Type::Float },
    BuiltinFunction { name: "putstring", parameters: &[(Type::Char, true)], return_type: Type::Void },
];

/// Return type of the built-in `name` called with `arguments`, if one matches
pub fn lookup_builtin(name: &str, arguments: &[(Type, bool)]) -> Option<Type> {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|builtin| builtin.name == name && builtin.parameters == arguments)
        .map(|builtin| builtin.return_type)
}
