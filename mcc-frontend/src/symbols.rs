//! Symbol tables
//!
//! The program owns its global variables and functions; each function owns
//! its parameters, locals and body. Tables are append-only while parsing and
//! looked up by linear scan, which keeps declaration order for diagnostics.

use crate::ast::Block;
use mcc_common::{CompilerError, SourceLocation, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared variable: global, parameter or local
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub var_type: Type,
    pub name: String,
    pub location: SourceLocation,
    pub is_array: bool,
}

impl Variable {
    pub fn new(var_type: Type, name: String, location: SourceLocation) -> Self {
        Self {
            var_type,
            name,
            location,
            is_array: false,
        }
    }
}

/// A function definition with its own symbol tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub return_type: Type,
    pub name: String,
    pub location: SourceLocation,
    pub parameters: Vec<Variable>,
    pub locals: Vec<Variable>,
    pub body: Block,
}

impl Function {
    pub fn new(return_type: Type, name: String, location: SourceLocation) -> Self {
        Self {
            return_type,
            name,
            location,
            parameters: Vec::new(),
            locals: Vec::new(),
            body: Block::new(),
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&Variable> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// What kind of identifier a declaration listing entry names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    GlobalVariable,
    GlobalStruct,
    Function,
    Parameter,
    LocalVariable,
    LocalStruct,
    Member,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::GlobalVariable => write!(f, "global variable"),
            DeclarationKind::GlobalStruct => write!(f, "global struct"),
            DeclarationKind::Function => write!(f, "function"),
            DeclarationKind::Parameter => write!(f, "parameter"),
            DeclarationKind::LocalVariable => write!(f, "local variable"),
            DeclarationKind::LocalStruct => write!(f, "local struct"),
            DeclarationKind::Member => write!(f, "member"),
        }
    }
}

/// One declared identifier, in the order the parser met it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationEntry {
    pub kind: DeclarationKind,
    pub name: String,
    pub location: SourceLocation,
}

/// A parsed compilation unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub globals: Vec<Variable>,
    pub functions: Vec<Function>,
    pub declarations: Vec<DeclarationEntry>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON of the whole program, derived types included
    pub fn to_json(&self) -> Result<String, CompilerError> {
        serde_json::to_string_pretty(self).map_err(|e| CompilerError::IoError {
            message: format!("failed to serialize program: {e}"),
        })
    }
}
