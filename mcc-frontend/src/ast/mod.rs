//! Abstract Syntax Tree definitions
//! 
//! This module defines the AST nodes built by the parser. Every composite
//! node owns its children, so a whole function body is released together
//! with its `Function`. The semantic pass fills in `expr_type`/`is_array`
//! on expressions in place.

pub mod ops;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, UnaryOp};
pub use expressions::{Expression, ExpressionKind};
pub use statements::{Block, Statement, StatementKind};
