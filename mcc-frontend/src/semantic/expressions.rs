//! Expression type derivation
//!
//! Types are derived bottom-up and written into each node in place. A node
//! that cannot be typed gets `Type::Error`, which then propagates through
//! every enclosing operator. None of this is fatal.

use crate::ast::*;
use crate::semantic::builtins::lookup_builtin;
use crate::semantic::scope::Scope;
use log::{trace, warn};
use mcc_common::Type;

pub struct ExpressionAnalyzer<'a> {
    scope: Scope<'a>,
}

impl<'a> ExpressionAnalyzer<'a> {
    pub fn new(scope: Scope<'a>) -> Self {
        Self { scope }
    }

    /// Derive the type and array-ness of `expr` and all of its children
    pub fn analyze(&self, expr: &mut Expression) {
        let (expr_type, is_array) = match &mut expr.kind {
            ExpressionKind::IntLiteral(_) => (Type::Int, false),
            ExpressionKind::CharLiteral(_) => (Type::Char, false),
            ExpressionKind::FloatLiteral(_) => (Type::Float, false),
            ExpressionKind::StringLiteral(_) => (Type::Char, true),

            ExpressionKind::Identifier { name } => match self.scope.lookup_variable(name) {
                Some(variable) => (variable.var_type, variable.is_array),
                None => {
                    trace!("{}: unresolved identifier {}", expr.token.location, name);
                    (Type::Error, false)
                }
            },

            ExpressionKind::ArrayIndex { base, index } => {
                self.analyze(base);
                self.analyze(index);

                if base.is_array && !base.derived_type().is_error() {
                    (base.derived_type(), false)
                } else {
                    (Type::Error, false)
                }
            }

            ExpressionKind::Unary { op, operand } => {
                self.analyze(operand);
                Self::unary_type(*op, operand)
            }

            ExpressionKind::Binary { op, left, right } => {
                self.analyze(left);
                self.analyze(right);

                if left.derived_type().is_error() || right.derived_type().is_error() {
                    (Type::Error, false)
                } else if op.yields_int() {
                    (Type::Int, false)
                } else {
                    (left.derived_type(), left.is_array)
                }
            }

            ExpressionKind::Ternary { condition, then_expr, else_expr } => {
                self.analyze(condition);
                self.analyze(then_expr);
                self.analyze(else_expr);

                let branch = (then_expr.derived_type(), then_expr.is_array);
                let agree = branch == (else_expr.derived_type(), else_expr.is_array);
                if condition.derived_type().is_error() || branch.0.is_error() || !agree {
                    (Type::Error, false)
                } else {
                    branch
                }
            }

            ExpressionKind::Call { name, arguments } => {
                for argument in arguments.iter_mut() {
                    self.analyze(argument);
                }

                let signature: Vec<(Type, bool)> = arguments
                    .iter()
                    .map(|a| (a.derived_type(), a.is_array))
                    .collect();

                match self.resolve_call(name, &signature) {
                    Some(return_type) => (return_type, false),
                    None => {
                        warn!(
                            "{}: no function {} matches {} argument(s)",
                            expr.token.location,
                            name,
                            signature.len()
                        );
                        (Type::Error, false)
                    }
                }
            }
        };

        expr.expr_type = Some(expr_type);
        expr.is_array = is_array;
    }

    /// User functions first, in declaration order, then the built-ins
    fn resolve_call(&self, name: &str, arguments: &[(Type, bool)]) -> Option<Type> {
        if let Some(function) = self.scope.lookup_function(name, arguments) {
            trace!("call to {} resolved to user function", name);
            return Some(function.return_type);
        }

        let builtin = lookup_builtin(name, arguments);
        if builtin.is_some() {
            trace!("call to {} resolved to built-in", name);
        }
        builtin
    }

    fn unary_type(op: UnaryOp, operand: &Expression) -> (Type, bool) {
        let operand_type = operand.derived_type();
        if operand_type.is_error() {
            return (Type::Error, false);
        }

        match op {
            UnaryOp::Cast(target) => (target, false),
            UnaryOp::LogicalNot | UnaryOp::BitNot => (Type::Int, false),
            // `&` and `*` have no pointer types to produce
            _ => (operand_type, operand.is_array),
        }
    }
}
