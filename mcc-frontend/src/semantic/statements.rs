//! Statement semantic analysis
//!
//! Walks a function body and derives the type of every expression in it,
//! nested blocks included.

use crate::ast::*;
use crate::semantic::expressions::ExpressionAnalyzer;

pub struct StatementAnalyzer<'a> {
    expressions: ExpressionAnalyzer<'a>,
}

impl<'a> StatementAnalyzer<'a> {
    pub fn new(expressions: ExpressionAnalyzer<'a>) -> Self {
        Self { expressions }
    }

    pub fn analyze_block(&self, block: &mut Block) {
        for statement in &mut block.statements {
            self.analyze_statement(statement);
        }
    }

    /// Analyze a statement
    pub fn analyze_statement(&self, stmt: &mut Statement) {
        match &mut stmt.kind {
            StatementKind::Expression(expr) => self.expressions.analyze(expr),

            // The declared variables were checked with the function's locals
            StatementKind::Declaration { .. } => {}

            StatementKind::If { condition, then_branch, else_branch } => {
                self.expressions.analyze(condition);
                self.analyze_block(then_branch);
                if let Some(else_branch) = else_branch {
                    self.analyze_block(else_branch);
                }
            }

            StatementKind::For { init, condition, step, body } => {
                for clause in [init, condition, step].into_iter().flatten() {
                    self.expressions.analyze(clause);
                }
                self.analyze_block(body);
            }

            StatementKind::While { condition, body } => {
                self.expressions.analyze(condition);
                self.analyze_block(body);
            }

            StatementKind::DoWhile { body, condition } => {
                self.analyze_block(body);
                self.expressions.analyze(condition);
            }

            StatementKind::Return(value) => {
                if let Some(value) = value {
                    self.expressions.analyze(value);
                }
            }

            StatementKind::Break | StatementKind::Continue => {}
        }
    }
}
