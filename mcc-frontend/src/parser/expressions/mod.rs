//! Expression parsing
//!
//! A ladder of precedence levels, loosest first: ternary, `||`, `&&`, `|`,
//! `&`, equality, relational, additive, multiplicative, then unary and
//! primary forms. Every binary level folds to the left.

mod primary;
mod lvalue;
mod unary;
mod binary;

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::Parser;
use mcc_common::CompilerError;

impl Parser {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_conditional_expression()
    }

    pub(crate) fn expression(&self, kind: ExpressionKind, token: Token) -> Expression {
        Expression::new(kind, token)
    }

    pub(crate) fn binary_expression(
        &self,
        op: BinaryOp,
        left: Expression,
        right: Expression,
        token: Token,
    ) -> Expression {
        let kind = ExpressionKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
        self.expression(kind, token)
    }

    pub(crate) fn unary_expression(&self, op: UnaryOp, operand: Expression, token: Token) -> Expression {
        let kind = ExpressionKind::Unary {
            op,
            operand: Box::new(operand),
        };
        self.expression(kind, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Result<Expression, CompilerError> {
        let tokens = Lexer::new(input, "test.c").tokenize()?;
        Parser::new(tokens).parse_expression()
    }

    /// Fully parenthesised rendering, for checking tree shape
    fn render(expr: &Expression) -> String {
        match &expr.kind {
            ExpressionKind::IntLiteral(_)
            | ExpressionKind::CharLiteral(_)
            | ExpressionKind::FloatLiteral(_)
            | ExpressionKind::StringLiteral(_) => expr.token.text.clone(),
            ExpressionKind::Identifier { name } => name.clone(),
            ExpressionKind::ArrayIndex { base, index } => format!("{}[{}]", render(base), render(index)),
            ExpressionKind::Unary { op, operand } => match op {
                UnaryOp::PostIncrement | UnaryOp::PostDecrement => format!("({}{})", render(operand), op),
                _ => format!("({}{})", op, render(operand)),
            },
            ExpressionKind::Binary { op, left, right } => {
                format!("({} {} {})", render(left), op, render(right))
            }
            ExpressionKind::Ternary { condition, then_expr, else_expr } => format!(
                "({} ? {} : {})",
                render(condition),
                render(then_expr),
                render(else_expr)
            ),
            ExpressionKind::Call { name, arguments } => {
                let args: Vec<_> = arguments.iter().map(render).collect();
                format!("{}({})", name, args.join(", "))
            }
        }
    }

    fn shape(input: &str) -> String {
        render(&parse(input).unwrap())
    }

    #[test]
    fn test_multiplicative_binds_tighter() {
        assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(shape("1 * 2 + 3"), "((1 * 2) + 3)");
        assert_eq!(shape("a % b - c / d"), "((a % b) - (c / d))");
    }

    #[test]
    fn test_binary_levels_fold_left() {
        assert_eq!(shape("a - b - c"), "((a - b) - c)");
        assert_eq!(shape("a < b < c"), "((a < b) < c)");
        assert_eq!(shape("a || b || c"), "((a || b) || c)");
    }

    #[test]
    fn test_full_ladder_order() {
        assert_eq!(
            shape("a || b && c | d & e == f < g + h * i"),
            "(a || (b && (c | (d & (e == (f < (g + (h * i))))))))"
        );
        assert_eq!(shape("a != b >= c"), "(a != (b >= c))");
    }

    #[test]
    fn test_ternary_folds_previous_result_into_condition() {
        assert_eq!(shape("a ? b : c"), "(a ? b : c)");
        assert_eq!(shape("a ? b : c ? d : e"), "((a ? b : c) ? d : e)");
        assert_eq!(shape("a || b ? c + 1 : d"), "((a || b) ? (c + 1) : d)");
    }

    #[test]
    fn test_ternary_requires_colon() {
        let err = parse("a ? b ; c").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { ref expected, ref text, .. }
            if expected == ":" && text == ";"));
    }

    #[test]
    fn test_prefix_operators() {
        assert_eq!(shape("-a * b"), "((-a) * b)");
        assert_eq!(shape("!~x"), "(!(~x))");
        assert_eq!(shape("&a + *b"), "((&a) + (*b))");
        assert_eq!(shape("++i"), "(++i)");
    }

    #[test]
    fn test_cast_uses_type_token() {
        let expr = parse("(float) x").unwrap();
        assert_eq!(expr.token.text, "float");
        match &expr.kind {
            ExpressionKind::Unary { op, operand } => {
                assert_eq!(*op, UnaryOp::Cast(mcc_common::Type::Float));
                assert_eq!(render(operand), "x");
            }
            other => panic!("Expected cast, got {:?}", other),
        }
        assert_eq!(shape("(int) a + b"), "(((int)a) + b)");
    }

    #[test]
    fn test_cast_requires_closing_paren() {
        let err = parse("(int x").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { ref expected, .. } if expected == ")"));
    }

    #[test]
    fn test_parenthesized_expression() {
        assert_eq!(shape("(1 + 2) * 3"), "((1 + 2) * 3)");
    }

    #[test]
    fn test_function_calls() {
        let expr = parse("getchar()").unwrap();
        assert_eq!(expr.token.text, "getchar");
        assert!(matches!(&expr.kind, ExpressionKind::Call { arguments, .. } if arguments.is_empty()));

        assert_eq!(shape("f(a, b ? c : d, 1 + 2)"), "f(a, (b ? c : d), (1 + 2))");
        assert_eq!(shape("f(g(x)) + 1"), "(f(g(x)) + 1)");
    }

    #[test]
    fn test_call_requires_closing_paren() {
        let err = parse("f(a b)").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { ref expected, .. } if expected == ")"));
    }

    #[test]
    fn test_assignment_suffixes() {
        assert_eq!(shape("x = 1 + 2"), "(x = (1 + 2))");
        assert_eq!(shape("x += y -= 2"), "(x += (y -= 2))");
        assert_eq!(shape("a[i] *= 2"), "(a[i] *= 2)");
        assert_eq!(shape("x /= 2"), "(x /= 2)");
    }

    #[test]
    fn test_assignment_token_is_operator() {
        let expr = parse("x = 5").unwrap();
        assert_eq!(expr.token.text, "=");
        assert!(matches!(
            &expr.kind,
            ExpressionKind::Binary { op: BinaryOp::Assign, .. }
        ));
    }

    #[test]
    fn test_postfix_operators() {
        assert_eq!(shape("i++"), "(i++)");
        assert_eq!(shape("a[0]--"), "(a[0]--)");
    }

    #[test]
    fn test_array_index_keeps_identifier_token() {
        let expr = parse("buf[i + 1]").unwrap();
        assert_eq!(expr.token.text, "buf");
        assert_eq!(render(&expr), "buf[(i + 1)]");
    }

    #[test]
    fn test_array_index_requires_closing_bracket() {
        let err = parse("a[1;").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { ref expected, .. } if expected == "]"));
    }

    #[test]
    fn test_literals() {
        assert!(matches!(parse("42").unwrap().kind, ExpressionKind::IntLiteral(42)));
        assert!(matches!(parse("'a'").unwrap().kind, ExpressionKind::CharLiteral(b'a')));
        assert!(matches!(parse("2.5").unwrap().kind, ExpressionKind::FloatLiteral(_)));
        assert!(matches!(parse("\"s\"").unwrap().kind, ExpressionKind::StringLiteral(_)));
    }

    #[test]
    fn test_missing_operand() {
        let err = parse("1 + ;").unwrap_err();
        match err {
            CompilerError::SyntaxError { expected, text, .. } => {
                assert_eq!(expected, "identifier (within expression)");
                assert_eq!(text, ";");
            }
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }
}
