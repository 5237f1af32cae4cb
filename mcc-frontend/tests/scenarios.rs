//! End-to-end checks through the `Frontend` facade

use mcc_common::{CompilerError, Type};
use mcc_frontend::{
    BinaryOp, ExpressionKind, Frontend, Program, SemanticAnalyzer, StatementKind,
};
use pretty_assertions::assert_eq;

fn semantic_message(err: CompilerError) -> (String, u32, String) {
    match err {
        CompilerError::SemanticError { location, text, message } => (text, location.line, message),
        other => panic!("Expected semantic error, got {:?}", other),
    }
}

#[test]
fn test_functions_keep_source_order_and_signatures() {
    let source = r#"
int first(int a) { return a; }
void second(char s[], float x) { }
float third() { return 1.0; }
"#;
    let program = Frontend::parse_source(source, "order.c").unwrap();

    let names: Vec<_> = program.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);

    let arity: Vec<_> = program.functions.iter().map(|f| f.parameters.len()).collect();
    assert_eq!(arity, vec![1, 2, 0]);
    assert!(program.functions[1].parameters[0].is_array);
}

#[test]
fn test_array_length_is_not_retained() {
    let a = Frontend::parse_source("int a[1];", "a.c").unwrap();
    let b = Frontend::parse_source("int a[999];", "a.c").unwrap();

    assert!(a.globals[0].is_array);
    assert_eq!(a.globals, b.globals);
}

#[test]
fn test_declarator_list_shares_type() {
    let program = Frontend::parse_source("char a, b, c;", "list.c").unwrap();
    let globals: Vec<_> = program.globals.iter().map(|v| (v.name.as_str(), v.var_type)).collect();
    assert_eq!(globals, vec![("a", Type::Char), ("b", Type::Char), ("c", Type::Char)]);
}

#[test]
fn test_main_with_local_and_return() {
    let program = Frontend::parse_source("int main() { int x; return 0; }", "main.c").unwrap();

    assert_eq!(program.functions.len(), 1);
    let main = &program.functions[0];
    assert_eq!(main.name, "main");
    assert_eq!(main.return_type, Type::Int);
    assert_eq!(main.locals.len(), 1);
    assert_eq!((main.locals[0].name.as_str(), main.locals[0].var_type), ("x", Type::Int));

    assert_eq!(main.body.len(), 2);
    assert!(matches!(main.body.statements[0].kind, StatementKind::Declaration { .. }));
    match &main.body.statements[1].kind {
        StatementKind::Return(Some(expr)) => assert!(matches!(expr.kind, ExpressionKind::IntLiteral(0))),
        other => panic!("Expected return, got {:?}", other),
    }
}

#[test]
fn test_sum_of_parameters_is_int() {
    let program = Frontend::analyze_source("int f(int a, int b) { return a + b; }", "f.c").unwrap();
    let f = &program.functions[0];
    assert!(f.parameters.iter().all(|p| p.var_type == Type::Int));

    match &f.body.statements[0].kind {
        StatementKind::Return(Some(expr)) => {
            assert_eq!(expr.expr_type, Some(Type::Int));
            match &expr.kind {
                ExpressionKind::Binary { op, left, right } => {
                    assert_eq!(*op, BinaryOp::Add);
                    assert_eq!(left.expr_type, Some(Type::Int));
                    assert_eq!(right.expr_type, Some(Type::Int));
                }
                other => panic!("Expected binary expression, got {:?}", other),
            }
        }
        other => panic!("Expected return, got {:?}", other),
    }
}

#[test]
fn test_redeclared_global_reports_second() {
    let err = Frontend::analyze_source("int a;\nint a;", "dup.c").unwrap_err();
    assert_eq!(
        semantic_message(err),
        ("a".to_string(), 2, "variable redeclared".to_string())
    );
}

#[test]
fn test_unmatched_call_is_not_fatal() {
    let program = Frontend::analyze_source("int main() { foo(1, 2); return 0; }", "call.c").unwrap();
    match &program.functions[0].body.statements[0].kind {
        StatementKind::Expression(expr) => {
            assert!(matches!(expr.kind, ExpressionKind::Call { .. }));
            assert_eq!(expr.expr_type, Some(Type::Error));
        }
        other => panic!("Expected call statement, got {:?}", other),
    }
}

#[test]
fn test_void_global_reported_before_redeclaration() {
    let err = Frontend::analyze_source("int x;\nvoid x;", "void.c").unwrap_err();
    assert_eq!(
        semantic_message(err),
        ("x".to_string(), 2, "variables cannot have type void".to_string())
    );
}

#[test]
fn test_syntax_error_rendering() {
    let err = Frontend::parse_source("int main() {\n  return 0\n}", "syn.c").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parser error in file syn.c line 3 at text }\n\tExpected ';'"
    );
}

#[test]
fn test_reanalysis_leaves_types_unchanged() {
    let source = r#"
int count;
char name[16];
int bump(int by) { count += by; return count; }
void main() {
    bump(2);
    putstring(name);
    name[0] = 'a';
    count > 3 ? putint(count) : putint(0);
}
"#;
    let mut program: Program = Frontend::analyze_source(source, "twice.c").unwrap();
    let before = program.clone();

    SemanticAnalyzer::new().analyze(&mut program).unwrap();
    assert_eq!(program, before);
}
