use pretty_assertions::assert_eq;
use pseudoc::{hints, ErrorCode, Severity, Status};

use crate::common::eval;

#[test]
fn clean_program_has_no_hints() {
    assert!(hints("x = 1\nprint x").is_empty());
}

#[test]
fn hints_do_not_run_the_program() {
    // Dividing by zero is a runtime problem, not a syntax one.
    assert!(hints("x = 1 / 0").is_empty());
}

#[test]
fn hints_report_lexical_errors() {
    let diagnostics = hints("x = 1\nprint \"oops");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0001);
    assert_eq!(diagnostics[0].line, 2);
}

#[test]
fn hints_report_structural_errors() {
    let diagnostics = hints("while true do\nprint 1");
    assert!(diagnostics
        .iter()
        .any(|d| d.code == ErrorCode::E1008 && d.severity == Severity::Error));
}

#[test]
fn hints_are_ordered_by_line() {
    let diagnostics = hints("x = (1\nif x > 1\nprint x\nendif\ny = [2");
    let lines: Vec<u32> = diagnostics.iter().map(|d| d.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn warnings_accompany_a_successful_run() {
    let outcome = eval("x = 5\nif x > 3\n  print x\nendif");
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.output, "5");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Warning);
    assert_eq!(outcome.diagnostics[0].code, ErrorCode::E1003);
}

#[test]
fn warnings_come_before_the_runtime_error() {
    let outcome = eval("x = 0\nwhile x < 1\n  x = x / 0\nendwhile");
    assert_eq!(outcome.status, Status::RuntimeError);
    let codes: Vec<ErrorCode> = outcome.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1004, ErrorCode::E6004]);
}

#[test]
fn undefined_variable_suggests_a_close_name() {
    let outcome = eval("total = 10\nprint totl");
    let err = outcome.first_error().unwrap();
    assert_eq!(err.code, ErrorCode::E6002);
    assert_eq!(err.line, 2);
    assert_eq!(err.suggestion, "did you mean `total`?");
}

#[test]
fn undefined_function_suggests_a_builtin() {
    let outcome = eval("print lenn([1, 2])");
    let err = outcome.first_error().unwrap();
    assert_eq!(err.code, ErrorCode::E6003);
    assert_eq!(err.suggestion, "did you mean `len`?");
}
