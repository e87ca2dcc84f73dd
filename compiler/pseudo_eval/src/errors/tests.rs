use pretty_assertions::assert_eq;
use pseudo_diagnostic::{ErrorCode, Severity};

use super::*;

#[test]
fn messages() {
    let cases = [
        (
            RuntimeErrorKind::TypeMismatch {
                detail: "cannot add string and number".to_string(),
            },
            "type mismatch: cannot add string and number",
        ),
        (
            RuntimeErrorKind::UndefinedVariable {
                name: "y".to_string(),
                similar: None,
            },
            "undefined variable `y`",
        ),
        (RuntimeErrorKind::DivisionByZero, "division by zero"),
        (
            RuntimeErrorKind::IndexOutOfRange {
                index: "5".to_string(),
                len: 3,
            },
            "index 5 is out of range for length 3",
        ),
        (
            RuntimeErrorKind::ArityMismatch {
                name: "add".to_string(),
                expected: 2,
                got: 1,
            },
            "`add` expects 2 arguments, got 1",
        ),
        (
            RuntimeErrorKind::ArityMismatch {
                name: "sq".to_string(),
                expected: 1,
                got: 0,
            },
            "`sq` expects 1 argument, got 0",
        ),
        (RuntimeErrorKind::InputUnavailable, "no input available"),
    ];
    for (kind, message) in cases {
        assert_eq!(kind.to_string(), message);
    }
}

#[test]
fn error_display_includes_line() {
    let err = RuntimeError::new(RuntimeErrorKind::DivisionByZero, 4);
    assert_eq!(err.to_string(), "line 4: division by zero");
}

#[test]
fn codes_are_runtime_codes() {
    let err = RuntimeError::new(RuntimeErrorKind::InputUnavailable, 1);
    assert_eq!(err.code(), ErrorCode::E6008);
    assert!(err.code().is_runtime_error());
}

#[test]
fn diagnostic_carries_line_and_severity() {
    let err = division_by_zero(3);
    let diag = err.to_diagnostic();
    assert_eq!(diag.line, 3);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.code, ErrorCode::E6004);
    assert_eq!(diag.message, "division by zero");
    assert!(!diag.suggestion.is_empty());
}

#[test]
fn undefined_names_suggest_similar_spelling() {
    let err = RuntimeError::new(
        RuntimeErrorKind::UndefinedVariable {
            name: "totl".to_string(),
            similar: Some("total".to_string()),
        },
        2,
    );
    assert_eq!(err.suggestion(), "did you mean `total`?");

    let err = RuntimeError::new(
        RuntimeErrorKind::UndefinedFunction {
            name: "greet".to_string(),
            similar: None,
        },
        2,
    );
    assert_eq!(
        err.suggestion(),
        "define `greet` with `function greet(...)` before calling it"
    );
}

#[test]
fn index_suggestion_names_valid_range() {
    let err = index_out_of_range(&Value::Number(5.0), 3, 1);
    assert_eq!(err.suggestion(), "valid indices are 0 to 2");
    let err = index_out_of_range(&Value::Number(0.0), 0, 1);
    assert_eq!(err.suggestion(), "the list is empty, so it has no valid index");
}

#[test]
fn control_action_from_error() {
    let action: ControlAction = division_by_zero(1).into();
    assert!(matches!(
        action,
        ControlAction::Error(RuntimeError {
            kind: RuntimeErrorKind::DivisionByZero,
            line: 1
        })
    ));
}
