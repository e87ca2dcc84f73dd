use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E1001, 4)
        .with_message("Unmatched parentheses")
        .with_suggestion("Close every `(` with a `)`");

    assert_eq!(diag.line, 4);
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "Unmatched parentheses");
    assert_eq!(diag.suggestion, "Close every `(` with a `)`");
    assert!(diag.is_error());
}

#[test]
fn warnings_are_not_errors() {
    let diag = Diagnostic::warning(ErrorCode::E1003, 2).with_message("Incomplete if statement");
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.suggestion, "");
}

#[test]
fn has_errors_ignores_warnings() {
    let warning = Diagnostic::warning(ErrorCode::E1004, 1);
    let error = Diagnostic::error(ErrorCode::E1002, 3);

    assert!(!has_errors(&[]));
    assert!(!has_errors(&[warning.clone()]));
    assert!(has_errors(&[warning, error]));
}

#[test]
fn display_includes_code_and_line() {
    let diag = Diagnostic::error(ErrorCode::E6004, 3).with_message("division by zero");
    assert_eq!(diag.to_string(), "error[E6004] line 3: division by zero");
}

#[test]
fn serializes_transport_neutral_fields() {
    let diag = Diagnostic::warning(ErrorCode::E1004, 7)
        .with_message("Incomplete while statement")
        .with_suggestion("Add 'do' or ':' after the condition");

    let json = serde_json::to_value(&diag).unwrap_or_default();
    assert_eq!(
        json,
        serde_json::json!({
            "line": 7,
            "message": "Incomplete while statement",
            "suggestion": "Add 'do' or ':' after the condition",
            "severity": "warning",
            "code": "E1004",
        })
    );
}
