//! Line-by-line structural checks over raw source.
//!
//! Runs before parsing and independently of it, so learners get feedback on
//! the obvious slips even when the program would not parse. Blank lines and
//! whole-line comments are skipped, and anything inside a string literal is
//! ignored.

use pseudo_diagnostic::{Diagnostic, ErrorCode};
use pseudo_ir::Line;

/// Check every line of `source` and report delimiter and opener problems,
/// plus any lexical errors, ordered by line.
#[tracing::instrument(level = "debug", skip_all)]
pub fn validate(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = Line::try_from(index + 1).unwrap_or(Line::MAX);
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        let code = strip_strings(trimmed);
        check_line(&code, line, &mut diagnostics);
    }

    diagnostics.extend(
        pseudo_lexer::lex(source)
            .errors
            .iter()
            .map(pseudo_lexer::LexError::to_diagnostic),
    );
    diagnostics.sort_by_key(|d| d.line);

    tracing::debug!(count = diagnostics.len(), "validated source");
    diagnostics
}

fn check_line(code: &str, line: Line, diagnostics: &mut Vec<Diagnostic>) {
    if !is_balanced(code, '(', ')') {
        diagnostics.push(
            Diagnostic::error(ErrorCode::E1001, line)
                .with_message("Unmatched parentheses")
                .with_suggestion(
                    "Make sure all opening parentheses have matching closing parentheses",
                ),
        );
    }
    if !is_balanced(code, '[', ']') {
        diagnostics.push(
            Diagnostic::error(ErrorCode::E1002, line)
                .with_message("Unmatched brackets")
                .with_suggestion("Make sure all opening brackets have matching closing brackets"),
        );
    }

    let mut words = words(code);
    let first = words.next().unwrap_or_default();
    let opens_if = first.eq_ignore_ascii_case("if")
        || (first.eq_ignore_ascii_case("else")
            && words.next().is_some_and(|w| w.eq_ignore_ascii_case("if")));

    if opens_if && !has_opener(code, "then") {
        diagnostics.push(
            Diagnostic::warning(ErrorCode::E1003, line)
                .with_message("Incomplete if statement")
                .with_suggestion("Add 'then' or ':' after the condition"),
        );
    } else if first.eq_ignore_ascii_case("while") && !has_opener(code, "do") {
        diagnostics.push(
            Diagnostic::warning(ErrorCode::E1004, line)
                .with_message("Incomplete while statement")
                .with_suggestion("Add 'do' or ':' after the condition"),
        );
    }
}

/// Replace each string literal with a single space. An unterminated literal
/// swallows the rest of the line.
fn strip_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote = None;
    for ch in text.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                out.push(' ');
            }
            None => out.push(ch),
        }
    }
    out
}

/// Every closer has an earlier opener and every opener is closed.
fn is_balanced(code: &str, open: char, close: char) -> bool {
    let mut depth = 0usize;
    for ch in code.chars() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            let Some(rest) = depth.checked_sub(1) else {
                return false;
            };
            depth = rest;
        }
    }
    depth == 0
}

/// Words are maximal runs of alphanumerics and `_`.
fn words(code: &str) -> impl Iterator<Item = &str> {
    code.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

fn has_opener(code: &str, soft_keyword: &str) -> bool {
    code.contains(':')
        || code.contains('{')
        || words(code).any(|w| w.eq_ignore_ascii_case(soft_keyword))
}
