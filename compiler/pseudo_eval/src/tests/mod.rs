//! Whole-program tests: source text through lexer, parser and interpreter.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod control_flow;
mod data;
mod limits;

use crate::{Interpreter, Limits, QueuedInput, RunResult, RuntimeErrorKind, SnapshotValue};

fn program(source: &str) -> pseudo_ir::Program {
    let tokens = pseudo_lexer::tokenize(source).unwrap();
    pseudo_parse::parse(&tokens).unwrap()
}

fn run(source: &str) -> RunResult {
    Interpreter::new().run(&program(source))
}

fn run_with_input(source: &str, lines: &[&str]) -> RunResult {
    Interpreter::builder()
        .input(Box::new(QueuedInput::new(lines.iter().copied())))
        .build()
        .run(&program(source))
}

fn run_with_limits(source: &str, limits: Limits) -> RunResult {
    Interpreter::builder()
        .limits(limits)
        .build()
        .run(&program(source))
}

/// Output of a run that must succeed.
fn output(source: &str) -> String {
    let result = run(source);
    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);
    result.output
}

/// Kind and line of the error a run must end with.
fn error(source: &str) -> (RuntimeErrorKind, u32) {
    let result = run(source);
    let err = result.error.expect("expected a runtime error");
    (err.kind, err.line)
}

fn var(result: &RunResult, name: &str) -> SnapshotValue {
    result
        .variables
        .get(name)
        .cloned()
        .unwrap_or_else(|| panic!("no variable `{name}`"))
}
