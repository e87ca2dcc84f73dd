//! Shared helpers.

use pseudoc::{evaluate, EvalOptions, Outcome, QueuedInput, SnapshotValue, Status};

/// Evaluate with default options.
pub fn eval(source: &str) -> Outcome {
    evaluate(source, EvalOptions::default())
}

/// Evaluate with queued input lines.
pub fn eval_with_input(source: &str, lines: &[&str]) -> Outcome {
    let input = QueuedInput::new(lines.iter().copied());
    evaluate(source, EvalOptions::new().with_input(input))
}

/// Output of an evaluation that must succeed.
pub fn output(source: &str) -> String {
    let outcome = eval(source);
    assert_eq!(
        outcome.status,
        Status::Success,
        "unexpected failure: {:?}",
        outcome.diagnostics
    );
    outcome.output
}

pub fn var(outcome: &Outcome, name: &str) -> SnapshotValue {
    outcome
        .variables
        .get(name)
        .cloned()
        .unwrap_or_else(|| panic!("no variable `{name}`"))
}
