use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;
use crate::BudgetKind;

#[test]
fn infinite_loop_hits_step_limit() {
    let limits = Limits::default().with_max_steps(Some(1_000));
    let result = run_with_limits("x = 0\nwhile true do x = x endwhile", limits);
    let err = result.error.as_ref().unwrap();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::StepLimitExceeded {
            budget: BudgetKind::Steps(1_000)
        }
    );
    assert_eq!(var(&result, "x"), SnapshotValue::Number(0.0));
}

#[test]
fn output_before_the_limit_is_kept() {
    let limits = Limits::default().with_max_steps(Some(200));
    let source = "i = 0\nwhile true do\n    print i\n    i += 1\nendwhile";
    let result = run_with_limits(source, limits);
    assert!(result.error.is_some());
    assert!(result.output.starts_with("0\n1\n2\n"));
}

#[test]
fn time_limit_stops_long_runs() {
    let limits = Limits::unlimited().with_time_limit(Some(Duration::from_millis(20)));
    let result = run_with_limits("while true do x = 1 endwhile", limits);
    assert!(matches!(
        result.error.unwrap().kind,
        RuntimeErrorKind::StepLimitExceeded {
            budget: BudgetKind::Time(_)
        }
    ));
}

#[test]
fn runaway_recursion_hits_depth_limit() {
    let limits = Limits::default().with_max_call_depth(50);
    let source = "\
function down(n)
    return down(n + 1)
endfunction
down(0)";
    let result = run_with_limits(source, limits);
    let err = result.error.unwrap();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::RecursionLimitExceeded { depth: 50 }
    );
    assert_eq!(err.line, 2);
}

#[test]
fn deep_recursion_within_limit_succeeds() {
    let limits = Limits::default().with_max_call_depth(150);
    let source = "\
function sum(n)
    if n == 0 then
        return 0
    endif
    return n + sum(n - 1)
endfunction
print sum(100)";
    let result = run_with_limits(source, limits);
    assert!(result.is_ok(), "{:?}", result.error);
    assert_eq!(result.output, "5050\n");
}

#[test]
fn steps_are_counted() {
    let result = run("x = 1");
    // One statement and one literal.
    assert_eq!(result.steps, 2);
}

#[test]
fn runs_are_isolated() {
    let first = run("secret = 42");
    assert!(first.variables.contains_key("secret"));
    let (kind, _) = error("print secret");
    assert!(matches!(kind, RuntimeErrorKind::UndefinedVariable { .. }));
}

fn is_budget_error(result: &RunResult) -> bool {
    matches!(
        result.error.as_ref().map(|err| &err.kind),
        Some(RuntimeErrorKind::StepLimitExceeded { .. })
    )
}

const DOUBLING: &str = "\
a = [1]
for i = 1 to 40 do
    a = [a, a]
endfor
";

#[test]
fn printing_shared_arrays_is_charged() {
    let limits = Limits::default()
        .with_max_steps(Some(2_000))
        .with_time_limit(Some(Duration::from_millis(100)));
    let result = run_with_limits(&format!("{DOUBLING}print a"), limits);
    assert!(is_budget_error(&result), "{:?}", result.error);
    assert_eq!(result.error.unwrap().line, 5);
}

#[test]
fn converting_shared_arrays_is_charged() {
    let limits = Limits::default().with_max_steps(Some(2_000));
    let result = run_with_limits(&format!("{DOUBLING}n = len(str(a))"), limits);
    assert!(is_budget_error(&result), "{:?}", result.error);
    assert!(!result.variables.contains_key("n"));
}

#[test]
fn oversized_variable_fails_the_snapshot() {
    let result = run(DOUBLING);
    let err = result.error.unwrap();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::StepLimitExceeded {
            budget: BudgetKind::Size(crate::DEFAULT_MAX_SIZE)
        }
    );
    // `a` sorts first, so nothing is reported.
    assert!(result.variables.is_empty());
}

#[test]
fn shared_arrays_compare_quickly() {
    let source = "\
a = [1]
b = [1]
for i = 1 to 60 do
    a = [a, a]
    b = [b, b]
endfor
same = a == b
a = 0
b = 0";
    let result = run(source);
    assert!(result.is_ok(), "{:?}", result.error);
    assert_eq!(var(&result, "same"), SnapshotValue::Bool(true));
}

#[test]
fn string_doubling_hits_the_size_cap() {
    let limits = Limits::default().with_max_size(10_000);
    let source = "\
s = \"ab\"
for i = 1 to 40 do
    s = s + s
endfor";
    let result = run_with_limits(source, limits);
    let err = result.error.as_ref().unwrap();
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        RuntimeErrorKind::StepLimitExceeded {
            budget: BudgetKind::Size(10_000)
        }
    );
    let SnapshotValue::Str(s) = var(&result, "s") else {
        panic!("`s` should still be a string");
    };
    assert!(s.len() <= 10_000);
}

#[test]
fn total_output_is_capped() {
    let limits = Limits::default().with_max_size(100);
    let result = run_with_limits("while true do print \"0123456789\" endwhile", limits);
    let err = result.error.unwrap();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::StepLimitExceeded {
            budget: BudgetKind::Size(100)
        }
    );
    assert!(result.output.len() <= 100);
}
