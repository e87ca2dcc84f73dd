use std::time::Duration;

use pretty_assertions::assert_eq;
use pseudoc::{evaluate, ErrorCode, EvalOptions, Limits, SnapshotValue, Status};

use crate::common::{eval, eval_with_input, output, var};

#[test]
fn successful_run() {
    let outcome = eval("x = 15\ny = 10\nif x > y then print \"a\" else print \"b\" endif");
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.output, "a");
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(var(&outcome, "x"), SnapshotValue::Number(15.0));
}

#[test]
fn swapped_comparison_takes_else() {
    assert_eq!(
        output("x = 5\ny = 10\nif x > y then print \"a\" else print \"b\" endif"),
        "b"
    );
}

#[test]
fn for_loop_output_and_final_counter() {
    let outcome = eval("for i = 1 to 3 do print i endfor");
    assert_eq!(outcome.output, "1\n2\n3");
    assert_eq!(var(&outcome, "i"), SnapshotValue::Number(4.0));
}

#[test]
fn functions_are_called_and_not_snapshotted() {
    let outcome = eval("function add(a, b)\n  return a + b\nendfunction\nprint add(2, 3)");
    assert_eq!(outcome.output, "5");
    assert!(!outcome.variables.contains_key("add"));
}

#[test]
fn arity_mismatch_is_a_runtime_error() {
    let outcome = eval("function add(a, b)\n  return a + b\nendfunction\nprint add(1)");
    assert_eq!(outcome.status, Status::RuntimeError);
    let err = outcome.first_error().unwrap();
    assert_eq!(err.code, ErrorCode::E6006);
    assert_eq!(err.line, 4);
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let outcome = eval("x = 10\ny = 0\nprint \"before\"\nresult = x / y\nprint \"after\"");
    assert_eq!(outcome.status, Status::RuntimeError);
    assert_eq!(outcome.output, "before");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].code, ErrorCode::E6004);
    assert_eq!(outcome.diagnostics[0].line, 4);
    assert_eq!(var(&outcome, "y"), SnapshotValue::Number(0.0));
    assert!(!outcome.variables.contains_key("result"));
}

#[test]
fn arrays_mutate_in_place() {
    assert_eq!(output("arr = [1, 2, 3]\narr[1] = 9\nprint arr[1]"), "9");
}

#[test]
fn index_out_of_range() {
    let outcome = eval("arr = [1, 2, 3]\nprint arr[5]");
    assert_eq!(outcome.first_error().unwrap().code, ErrorCode::E6005);
}

#[test]
fn syntax_error_blocks_execution() {
    let outcome = eval("print \"ran\"\nif true then\nprint 1\nendwhile");
    assert_eq!(outcome.status, Status::SyntaxError);
    assert_eq!(outcome.output, "");
    assert!(outcome.variables.is_empty());
    assert!(outcome.first_error().is_some());
}

#[test]
fn only_one_trailing_newline_is_trimmed() {
    assert_eq!(output("print \"a\"\nprint \"\""), "a\n");
}

#[test]
fn input_lines_feed_the_program() {
    let outcome = eval_with_input("input name\ninput age\nprint name, age + 1", &["Ada", "36"]);
    assert_eq!(outcome.output, "Ada 37");
}

#[test]
fn missing_input_is_a_runtime_error() {
    let outcome = eval("input name");
    assert_eq!(outcome.status, Status::RuntimeError);
    assert_eq!(outcome.first_error().unwrap().code, ErrorCode::E6008);
}

#[test]
fn step_limit_stops_an_endless_loop() {
    let options = EvalOptions::new().with_limits(Limits::default().with_max_steps(Some(500)));
    let outcome = evaluate("x = 0\nwhile true do\n  x = x\nendwhile", options);
    assert_eq!(outcome.status, Status::RuntimeError);
    assert_eq!(outcome.first_error().unwrap().code, ErrorCode::E6007);
}

#[test]
fn time_limit_stops_an_endless_loop() {
    let limits = Limits::unlimited().with_time_limit(Some(Duration::from_millis(20)));
    let outcome = evaluate(
        "x = 0\nwhile true do\n  x += 1\nendwhile",
        EvalOptions::new().with_limits(limits),
    );
    assert_eq!(outcome.first_error().unwrap().code, ErrorCode::E6007);
}

#[test]
fn runaway_recursion_is_reported() {
    let outcome = eval("function f(n)\n  return f(n + 1)\nendfunction\nprint f(0)");
    assert_eq!(outcome.first_error().unwrap().code, ErrorCode::E6009);
}

#[test]
fn runaway_string_growth_is_stopped() {
    let limits = Limits::unlimited().with_max_size(4_096);
    let outcome = evaluate(
        "s = \"ab\"\nwhile true do\n  s = s + s\nendwhile",
        EvalOptions::new().with_limits(limits),
    );
    let error = outcome.first_error().unwrap();
    assert_eq!(error.code, ErrorCode::E6007);
    assert_eq!(error.line, 3);
}

#[test]
fn print_of_a_parenthesised_product() {
    assert_eq!(output("print (1 + 2) * 3"), "9");
    assert_eq!(output("print (1 + 2)"), "3");
}

#[test]
fn sequential_evaluations_are_isolated() {
    let first = eval("secret = 42");
    assert_eq!(var(&first, "secret"), SnapshotValue::Number(42.0));

    let second = eval("print secret");
    assert_eq!(second.status, Status::RuntimeError);
    assert_eq!(second.first_error().unwrap().code, ErrorCode::E6002);
}

#[test]
fn evaluations_run_on_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| std::thread::spawn(move || eval(&format!("x = {n}\nprint x * 2")).output))
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, vec!["0", "2", "4", "6"]);
}
