use pretty_assertions::assert_eq;

use super::*;

#[test]
fn if_else_on_one_line() {
    let source = "x = 15; y = 10\nif x > y then print \"a\" else print \"b\" endif";
    assert_eq!(output(source), "a\n");
    let source = "x = 5; y = 10\nif x > y then print \"a\" else print \"b\" endif";
    assert_eq!(output(source), "b\n");
}

#[test]
fn else_if_chain_takes_first_true_arm() {
    let source = "\
score = 75
if score >= 90 then
    print \"A\"
else if score >= 70 then
    print \"C\"
else if score >= 50 then
    print \"D\"
else
    print \"F\"
endif";
    assert_eq!(output(source), "C\n");
}

#[test]
fn if_condition_must_be_boolean() {
    let (kind, line) = error("x = 1\nif x then print x endif");
    assert_eq!(line, 2);
    let RuntimeErrorKind::TypeMismatch { detail } = kind else {
        panic!("expected type mismatch, got {kind:?}");
    };
    assert!(detail.contains("condition of `if`"), "{detail}");
}

#[test]
fn while_loop_counts() {
    let source = "\
i = 0
total = 0
while i < 5 do
    total += i
    i += 1
endwhile
print total";
    assert_eq!(output(source), "10\n");
}

#[test]
fn while_false_never_runs() {
    assert_eq!(output("while false do print \"x\" endwhile\nprint \"done\""), "done\n");
}

#[test]
fn for_loop_prints_inclusive_range() {
    let result = run("for i = 1 to 3 do print i endfor");
    assert_eq!(result.output, "1\n2\n3\n");
    assert_eq!(var(&result, "i"), SnapshotValue::Number(4.0));
}

#[test]
fn for_loop_that_never_runs_leaves_start() {
    let result = run("for i = 5 to 1 do print i endfor");
    assert_eq!(result.output, "");
    assert_eq!(var(&result, "i"), SnapshotValue::Number(5.0));
}

#[test]
fn for_bounds_are_evaluated_once() {
    let source = "\
n = 3
for i = 1 to n do
    n = 10
endfor
print i";
    assert_eq!(output(source), "4\n");
}

#[test]
fn for_with_fractional_bounds() {
    let result = run("for x = 0.5 to 2 do print x endfor");
    assert_eq!(result.output, "0.5\n1.5\n");
    assert_eq!(var(&result, "x"), SnapshotValue::Number(2.5));
}

#[test]
fn for_bounds_must_be_numbers() {
    let (kind, _) = error("for i = \"a\" to 3 do print i endfor");
    assert!(matches!(kind, RuntimeErrorKind::TypeMismatch { .. }));
}

#[test]
fn nested_loops() {
    let source = "\
for i = 1 to 2 do
    for j = 1 to 2 do
        print i * 10 + j
    endfor
endfor";
    assert_eq!(output(source), "11\n12\n21\n22\n");
}

#[test]
fn logical_operators_short_circuit() {
    // The right side would divide by zero if evaluated.
    assert_eq!(output("x = 0\nprint x != 0 and 10 / x > 1"), "false\n");
    assert_eq!(output("x = 0\nprint x == 0 or 10 / x > 1"), "true\n");
}

#[test]
fn logical_operands_must_be_boolean() {
    let (kind, _) = error("print 1 and true");
    assert!(matches!(kind, RuntimeErrorKind::TypeMismatch { .. }));
}

#[test]
fn not_and_negation() {
    assert_eq!(output("print not true, -5, not (1 > 2)"), "false -5 true\n");
}
