use pretty_assertions::assert_eq;

use super::*;

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(output("print 2 + 3 * 4"), "14\n");
    assert_eq!(output("print (2 + 3) * 4"), "20\n");
    assert_eq!(output("print 2 ** 3 ** 2"), "512\n");
    assert_eq!(output("print 7 / 2, 7 // 2, -7 % 3"), "3.5 3 2\n");
}

#[test]
fn division_by_zero_keeps_earlier_output() {
    let result = run("print \"start\"\nx = 10\ny = 0\nresult = x / y\nprint \"never\"");
    assert_eq!(result.output, "start\n");
    let err = result.error.as_ref().unwrap();
    assert_eq!(err.kind, RuntimeErrorKind::DivisionByZero);
    assert_eq!(err.line, 4);
    assert_eq!(var(&result, "x"), SnapshotValue::Number(10.0));
    assert!(!result.variables.contains_key("result"));
}

#[test]
fn string_concatenation_and_mixing() {
    assert_eq!(output("name = \"Ada\"\nprint \"Hi, \" + name"), "Hi, Ada\n");
    assert_eq!(output("print \"n = \" + str(5)"), "n = 5\n");
    let (kind, line) = error("x = 1\nprint \"n = \" + x");
    assert_eq!(line, 2);
    assert!(matches!(kind, RuntimeErrorKind::TypeMismatch { .. }));
}

#[test]
fn array_index_assignment() {
    let result = run("arr = [1, 2, 3]\narr[1] = 9\nprint arr[1]\nprint arr");
    assert_eq!(result.output, "9\n[1, 9, 3]\n");
    assert_eq!(
        var(&result, "arr"),
        SnapshotValue::Array(vec![
            SnapshotValue::Number(1.0),
            SnapshotValue::Number(9.0),
            SnapshotValue::Number(3.0),
        ])
    );
}

#[test]
fn array_out_of_range() {
    let (kind, line) = error("arr = [1, 2, 3]\nprint arr[5]");
    assert_eq!(line, 2);
    assert_eq!(
        kind,
        RuntimeErrorKind::IndexOutOfRange {
            index: "5".to_string(),
            len: 3
        }
    );
    let (kind, _) = error("arr = [1]\narr[1] = 2");
    assert!(matches!(kind, RuntimeErrorKind::IndexOutOfRange { .. }));
}

#[test]
fn arrays_are_shared_by_reference() {
    let source = "\
a = [1, 2]
b = a
b[0] = 99
print a[0]";
    assert_eq!(output(source), "99\n");
}

#[test]
fn nested_index_assignment() {
    let source = "\
grid = [[0, 0], [0, 0]]
grid[1][0] = 5
grid[1][0] += 1
print grid";
    assert_eq!(output(source), "[[0, 0], [6, 0]]\n");
}

#[test]
fn compound_assignment() {
    assert_eq!(output("x = 10\nx += 5\nx -= 3\nx *= 2\nx /= 4\nprint x"), "6\n");
    assert_eq!(output("s = \"ab\"\ns += \"c\"\nprint s"), "abc\n");
}

#[test]
fn compound_assignment_needs_existing_variable() {
    let (kind, _) = error("total += 1");
    assert!(matches!(kind, RuntimeErrorKind::UndefinedVariable { .. }));
}

#[test]
fn strings_are_indexable_but_immutable() {
    assert_eq!(output("s = \"hello\"\nprint s[1], len(s)"), "e 5\n");
    let (kind, _) = error("s = \"hello\"\ns[0] = \"j\"");
    assert!(matches!(kind, RuntimeErrorKind::TypeMismatch { .. }));
}

#[test]
fn undefined_variable_suggests_similar_name() {
    let (kind, line) = error("total = 1\nprint totl");
    assert_eq!(line, 2);
    assert_eq!(
        kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "totl".to_string(),
            similar: Some("total".to_string())
        }
    );
}

#[test]
fn equality_across_types() {
    assert_eq!(
        output("print 1 == 1, \"a\" == \"a\", 1 == \"1\", [1, 2] == [1, 2], null == null"),
        "true true false true true\n"
    );
}

#[test]
fn display_forms() {
    assert_eq!(
        output("print 5.0, 2.5, true, null, [1, \"a\", [false]]"),
        "5 2.5 true null [1, \"a\", [false]]\n"
    );
}

#[test]
fn input_statement_reads_numbers_and_text() {
    let result = run_with_input("input age\ninput name\nprint name, age + 1", &["41", "Ada"]);
    assert!(result.is_ok(), "{:?}", result.error);
    assert_eq!(result.output, "Ada 42\n");
    assert_eq!(var(&result, "age"), SnapshotValue::Number(41.0));
}

#[test]
fn input_call_prints_prompt() {
    let result = run_with_input("name = input(\"Name? \")\nprint \"Hi \" + name", &["Bo"]);
    assert_eq!(result.output, "Name? Hi Bo\n");
}

#[test]
fn input_without_source_fails() {
    let (kind, line) = error("print \"before\"\ninput x");
    assert_eq!(kind, RuntimeErrorKind::InputUnavailable);
    assert_eq!(line, 2);
}

#[test]
fn exhausted_input_fails() {
    let result = run_with_input("input a\ninput b", &["1"]);
    assert_eq!(result.error.as_ref().unwrap().kind, RuntimeErrorKind::InputUnavailable);
    assert_eq!(var(&result, "a"), SnapshotValue::Number(1.0));
}
