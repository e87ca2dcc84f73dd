#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_source_has_no_suggestions() {
    assert!(suggestions("").is_empty());
}

#[test]
fn if_without_else() {
    assert_eq!(
        suggestions("if x > 1 then\n  x = 1\nendif"),
        vec![ELSE_CLAUSE.to_string()]
    );
}

#[test]
fn if_with_else_is_quiet() {
    assert!(suggestions("if x > 1 then\nx = 1\nelse\nx = 2\nendif").is_empty());
}

#[test]
fn while_without_break() {
    assert_eq!(
        suggestions("while x < 3 do\nx = x + 1\nendwhile"),
        vec![LOOP_TERMINATION.to_string()]
    );
}

#[test]
fn while_with_break_is_quiet() {
    assert!(suggestions("while true do\nbreak\nendwhile").is_empty());
}

#[test]
fn print_without_input() {
    assert_eq!(suggestions("print 1"), vec![USER_INPUT.to_string()]);
    assert!(suggestions("input name\nprint name").is_empty());
}

#[test]
fn many_equals_signs() {
    let source = "a = 1\nb = 2\nc = 3\nd = 4\ne = 5\nf = 6";
    assert_eq!(suggestions(source), vec![DESCRIPTIVE_NAMES.to_string()]);
}

#[test]
fn five_equals_signs_is_not_enough() {
    assert!(suggestions("a = 1\nb = 2\nc = 3\nd = 4\ne = 5").is_empty());
}

#[test]
fn comparison_operators_count_as_equals_signs() {
    // The count is over raw characters, `==` contributes two.
    assert_eq!(
        suggestions("x = 1 == 1 == 1 == 1"),
        vec![DESCRIPTIVE_NAMES.to_string()]
    );
}

#[test]
fn keywords_match_whole_words_only() {
    assert!(suggestions("gift = 1\nmeanwhile = 2\nprinter = 3").is_empty());
}

#[test]
fn keywords_match_regardless_of_case() {
    assert_eq!(
        suggestions("IF x THEN\nPrint x\nENDIF"),
        vec![ELSE_CLAUSE.to_string(), USER_INPUT.to_string()]
    );
}

#[test]
fn keywords_inside_punctuation_still_count() {
    assert_eq!(suggestions("print(\"hi\")"), vec![USER_INPUT.to_string()]);
}

#[test]
fn all_four_in_fixed_order() {
    let source = "a = 1\nb = 2\nc = 3\nd = 4\nif a < b then\nprint a\nendif\nwhile a < c do\na = a + 1\nb = b\nendwhile";
    assert_eq!(
        suggestions(source),
        vec![
            ELSE_CLAUSE.to_string(),
            LOOP_TERMINATION.to_string(),
            USER_INPUT.to_string(),
            DESCRIPTIVE_NAMES.to_string(),
        ]
    );
}
