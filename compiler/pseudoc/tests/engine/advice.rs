use pretty_assertions::assert_eq;
use pseudoc::suggestions;

#[test]
fn interactive_if_else_program_needs_no_advice() {
    let source = "input age\nif age >= 18 then\n  print \"adult\"\nelse\n  print \"minor\"\nendif";
    assert!(suggestions(source).is_empty());
}

#[test]
fn suggestions_come_in_fixed_order() {
    let source = "\
a = 1
b = 2
c = 3
d = 4
while a < 3 do
  a = a + 1
endwhile
if a > b then
  print a
endif";
    let tips = suggestions(source);
    assert_eq!(tips.len(), 4);
    assert!(tips[0].contains("'else'"));
    assert!(tips[1].contains("while loop"));
    assert!(tips[2].contains("user input"));
    assert!(tips[3].contains("descriptive variable names"));
}

#[test]
fn substrings_of_longer_words_are_ignored() {
    assert!(suggestions("gift = \"x\"\ndiff = 1").is_empty());
}
