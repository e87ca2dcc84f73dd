use super::*;

#[test]
fn distance_basics() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("hello", "hello"), 0);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("", "ab"), 2);
}

#[test]
fn suggests_transposed_name() {
    let names = ["length", "height", "width"];
    assert_eq!(suggest_similar("lenght", names.iter().copied()), Some("length"));
}

#[test]
fn suggests_closest_of_several() {
    let names = ["total", "count", "counter"];
    assert_eq!(suggest_similar("cuont", names.iter().copied()), Some("count"));
}

#[test]
fn short_names_need_close_match() {
    let names = ["x", "abc"];
    assert_eq!(suggest_similar("y", names.iter().copied()), Some("x"));
    assert_eq!(suggest_similar("q", ["abc"].iter().copied()), None);
}

#[test]
fn unrelated_names_are_not_suggested() {
    let names = ["result", "numbers"];
    assert_eq!(suggest_similar("zzz", names.iter().copied()), None);
}

#[test]
fn never_suggests_the_same_name() {
    assert_eq!(suggest_similar("x", ["x"].iter().copied()), None);
}

#[test]
fn empty_name_has_no_suggestion() {
    assert_eq!(suggest_similar("", ["a"].iter().copied()), None);
}
