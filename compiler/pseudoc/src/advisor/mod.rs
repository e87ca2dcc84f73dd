//! Learning suggestions drawn from the shape of a program.
//!
//! These are heuristics over the raw source text, not diagnostics: they
//! carry no line and never block anything. Keyword checks match whole
//! words regardless of case, so `gift` does not count as an `if`.

use rustc_hash::FxHashSet;

const ELSE_CLAUSE: &str =
    "Consider adding an 'else' clause to handle the case when the condition is false";
const LOOP_TERMINATION: &str =
    "Make sure your while loop has a proper termination condition to avoid infinite loops";
const USER_INPUT: &str = "Consider adding user input to make your program interactive";
const DESCRIPTIVE_NAMES: &str =
    "Consider using more descriptive variable names to improve code readability";

/// More `=` characters than this suggests a program heavy on assignments.
const ASSIGNMENT_THRESHOLD: usize = 5;

/// Suggestions for `source`, in a fixed order.
pub fn suggestions(source: &str) -> Vec<String> {
    let words = Words::of(source);
    let mut out = Vec::new();

    if words.has("if") && !words.has("else") {
        out.push(ELSE_CLAUSE.to_string());
    }
    if words.has("while") && !words.has("break") {
        out.push(LOOP_TERMINATION.to_string());
    }
    if words.has("print") && !words.has("input") {
        out.push(USER_INPUT.to_string());
    }
    if source.matches('=').count() > ASSIGNMENT_THRESHOLD {
        out.push(DESCRIPTIVE_NAMES.to_string());
    }
    out
}

/// The distinct lowercased words of a source text. A word is a run of
/// alphanumerics and underscores.
struct Words(FxHashSet<String>);

impl Words {
    fn of(source: &str) -> Self {
        Words(
            source
                .split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase)
                .collect(),
        )
    }

    fn has(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

#[cfg(test)]
mod tests;
