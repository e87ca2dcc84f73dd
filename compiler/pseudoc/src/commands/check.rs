//! The `check` command: syntax diagnostics without running anything.

use pseudo_diagnostic::has_errors;

use super::{print_json, read_file, report};

/// Report every syntax problem in a file. Exits 1 if any is an error.
pub fn check_file(path: &str, json: bool) {
    let source = read_file(path);
    let diagnostics = pseudoc::hints(&source);

    if json {
        print_json(&diagnostics);
    } else if diagnostics.is_empty() {
        println!("{path}: no problems found");
    } else {
        report(&source, &diagnostics);
    }

    if has_errors(&diagnostics) {
        std::process::exit(1);
    }
}
