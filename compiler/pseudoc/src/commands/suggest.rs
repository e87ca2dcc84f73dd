//! The `suggest` command: learning tips for a program.

use super::read_file;

pub fn suggest_file(path: &str) {
    let source = read_file(path);
    for suggestion in pseudoc::suggestions(&source) {
        println!("- {suggestion}");
    }
}
