//! Command handlers for the `pseudo` CLI.
//!
//! Shared helpers for reading sources and reporting diagnostics live here.

mod check;
mod run;
mod suggest;

use std::io::IsTerminal;

use pseudo_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use pseudo_diagnostic::Diagnostic;
use serde::Serialize;

pub use check::check_file;
pub use run::{parse_run_options, run_file};
pub use suggest::suggest_file;

/// Read a source file, or exit with a readable message.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render diagnostics to stderr with the offending source lines, then a
/// one-line summary.
fn report(source: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(source);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}

/// Pretty-printed JSON on stdout.
fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("error: cannot serialize result: {e}");
            std::process::exit(1);
        }
    }
}
