//! The pseudo-code engine's public face.
//!
//! Three operations, each a pure function of its input:
//!
//! - [`evaluate`] checks, parses and runs a program, returning an [`Outcome`]
//! - [`hints`] reports syntax diagnostics without running anything
//! - [`suggestions`] offers learning tips about the program's shape
//!
//! Every `evaluate` call builds a fresh interpreter, so concurrent or
//! successive calls never share variables or output.

pub mod advisor;
mod outcome;

use std::sync::Once;

use pseudo_diagnostic::{has_errors, Diagnostic};
use pseudo_eval::Interpreter;
use pseudo_ir::Program;
use tracing::debug;

pub use advisor::suggestions;
pub use outcome::{EvalOptions, Outcome, Status};
pub use pseudo_diagnostic::{ErrorCode, Severity};
pub use pseudo_eval::{InputProvider, Limits, QueuedInput, SnapshotValue, StreamInput};

/// Check, parse and run `source`.
///
/// Any error-severity diagnostic from validation or parsing stops the
/// program from running (`Status::SyntaxError`). Warnings are passed
/// through with whatever else the run reports.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn evaluate(source: &str, options: EvalOptions) -> Outcome {
    let (diagnostics, program) = check(source);
    let Some(program) = program else {
        debug!(diagnostics = diagnostics.len(), "syntax errors, not running");
        return Outcome::syntax_error(diagnostics);
    };

    let result = Interpreter::builder()
        .maybe_input(options.input)
        .limits(options.limits)
        .build()
        .run(&program);
    Outcome::from_run(result, diagnostics)
}

/// Syntax diagnostics for `source`: validation, lexical and structural
/// parse problems, ordered by line. Nothing is executed.
pub fn hints(source: &str) -> Vec<Diagnostic> {
    check(source).0
}

/// Validate and parse. The program is returned only when no
/// error-severity diagnostic was found.
fn check(source: &str) -> (Vec<Diagnostic>, Option<Program>) {
    let mut diagnostics = pseudo_parse::validate(source);

    let lexed = pseudo_lexer::lex(source);
    if lexed.has_errors() {
        // The validator already reported the lexical errors.
        return (diagnostics, None);
    }

    let program = match pseudo_parse::parse(&lexed.tokens) {
        Ok(program) => Some(program),
        Err(errors) => {
            diagnostics.extend(errors.iter().map(pseudo_parse::ParseError::to_diagnostic));
            diagnostics.sort_by_key(|d| d.line);
            None
        }
    };

    if has_errors(&diagnostics) {
        return (diagnostics, None);
    }
    (diagnostics, program)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
