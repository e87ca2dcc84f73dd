//! What a call to [`evaluate`](crate::evaluate) reports back.

use std::collections::BTreeMap;
use std::fmt;

use pseudo_diagnostic::Diagnostic;
use pseudo_eval::{InputProvider, Limits, RunResult, SnapshotValue};
use serde::Serialize;

/// How an evaluation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    SyntaxError,
    RuntimeError,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::SyntaxError => "syntax_error",
            Status::RuntimeError => "runtime_error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub status: Status,
    /// Printed text, without its final newline. Partial when the run failed.
    pub output: String,
    /// Global variables when the run stopped. Functions are left out.
    pub variables: BTreeMap<String, SnapshotValue>,
    /// Warnings, then the runtime error if there was one. For a syntax
    /// error, every syntax diagnostic.
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    pub(crate) fn syntax_error(diagnostics: Vec<Diagnostic>) -> Self {
        Outcome {
            status: Status::SyntaxError,
            output: String::new(),
            variables: BTreeMap::new(),
            diagnostics,
        }
    }

    pub(crate) fn from_run(result: RunResult, mut diagnostics: Vec<Diagnostic>) -> Self {
        let status = match &result.error {
            Some(err) => {
                diagnostics.push(err.to_diagnostic());
                Status::RuntimeError
            }
            None => Status::Success,
        };
        let mut output = result.output;
        if output.ends_with('\n') {
            output.pop();
        }
        Outcome {
            status,
            output,
            variables: result.variables,
            diagnostics,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// The first error-severity diagnostic, if any.
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.is_error())
    }
}

/// Caller-supplied knobs for [`evaluate`](crate::evaluate).
#[derive(Default)]
pub struct EvalOptions {
    /// Where `input` statements read from. `None` makes any read fail.
    pub input: Option<Box<dyn InputProvider>>,
    pub limits: Limits,
}

impl EvalOptions {
    pub fn new() -> Self {
        EvalOptions::default()
    }

    #[must_use]
    pub fn with_input(mut self, input: impl InputProvider + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

impl fmt::Debug for EvalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalOptions")
            .field("input", &self.input.as_ref().map(|_| "<input>"))
            .field("limits", &self.limits)
            .finish()
    }
}
