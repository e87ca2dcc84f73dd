//! Runtime errors and control flow out of the evaluator.
//!
//! A runtime error halts the run at the failing statement. Its kind picks
//! the error code and suggestion of the diagnostic shown to the learner.

use pseudo_diagnostic::{Diagnostic, ErrorCode};
use pseudo_ir::Line;

use crate::limits::BudgetKind;
use crate::value::Value;

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("type mismatch: {detail}")]
    TypeMismatch { detail: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        name: String,
        /// A visible name spelled similarly, if any.
        similar: Option<String>,
    },

    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String, similar: Option<String> },

    #[error("division by zero")]
    DivisionByZero,

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: String, len: usize },

    #[error("`{name}` expects {expected} argument{}, got {got}", plural(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{budget}")]
    StepLimitExceeded { budget: BudgetKind },

    #[error("no input available")]
    InputUnavailable,

    #[error("recursion limit of {depth} nested calls exceeded")]
    RecursionLimitExceeded { depth: usize },
}

// Takes a reference to fit the field bindings in `#[error]` arguments.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

/// A runtime error and the line it happened on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: Line,
}

impl RuntimeError {
    #[cold]
    pub fn new(kind: RuntimeErrorKind, line: Line) -> Self {
        RuntimeError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            RuntimeErrorKind::TypeMismatch { .. } => ErrorCode::E6001,
            RuntimeErrorKind::UndefinedVariable { .. } => ErrorCode::E6002,
            RuntimeErrorKind::UndefinedFunction { .. } => ErrorCode::E6003,
            RuntimeErrorKind::DivisionByZero => ErrorCode::E6004,
            RuntimeErrorKind::IndexOutOfRange { .. } => ErrorCode::E6005,
            RuntimeErrorKind::ArityMismatch { .. } => ErrorCode::E6006,
            RuntimeErrorKind::StepLimitExceeded { .. } => ErrorCode::E6007,
            RuntimeErrorKind::InputUnavailable => ErrorCode::E6008,
            RuntimeErrorKind::RecursionLimitExceeded { .. } => ErrorCode::E6009,
        }
    }

    /// How to fix it, phrased for a learner.
    pub fn suggestion(&self) -> String {
        match &self.kind {
            RuntimeErrorKind::TypeMismatch { .. } => {
                "check that each value has the type the operation expects".to_string()
            }
            RuntimeErrorKind::UndefinedVariable {
                similar: Some(similar),
                ..
            }
            | RuntimeErrorKind::UndefinedFunction {
                similar: Some(similar),
                ..
            } => format!("did you mean `{similar}`?"),
            RuntimeErrorKind::UndefinedVariable { name, .. } => {
                format!("assign a value to `{name}` before using it")
            }
            RuntimeErrorKind::UndefinedFunction { name, .. } => {
                format!("define `{name}` with `function {name}(...)` before calling it")
            }
            RuntimeErrorKind::DivisionByZero => {
                "check that the divisor is not zero before dividing".to_string()
            }
            RuntimeErrorKind::IndexOutOfRange { len: 0, .. } => {
                "the list is empty, so it has no valid index".to_string()
            }
            RuntimeErrorKind::IndexOutOfRange { len, .. } => {
                format!("valid indices are 0 to {}", len - 1)
            }
            RuntimeErrorKind::ArityMismatch { name, expected, .. } => {
                format!("call `{name}` with {expected} argument{}", plural(expected))
            }
            RuntimeErrorKind::StepLimitExceeded {
                budget: BudgetKind::Size(_),
            } => "keep strings and printed values smaller".to_string(),
            RuntimeErrorKind::StepLimitExceeded { .. } => {
                "make sure every loop can reach its end".to_string()
            }
            RuntimeErrorKind::InputUnavailable => {
                "provide a line of input for each `input` the program runs".to_string()
            }
            RuntimeErrorKind::RecursionLimitExceeded { .. } => {
                "make sure recursive calls reach a base case".to_string()
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.line)
            .with_message(self.kind.to_string())
            .with_suggestion(self.suggestion())
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(err: &RuntimeError) -> Self {
        err.to_diagnostic()
    }
}

/// Why statement execution stopped early.
#[derive(Debug)]
pub(crate) enum ControlAction {
    /// `return` unwinding to the call site.
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for ControlAction {
    #[inline]
    fn from(err: RuntimeError) -> Self {
        ControlAction::Error(err)
    }
}

pub(crate) type ExecResult = Result<(), ControlAction>;

pub(crate) type EvalResult = Result<Value, RuntimeError>;

// Constructors

#[cold]
pub(crate) fn type_mismatch(detail: impl Into<String>, line: Line) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::TypeMismatch {
            detail: detail.into(),
        },
        line,
    )
}

#[cold]
pub(crate) fn division_by_zero(line: Line) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::DivisionByZero, line)
}

#[cold]
pub(crate) fn index_out_of_range(index: &Value, len: usize, line: Line) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::IndexOutOfRange {
            index: index.to_string(),
            len,
        },
        line,
    )
}

#[cold]
pub(crate) fn arity_mismatch(name: &str, expected: usize, got: usize, line: Line) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::ArityMismatch {
            name: name.to_string(),
            expected,
            got,
        },
        line,
    )
}

#[cfg(test)]
mod tests;
