//! The [`Diagnostic`] type shared by validation, parsing and execution.

use std::fmt;

use pseudo_ir::Line;
use serde::Serialize;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks execution.
    Error,
    /// Reported alongside a run, never blocks it.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found in a learner's program.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// 1-based line the problem was found on.
    pub line: Line,
    /// What went wrong.
    pub message: String,
    /// How to fix it. Empty when there is nothing useful to say.
    pub suggestion: String,
    pub severity: Severity,
    pub code: ErrorCode,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity, line: Line) -> Self {
        Diagnostic {
            line,
            message: String::new(),
            suggestion: String::new(),
            severity,
            code,
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode, line: Line) -> Self {
        Self::new_with_severity(code, Severity::Error, line)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode, line: Line) -> Self {
        Self::new_with_severity(code, Severity::Warning, line)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the suggestion for fixing the problem.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] line {}: {}",
            self.severity, self.code, self.line, self.message
        )
    }
}

/// Whether any diagnostic in the slice blocks execution.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

#[cfg(test)]
mod tests;
