//! Parse error types.
//!
//! Every variant carries the 1-based line it was found on and converts into
//! a [`Diagnostic`] with a learner-facing fix-it suggestion.

use pseudo_diagnostic::{Diagnostic, ErrorCode};
use pseudo_ir::{BlockKind, Keyword, Line, RoutineKind};

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: Line,
    },

    #[error("expected an expression, found `{found}`")]
    ExpectedExpression { found: String, line: Line },

    #[error("expected end of statement, found `{found}`")]
    ExpectedEndOfStatement { found: String, line: Line },

    #[error("mismatched block terminator at line {line}: expected `{expected}`, found `{found}`")]
    MismatchedTerminator {
        found: Keyword,
        expected: Keyword,
        opened: Line,
        line: Line,
    },

    #[error("`{found}` without an open block")]
    UnexpectedTerminator { found: Keyword, line: Line },

    #[error("unterminated {kind} block")]
    UnterminatedBlock { kind: BlockKind, line: Line },

    #[error("reserved keyword `{keyword}` cannot be used as a name")]
    KeywordAsName { keyword: Keyword, line: Line },

    #[error("malformed {} signature: {reason}", routine_word(.kind))]
    MalformedSignature {
        kind: RoutineKind,
        reason: &'static str,
        line: Line,
    },

    #[error("`return` outside a function or procedure")]
    ReturnOutsideRoutine { line: Line },

    #[error("`else` without a matching `if`")]
    ElseWithoutIf { line: Line },

    #[error("`else` after the final `else` branch")]
    DuplicateElse { line: Line },
}

fn routine_word(kind: &RoutineKind) -> &'static str {
    match kind {
        RoutineKind::Function => "function",
        RoutineKind::Procedure => "procedure",
    }
}

impl ParseError {
    pub fn line(&self) -> Line {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::ExpectedExpression { line, .. }
            | ParseError::ExpectedEndOfStatement { line, .. }
            | ParseError::MismatchedTerminator { line, .. }
            | ParseError::UnexpectedTerminator { line, .. }
            | ParseError::UnterminatedBlock { line, .. }
            | ParseError::KeywordAsName { line, .. }
            | ParseError::MalformedSignature { line, .. }
            | ParseError::ReturnOutsideRoutine { line }
            | ParseError::ElseWithoutIf { line }
            | ParseError::DuplicateElse { line } => *line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } | ParseError::ExpectedEndOfStatement { .. } => {
                ErrorCode::E1005
            }
            ParseError::ExpectedExpression { .. } => ErrorCode::E1006,
            ParseError::MismatchedTerminator { .. } | ParseError::UnexpectedTerminator { .. } => {
                ErrorCode::E1007
            }
            ParseError::UnterminatedBlock { .. } => ErrorCode::E1008,
            ParseError::KeywordAsName { .. } => ErrorCode::E1009,
            ParseError::MalformedSignature { .. } => ErrorCode::E1010,
            ParseError::ReturnOutsideRoutine { .. } => ErrorCode::E1011,
            ParseError::ElseWithoutIf { .. } | ParseError::DuplicateElse { .. } => {
                ErrorCode::E1012
            }
        }
    }

    /// Convert to a diagnostic with a fix-it suggestion.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.line())
            .with_message(self.to_string())
            .with_suggestion(self.suggestion())
    }

    fn suggestion(&self) -> String {
        match self {
            ParseError::UnexpectedToken { .. } => String::new(),
            ParseError::ExpectedExpression { .. } => {
                "add a value, a variable name, or a calculation here".to_string()
            }
            ParseError::ExpectedEndOfStatement { .. } => {
                "put each statement on its own line, or separate them with `;`".to_string()
            }
            ParseError::MismatchedTerminator {
                expected, opened, ..
            } => format!("close the block opened on line {opened} with `{expected}` first"),
            ParseError::UnexpectedTerminator { found, .. } => {
                format!("remove `{found}`, or add the block it is meant to close")
            }
            ParseError::UnterminatedBlock { kind, .. } => {
                format!("add `{}` to close the {kind} block", kind.terminator())
            }
            ParseError::KeywordAsName { keyword, .. } => {
                format!("choose a different name, such as `my_{keyword}`")
            }
            ParseError::MalformedSignature { kind, .. } => {
                format!("write it as `{} name(a, b)`", routine_word(kind))
            }
            ParseError::ReturnOutsideRoutine { .. } => {
                "move the `return` inside a function or procedure".to_string()
            }
            ParseError::ElseWithoutIf { .. } => {
                "an `else` must come after an `if` and before its `endif`".to_string()
            }
            ParseError::DuplicateElse { .. } => {
                "use `else if` for another condition, or close the block with `endif`".to_string()
            }
        }
    }
}
