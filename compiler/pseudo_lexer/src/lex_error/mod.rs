//! Lexical errors.

use pseudo_diagnostic::{Diagnostic, ErrorCode};
use pseudo_ir::Line;

/// A character sequence that cannot be turned into a token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { line: Line, quote: char },

    #[error("unexpected character `{found}`")]
    UnexpectedCharacter { line: Line, found: char },
}

impl LexError {
    pub fn line(&self) -> Line {
        match self {
            LexError::UnterminatedString { line, .. }
            | LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::UnexpectedCharacter { .. } => ErrorCode::E0002,
        }
    }

    /// Convert to a diagnostic with a fix-it suggestion.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let suggestion = match self {
            LexError::UnterminatedString { quote, .. } => {
                format!("close the string with {quote} before the end of the line")
            }
            LexError::UnexpectedCharacter { found: '!', .. } => {
                "use `not` for negation, or `!=` for inequality".to_string()
            }
            LexError::UnexpectedCharacter { .. } => {
                "remove the character, or put it inside a string".to_string()
            }
        };
        Diagnostic::error(self.code(), self.line())
            .with_message(self.to_string())
            .with_suggestion(suggestion)
    }
}
