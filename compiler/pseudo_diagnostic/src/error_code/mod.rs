//! Error codes for all engine diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Validation and parse errors (including block-opener warnings)
//! - E6xxx: Runtime errors

use std::fmt;

use serde::Serialize;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Character that cannot start any token
    E0002,

    // Validation / Parser Errors (E1xxx)
    /// Unmatched parentheses on a line
    E1001,
    /// Unmatched brackets on a line
    E1002,
    /// `if` line without `then`, `:` or `{` (warning)
    E1003,
    /// `while` line without `do`, `:` or `{` (warning)
    E1004,
    /// Unexpected token / unknown statement form
    E1005,
    /// Expected expression
    E1006,
    /// Block terminator does not match the innermost open block
    E1007,
    /// Block still open at end of source
    E1008,
    /// Reserved keyword used as a name
    E1009,
    /// Malformed function or procedure signature
    E1010,
    /// `return` outside a function or procedure
    E1011,
    /// `else` without a matching `if`
    E1012,

    // Runtime Errors (E6xxx)
    /// Operand or condition of the wrong type
    E6001,
    /// Undefined variable
    E6002,
    /// Undefined function
    E6003,
    /// Division by zero
    E6004,
    /// Index out of range
    E6005,
    /// Wrong number of arguments
    E6006,
    /// Step or time budget exhausted
    E6007,
    /// `input` with no input stream, or the stream is exhausted
    E6008,
    /// Call depth limit exceeded
    E6009,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Codes that are only ever reported as warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::E1003 | ErrorCode::E1004)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
