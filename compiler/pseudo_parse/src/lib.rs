//! Syntax validation and statement parsing for pseudo-code.
//!
//! Two independent passes live here:
//!
//! - [`validate`] works line by line on the raw source and reports
//!   unbalanced delimiters (errors) and block headers missing their opener
//!   (warnings). It never builds a tree.
//! - [`parse`] turns lexed tokens into a [`Program`]. Blocks are tracked on
//!   an explicit stack of open frames, so nesting depth never grows the
//!   native stack; expressions use recursive descent guarded by
//!   `ensure_sufficient_stack`.
//!
//! The parser recovers at line granularity: a bad statement records one
//! error and parsing resumes on the next line, so a single run reports every
//! independent problem.

mod cursor;
mod error;
mod grammar;
pub mod validate;

use pseudo_ir::{Program, Token, TokenKind};
use tracing::debug;

pub use cursor::Cursor;
pub use error::ParseError;
pub use validate::validate;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser over comment-free tokens.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> Result<Program, Vec<ParseError>> {
        let program = self.parse_blocks();
        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parse lexed tokens into a statement tree.
///
/// Comment tokens are skipped. On failure every error found is returned, in
/// source order of discovery.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, Vec<ParseError>> {
    let tokens: Vec<Token> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Comment)
        .cloned()
        .collect();
    let result = Parser::new(&tokens).parse_program();
    match &result {
        Ok(program) => debug!(statements = program.body.len(), "parsed program"),
        Err(errors) => debug!(errors = errors.len(), "parse failed"),
    }
    result
}

#[cfg(test)]
mod tests;
