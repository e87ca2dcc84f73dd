//! Token cursor for navigating the token stream.
//!
//! Provides lookahead, consumption, and the line bookkeeping the
//! line-oriented grammar needs. Comment tokens are filtered out before a
//! cursor is built, so the parser never sees them.

use pseudo_ir::{Delimiter, Keyword, Line, Operator, Token};
use tracing::trace;

/// Cursor over a token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position, for backtracking with [`Cursor::set_position`].
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len(), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// The token `n` positions ahead of the current one.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Line of the current token, or of the last token at end of input.
    pub fn line(&self) -> Line {
        self.current()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    /// Lexeme of the current token for error messages.
    pub fn describe_current(&self) -> String {
        match self.current() {
            Some(token) => token.lexeme.clone(),
            None => "end of input".to_string(),
        }
    }

    /// Whether the current token sits on the same line as the previous one.
    ///
    /// Binary operators and postfix forms only continue an expression on
    /// its own line.
    pub fn on_same_line(&self) -> bool {
        match (self.previous(), self.current()) {
            (Some(prev), Some(cur)) => prev.line == cur.line,
            _ => false,
        }
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(lexeme = %token.lexeme, line = token.line, "advance");
        self.pos += 1;
        Some(token)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current().is_some_and(|t| t.is_keyword(kw))
    }

    #[inline]
    pub fn check_operator(&self, op: Operator) -> bool {
        self.current().is_some_and(|t| t.is_operator(op))
    }

    #[inline]
    pub fn check_delimiter(&self, delim: Delimiter) -> bool {
        self.current().is_some_and(|t| t.is_delimiter(delim))
    }

    /// The keyword at the cursor, if any.
    #[inline]
    pub fn current_keyword(&self) -> Option<Keyword> {
        self.current().and_then(Token::keyword)
    }

    /// The operator at the cursor, if any.
    pub fn current_operator(&self) -> Option<Operator> {
        match self.current()?.kind {
            pseudo_ir::TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    pub fn eat_operator(&mut self, op: Operator) -> bool {
        self.eat_if(|t| t.is_operator(op))
    }

    pub fn eat_delimiter(&mut self, delim: Delimiter) -> bool {
        self.eat_if(|t| t.is_delimiter(delim))
    }

    pub fn eat_soft_keyword(&mut self, word: &str) -> bool {
        self.eat_if(|t| t.is_soft_keyword(word))
    }

    fn eat_if(&mut self, pred: impl FnOnce(&Token) -> bool) -> bool {
        if self.current().is_some_and(pred) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip the remaining tokens on `line`, stopping after a `;`.
    ///
    /// Used for error recovery so one bad statement yields one error.
    pub fn synchronize(&mut self, line: Line) {
        while let Some(token) = self.current() {
            if token.line != line {
                return;
            }
            self.pos += 1;
            if token.is_delimiter(Delimiter::Semicolon) {
                return;
            }
        }
    }
}
