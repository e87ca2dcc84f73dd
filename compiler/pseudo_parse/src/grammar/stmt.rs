//! Statements and block headers.
//!
//! A statement ends at a newline, at `;`, or where the next token is a
//! keyword, which is what lets `if x > y then print "a" else print "b" endif`
//! sit on one line. Any other token left on the line is an error.

use pseudo_ir::{
    AssignOp, AssignTarget, BlockKind, Delimiter, Expr, Keyword, Line, Operator, RoutineKind,
    Stmt, StmtKind, TokenKind,
};
use tracing::trace;

use super::block::{BlockStack, Frame, Header};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement, header, `else` or terminator.
    pub(super) fn parse_item(&mut self, blocks: &mut BlockStack) -> Result<(), ParseError> {
        let Some(token) = self.cursor.current() else {
            return Ok(());
        };
        let line = token.line;

        if self.cursor.eat_delimiter(Delimiter::Semicolon) {
            return Ok(());
        }

        if let Some(keyword) = token.keyword() {
            let assigns = self
                .cursor
                .peek(1)
                .is_some_and(|next| match next.kind {
                    TokenKind::Operator(op) => AssignOp::from_operator(op).is_some(),
                    _ => false,
                });
            if assigns {
                return Err(ParseError::KeywordAsName { keyword, line });
            }
        }

        match token.keyword() {
            Some(Keyword::If) => {
                self.cursor.advance();
                self.parse_if_header(line, blocks);
                Ok(())
            }
            Some(Keyword::While) => {
                self.cursor.advance();
                self.parse_while_header(line, blocks);
                Ok(())
            }
            Some(Keyword::For) => {
                self.cursor.advance();
                self.parse_for_header(line, blocks);
                Ok(())
            }
            Some(Keyword::Function) => {
                self.cursor.advance();
                self.parse_routine_header(RoutineKind::Function, line, blocks);
                Ok(())
            }
            Some(Keyword::Procedure) => {
                self.cursor.advance();
                self.parse_routine_header(RoutineKind::Procedure, line, blocks);
                Ok(())
            }
            Some(Keyword::Else) => {
                self.cursor.advance();
                self.parse_else(line, blocks)
            }
            Some(kw) if kw.is_terminator() => {
                self.cursor.advance();
                self.close_block(kw, line, blocks)?;
                self.expect_statement_end()
            }
            _ => {
                let stmt = self.parse_simple_statement(line, blocks)?;
                trace!(line, "statement");
                blocks.push_stmt(stmt);
                self.expect_statement_end()
            }
        }
    }

    /// Parse a statement that opens no block.
    fn parse_simple_statement(
        &mut self,
        line: Line,
        blocks: &BlockStack,
    ) -> Result<Stmt, ParseError> {
        let kind = match self.cursor.current_keyword() {
            Some(Keyword::Print) => self.parse_print_statement()?,
            Some(Keyword::Input) if !self.next_is_call_paren() => {
                self.cursor.advance();
                let name = self.expect_name("a variable name after `input`")?;
                StmtKind::Input { name }
            }
            Some(Keyword::Return) => {
                self.cursor.advance();
                if !blocks.in_routine() {
                    return Err(ParseError::ReturnOutsideRoutine { line });
                }
                let value = if self.at_statement_boundary() {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                StmtKind::Return(value)
            }
            _ => self.parse_assignment_or_expression()?,
        };
        Ok(Stmt::new(kind, line))
    }

    /// `print a, b`. With a parenthesis after `print`, the arguments are
    /// read as ordinary expressions first, so `print (1 + 2) * 3` prints one
    /// value. Only when that fails, as in `print(a, b)`, is the line a call
    /// to the built-in.
    fn parse_print_statement(&mut self) -> Result<StmtKind, ParseError> {
        let start = self.cursor.position();
        self.cursor.advance();
        if !self.cursor.check_delimiter(Delimiter::LParen) {
            return Ok(StmtKind::Print(self.parse_print_args()?));
        }
        if let Ok(args) = self.parse_print_args() {
            if self.at_statement_boundary() {
                return Ok(StmtKind::Print(args));
            }
        }
        self.cursor.set_position(start);
        Ok(StmtKind::Expression(self.parse_expr()?))
    }

    /// `print` or `input` followed directly by `(` is a call to the built-in.
    fn next_is_call_paren(&self) -> bool {
        self.cursor
            .peek(1)
            .is_some_and(|t| t.is_delimiter(Delimiter::LParen))
    }

    fn parse_print_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.at_statement_boundary() {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if !self.cursor.eat_delimiter(Delimiter::Comma) {
                return Ok(args);
            }
        }
    }

    fn parse_assignment_or_expression(&mut self) -> Result<StmtKind, ParseError> {
        let start = self.cursor.position();
        if let Some(target) = self.try_parse_target() {
            if let Some(op) = self.cursor.current_operator().and_then(AssignOp::from_operator) {
                self.cursor.advance();
                let value = self.parse_expr()?;
                return Ok(StmtKind::Assignment { target, op, value });
            }
        }
        self.cursor.set_position(start);
        Ok(StmtKind::Expression(self.parse_expr()?))
    }

    /// `name` or `name[i][j]...`. `None` if the tokens don't form a target.
    fn try_parse_target(&mut self) -> Option<AssignTarget> {
        let token = self.cursor.current()?;
        if token.kind != TokenKind::Identifier {
            return None;
        }
        self.cursor.advance();
        let mut target = AssignTarget::variable(token.lexeme.clone());
        while self.cursor.on_same_line() && self.cursor.eat_delimiter(Delimiter::LBracket) {
            let index = self.parse_expr().ok()?;
            if !self.cursor.eat_delimiter(Delimiter::RBracket) {
                return None;
            }
            target.indices.push(index);
        }
        Some(target)
    }

    /// Whether the current statement is complete here.
    pub(super) fn at_statement_boundary(&self) -> bool {
        let Some(token) = self.cursor.current() else {
            return true;
        };
        if token.is_delimiter(Delimiter::Semicolon) || !self.cursor.on_same_line() {
            return true;
        }
        match token.keyword() {
            Some(Keyword::True | Keyword::False | Keyword::Null) => false,
            Some(Keyword::Print | Keyword::Input) => !self.next_is_call_paren(),
            Some(_) => true,
            None => false,
        }
    }

    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat_delimiter(Delimiter::Semicolon) || self.at_statement_boundary() {
            return Ok(());
        }
        Err(ParseError::ExpectedEndOfStatement {
            found: self.cursor.describe_current(),
            line: self.cursor.line(),
        })
    }

    /// Consume an identifier used as a name.
    fn expect_name(&mut self, expected: &'static str) -> Result<String, ParseError> {
        let line = self.cursor.line();
        match self.cursor.current() {
            Some(token) if token.kind == TokenKind::Identifier => {
                self.cursor.advance();
                Ok(token.lexeme.clone())
            }
            Some(token) => match token.keyword() {
                Some(keyword) => Err(ParseError::KeywordAsName { keyword, line }),
                None => Err(ParseError::UnexpectedToken {
                    expected,
                    found: token.lexeme.clone(),
                    line,
                }),
            },
            None => Err(ParseError::UnexpectedToken {
                expected,
                found: "end of input".to_string(),
                line,
            }),
        }
    }

    /// Consume an optional block opener: `:`, `{`, or the given soft keyword.
    pub(super) fn eat_opener(&mut self, soft: Option<&str>) {
        if soft.is_some_and(|word| self.cursor.eat_soft_keyword(word)) {
            return;
        }
        if !self.cursor.eat_delimiter(Delimiter::Colon) {
            self.cursor.eat_delimiter(Delimiter::LBrace);
        }
    }

    /// Open a frame for a header, or an invalid one if the header is broken.
    ///
    /// The frame is pushed either way so the block's terminator still pairs
    /// up and one typo doesn't cascade into more errors.
    fn open_frame(
        &mut self,
        kind: BlockKind,
        line: Line,
        header: Result<Header, ParseError>,
        blocks: &mut BlockStack,
    ) {
        let header = header.unwrap_or_else(|err| {
            self.errors.push(err);
            self.cursor.synchronize(line);
            Header::Invalid
        });
        blocks.open(Frame::new(kind, line, header));
    }

    fn parse_if_header(&mut self, line: Line, blocks: &mut BlockStack) {
        let header = self.parse_expr().map(|cond| {
            self.eat_opener(Some("then"));
            Header::If {
                arms: Vec::new(),
                pending: Some((cond, line)),
            }
        });
        self.open_frame(BlockKind::If, line, header, blocks);
    }

    fn parse_while_header(&mut self, line: Line, blocks: &mut BlockStack) {
        let header = self.parse_expr().map(|cond| {
            self.eat_opener(Some("do"));
            Header::While { cond }
        });
        self.open_frame(BlockKind::While, line, header, blocks);
    }

    fn parse_for_header(&mut self, line: Line, blocks: &mut BlockStack) {
        let header = self.parse_for_parts();
        self.open_frame(BlockKind::For, line, header, blocks);
    }

    /// `for var = start to end`
    fn parse_for_parts(&mut self) -> Result<Header, ParseError> {
        let var = self.expect_name("a loop variable after `for`")?;
        if !self.cursor.eat_operator(Operator::Assign) {
            return Err(ParseError::UnexpectedToken {
                expected: "`=` after the loop variable",
                found: self.cursor.describe_current(),
                line: self.cursor.line(),
            });
        }
        let start = self.parse_expr()?;
        if !self.cursor.eat_soft_keyword("to") {
            return Err(ParseError::UnexpectedToken {
                expected: "`to` between the loop bounds",
                found: self.cursor.describe_current(),
                line: self.cursor.line(),
            });
        }
        let end = self.parse_expr()?;
        self.eat_opener(Some("do"));
        Ok(Header::For { var, start, end })
    }

    fn parse_routine_header(&mut self, kind: RoutineKind, line: Line, blocks: &mut BlockStack) {
        let header = self.parse_signature(kind);
        self.open_frame(kind.block_kind(), line, header, blocks);
    }

    /// `name`, `name()` or `name(a, b, ...)`
    fn parse_signature(&mut self, kind: RoutineKind) -> Result<Header, ParseError> {
        let line = self.cursor.line();
        let name = match self.expect_name("a name") {
            Ok(name) => name,
            Err(ParseError::UnexpectedToken { .. }) => {
                return Err(ParseError::MalformedSignature {
                    kind,
                    reason: "expected a name",
                    line,
                })
            }
            Err(err) => return Err(err),
        };

        let mut params = Vec::new();
        if self.cursor.on_same_line() && self.cursor.eat_delimiter(Delimiter::LParen) {
            if !self.cursor.eat_delimiter(Delimiter::RParen) {
                loop {
                    match self.expect_name("a parameter name") {
                        Ok(param) => params.push(param),
                        Err(ParseError::UnexpectedToken { .. }) => {
                            return Err(ParseError::MalformedSignature {
                                kind,
                                reason: "expected a parameter name",
                                line,
                            })
                        }
                        Err(err) => return Err(err),
                    }
                    if self.cursor.eat_delimiter(Delimiter::RParen) {
                        break;
                    }
                    if !self.cursor.eat_delimiter(Delimiter::Comma) {
                        return Err(ParseError::MalformedSignature {
                            kind,
                            reason: "expected `,` or `)` in the parameter list",
                            line,
                        });
                    }
                }
            }
        }

        self.eat_opener(None);
        Ok(Header::Routine { kind, name, params })
    }
}
