//! Expression parsing.
//!
//! Recursive descent, one function per precedence level, lowest first:
//!
//! ```text
//! or < and < not < comparison < additive < multiplicative
//!    < power (right-assoc) < unary minus < postfix < primary
//! ```
//!
//! Binary operators and postfix `[..]` / `(..)` only continue an expression
//! when they sit on the same line as the token before them.

use pseudo_ir::{
    BinaryOp, Delimiter, Expr, ExprKind, Keyword, Line, Operator, TokenKind, UnaryOp,
};
use pseudo_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply parenthesized input cannot
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.continues_with(Operator::Or) {
            self.cursor.advance();
            let right = self.parse_and()?;
            left = binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while self.continues_with(Operator::And) {
            self.cursor.advance();
            let right = self.parse_not()?;
            left = binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check_operator(Operator::Not) {
            let line = self.cursor.line();
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            return Ok(unary(UnaryOp::Not, operand, line));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            if !self.cursor.on_same_line() {
                break;
            }
            let Some(op) = self.cursor.current_operator() else {
                break;
            };
            if op == Operator::Assign {
                return Err(ParseError::UnexpectedToken {
                    expected: "`==` to compare values",
                    found: "=".to_string(),
                    line: self.cursor.line(),
                });
            }
            let Some(op) = BinaryOp::comparison_from(op) else {
                break;
            };
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.binary_op_here(BinaryOp::additive_from) {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;
        while let Some(op) = self.binary_op_here(BinaryOp::multiplicative_from) {
            self.cursor.advance();
            let right = self.parse_power()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    /// `**` is right-associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_unary()?;
        if self.continues_with(Operator::DoubleStar) {
            self.cursor.advance();
            let exponent = ensure_sufficient_stack(|| self.parse_power())?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check_operator(Operator::Minus) {
            let line = self.cursor.line();
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(unary(UnaryOp::Neg, operand, line));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if !self.cursor.on_same_line() {
                break;
            }
            if self.cursor.eat_delimiter(Delimiter::LBracket) {
                let index = self.parse_expr()?;
                self.expect_delimiter(Delimiter::RBracket, "`]` after the index")?;
                let line = expr.line;
                expr = Expr::new(
                    ExprKind::Index {
                        target: Box::new(expr),
                        index: Box::new(index),
                    },
                    line,
                );
                continue;
            }
            let callee = match &expr.kind {
                ExprKind::Ident(name) if self.cursor.check_delimiter(Delimiter::LParen) => {
                    name.clone()
                }
                _ => break,
            };
            self.cursor.advance();
            let args = self.parse_call_args()?;
            expr = Expr::new(ExprKind::Call { callee, args }, expr.line);
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if let Some(prev) = self.cursor.previous() {
            let wants_operand = matches!(prev.kind, TokenKind::Operator(_))
                || matches!(
                    prev.kind,
                    TokenKind::Delimiter(Delimiter::LParen | Delimiter::LBracket | Delimiter::Comma)
                );
            // An operand never starts on the next line.
            if wants_operand && !self.cursor.is_at_end() && !self.cursor.on_same_line() {
                return Err(ParseError::ExpectedExpression {
                    found: "end of line".to_string(),
                    line: prev.line,
                });
            }
        }

        let line = self.cursor.line();
        let Some(token) = self.cursor.current() else {
            return Err(self.expected_expression());
        };

        let kind = match token.kind {
            TokenKind::Number => {
                let value = token
                    .lexeme
                    .parse::<f64>()
                    .map_err(|_| ParseError::UnexpectedToken {
                        expected: "a number",
                        found: token.lexeme.clone(),
                        line,
                    })?;
                ExprKind::Number(value)
            }
            TokenKind::String => ExprKind::Str(token.string_contents().to_string()),
            TokenKind::Identifier => ExprKind::Ident(token.lexeme.clone()),
            TokenKind::Keyword(Keyword::True) => ExprKind::Bool(true),
            TokenKind::Keyword(Keyword::False) => ExprKind::Bool(false),
            TokenKind::Keyword(Keyword::Null) => ExprKind::Null,
            TokenKind::Keyword(kw @ (Keyword::Print | Keyword::Input))
                if self
                    .cursor
                    .peek(1)
                    .is_some_and(|t| t.is_delimiter(Delimiter::LParen)) =>
            {
                self.cursor.advance();
                self.cursor.advance();
                let args = self.parse_call_args()?;
                return Ok(Expr::new(
                    ExprKind::Call {
                        callee: kw.as_str().to_string(),
                        args,
                    },
                    line,
                ));
            }
            TokenKind::Delimiter(Delimiter::LBracket) => {
                self.cursor.advance();
                return self.parse_array_literal(line);
            }
            TokenKind::Delimiter(Delimiter::LParen) => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.expect_delimiter(Delimiter::RParen, "`)` to close the parenthesis")?;
                return Ok(inner);
            }
            _ => return Err(self.expected_expression()),
        };

        self.cursor.advance();
        Ok(Expr::new(kind, line))
    }

    /// Elements after `[`, through the closing `]`. A trailing comma is allowed.
    fn parse_array_literal(&mut self, line: Line) -> Result<Expr, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.eat_delimiter(Delimiter::RBracket) {
            items.push(self.parse_expr()?);
            if !self.cursor.eat_delimiter(Delimiter::Comma) {
                self.expect_delimiter(Delimiter::RBracket, "`,` or `]` in the list")?;
                break;
            }
        }
        Ok(Expr::new(ExprKind::Array(items), line))
    }

    /// Arguments after `(`, through the closing `)`.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.cursor.eat_delimiter(Delimiter::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if self.cursor.eat_delimiter(Delimiter::RParen) {
                return Ok(args);
            }
            self.expect_delimiter(Delimiter::Comma, "`,` or `)` in the argument list")?;
        }
    }

    fn expect_delimiter(
        &mut self,
        delim: Delimiter,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        if self.cursor.eat_delimiter(delim) {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: self.cursor.describe_current(),
                line: self.cursor.line(),
            })
        }
    }

    fn continues_with(&self, op: Operator) -> bool {
        self.cursor.on_same_line() && self.cursor.check_operator(op)
    }

    /// The binary operator at the cursor, if it continues this line's
    /// expression and belongs to the level `classify` accepts.
    fn binary_op_here(&self, classify: fn(Operator) -> Option<BinaryOp>) -> Option<BinaryOp> {
        if !self.cursor.on_same_line() {
            return None;
        }
        self.cursor.current_operator().and_then(classify)
    }

    #[cold]
    fn expected_expression(&self) -> ParseError {
        ParseError::ExpectedExpression {
            found: self.cursor.describe_current(),
            line: self.cursor.line(),
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let line = left.line;
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        line,
    )
}

fn unary(op: UnaryOp, operand: Expr, line: Line) -> Expr {
    Expr::new(
        ExprKind::Unary {
            op,
            operand: Box::new(operand),
        },
        line,
    )
}
