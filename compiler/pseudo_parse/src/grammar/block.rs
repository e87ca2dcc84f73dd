//! Block structure: a stack of open frames.
//!
//! A header (`if`, `while`, `for`, `function`, `procedure`) pushes a frame.
//! Statements are appended to the innermost frame's body. A terminator
//! keyword pops the innermost frame, which must be of the matching kind,
//! and appends the finished statement to the frame beneath it. Indentation
//! plays no part.

use std::mem;
use std::rc::Rc;

use pseudo_ir::{BlockKind, Expr, Keyword, Line, Program, Routine, RoutineKind, Stmt, StmtKind};

use crate::{ParseError, Parser};

/// Statement data collected from a block header.
pub(super) enum Header {
    If {
        /// Finished `if` / `else if` arms.
        arms: Vec<IfArm>,
        /// Condition of the arm being filled, `None` once in the final `else`.
        pending: Option<(Expr, Line)>,
    },
    While {
        cond: Expr,
    },
    For {
        var: String,
        start: Expr,
        end: Expr,
    },
    Routine {
        kind: RoutineKind,
        name: String,
        params: Vec<String>,
    },
    /// The header failed to parse. The frame is kept so its terminator
    /// still pairs up, but it produces no statement.
    Invalid,
}

pub(super) struct IfArm {
    cond: Expr,
    body: Vec<Stmt>,
    line: Line,
}

pub(super) struct Frame {
    pub(super) kind: BlockKind,
    pub(super) line: Line,
    pub(super) header: Header,
    body: Vec<Stmt>,
}

impl Frame {
    pub(super) fn new(kind: BlockKind, line: Line, header: Header) -> Self {
        Frame {
            kind,
            line,
            header,
            body: Vec::new(),
        }
    }

    /// Build the statement this frame stands for.
    fn finish(self) -> Option<Stmt> {
        let Frame {
            line, header, body, ..
        } = self;
        let kind = match header {
            Header::If { arms, pending } => return finish_if(arms, pending, body),
            Header::While { cond } => StmtKind::While { cond, body },
            Header::For { var, start, end } => StmtKind::For {
                var,
                start,
                end,
                body,
            },
            Header::Routine { kind, name, params } => {
                let routine = Rc::new(Routine {
                    kind,
                    name,
                    params,
                    body,
                    line,
                });
                match kind {
                    RoutineKind::Function => StmtKind::FunctionDef(routine),
                    RoutineKind::Procedure => StmtKind::ProcedureDef(routine),
                }
            }
            Header::Invalid => return None,
        };
        Some(Stmt::new(kind, line))
    }
}

/// Fold an `if` / `else if` / `else` chain into nested `If` statements.
fn finish_if(mut arms: Vec<IfArm>, pending: Option<(Expr, Line)>, body: Vec<Stmt>) -> Option<Stmt> {
    let mut final_else = match pending {
        Some((cond, line)) => {
            arms.push(IfArm { cond, body, line });
            None
        }
        None => Some(body),
    };
    let mut chain: Option<Stmt> = None;
    for arm in arms.into_iter().rev() {
        let else_body = match chain.take() {
            Some(inner) => Some(vec![inner]),
            None => final_else.take(),
        };
        chain = Some(Stmt::new(
            StmtKind::If {
                cond: arm.cond,
                then_body: arm.body,
                else_body,
            },
            arm.line,
        ));
    }
    chain
}

/// Open frames plus the finished top-level statements.
#[derive(Default)]
pub(super) struct BlockStack {
    root: Vec<Stmt>,
    frames: Vec<Frame>,
}

impl BlockStack {
    pub(super) fn push_stmt(&mut self, stmt: Stmt) {
        match self.frames.last_mut() {
            Some(frame) => frame.body.push(stmt),
            None => self.root.push(stmt),
        }
    }

    pub(super) fn open(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Whether a `return` here would be inside a function or procedure.
    pub(super) fn in_routine(&self) -> bool {
        self.frames
            .iter()
            .any(|f| matches!(f.kind, BlockKind::Function | BlockKind::Procedure))
    }
}

impl Parser<'_> {
    /// Drive statement parsing until the tokens run out.
    pub(crate) fn parse_blocks(&mut self) -> Program {
        let mut blocks = BlockStack::default();

        while let Some(token) = self.cursor.current() {
            let line = token.line;
            if let Err(err) = self.parse_item(&mut blocks) {
                self.errors.push(err);
                self.cursor.synchronize(line);
            }
        }

        for frame in blocks.frames.drain(..) {
            self.errors.push(ParseError::UnterminatedBlock {
                kind: frame.kind,
                line: frame.line,
            });
        }

        Program { body: blocks.root }
    }

    /// Handle an `else` or `else if` that has just been consumed.
    ///
    /// The innermost frame must be an `if`. Its current arm is finished and
    /// a new one begins: conditional for `else if`, final for plain `else`.
    pub(super) fn parse_else(&mut self, line: Line, blocks: &mut BlockStack) -> Result<(), ParseError> {
        let Some(frame) = blocks.frames.last_mut() else {
            return Err(ParseError::ElseWithoutIf { line });
        };
        match &mut frame.header {
            Header::If { arms, pending } => {
                let Some((cond, arm_line)) = pending.take() else {
                    return Err(ParseError::DuplicateElse { line });
                };
                arms.push(IfArm {
                    cond,
                    body: mem::take(&mut frame.body),
                    line: arm_line,
                });
            }
            Header::Invalid if frame.kind == BlockKind::If => frame.body.clear(),
            _ => return Err(ParseError::ElseWithoutIf { line }),
        }

        let else_if = self.cursor.check_keyword(Keyword::If) && self.cursor.on_same_line();
        if !else_if {
            self.eat_opener(None);
            return Ok(());
        }

        self.cursor.advance();
        let cond = self.parse_expr()?;
        self.eat_opener(Some("then"));
        if let Some(Frame {
            header: Header::If { pending, .. },
            ..
        }) = blocks.frames.last_mut()
        {
            *pending = Some((cond, line));
        }
        Ok(())
    }

    /// Handle a block terminator keyword that has just been consumed.
    pub(super) fn close_block(
        &mut self,
        found: Keyword,
        line: Line,
        blocks: &mut BlockStack,
    ) -> Result<(), ParseError> {
        let Some(frame) = blocks.frames.last() else {
            return Err(ParseError::UnexpectedTerminator { found, line });
        };

        if frame.kind.terminator() != found {
            self.errors.push(ParseError::MismatchedTerminator {
                found,
                expected: frame.kind.terminator(),
                opened: frame.line,
                line,
            });
            // Recover when the terminator closes an outer frame: the frames
            // above it were left open by mistake and are dropped.
            let Some(depth) = blocks
                .frames
                .iter()
                .rposition(|f| f.kind.terminator() == found)
            else {
                return Ok(());
            };
            blocks.frames.truncate(depth + 1);
        }

        if let Some(frame) = blocks.frames.pop() {
            if let Some(stmt) = frame.finish() {
                blocks.push_stmt(stmt);
            }
        }
        Ok(())
    }
}
