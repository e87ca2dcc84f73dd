//! Statement and expression trees.
//!
//! Statements own their nested blocks directly (`Vec<Stmt>`); expressions own
//! their operands (`Box<Expr>`). The only shared node is a routine
//! declaration, held in an `Rc` so a runtime function value can refer to its
//! body without copying it.

use std::fmt;
use std::rc::Rc;

use crate::token::Keyword;
use crate::Line;

mod operators;

pub use operators::{AssignOp, BinaryOp, UnaryOp};

/// A parsed program: the top-level statement sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// A statement and the line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: Line,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: Line) -> Self {
        Stmt { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `target = value`, or a compound form like `target += value`.
    Assignment {
        target: AssignTarget,
        op: AssignOp,
        value: Expr,
    },
    /// `print a, b, ...`. Values are written space-separated on one line.
    Print(Vec<Expr>),
    /// `input name`
    Input { name: String },
    /// `if cond then ... else ... endif`. An `else if` chain is an `If`
    /// nested as the sole statement of `else_body`.
    If {
        cond: Expr,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
    /// `while cond do ... endwhile`
    While { cond: Expr, body: Vec<Stmt> },
    /// `for var = start to end do ... endfor`
    For {
        var: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
    },
    FunctionDef(Rc<Routine>),
    ProcedureDef(Rc<Routine>),
    /// `return` with an optional value.
    Return(Option<Expr>),
    /// A bare expression, usually a call evaluated for its effect.
    Expression(Expr),
}

/// Left-hand side of an assignment: a name, optionally indexed.
///
/// `arr[i][j] = v` is `{ name: "arr", indices: [i, j] }`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignTarget {
    pub name: String,
    pub indices: Vec<Expr>,
}

impl AssignTarget {
    pub fn variable(name: impl Into<String>) -> Self {
        AssignTarget {
            name: name.into(),
            indices: Vec::new(),
        }
    }
}

/// Which kind of routine a declaration introduces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoutineKind {
    Function,
    Procedure,
}

impl RoutineKind {
    pub const fn block_kind(self) -> BlockKind {
        match self {
            RoutineKind::Function => BlockKind::Function,
            RoutineKind::Procedure => BlockKind::Procedure,
        }
    }
}

/// A function or procedure declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Routine {
    pub kind: RoutineKind,
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub line: Line,
}

impl Routine {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Block-introducing statement kinds, each closed by its own terminator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    If,
    While,
    For,
    Function,
    Procedure,
}

impl BlockKind {
    /// Keyword that opens this block.
    pub const fn opener(self) -> Keyword {
        match self {
            BlockKind::If => Keyword::If,
            BlockKind::While => Keyword::While,
            BlockKind::For => Keyword::For,
            BlockKind::Function => Keyword::Function,
            BlockKind::Procedure => Keyword::Procedure,
        }
    }

    /// Keyword that must close this block.
    pub const fn terminator(self) -> Keyword {
        match self {
            BlockKind::If => Keyword::EndIf,
            BlockKind::While => Keyword::EndWhile,
            BlockKind::For => Keyword::EndFor,
            BlockKind::Function => Keyword::EndFunction,
            BlockKind::Procedure => Keyword::EndProcedure,
        }
    }

    /// The block kind a terminator keyword closes, if it is one.
    pub const fn closed_by(kw: Keyword) -> Option<BlockKind> {
        match kw {
            Keyword::EndIf => Some(BlockKind::If),
            Keyword::EndWhile => Some(BlockKind::While),
            Keyword::EndFor => Some(BlockKind::For),
            Keyword::EndFunction => Some(BlockKind::Function),
            Keyword::EndProcedure => Some(BlockKind::Procedure),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opener().as_str())
    }
}

/// An expression and the line it appears on.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: Line,
}

impl Expr {
    pub fn new(kind: ExprKind, line: Line) -> Self {
        Expr { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    Array(Vec<Expr>),
    Ident(String),
    /// `target[index]`
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    /// `callee(args...)`. Routines are always called by name.
    Call {
        callee: String,
        args: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
