//! Shared data types for the pseudo-code engine.
//!
//! Every phase speaks in terms of these types:
//!
//! ```text
//! source ──► Vec<Token> ──► Program (Stmt / Expr tree) ──► Value
//!   lexer          parser                      evaluator
//! ```
//!
//! Positions are 1-based source lines (`Line`). The language is line-oriented
//! and every diagnostic is reported against a line, so no byte spans are kept.

pub mod ast;
pub mod token;

pub use ast::{
    AssignOp, AssignTarget, BinaryOp, BlockKind, Expr, ExprKind, Program, Routine, RoutineKind,
    Stmt, StmtKind, UnaryOp,
};
pub use token::{Delimiter, Keyword, Operator, Token, TokenKind};

/// A 1-based source line number.
pub type Line = u32;
