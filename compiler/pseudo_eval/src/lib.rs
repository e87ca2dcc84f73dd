//! Tree-walking evaluator for the pseudo-code engine.
//!
//! Runs a parsed [`Program`](pseudo_ir::Program) against a scope chain
//! rooted at one global scope, capturing printed output and stopping at the
//! first runtime error:
//!
//! ```text
//! Program ──► Interpreter::run ──► RunResult { output, variables, error }
//! ```
//!
//! Runs are bounded by [`Limits`]: a step budget, an optional wall-clock
//! budget, a call-depth limit and a cap on the size of any one value.

mod builtins;
pub mod environment;
mod errors;
mod input;
mod interpreter;
mod limits;
mod operators;
mod print_handler;
mod snapshot;
mod suggest;
mod value;

pub use builtins::Builtin;
pub use environment::{Environment, LocalScope, Scope, WeakScope};
pub use errors::{RuntimeError, RuntimeErrorKind};
pub use input::{InputProvider, QueuedInput, StreamInput};
pub use interpreter::{Interpreter, InterpreterBuilder, RunResult};
pub use limits::{
    BudgetKind, Limits, DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_SIZE, DEFAULT_MAX_STEPS,
};
pub use print_handler::BufferPrintHandler;
pub use snapshot::SnapshotValue;
pub use suggest::{edit_distance, suggest_similar};
pub use value::{format_number, ArrayRef, FunctionValue, Value};

#[cfg(test)]
mod tests;
