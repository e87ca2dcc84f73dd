//! Tree-walking interpreter.
//!
//! One `Interpreter` runs one program. It owns the global scope, the output
//! buffer, the input source and the step budget, and is consumed by
//! [`Interpreter::run`], so no state can leak from one run into the next.

mod builder;
mod call;
mod exec;
mod expr;
mod text;

use std::collections::BTreeMap;

use pseudo_ir::Program;
use tracing::debug;

pub use builder::InterpreterBuilder;

use crate::environment::Environment;
use crate::errors::{ControlAction, RuntimeError};
use crate::input::InputProvider;
use crate::limits::{Budget, Limits};
use crate::print_handler::BufferPrintHandler;
use crate::snapshot::{snapshot, SnapshotValue};

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunResult {
    /// Text written by `print`, each line ending in `\n`.
    pub output: String,
    /// Global variables at the point the run stopped, functions excluded.
    /// Stops short at the first variable too large to report.
    pub variables: BTreeMap<String, SnapshotValue>,
    /// The error that halted the run, if any.
    pub error: Option<RuntimeError>,
    /// Steps charged against the budget.
    pub steps: u64,
}

impl RunResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Interpreter {
    env: Environment,
    output: BufferPrintHandler,
    input: Option<Box<dyn InputProvider>>,
    limits: Limits,
    budget: Budget,
}

impl Interpreter {
    /// An interpreter with default limits and no input.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Execute `program` to completion or to its first runtime error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
    pub fn run(mut self, program: &Program) -> RunResult {
        // The clock starts here, not when the interpreter was built.
        self.budget = Budget::new(&self.limits);
        let error = match self.exec_block(&program.body) {
            Ok(()) => None,
            Err(ControlAction::Error(err)) => Some(err),
            // The parser rejects `return` outside a routine.
            Err(ControlAction::Return(_)) => None,
        };

        let (variables, oversized) = snapshot(&self.env.global().borrow(), &self.budget);
        let error = error.or(oversized);

        let steps = self.budget.steps();
        match &error {
            Some(err) => debug!(steps, %err, "run halted"),
            None => debug!(steps, "run finished"),
        }
        RunResult {
            output: self.output.into_output(),
            variables,
            error,
            steps,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
