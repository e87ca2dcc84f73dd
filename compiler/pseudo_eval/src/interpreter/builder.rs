//! `InterpreterBuilder` for configuring a run.

use super::Interpreter;
use crate::environment::Environment;
use crate::input::InputProvider;
use crate::limits::{Budget, Limits};
use crate::print_handler::BufferPrintHandler;

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: [`Limits::default`] and no input source, so any `input`
/// fails with `InputUnavailable`.
#[derive(Default)]
pub struct InterpreterBuilder {
    input: Option<Box<dyn InputProvider>>,
    limits: Limits,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source `input` reads from.
    #[must_use]
    pub fn input(mut self, input: Box<dyn InputProvider>) -> Self {
        self.input = Some(input);
        self
    }

    /// Set or clear the input source.
    #[must_use]
    pub fn maybe_input(mut self, input: Option<Box<dyn InputProvider>>) -> Self {
        self.input = input;
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: Environment::new(),
            output: BufferPrintHandler::new(),
            input: self.input,
            budget: Budget::new(&self.limits),
            limits: self.limits,
        }
    }
}
