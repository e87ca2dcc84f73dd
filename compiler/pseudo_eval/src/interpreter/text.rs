//! Text a program builds or prints, kept inside the run's limits.

use pseudo_ir::{BinaryOp, Line};

use super::Interpreter;
use crate::builtins;
use crate::errors::{EvalResult, RuntimeError};
use crate::operators;
use crate::value::{render, Value};

impl Interpreter {
    /// Apply a binary operator. Joining two strings is checked against the
    /// size cap before anything is copied, and charged by length.
    pub(super) fn binary(&mut self, op: BinaryOp, left: Value, right: Value, line: Line) -> EvalResult {
        if let (BinaryOp::Add, Value::Str(a), Value::Str(b)) = (op, &left, &right) {
            let len = a.len() + b.len();
            self.budget.check_size(len, line)?;
            self.budget.charge_text(len, line)?;
        }
        operators::binary(op, left, right, line)
    }

    /// Write `values` as one output line.
    pub(super) fn print_values(&mut self, values: &[Value], line: Line) -> Result<(), RuntimeError> {
        let text = builtins::print_line(values, &mut self.budget, line)?;
        self.write_output(&text, true, line)
    }

    /// Write an `input` prompt, without a newline.
    pub(super) fn print_prompt(&mut self, prompt: &Value, line: Line) -> Result<(), RuntimeError> {
        let text = render(prompt, &mut self.budget, line)?;
        self.write_output(&text, false, line)
    }

    fn write_output(&mut self, text: &str, newline: bool, line: Line) -> Result<(), RuntimeError> {
        let total = self.output.len() + text.len() + usize::from(newline);
        self.budget.check_size(total, line)?;
        if newline {
            self.output.println(text);
        } else {
            self.output.print(text);
        }
        Ok(())
    }
}
