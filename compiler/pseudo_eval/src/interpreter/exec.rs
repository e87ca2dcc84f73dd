//! Statement execution.

use std::rc::Rc;

use pseudo_ir::{AssignOp, AssignTarget, Expr, Line, Routine, Stmt, StmtKind};
use pseudo_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::errors::{
    type_mismatch, ControlAction, ExecResult, RuntimeError, RuntimeErrorKind,
};
use crate::input::parse_numeric;
use crate::operators::{self, checked_index};
use crate::value::{FunctionValue, Value};

impl Interpreter {
    pub(super) fn exec_block(&mut self, body: &[Stmt]) -> ExecResult {
        for stmt in body {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> ExecResult {
        let line = stmt.line;
        self.budget.tick(line)?;
        trace!(line, "exec");

        match &stmt.kind {
            StmtKind::Assignment { target, op, value } => {
                self.exec_assignment(target, *op, value, line)?;
            }
            StmtKind::Print(args) => {
                let values = self.eval_args(args)?;
                self.print_values(&values, line)?;
            }
            StmtKind::Input { name } => {
                let value = self.read_input(line)?;
                self.env.assign(name, value);
            }
            StmtKind::If {
                cond,
                then_body,
                else_body,
            } => {
                if self.eval_condition(cond, "if")? {
                    self.exec_block(then_body)?;
                } else if let Some(else_body) = else_body {
                    self.exec_block(else_body)?;
                }
            }
            StmtKind::While { cond, body } => loop {
                self.budget.tick(line)?;
                if !self.eval_condition(cond, "while")? {
                    break;
                }
                self.exec_block(body)?;
            },
            StmtKind::For {
                var,
                start,
                end,
                body,
            } => self.exec_for(var, start, end, body, line)?,
            StmtKind::FunctionDef(routine) | StmtKind::ProcedureDef(routine) => {
                self.define_routine(routine);
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                return Err(ControlAction::Return(value));
            }
            StmtKind::Expression(expr) => {
                self.eval(expr)?;
            }
        }
        Ok(())
    }

    /// `target = value` and the compound forms.
    fn exec_assignment(
        &mut self,
        target: &AssignTarget,
        op: AssignOp,
        value: &Expr,
        line: Line,
    ) -> Result<(), RuntimeError> {
        let rhs = self.eval(value)?;

        let Some((last, path)) = target.indices.split_last() else {
            let new = match op.binary_op() {
                None => rhs,
                Some(bin) => {
                    let current = self.lookup_variable(&target.name, line)?;
                    self.binary(bin, current, rhs, line)?
                }
            };
            self.env.assign(&target.name, new);
            return Ok(());
        };

        let mut container = self.lookup_variable(&target.name, line)?;
        for index in path {
            let index = self.eval(index)?;
            container = operators::index(&container, &index, line)?;
        }
        let index = self.eval(last)?;

        let items = match &container {
            Value::Array(items) => items,
            Value::Str(_) => {
                return Err(type_mismatch(
                    "a string cannot be changed in place; build a new one instead",
                    line,
                ))
            }
            other => {
                return Err(type_mismatch(
                    format!("cannot assign to an index of a {}", other.type_name()),
                    line,
                ))
            }
        };
        let slot = checked_index(&index, items.borrow().len(), line)?;
        let new = match op.binary_op() {
            None => rhs,
            Some(bin) => {
                let current = items.borrow()[slot].clone();
                self.binary(bin, current, rhs, line)?
            }
        };
        items.borrow_mut()[slot] = new;
        Ok(())
    }

    /// `for var = start to end`. Bounds are evaluated once.
    fn exec_for(
        &mut self,
        var: &str,
        start: &Expr,
        end: &Expr,
        body: &[Stmt],
        line: Line,
    ) -> ExecResult {
        let start = self.eval_bound(start, "start")?;
        let end = self.eval_bound(end, "end")?;

        let mut counter = start;
        while counter <= end {
            self.budget.tick(line)?;
            self.env.assign(var, Value::Number(counter));
            self.exec_block(body)?;
            counter += 1.0;
        }
        // After the loop the variable holds the first value past the end.
        self.env.assign(var, Value::Number(counter));
        Ok(())
    }

    fn eval_bound(&mut self, expr: &Expr, which: &str) -> Result<f64, RuntimeError> {
        match self.eval(expr)? {
            Value::Number(n) => Ok(n),
            other => Err(type_mismatch(
                format!(
                    "the {which} of a `for` loop must be a number, got {}",
                    other.type_name()
                ),
                expr.line,
            )),
        }
    }

    /// Bind a routine in the current scope. It always runs against the
    /// global scope, whatever scope defines it.
    fn define_routine(&mut self, routine: &Rc<Routine>) {
        let func = FunctionValue::new(Rc::clone(routine), self.env.global().downgrade());
        self.env
            .define(routine.name.clone(), Value::Function(func));
    }

    /// Read one line from the input source.
    pub(super) fn read_input(&mut self, line: Line) -> Result<Value, RuntimeError> {
        let text = self
            .input
            .as_mut()
            .and_then(|input| input.read_line())
            .ok_or_else(|| RuntimeError::new(RuntimeErrorKind::InputUnavailable, line))?;
        Ok(match parse_numeric(&text) {
            Some(n) => Value::Number(n),
            None => Value::Str(text),
        })
    }
}
