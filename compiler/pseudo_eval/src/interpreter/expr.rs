//! Expression evaluation.

use pseudo_ir::{BinaryOp, Expr, ExprKind, Line};
use pseudo_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{type_mismatch, EvalResult, RuntimeError, RuntimeErrorKind};
use crate::operators;
use crate::suggest::suggest_similar;
use crate::value::Value;

impl Interpreter {
    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested expressions and deep
    /// recursion cannot overflow the native stack.
    pub(super) fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        let line = expr.line;
        self.budget.tick(line)?;

        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Array(items) => Ok(Value::array(self.eval_args(items)?)),
            ExprKind::Ident(name) => self.lookup_variable(name, line),
            ExprKind::Index { target, index } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                operators::index(&target, &index, line)
            }
            ExprKind::Call { callee, args } => self.eval_call(callee, args, line),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                operators::unary(*op, operand, line)
            }
            ExprKind::Binary {
                op: op @ (BinaryOp::And | BinaryOp::Or),
                left,
                right,
            } => {
                let left = self.eval_logical_operand(left, *op)?;
                // `and` stops at false, `or` stops at true.
                if left == (*op == BinaryOp::Or) {
                    return Ok(Value::Bool(left));
                }
                Ok(Value::Bool(self.eval_logical_operand(right, *op)?))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.binary(*op, left, right, line)
            }
        }
    }

    /// Evaluate expressions left to right.
    pub(super) fn eval_args(&mut self, args: &[Expr]) -> Result<Vec<Value>, RuntimeError> {
        args.iter().map(|arg| self.eval(arg)).collect()
    }

    fn eval_logical_operand(&mut self, expr: &Expr, op: BinaryOp) -> Result<bool, RuntimeError> {
        match self.eval(expr)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch(
                format!(
                    "`{}` needs two booleans, got a {}",
                    op.as_symbol(),
                    other.type_name()
                ),
                expr.line,
            )),
        }
    }

    /// Evaluate the condition of an `if` or `while`.
    pub(super) fn eval_condition(&mut self, cond: &Expr, keyword: &str) -> Result<bool, RuntimeError> {
        match self.eval(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch(
                format!(
                    "the condition of `{keyword}` must be true or false, got a {}",
                    other.type_name()
                ),
                cond.line,
            )),
        }
    }

    pub(super) fn lookup_variable(&self, name: &str, line: Line) -> EvalResult {
        self.env.lookup(name).ok_or_else(|| {
            let names = self.env.visible_names();
            let similar = suggest_similar(name, names.iter().map(String::as_str)).map(str::to_string);
            RuntimeError::new(
                RuntimeErrorKind::UndefinedVariable {
                    name: name.to_string(),
                    similar,
                },
                line,
            )
        })
    }
}
