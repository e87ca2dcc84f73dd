//! Calls to user routines and built-ins.
//!
//! A callee name resolves against the scope chain first. Only a name with
//! no binding at all falls through to the built-ins.

use pseudo_ir::{Expr, Line};
use tracing::debug;

use super::Interpreter;
use crate::builtins::{self, Builtin};
use crate::errors::{
    arity_mismatch, type_mismatch, ControlAction, EvalResult, RuntimeError, RuntimeErrorKind,
};
use crate::suggest::suggest_similar;
use crate::value::{FunctionValue, Value};

impl Interpreter {
    pub(super) fn eval_call(&mut self, callee: &str, args: &[Expr], line: Line) -> EvalResult {
        match self.env.lookup(callee) {
            Some(Value::Function(func)) => {
                let args = self.eval_args(args)?;
                self.call_function(&func, args, line)
            }
            Some(other) => Err(type_mismatch(
                format!("`{callee}` is a {} and cannot be called", other.type_name()),
                line,
            )),
            None => {
                let Some(builtin) = Builtin::lookup(callee) else {
                    return Err(self.undefined_function(callee, line));
                };
                let args = self.eval_args(args)?;
                self.call_builtin(builtin, &args, line)
            }
        }
    }

    /// Run a user routine in a fresh scope whose parent is its defining
    /// scope. Falling off the end yields `null`.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %func.name()))]
    fn call_function(&mut self, func: &FunctionValue, args: Vec<Value>, line: Line) -> EvalResult {
        let routine = func.routine();
        if args.len() != routine.arity() {
            return Err(arity_mismatch(&routine.name, routine.arity(), args.len(), line));
        }
        if self.env.depth() >= self.limits.max_call_depth {
            debug!(depth = self.env.depth(), "call depth limit reached");
            return Err(RuntimeError::new(
                RuntimeErrorKind::RecursionLimitExceeded {
                    depth: self.limits.max_call_depth,
                },
                line,
            ));
        }

        let parent = func
            .defining_scope()
            .unwrap_or_else(|| self.env.global().clone());
        let scope = self.env.push_call_scope(parent);
        {
            let mut scope = scope.borrow_mut();
            for (param, arg) in routine.params.iter().zip(args) {
                scope.define(param.clone(), arg);
            }
        }

        let result = self.exec_block(&routine.body);
        self.env.pop_call_scope();

        match result {
            Ok(()) => Ok(Value::Null),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Error(err)) => Err(err),
        }
    }

    fn call_builtin(&mut self, builtin: Builtin, args: &[Value], line: Line) -> EvalResult {
        builtin.check_arity(args.len(), line)?;
        match (builtin, args) {
            (Builtin::Print, _) => {
                self.print_values(args, line)?;
                Ok(Value::Null)
            }
            (Builtin::Input, [prompt]) => {
                self.print_prompt(prompt, line)?;
                self.read_input(line)
            }
            (Builtin::Input, _) => self.read_input(line),
            (Builtin::Len, [value]) => builtins::len(value, line),
            (Builtin::Str, [value]) => builtins::str(value, &mut self.budget, line),
            (Builtin::Int, [value]) => builtins::int(value, line),
            (Builtin::Float, [value]) => builtins::float(value, line),
            (builtin, _) => Err(arity_mismatch(builtin.name(), 1, args.len(), line)),
        }
    }

    #[cold]
    fn undefined_function(&self, name: &str, line: Line) -> RuntimeError {
        let visible = self.env.visible_names();
        let mut candidates: Vec<&str> = visible
            .iter()
            .filter(|n| matches!(self.env.lookup(n), Some(Value::Function(_))))
            .map(String::as_str)
            .collect();
        for builtin in Builtin::NAMES {
            candidates.push(builtin);
        }
        let similar = suggest_similar(name, candidates.into_iter()).map(str::to_string);
        RuntimeError::new(
            RuntimeErrorKind::UndefinedFunction {
                name: name.to_string(),
                similar,
            },
            line,
        )
    }
}
