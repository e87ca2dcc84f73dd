//! Budgeted display text.
//!
//! Arrays are shared, so a value built with a handful of steps can unfold
//! into exponentially many elements when written out. Rendering charges a
//! step per array element and stops at the size cap, which keeps `print`
//! and `str` inside the run's limits.

use std::cell::RefCell;
use std::rc::Rc;

use pseudo_ir::Line;
use pseudo_stack::ensure_sufficient_stack;

use super::{format_number, Value};
use crate::errors::RuntimeError;
use crate::limits::Budget;

/// Display text of `value`, as `print` writes it.
pub(crate) fn render(value: &Value, budget: &mut Budget, line: Line) -> Result<String, RuntimeError> {
    let mut renderer = Renderer {
        budget,
        line,
        out: String::new(),
        visiting: Vec::new(),
    };
    renderer.value(value, false)?;
    Ok(renderer.out)
}

struct Renderer<'b> {
    budget: &'b mut Budget,
    line: Line,
    out: String,
    visiting: Vec<*const RefCell<Vec<Value>>>,
}

impl Renderer<'_> {
    fn value(&mut self, value: &Value, nested: bool) -> Result<(), RuntimeError> {
        ensure_sufficient_stack(|| self.value_inner(value, nested))
    }

    fn value_inner(&mut self, value: &Value, nested: bool) -> Result<(), RuntimeError> {
        match value {
            Value::Number(n) => self.push(&format_number(*n)),
            Value::Str(s) if nested => {
                self.push("\"")?;
                self.push(s)?;
                self.push("\"")
            }
            Value::Str(s) => self.push(s),
            Value::Bool(true) => self.push("true"),
            Value::Bool(false) => self.push("false"),
            Value::Null => self.push("null"),
            Value::Function(func) => {
                self.push("<function ")?;
                self.push(func.name())?;
                self.push(">")
            }
            Value::Array(items) => {
                let ptr = Rc::as_ptr(items);
                if self.visiting.contains(&ptr) {
                    return self.push("[...]");
                }
                self.visiting.push(ptr);
                self.push("[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    self.budget.tick(self.line)?;
                    if i > 0 {
                        self.push(", ")?;
                    }
                    self.value(item, true)?;
                }
                self.visiting.pop();
                self.push("]")
            }
        }
    }

    fn push(&mut self, text: &str) -> Result<(), RuntimeError> {
        self.budget.check_size(self.out.len() + text.len(), self.line)?;
        self.budget.charge_text(text.len(), self.line)?;
        self.out.push_str(text);
        Ok(())
    }
}
