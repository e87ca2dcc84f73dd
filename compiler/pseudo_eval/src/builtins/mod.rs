//! Built-in functions.
//!
//! Looked up only after user bindings, so a program can define its own
//! `len` or `str` and have its version called.

use pseudo_ir::Line;

use crate::errors::{arity_mismatch, type_mismatch, EvalResult, RuntimeError};
use crate::input::parse_numeric;
use crate::limits::Budget;
use crate::value::{render, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Builtin {
    /// `print(a, b, ...)`
    Print,
    /// `input()` or `input(prompt)`
    Input,
    /// `len(x)`, also spelled `length(x)`
    Len,
    Str,
    Int,
    Float,
}

impl Builtin {
    /// Every name a built-in answers to.
    pub const NAMES: [&'static str; 7] =
        ["print", "input", "len", "length", "str", "int", "float"];

    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "print" => Some(Builtin::Print),
            "input" => Some(Builtin::Input),
            "len" | "length" => Some(Builtin::Len),
            "str" => Some(Builtin::Str),
            "int" => Some(Builtin::Int),
            "float" => Some(Builtin::Float),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Input => "input",
            Builtin::Len => "len",
            Builtin::Str => "str",
            Builtin::Int => "int",
            Builtin::Float => "float",
        }
    }

    /// Check the argument count.
    pub(crate) fn check_arity(self, got: usize, line: Line) -> Result<(), RuntimeError> {
        match self {
            Builtin::Print => Ok(()),
            Builtin::Input if got <= 1 => Ok(()),
            Builtin::Input => Err(arity_mismatch(self.name(), 1, got, line)),
            _ if got == 1 => Ok(()),
            _ => Err(arity_mismatch(self.name(), 1, got, line)),
        }
    }
}

/// `len`: characters of a string or elements of an array.
pub(crate) fn len(value: &Value, line: Line) -> EvalResult {
    match value {
        Value::Str(s) => Ok(Value::Number(s.chars().count() as f64)),
        Value::Array(items) => Ok(Value::Number(items.borrow().len() as f64)),
        other => Err(type_mismatch(
            format!("`len` needs a string or an array, got {}", other.type_name()),
            line,
        )),
    }
}

/// `str`: display text of any value.
pub(crate) fn str(value: &Value, budget: &mut Budget, line: Line) -> EvalResult {
    match value {
        Value::Str(_) => Ok(value.clone()),
        other => render(other, budget, line).map(Value::Str),
    }
}

/// `int`: truncate toward zero. Strings are parsed first.
pub(crate) fn int(value: &Value, line: Line) -> EvalResult {
    to_number(value, "int", line).map(|n| Value::Number(n.trunc()))
}

/// `float`: numeric value, parsing strings.
pub(crate) fn float(value: &Value, line: Line) -> EvalResult {
    to_number(value, "float", line).map(Value::Number)
}

fn to_number(value: &Value, name: &str, line: Line) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        Value::Str(s) => parse_numeric(s).ok_or_else(|| {
            type_mismatch(format!("`{name}` cannot convert \"{s}\" to a number"), line)
        }),
        other => Err(type_mismatch(
            format!("`{name}` cannot convert a {} to a number", other.type_name()),
            line,
        )),
    }
}

/// Text written for `print(a, b, ...)` and `print a, b`.
pub(crate) fn print_line(values: &[Value], budget: &mut Budget, line: Line) -> Result<String, RuntimeError> {
    let mut text = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        let rendered = render(value, budget, line)?;
        budget.check_size(text.len() + rendered.len(), line)?;
        text.push_str(&rendered);
    }
    Ok(text)
}
