//! Binary and unary operators, plus index reads.
//!
//! There are no implicit conversions: arithmetic wants numbers, `+` also
//! joins two strings, ordering compares two numbers or two strings, and the
//! logical operators want booleans. Equality works on any pair of values.

use std::cmp::Ordering;

use pseudo_ir::{BinaryOp, Line, UnaryOp};

use crate::errors::{division_by_zero, index_out_of_range, type_mismatch, EvalResult, RuntimeError};
use crate::value::Value;

/// Apply a binary operator to two evaluated operands.
///
/// `and`/`or` are accepted here for completeness; the interpreter evaluates
/// them itself to short-circuit.
pub fn binary(op: BinaryOp, left: Value, right: Value, line: Line) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left.structural_eq(&right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.structural_eq(&right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let ordering = compare(op, &left, &right, line)?;
            Ok(Value::Bool(match op {
                BinaryOp::Lt => ordering == Some(Ordering::Less),
                BinaryOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                BinaryOp::Gt => ordering == Some(Ordering::Greater),
                _ => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            }))
        }
        BinaryOp::And | BinaryOp::Or => match (&left, &right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if op == BinaryOp::And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(operand_mismatch(op, &left, &right, line)),
        },
        BinaryOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(mut a), Value::Str(b)) => {
                a.push_str(&b);
                Ok(Value::Str(a))
            }
            (left, right) => Err(operand_mismatch(op, &left, &right, line)),
        },
        BinaryOp::Sub => numbers(op, &left, &right, line).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(op, &left, &right, line).map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => {
            let (a, b) = nonzero_divisor(op, &left, &right, line)?;
            Ok(Value::Number(a / b))
        }
        BinaryOp::FloorDiv => {
            let (a, b) = nonzero_divisor(op, &left, &right, line)?;
            Ok(Value::Number((a / b).floor()))
        }
        // Floor modulo: the result takes the sign of the divisor.
        BinaryOp::Mod => {
            let (a, b) = nonzero_divisor(op, &left, &right, line)?;
            Ok(Value::Number(a - b * (a / b).floor()))
        }
        BinaryOp::Pow => {
            let (a, b) = numbers(op, &left, &right, line)?;
            if a == 0.0 && b < 0.0 {
                return Err(division_by_zero(line));
            }
            Ok(Value::Number(a.powf(b)))
        }
    }
}

fn numbers(op: BinaryOp, left: &Value, right: &Value, line: Line) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operand_mismatch(op, left, right, line)),
    }
}

fn nonzero_divisor(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    line: Line,
) -> Result<(f64, f64), RuntimeError> {
    let (a, b) = numbers(op, left, right, line)?;
    if b == 0.0 {
        return Err(division_by_zero(line));
    }
    Ok((a, b))
}

fn compare(op: BinaryOp, left: &Value, right: &Value, line: Line) -> Result<Option<Ordering>, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        _ => Err(operand_mismatch(op, left, right, line)),
    }
}

#[cold]
fn operand_mismatch(op: BinaryOp, left: &Value, right: &Value, line: Line) -> RuntimeError {
    let (lt, rt) = (left.type_name(), right.type_name());
    let detail = match op {
        BinaryOp::Add if lt == "string" || rt == "string" => {
            format!("cannot add {lt} and {rt}; use str(...) to turn a value into text")
        }
        BinaryOp::And | BinaryOp::Or => {
            format!("`{}` needs two booleans, got {lt} and {rt}", op.as_symbol())
        }
        _ => format!("`{}` cannot be applied to {lt} and {rt}", op.as_symbol()),
    };
    type_mismatch(detail, line)
}

/// Apply a unary operator.
pub fn unary(op: UnaryOp, operand: Value, line: Line) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, other) => Err(type_mismatch(
            format!("cannot negate a {}", other.type_name()),
            line,
        )),
        (UnaryOp::Not, other) => Err(type_mismatch(
            format!("`not` needs a boolean, got {}", other.type_name()),
            line,
        )),
    }
}

/// Read `target[index]`. Strings yield one-character strings.
pub fn index(target: &Value, index: &Value, line: Line) -> EvalResult {
    match target {
        Value::Array(items) => {
            let items = items.borrow();
            let i = checked_index(index, items.len(), line)?;
            Ok(items[i].clone())
        }
        Value::Str(s) => {
            let len = s.chars().count();
            let i = checked_index(index, len, line)?;
            Ok(s.chars().nth(i).map_or(Value::Null, |c| Value::Str(c.to_string())))
        }
        other => Err(type_mismatch(
            format!("cannot index a {}", other.type_name()),
            line,
        )),
    }
}

/// Validate an index against a length: a whole number in `[0, len)`.
pub fn checked_index(index: &Value, len: usize, line: Line) -> Result<usize, RuntimeError> {
    let Value::Number(n) = index else {
        return Err(type_mismatch(
            format!("an index must be a number, got {}", index.type_name()),
            line,
        ));
    };
    if n.fract() != 0.0 || *n < 0.0 || *n >= len as f64 {
        return Err(index_out_of_range(index, len, line));
    }
    Ok(*n as usize)
}
