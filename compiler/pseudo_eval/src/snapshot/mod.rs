//! Serializable mirror of runtime values.
//!
//! A run's final globals are handed back as [`SnapshotValue`]s: plain data
//! with no sharing, no functions and no interior mutability, ready for any
//! transport to serialize.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use pseudo_stack::ensure_sufficient_stack;
use serde::{Serialize, Serializer};

use crate::environment::Scope;
use crate::errors::RuntimeError;
use crate::limits::Budget;
use crate::value::Value;

/// A variable's value at the end of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum SnapshotValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<SnapshotValue>),
}

impl SnapshotValue {
    /// Convert a runtime value.
    ///
    /// `Ok(None)` if the value is, or contains, a function. An array that
    /// contains itself is cut off with `Null` where it repeats. A value whose
    /// unfolded size passes the budget's size cap is an error: shared arrays
    /// can make that size exponential in the steps spent building them.
    pub(crate) fn from_value(value: &Value, budget: &Budget) -> Result<Option<Self>, RuntimeError> {
        let mut builder = Builder {
            budget,
            size: 0,
            visiting: Vec::new(),
        };
        builder.convert(value)
    }
}

struct Builder<'b> {
    budget: &'b Budget,
    /// Nodes plus string bytes emitted so far.
    size: usize,
    visiting: Vec<*const RefCell<Vec<Value>>>,
}

impl Builder<'_> {
    fn convert(&mut self, value: &Value) -> Result<Option<SnapshotValue>, RuntimeError> {
        ensure_sufficient_stack(|| self.convert_inner(value))
    }

    fn convert_inner(&mut self, value: &Value) -> Result<Option<SnapshotValue>, RuntimeError> {
        self.size += 1;
        if let Value::Str(s) = value {
            self.size += s.len();
        }
        self.budget.check_size(self.size, self.budget.last_line())?;

        Ok(Some(match value {
            Value::Null => SnapshotValue::Null,
            Value::Bool(b) => SnapshotValue::Bool(*b),
            Value::Number(n) => SnapshotValue::Number(*n),
            Value::Str(s) => SnapshotValue::Str(s.clone()),
            Value::Function(_) => return Ok(None),
            Value::Array(items) => {
                let ptr = Rc::as_ptr(items);
                if self.visiting.contains(&ptr) {
                    return Ok(Some(SnapshotValue::Null));
                }
                self.visiting.push(ptr);
                let mut converted = Vec::new();
                for item in items.borrow().iter() {
                    let Some(item) = self.convert(item)? else {
                        self.visiting.pop();
                        return Ok(None);
                    };
                    converted.push(item);
                }
                self.visiting.pop();
                SnapshotValue::Array(converted)
            }
        }))
    }
}

/// Integral numbers serialize as JSON integers, everything else as is.
impl Serialize for SnapshotValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SnapshotValue::Null => serializer.serialize_unit(),
            SnapshotValue::Bool(b) => serializer.serialize_bool(*b),
            SnapshotValue::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            SnapshotValue::Number(n) => serializer.serialize_f64(*n),
            SnapshotValue::Str(s) => serializer.serialize_str(s),
            SnapshotValue::Array(items) => serializer.collect_seq(items),
        }
    }
}

/// Whole numbers that fit an `i64` exactly.
fn is_integral(n: f64) -> bool {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    n.fract() == 0.0 && n.abs() <= LIMIT
}

/// Snapshot every non-function binding of `scope`, ordered by name.
///
/// Variables are converted in name order. The first one that passes the
/// size cap stops the snapshot; the variables before it are kept.
pub(crate) fn snapshot(
    scope: &Scope,
    budget: &Budget,
) -> (BTreeMap<String, SnapshotValue>, Option<RuntimeError>) {
    let mut bindings: Vec<(&str, &Value)> = scope.bindings().collect();
    bindings.sort_unstable_by_key(|(name, _)| *name);

    let mut variables = BTreeMap::new();
    for (name, value) in bindings {
        match SnapshotValue::from_value(value, budget) {
            Ok(Some(snap)) => {
                variables.insert(name.to_string(), snap);
            }
            Ok(None) => {}
            Err(err) => return (variables, Some(err)),
        }
    }
    (variables, None)
}

#[cfg(test)]
mod tests;
