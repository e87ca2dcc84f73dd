//! Runtime values.
//!
//! Arrays are shared by reference: assigning an array to a second name
//! aliases it, and mutation through either name is visible through both.
//! Functions hold their declaration and a weak link to the scope they were
//! defined in, so a scope that binds a function never owns itself.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

mod render;

use pseudo_ir::Routine;
use pseudo_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::environment::{Scope, WeakScope};

pub(crate) use render::render;

/// Shared, mutable array storage.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Array(ArrayRef),
    Null,
    Function(FunctionValue),
}

impl Value {
    /// Create an array value from its elements.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Name of the value's type, as shown to learners.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Null => "null",
            Value::Function(_) => "function",
        }
    }

    /// Structural equality. Values of different types are never equal.
    pub fn structural_eq(&self, other: &Value) -> bool {
        EqState::default().eq(self, other)
    }
}

type ArrayPtr = *const RefCell<Vec<Value>>;

/// Array pairs under comparison and pairs already found equal.
///
/// Shared sub-arrays are compared once, so equality stays linear in the
/// number of distinct arrays even when sharing makes the unfolded trees
/// exponentially large.
#[derive(Default)]
struct EqState {
    visiting: Vec<(ArrayPtr, ArrayPtr)>,
    equal: FxHashSet<(ArrayPtr, ArrayPtr)>,
}

impl EqState {
    fn eq(&mut self, a: &Value, b: &Value) -> bool {
        ensure_sufficient_stack(|| self.eq_inner(a, b))
    }

    fn eq_inner(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::Str(x), Value::Str(y)) => x == y,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Null, Value::Null) => true,
            (Value::Function(f), Value::Function(g)) => Rc::ptr_eq(&f.routine, &g.routine),
            (Value::Array(x), Value::Array(y)) => {
                if Rc::ptr_eq(x, y) {
                    return true;
                }
                // A pair already being compared further up is assumed equal,
                // which keeps self-referencing arrays from recursing forever.
                // Any mismatch makes the whole comparison false, so pairs
                // that came out equal under that assumption can be reused.
                let pair = (Rc::as_ptr(x), Rc::as_ptr(y));
                if self.visiting.contains(&pair) || self.equal.contains(&pair) {
                    return true;
                }
                let (xs, ys) = (x.borrow(), y.borrow());
                if xs.len() != ys.len() {
                    return false;
                }
                self.visiting.push(pair);
                let equal = xs.iter().zip(ys.iter()).all(|(l, r)| self.eq(l, r));
                self.visiting.pop();
                if equal {
                    self.equal.insert(pair);
                }
                equal
            }
            _ => false,
        }
    }
}

/// Display text as `print` writes it.
///
/// Integral numbers print without a fraction. Strings print bare at the top
/// level and quoted inside arrays. Unbudgeted: the interpreter renders
/// program values through [`render`] instead.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut visiting = Vec::new();
        display_inner(self, f, false, &mut visiting)
    }
}

fn display_inner(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    nested: bool,
    visiting: &mut Vec<*const RefCell<Vec<Value>>>,
) -> fmt::Result {
    match value {
        Value::Number(n) => write!(f, "{}", format_number(*n)),
        Value::Str(s) if nested => write!(f, "\"{s}\""),
        Value::Str(s) => f.write_str(s),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Null => f.write_str("null"),
        Value::Function(func) => write!(f, "<function {}>", func.name()),
        Value::Array(items) => {
            let ptr = Rc::as_ptr(items);
            if visiting.contains(&ptr) {
                return f.write_str("[...]");
            }
            visiting.push(ptr);
            f.write_str("[")?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                display_inner(item, f, true, visiting)?;
            }
            visiting.pop();
            f.write_str("]")
        }
    }
}

/// Format a number: `5`, `2.5`, `-0` shown as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

/// A user-defined function or procedure.
#[derive(Clone)]
pub struct FunctionValue {
    routine: Rc<Routine>,
    scope: WeakScope<Scope>,
}

impl FunctionValue {
    pub fn new(routine: Rc<Routine>, scope: WeakScope<Scope>) -> Self {
        FunctionValue { routine, scope }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.routine.name
    }

    #[inline]
    pub fn routine(&self) -> &Rc<Routine> {
        &self.routine
    }

    /// The scope the function was defined in, if it is still alive.
    pub fn defining_scope(&self) -> Option<crate::environment::LocalScope<Scope>> {
        self.scope.upgrade()
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.routine.name)
            .field("params", &self.routine.params)
            .finish_non_exhaustive()
    }
}
