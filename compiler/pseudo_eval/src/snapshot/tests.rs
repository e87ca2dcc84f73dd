#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use pretty_assertions::assert_eq;
use pseudo_ir::{Routine, RoutineKind};

use super::*;
use crate::environment::LocalScope;
use crate::limits::{BudgetKind, Limits};
use crate::value::FunctionValue;

fn convert(value: &Value) -> Option<SnapshotValue> {
    SnapshotValue::from_value(value, &Budget::new(&Limits::default())).unwrap()
}

fn function(scope: &LocalScope<Scope>) -> Value {
    let routine = Rc::new(Routine {
        kind: RoutineKind::Procedure,
        name: "greet".to_string(),
        params: Vec::new(),
        body: Vec::new(),
        line: 1,
    });
    Value::Function(FunctionValue::new(routine, scope.downgrade()))
}

#[test]
fn scalars_convert() {
    assert_eq!(
        convert(&Value::Number(2.5)),
        Some(SnapshotValue::Number(2.5))
    );
    assert_eq!(
        convert(&Value::string("hi")),
        Some(SnapshotValue::Str("hi".to_string()))
    );
    assert_eq!(convert(&Value::Null), Some(SnapshotValue::Null));
}

#[test]
fn functions_are_omitted_even_when_nested() {
    let scope = LocalScope::new(Scope::new());
    assert_eq!(convert(&function(&scope)), None);
    let arr = Value::array(vec![Value::Number(1.0), function(&scope)]);
    assert_eq!(convert(&arr), None);
}

#[test]
fn self_referencing_array_is_cut() {
    let arr = Value::array(vec![Value::Number(1.0)]);
    if let Value::Array(items) = &arr {
        items.borrow_mut().push(arr.clone());
    }
    assert_eq!(
        convert(&arr),
        Some(SnapshotValue::Array(vec![
            SnapshotValue::Number(1.0),
            SnapshotValue::Null
        ]))
    );
}

#[test]
fn serializes_to_plain_json() {
    let value = SnapshotValue::Array(vec![
        SnapshotValue::Number(5.0),
        SnapshotValue::Number(2.5),
        SnapshotValue::Str("a".to_string()),
        SnapshotValue::Bool(true),
        SnapshotValue::Null,
    ]);
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"[5,2.5,"a",true,null]"#
    );
}

#[test]
fn snapshot_skips_functions_and_sorts() {
    let global = LocalScope::new(Scope::new());
    global.borrow_mut().define("zeta", Value::Number(1.0));
    global.borrow_mut().define("alpha", Value::Bool(false));
    let greet = function(&global);
    global.borrow_mut().define("greet", greet);

    let (snap, error) = snapshot(&global.borrow(), &Budget::new(&Limits::default()));
    assert!(error.is_none());
    let names: Vec<&str> = snap.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

/// `[a, a]` repeated `depth` times: a handful of arrays that unfold into
/// `2^depth` leaves.
fn doubled(depth: usize) -> Value {
    let mut value = Value::array(vec![Value::Number(1.0)]);
    for _ in 0..depth {
        value = Value::array(vec![value.clone(), value]);
    }
    value
}

#[test]
fn shared_arrays_that_unfold_too_far_are_rejected() {
    let budget = Budget::new(&Limits::default().with_max_size(1_000));
    let err = SnapshotValue::from_value(&doubled(40), &budget).unwrap_err();
    assert_eq!(
        err.kind,
        crate::RuntimeErrorKind::StepLimitExceeded {
            budget: BudgetKind::Size(1_000)
        }
    );
}

#[test]
fn snapshot_keeps_variables_before_an_oversized_one() {
    let global = LocalScope::new(Scope::new());
    global.borrow_mut().define("alpha", Value::Number(1.0));
    global.borrow_mut().define("big", doubled(40));
    global.borrow_mut().define("zeta", Value::Number(2.0));

    let (snap, error) = snapshot(&global.borrow(), &Budget::new(&Limits::default()));
    assert!(error.is_some());
    let names: Vec<&str> = snap.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["alpha"]);
}
