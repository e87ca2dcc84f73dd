use pseudoc::{evaluate, hints, EvalOptions};
use serde_json::{json, Value};

fn to_json(source: &str) -> Value {
    serde_json::to_value(evaluate(source, EvalOptions::default())).unwrap()
}

#[test]
fn success_shape() {
    let value = to_json("x = 3\nhalf = 2.5\nname = \"Ada\"\nitems = [1, true]\nprint x");
    assert_eq!(
        value,
        json!({
            "status": "success",
            "output": "3",
            "variables": {
                "half": 2.5,
                "items": [1, true],
                "name": "Ada",
                "x": 3,
            },
            "diagnostics": [],
        })
    );
}

#[test]
fn syntax_error_status() {
    let value = to_json("print \"unterminated");
    assert_eq!(value["status"], "syntax_error");
    assert_eq!(value["diagnostics"][0]["code"], "E0001");
    assert_eq!(value["diagnostics"][0]["severity"], "error");
    assert_eq!(value["diagnostics"][0]["line"], 1);
}

#[test]
fn runtime_error_status() {
    let value = to_json("print 1\nx = 1 / 0");
    assert_eq!(value["status"], "runtime_error");
    assert_eq!(value["output"], "1");
    assert_eq!(value["diagnostics"][0]["code"], "E6004");
    assert_eq!(value["diagnostics"][0]["line"], 2);
    assert_eq!(value["diagnostics"][0]["message"], "division by zero");
}

#[test]
fn null_and_nested_arrays() {
    let value = to_json("nothing = null\ngrid = [[1, 2], [3]]");
    assert_eq!(value["variables"]["nothing"], Value::Null);
    assert_eq!(value["variables"]["grid"], json!([[1, 2], [3]]));
}

#[test]
fn hints_serialize_as_a_list() {
    let value = serde_json::to_value(hints("x = (1")).unwrap();
    assert_eq!(value[0]["code"], "E1001");
}
