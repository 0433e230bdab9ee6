//! Unit tests for value conversion and chained access.

use std::collections::BTreeMap;

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;

use super::Value;
use crate::{Struct, StructError};

#[rstest]
fn json_objects_become_containers_at_every_depth() -> Result<()> {
    let value = Value::from(json!({
        "outer": {"inner": {"leaf": 1}},
        "list": [{"item": true}, 2, [{"deep": "x"}]],
    }));
    let root = value.as_struct().ok_or_else(|| anyhow::anyhow!("root is a container"))?;
    ensure!(root.path_get("outer.inner.leaf")? == &Value::Integer(1));

    let list = root.get_attr("list")?;
    ensure!(list.get_index(0)?.as_struct().is_some(), "mapping in sequence is wrapped");
    let nested = list.get_index(2)?.get_index(0)?;
    ensure!(nested.get_attr("deep")? == "x");
    Ok(())
}

#[rstest]
fn json_numbers_keep_their_kind() {
    assert_eq!(Value::from(json!(3)), Value::Integer(3));
    assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    assert_eq!(Value::from(json!(null)), Value::Null);
}

#[rstest]
fn json_integers_beyond_i64_become_floats() {
    let big = Value::from(json!(u64::MAX));
    assert!(matches!(big, Value::Float(number) if number >= 1.8e19), "got {big:?}");
    assert_eq!(Value::from(json!(i64::MAX)), Value::Integer(i64::MAX));
}

#[rstest]
fn rust_maps_become_containers() -> Result<()> {
    let mut inner = BTreeMap::new();
    inner.insert("deltaCoeff".to_owned(), Value::from(1.0));
    let mut outer = BTreeMap::new();
    outer.insert("cubeRootVolCoeffs".to_owned(), inner);

    let value = Value::from(outer);
    ensure!(value.get_attr("cubeRootVolCoeffs")?.get_attr("deltaCoeff")? == &Value::Float(1.0));
    Ok(())
}

#[rstest]
fn options_and_vectors_convert_elementwise() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("on")), Value::String("on".into()));
    assert_eq!(
        Value::from(vec![1, 2]),
        Value::Sequence(vec![Value::Integer(1), Value::Integer(2)])
    );
}

#[rstest]
fn chained_access_on_scalars_fails() {
    let err = Value::from("latest")
        .get_attr("default")
        .expect_err("a string has no attributes");
    assert!(matches!(
        err,
        StructError::NotAStruct { ref key, found: "string" } if key == "default"
    ));
}

#[rstest]
#[case(Value::from(vec!["a"]), 1, "index 1 out of range for sequence of length 1")]
#[case(Value::Null, 0, "expected a sequence, found a null")]
fn indexing_reports_misses(#[case] value: Value, #[case] index: usize, #[case] message: &str) {
    let err = value.get_index(index).expect_err("index must fail");
    assert_eq!(err.to_string(), message);
}

#[rstest]
fn scalars_compare_with_rust_literals() {
    assert!(Value::from("latest") == "latest");
    assert!(Value::from(10) == 10);
    assert!(Value::from(true) == true);
    assert!(Value::from(1.1) == 1.1);
    assert!(Value::from("10") != 10);
}

#[rstest]
fn json_round_trip_keeps_order() {
    let original = json!({"zeta": 1, "alpha": {"b": 2, "a": [true, null]}});
    let container: Struct = Struct::from(
        original
            .as_object()
            .cloned()
            .unwrap_or_default(),
    );
    assert_eq!(container.to_json_value(), original);
    let keys: Vec<&str> = container.keys().collect();
    assert_eq!(keys, ["zeta", "alpha"]);
}

#[rstest]
fn serialising_a_container_keeps_order_and_types() -> Result<()> {
    let mut inner = Struct::new();
    inner.set_item("z", Value::Float(0.5));
    inner.set_item("a", Value::Null);
    let mut root = Struct::new();
    root.set_item("zeta", inner);
    root.set_item("alpha", vec![Value::from(1), Value::from("two")]);
    root.set_item("flag", false);

    let text = serde_json::to_string(&root)?;
    ensure!(
        text == r#"{"zeta":{"z":0.5,"a":null},"alpha":[1,"two"],"flag":false}"#,
        "unexpected serialisation: {text}"
    );
    Ok(())
}

#[rstest]
fn serialising_a_value_matches_its_json_form() -> Result<()> {
    let value = Value::from(json!({"b": [1.25, null, {"c": "d"}], "a": 3}));
    ensure!(serde_json::to_value(&value)? == json!({"b": [1.25, null, {"c": "d"}], "a": 3}));
    ensure!(serde_json::to_string(&Value::Float(2.0))? == "2.0");
    ensure!(serde_json::to_string(&Value::Null)? == "null");
    Ok(())
}

#[rstest]
fn nan_is_the_one_value_unequal_to_itself() {
    let nan = Value::Float(f64::NAN);
    assert_ne!(nan, nan.clone());
    assert_eq!(Value::Float(f64::INFINITY), Value::Float(f64::INFINITY));
}
