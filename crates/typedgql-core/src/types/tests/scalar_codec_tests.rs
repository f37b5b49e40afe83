use crate::Value;
use crate::response::ResponseValue;
use crate::types::AnyScalar;
use crate::types::ScalarBindings;
use crate::types::ScalarCodec;
use serde_json::json;

#[test]
fn any_scalar_accepts_scalar_literals() {
    assert!(AnyScalar.coerce(&Value::from("2024-01-01")).is_ok());
    assert!(AnyScalar.coerce(&Value::from(42)).is_ok());
    assert!(AnyScalar.coerce(&Value::Null).is_ok());
}

#[test]
fn any_scalar_rejects_lists_and_objects() {
    assert!(AnyScalar.coerce(&Value::from(vec![1, 2])).is_err());
    assert!(AnyScalar.coerce(&Value::object([("a", 1)])).is_err());
}

#[test]
fn any_scalar_rejects_non_finite_floats() {
    assert!(AnyScalar.coerce(&Value::Float(1.5)).is_ok());
    assert!(AnyScalar.coerce(&Value::Float(f64::NAN)).is_err());
    assert!(AnyScalar.coerce(&Value::Float(f64::INFINITY)).is_err());
    assert!(AnyScalar.coerce(&Value::Float(f64::NEG_INFINITY)).is_err());
}

#[test]
fn any_scalar_loads_json_unchanged() {
    let json = json!({ "lat": 1.5, "lng": -2.0 });
    assert_eq!(AnyScalar.load(&json), Ok(ResponseValue::Json(json.clone())));
}

#[test]
fn bindings_replace_by_name() {
    let bindings = ScalarBindings::new()
        .bind_any("DateTime")
        .bind_any("Url")
        .bind("DateTime", AnyScalar);

    assert!(bindings.contains("DateTime"));
    assert!(bindings.get("Url").is_some());
    assert!(bindings.get("Json").is_none());
    assert_eq!(bindings.names().collect::<Vec<_>>(), vec!["DateTime", "Url"]);
    assert!(!bindings.is_empty());
    assert!(ScalarBindings::default().is_empty());
}
