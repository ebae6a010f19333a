use crate::provided_fields::classify;
use crate::provided_fields::ValueClass;
use crate::Value;
use indexmap::IndexMap;

#[test]
fn object_literal() {
    let fields = IndexMap::from([("id".to_string(), Value::Boolean(true))]);
    let value = Value::Object(fields.clone());
    assert_eq!(classify(&value), ValueClass::ObjectLiteral(&fields));
}

#[test]
fn variable_reference() {
    let value = Value::Variable("input".to_string());
    assert_eq!(classify(&value), ValueClass::VariableReference("input"));
}

#[test]
fn everything_else_is_other() {
    let values = [
        Value::Null,
        Value::Boolean(false),
        Value::Int(7),
        Value::Float(1.5),
        Value::String("x".to_string()),
        Value::Enum("ACTIVE".to_string()),
        Value::List(vec![Value::Object(IndexMap::new())]),
    ];
    for value in &values {
        assert!(
            matches!(classify(value), ValueClass::Other(v) if v == value),
            "{value:?} should classify as Other",
        );
    }
}
