use crate::Value;
use indexmap::IndexMap;

/// How an argument value can be introspected for provided fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueClass<'a> {
    /// An inline input-object literal, e.g. `{id: 1, name: "Marta"}`.
    ObjectLiteral(&'a IndexMap<String, Value>),

    /// A `$variable` whose runtime binding decides the provided fields.
    VariableReference(&'a str),

    /// Scalars, enums, lists and `null`. Never expanded.
    Other(&'a Value),
}

pub fn classify(value: &Value) -> ValueClass<'_> {
    match value {
        Value::Object(fields) => ValueClass::ObjectLiteral(fields),
        Value::Variable(name) => ValueClass::VariableReference(name.as_str()),
        Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Enum(_)
        | Value::List(_) => ValueClass::Other(value),
    }
}
