use crate::ValueKind;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use std::collections::HashMap;

/// Runtime values supplied by the caller for an operation's variables.
///
/// Deserializes from (and serializes to) the JSON object sent alongside a
/// GraphQL query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Variables(IndexMap<String, VariableValue>);
impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&VariableValue> {
        self.0.get(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Option<VariableValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, VariableValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl<K: Into<String>, V: Into<VariableValue>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
impl TryFrom<serde_json::Value> for Variables {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

/// A dynamically-typed variable value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Scalar(ScalarValue),
    List(Vec<VariableValue>),
    Mapping(HashMap<String, VariableValue>),
}
impl VariableValue {
    pub fn as_mapping(&self) -> Option<&HashMap<String, VariableValue>> {
        if let Self::Mapping(mapping) = self {
            Some(mapping)
        } else {
            None
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(scalar) => scalar.kind(),
            Self::List(_) => ValueKind::List,
            Self::Mapping(_) => ValueKind::Object,
        }
    }
}
impl From<serde_json::Value> for VariableValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Self::Scalar(ScalarValue::Null),
            Json::Bool(b) => Self::Scalar(ScalarValue::Boolean(b)),
            Json::Number(n) => Self::Scalar(ScalarValue::Number(n)),
            Json::String(s) => Self::Scalar(ScalarValue::String(s)),
            Json::Array(items) =>
                Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(entries) =>
                Self::Mapping(entries.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect()),
        }
    }
}
impl From<ScalarValue> for VariableValue {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}
impl<'de> Deserialize<'de> for VariableValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
}
impl ScalarValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
        }
    }
}
