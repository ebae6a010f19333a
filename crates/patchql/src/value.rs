use crate::ast;
use indexmap::IndexMap;

/// A literal argument value as written in an operation document.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_variable_name(&self) -> Option<&str> {
        if let Self::Variable(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Variable(_) => ValueKind::Variable,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null => ValueKind::Null,
            Self::Enum(_) => ValueKind::Enum,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Variable(var_name) =>
                Value::Variable(var_name.to_string()),

            ast::Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(value), _) => Value::Int(value),
                (None, Some(value)) => Value::Float(value),
                (None, None) => Value::String(number.to_string()),
            },

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Binary(bytes) =>
                Value::String(String::from_utf8_lossy(bytes).into_owned()),

            ast::Value::Boolean(value) =>
                Value::Boolean(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.to_string()),

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.to_string(), Value::from_ast(ast_value))
                ).collect()),
        }
    }
}

/// The shape of a value, used when reporting values that can't be
/// introspected for provided fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Enum,
    Float,
    Int,
    List,
    Null,
    Number,
    Object,
    String,
    Variable,
}
impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Float => "float",
            Self::Int => "int",
            Self::List => "list",
            Self::Null => "null",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::Variable => "variable",
        })
    }
}
