use crate::provided_fields::ValueClass;
use crate::ValueKind;
use crate::VariableValue;
use crate::Variables;
use thiserror::Error;

/// Produce the top-level field names denoted by a classified argument value.
///
/// Object literals yield their fields in the order they were written.
/// Variable references yield the keys of the bound mapping, sorted, since the
/// mapping itself has no meaningful order. A variable with no binding at all
/// was an optional variable the caller left out, so it yields no names.
pub fn extract_field_names(
    value: ValueClass<'_>,
    bindings: &Variables,
) -> Result<Vec<String>, ExtractionError> {
    match value {
        ValueClass::ObjectLiteral(fields) =>
            Ok(fields.keys().cloned().collect()),

        ValueClass::VariableReference(variable_name) => match bindings.get(variable_name) {
            None => {
                log::debug!(
                    "No binding supplied for `${variable_name}`; treating it \
                    as providing no fields."
                );
                Ok(vec![])
            },

            Some(VariableValue::Mapping(mapping)) => {
                let mut names: Vec<String> = mapping.keys().cloned().collect();
                names.sort_unstable();
                Ok(names)
            },

            Some(other) => Err(ExtractionError::UnsupportedValueKind {
                value_kind: other.kind(),
                variable_name: Some(variable_name.to_string()),
            }),
        },

        ValueClass::Other(value) => Err(ExtractionError::UnsupportedValueKind {
            value_kind: value.kind(),
            variable_name: None,
        }),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("Can't list the fields of a {value_kind} value.")]
    UnsupportedValueKind {
        value_kind: ValueKind,
        variable_name: Option<String>,
    },
}
