use crate::operation::OperationKind;
use crate::ValueKind;
use thiserror::Error;

/// A piece of per-request state the provided-fields lookup depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextItem {
    FieldName,
    Operation,
}
impl std::fmt::Display for ContextItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FieldName => "field name",
            Self::Operation => "operation",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProvidedFieldsError {
    #[error("No selection of field `{field_name}` found in the operation.")]
    FieldNotFound {
        field_name: String,
    },

    #[error("No {0} available in the resolver context.")]
    MissingContext(ContextItem),

    #[error("Provided fields can only be determined for mutations, not a {kind}.")]
    NotAMutation {
        kind: OperationKind,
    },

    #[error(
        "Argument `{argument_name}` refers to `${variable_name}`, but no value \
        was supplied for that variable."
    )]
    UnboundVariable {
        argument_name: String,
        variable_name: String,
    },

    #[error(
        "Argument `{argument_name}` is a {value_kind} value; only input objects \
        have provided fields."
    )]
    UnsupportedValueKind {
        argument_name: String,
        value_kind: ValueKind,
        variable_name: Option<String>,
    },
}
