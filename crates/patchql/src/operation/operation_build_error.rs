use crate::ast;
use crate::loc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationBuildError {
    #[error(
        "Found multiple `{argument_name}` arguments on a selection of field \
        `{field_name}` at {location}."
    )]
    DuplicateFieldArgument {
        argument_name: String,
        field_name: String,
        location: loc::SourcePosition,
    },

    #[error("Found multiple variables named `${variable_name}` on the operation at {location}.")]
    DuplicateVariableName {
        location: loc::SourcePosition,
        variable_name: String,
    },

    #[error("Error parsing operation document: {0}")]
    ParseError(ast::ParseError),
}
