use crate::ast;
use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::OperationBuilder;
use thiserror::Error;

/// All operations defined in one GraphQL request document.
///
/// Fragment definitions are dropped: the provided-fields engine only ever
/// looks at an operation's top-level field selections.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument {
    operations: Vec<Operation>,
}
impl ExecutableDocument {
    /// Operations keep the order they appear in within the source document.
    pub fn from_ast(ast: &ast::Document) -> Result<Self, OperationBuildError> {
        let mut op_defs: Vec<_> = ast.operations.iter().collect();
        op_defs.sort_by_key(|(_, op_def)| (op_def.pos.line, op_def.pos.column));

        let mut operations = Vec::with_capacity(op_defs.len());
        for (name, op_def) in op_defs {
            let name = name.map(|name| name.as_str());
            operations.push(OperationBuilder::from_ast(name, op_def)?.build());
        }

        for fragment_name in ast.fragments.keys() {
            log::trace!("Ignoring fragment definition `{fragment_name}`.");
        }

        Ok(Self { operations })
    }

    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Parse `source` and load the result.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &str) -> Result<Self, OperationBuildError> {
        let ast = ast::parse_executable_document(source)
            .map_err(OperationBuildError::ParseError)?;
        Self::from_ast(&ast)
    }

    /// Pick the operation a request means to execute: the one named
    /// `operation_name` if given, otherwise the document's only operation.
    pub fn operation(
        &self,
        operation_name: Option<&str>,
    ) -> Result<&Operation, OperationLookupError> {
        match operation_name {
            Some(name) =>
                self.operations
                    .iter()
                    .find(|op| op.name() == Some(name))
                    .ok_or_else(|| OperationLookupError::OperationNotFound {
                        operation_name: name.to_string(),
                    }),

            None => match self.operations.as_slice() {
                [] => Err(OperationLookupError::NoOperationsFound),
                [op] => Ok(op),
                ops => Err(OperationLookupError::AmbiguousOperation {
                    num_operations_found: ops.len(),
                }),
            },
        }
    }

    pub fn operations(&self) -> &[Operation] {
        self.operations.as_slice()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationLookupError {
    #[error(
        "Found {num_operations_found} operations in document but no operation \
        name was given."
    )]
    AmbiguousOperation {
        num_operations_found: usize,
    },

    #[error("No operations found in document.")]
    NoOperationsFound,

    #[error("No operation named `{operation_name}` found in document.")]
    OperationNotFound {
        operation_name: String,
    },
}
