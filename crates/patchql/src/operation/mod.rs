//! An immutable model of parsed GraphQL operations: just enough structure
//! (operation kind, top-level selections, arguments, declared variables) to
//! answer questions about what a request supplied.

mod executable_document;
#[allow(clippy::module_inception)]
mod operation;
mod operation_build_error;
mod operation_builder;
mod operation_kind;
mod selection;

pub use executable_document::ExecutableDocument;
pub use executable_document::OperationLookupError;
pub use operation::Operation;
pub use operation_build_error::OperationBuildError;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use selection::FieldSelection;
pub use selection::FieldSelectionBuilder;
pub use selection::FragmentSpreadSelection;
pub use selection::InlineFragmentSelection;
pub use selection::Selection;

#[cfg(test)]
mod tests;
