//! Aliases for the `async_graphql_parser` executable-document AST.
//!
//! Object literals in this AST are backed by an `IndexMap`, so their fields
//! keep the order they were written in.

pub use async_graphql_parser::Error as ParseError;
pub use async_graphql_parser::Pos as AstPos;
pub use async_graphql_parser::Positioned;

pub type Document = async_graphql_parser::types::ExecutableDocument;
pub type Field = async_graphql_parser::types::Field;
pub type OperationDefinition = async_graphql_parser::types::OperationDefinition;
pub type OperationType = async_graphql_parser::types::OperationType;
pub type Selection = async_graphql_parser::types::Selection;
pub type SelectionSet = async_graphql_parser::types::SelectionSet;
pub type Value = async_graphql_value::Value;

/// Parse an executable GraphQL document.
pub fn parse_executable_document(source: &str) -> Result<Document, ParseError> {
    async_graphql_parser::parse_query(source)
}
