//! Tools for answering "which fields did the caller actually send?" from
//! inside a GraphQL mutation resolver.
//!
//! GraphQL's type system can't distinguish an input-object field that was
//! omitted from one that was defaulted, which matters for partial-update
//! ("patch") mutations. This crate inspects the parsed operation and the
//! variables that came with it to recover that information:
//!
//! ```
//! use patchql::operation::ExecutableDocument;
//! use patchql::provided_fields::ResolverContext;
//! use patchql::provided_fields::provided_fields_for_current_mutation;
//! use patchql::Variables;
//!
//! let doc = ExecutableDocument::from_str(
//!     r#"mutation { updateUser(input: {id: 123, name: "Marta"}) { id } }"#,
//! ).unwrap();
//! let variables = Variables::new();
//! let ctx = ResolverContext::new(&variables)
//!     .with_operation(doc.operation(None).unwrap())
//!     .with_field_name("updateUser");
//!
//! let provided = provided_fields_for_current_mutation(&ctx, &["input"]).unwrap();
//! assert_eq!(provided.fields("input"), ["id", "name"]);
//! ```

pub mod ast;
pub mod client;
pub mod file_reader;
pub mod loc;
pub mod operation;
pub mod provided_fields;
mod value;
mod variables;

pub use value::Value;
pub use value::ValueKind;
pub use variables::ScalarValue;
pub use variables::VariableValue;
pub use variables::Variables;
