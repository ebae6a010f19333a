//! Work out which input-object fields a mutation's caller actually provided.
//!
//! GraphQL can't tell "field omitted" apart from "field defaulted" once
//! arguments have been coerced, so partial-update resolvers look at the
//! operation document and the raw variables instead. The pieces:
//!
//! * [`classify()`] tags an argument value as an object literal, a variable
//!   reference, or anything else.
//! * [`extract_field_names()`] turns a classified value into the top-level
//!   field names it denotes.
//! * [`OperationContext`] exposes the per-request state a resolver has access
//!   to; [`ResolverContext`] is the plain-value implementation.
//! * [`ProvidedFieldsResolver`] puts it all together for the field that is
//!   currently being resolved.

mod classify;
mod context;
mod extract;
#[allow(clippy::module_inception)]
mod provided_fields;
mod provided_fields_error;
mod resolver;

pub use classify::classify;
pub use classify::ValueClass;
pub use context::OperationContext;
pub use context::ResolverContext;
pub use extract::extract_field_names;
pub use extract::ExtractionError;
pub use provided_fields::ProvidedFields;
pub use provided_fields_error::ContextItem;
pub use provided_fields_error::ProvidedFieldsError;
pub use resolver::provided_fields_for_current_mutation;
pub use resolver::ProvidedFieldsResolver;

#[cfg(test)]
mod tests;
