use crate::operation::ExecutableDocument;
use crate::provided_fields::ProvidedFields;
use crate::provided_fields::ProvidedFieldsError;
use crate::provided_fields::ProvidedFieldsResolver;
use crate::provided_fields::ResolverContext;
use crate::Variables;

pub(super) fn variables(json: serde_json::Value) -> Variables {
    Variables::try_from(json).expect("variables must be a JSON object")
}

/// Parse `query` and resolve the provided fields of `field_name` with the
/// given resolver configuration.
pub(super) fn resolve_with(
    resolver: &ProvidedFieldsResolver,
    query: &str,
    variables: &Variables,
    field_name: &str,
) -> Result<ProvidedFields, ProvidedFieldsError> {
    let doc = ExecutableDocument::from_str(query).expect("parse error");
    let operation = doc.operation(None).expect("single operation");
    let ctx = ResolverContext::new(variables)
        .with_operation(operation)
        .with_field_name(field_name);
    resolver.resolve(&ctx)
}

pub(super) fn resolve(
    query: &str,
    variables: &Variables,
    field_name: &str,
    argument_names: &[&str],
) -> Result<ProvidedFields, ProvidedFieldsError> {
    resolve_with(
        &ProvidedFieldsResolver::new().arguments(argument_names.iter().copied()),
        query,
        variables,
        field_name,
    )
}
