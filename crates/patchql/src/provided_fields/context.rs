use crate::operation::Operation;
use crate::provided_fields::ContextItem;
use crate::provided_fields::ProvidedFieldsError;
use crate::Variables;
use inherent::inherent;

type Result<T> = std::result::Result<T, ProvidedFieldsError>;

/// Read-only access to the per-request state of the resolver that is
/// currently executing.
///
/// Implement this for a server framework's own request context to use
/// [`ProvidedFieldsResolver`](crate::provided_fields::ProvidedFieldsResolver)
/// with it directly.
pub trait OperationContext {
    /// The operation being executed.
    fn current_operation(&self) -> Result<&Operation>;

    /// The name (not the alias) of the field whose resolver is running.
    fn current_field_name(&self) -> Result<&str>;

    /// The variables supplied with the request.
    fn variable_bindings(&self) -> &Variables;
}

/// An [`OperationContext`] assembled from plain borrowed values.
#[derive(Clone, Copy, Debug)]
pub struct ResolverContext<'a> {
    field_name: Option<&'a str>,
    operation: Option<&'a Operation>,
    variables: &'a Variables,
}
impl<'a> ResolverContext<'a> {
    pub fn new(variables: &'a Variables) -> Self {
        Self {
            field_name: None,
            operation: None,
            variables,
        }
    }

    pub fn with_field_name(mut self, field_name: &'a str) -> Self {
        self.field_name = Some(field_name);
        self
    }

    pub fn with_operation(mut self, operation: &'a Operation) -> Self {
        self.operation = Some(operation);
        self
    }
}

#[inherent]
impl<'a> OperationContext for ResolverContext<'a> {
    pub fn current_operation(&self) -> Result<&Operation> {
        self.operation.ok_or(ProvidedFieldsError::MissingContext(
            ContextItem::Operation,
        ))
    }

    pub fn current_field_name(&self) -> Result<&str> {
        self.field_name.ok_or(ProvidedFieldsError::MissingContext(
            ContextItem::FieldName,
        ))
    }

    pub fn variable_bindings(&self) -> &Variables {
        self.variables
    }
}
