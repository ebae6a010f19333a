use crate::operation::FieldSelection;
use crate::operation::OperationKind;
use crate::provided_fields::classify;
use crate::provided_fields::extract_field_names;
use crate::provided_fields::ExtractionError;
use crate::provided_fields::OperationContext;
use crate::provided_fields::ProvidedFields;
use crate::provided_fields::ProvidedFieldsError;
use crate::provided_fields::ValueClass;
use crate::Value;
use crate::Variables;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ProvidedFieldsError>;

/// Determine the provided fields of the input-object arguments passed to the
/// mutation field currently being resolved.
///
/// With an empty `argument_names`, every argument of the field is inspected
/// and arguments that aren't input objects are skipped. Otherwise only the
/// named arguments are inspected, and naming one that isn't an input object
/// is an error.
///
/// For example `mutation { updateUser(input: {id: 123, name: "Marta"}) { id } }`
/// yields `{"input": ["id", "name"]}` for the `updateUser` resolver.
pub fn provided_fields_for_current_mutation<C: OperationContext + ?Sized>(
    ctx: &C,
    argument_names: &[&str],
) -> Result<ProvidedFields> {
    ProvidedFieldsResolver::new()
        .arguments(argument_names.iter().copied())
        .resolve(ctx)
}

/// Configurable form of [`provided_fields_for_current_mutation()`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProvidedFieldsResolver {
    arguments: Vec<String>,
    require_bound_variables: bool,
}
impl ProvidedFieldsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict inspection to these argument names. Duplicates are ignored.
    pub fn arguments<I, S>(mut self, argument_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in argument_names {
            let name = name.into();
            if !self.arguments.contains(&name) {
                self.arguments.push(name);
            }
        }
        self
    }

    /// When set, an argument that references a variable with no binding
    /// fails with [`ProvidedFieldsError::UnboundVariable`] instead of
    /// contributing nothing.
    pub fn require_bound_variables(mut self, require: bool) -> Self {
        self.require_bound_variables = require;
        self
    }

    pub fn resolve<C: OperationContext + ?Sized>(
        &self,
        ctx: &C,
    ) -> Result<ProvidedFields> {
        let operation = ctx.current_operation()?;
        if operation.kind() != OperationKind::Mutation {
            return Err(ProvidedFieldsError::NotAMutation {
                kind: operation.kind(),
            });
        }

        let field_name = ctx.current_field_name()?;
        let bindings = ctx.variable_bindings();

        let selections: Vec<&FieldSelection> =
            operation.field_selections()
                .filter(|selection| selection.name() == field_name)
                .collect();
        if selections.is_empty() {
            return Err(ProvidedFieldsError::FieldNotFound {
                field_name: field_name.to_string(),
            });
        }

        // When the same field is selected more than once, a later selection's
        // fields replace an earlier one's for the same argument.
        let mut provided = IndexMap::<String, Vec<String>>::new();
        for selection in selections {
            log::trace!(
                "Inspecting selection `{}` of `{field_name}` at {}.",
                selection.selected_name(),
                selection.def_location(),
            );

            if self.arguments.is_empty() {
                for (arg_name, value) in selection.arguments() {
                    if let Some(fields) = self.extract_argument(arg_name, value, bindings, false)? {
                        provided.insert(arg_name.to_string(), fields);
                    }
                }
            } else {
                for arg_name in &self.arguments {
                    let Some(value) = selection.argument(arg_name) else {
                        log::trace!(
                            "Requested argument `{arg_name}` was not passed to \
                            `{field_name}`."
                        );
                        continue;
                    };
                    if let Some(fields) = self.extract_argument(arg_name, value, bindings, true)? {
                        provided.insert(arg_name.to_string(), fields);
                    }
                }
            }
        }

        Ok(ProvidedFields(provided))
    }

    /// `Ok(None)` means the argument contributes no entry to the result.
    fn extract_argument(
        &self,
        arg_name: &str,
        value: &Value,
        bindings: &Variables,
        explicitly_requested: bool,
    ) -> Result<Option<Vec<String>>> {
        let class = classify(value);
        if let ValueClass::VariableReference(variable_name) = class
            && !bindings.contains(variable_name) {
            if self.require_bound_variables {
                return Err(ProvidedFieldsError::UnboundVariable {
                    argument_name: arg_name.to_string(),
                    variable_name: variable_name.to_string(),
                });
            }
            log::debug!(
                "Argument `{arg_name}` references unbound variable \
                `${variable_name}`; skipping."
            );
            return Ok(None);
        }

        match extract_field_names(class, bindings) {
            Ok(fields) => Ok(Some(fields)),

            Err(ExtractionError::UnsupportedValueKind {
                value_kind,
                variable_name,
            }) => {
                if explicitly_requested {
                    Err(ProvidedFieldsError::UnsupportedValueKind {
                        argument_name: arg_name.to_string(),
                        value_kind,
                        variable_name,
                    })
                } else {
                    log::debug!(
                        "Skipping argument `{arg_name}`: {value_kind} values \
                        have no provided fields."
                    );
                    Ok(None)
                }
            },
        }
    }
}
