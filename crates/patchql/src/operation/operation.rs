use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::Selection;
use indexmap::IndexSet;

/// A single query, mutation, or subscription from an executable document.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) def_location: loc::SourcePosition,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) selections: Vec<Selection>,
    pub(super) variable_names: IndexSet<String>,
}
impl Operation {
    /// Convenience wrapper around [`OperationBuilder::new()`].
    pub fn builder(kind: OperationKind) -> OperationBuilder {
        OperationBuilder::new(kind)
    }

    pub fn def_location(&self) -> &loc::SourcePosition {
        &self.def_location
    }

    /// Iterate over the top-level [`FieldSelection`]s of this operation,
    /// skipping fragment spreads and inline fragments.
    pub fn field_selections(&self) -> impl Iterator<Item = &FieldSelection> {
        self.selections.iter().filter_map(Selection::as_field)
    }

    /// Whether `$name` is declared in this operation's variable definitions.
    pub fn declares_variable(&self, name: &str) -> bool {
        self.variable_names.contains(name)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The top-level selections of this operation, in document order.
    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    /// The names of the variables this operation declares, in declaration
    /// order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variable_names.iter().map(String::as_str)
    }
}
