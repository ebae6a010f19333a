use crate::ast;
use crate::loc;
use crate::operation::OperationBuildError;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, OperationBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpreadSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_selection: &ast::Positioned<ast::Selection>) -> Result<Self> {
        let def_location = loc::SourcePosition::from_ast_pos(&ast_selection.pos);
        Ok(match &ast_selection.node {
            ast::Selection::Field(field) =>
                Selection::Field(FieldSelection::from_ast(field)?),

            ast::Selection::FragmentSpread(spread) =>
                Selection::FragmentSpread(FragmentSpreadSelection {
                    def_location,
                    fragment_name: spread.node.fragment_name.node.to_string(),
                }),

            ast::Selection::InlineFragment(inline) =>
                Selection::InlineFragment(InlineFragmentSelection {
                    def_location,
                    selection_set: selection_set_from_ast(&inline.node.selection_set.node)?,
                    type_condition: inline.node.type_condition.as_ref().map(
                        |cond| cond.node.on.node.to_string(),
                    ),
                }),
        })
    }
}
impl From<FieldSelection> for Selection {
    fn from(field: FieldSelection) -> Self {
        Self::Field(field)
    }
}

fn selection_set_from_ast(ast_set: &ast::SelectionSet) -> Result<Vec<Selection>> {
    ast_set.items.iter().map(Selection::from_ast).collect()
}

/// A single field invocation, e.g. `updateUser(input: {id: 1}) { id }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) def_location: loc::SourcePosition,
    pub(super) name: String,
    pub(super) selection_set: Vec<Selection>,
}
impl FieldSelection {
    /// Convenience wrapper around [`FieldSelectionBuilder::new()`].
    pub fn builder(name: impl Into<String>) -> FieldSelectionBuilder {
        FieldSelectionBuilder::new(name)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// Arguments in the order they were written.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourcePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or(self.name())
    }

    pub fn selection_set(&self) -> &[Selection] {
        self.selection_set.as_slice()
    }

    fn from_ast(ast: &ast::Positioned<ast::Field>) -> Result<Self> {
        let field = &ast.node;
        let mut builder = FieldSelectionBuilder::new(field.name.node.as_str())
            .def_location(loc::SourcePosition::from_ast_pos(&ast.pos));
        if let Some(alias) = &field.alias {
            builder = builder.alias(alias.node.as_str());
        }
        for (arg_name, ast_value) in &field.arguments {
            builder = builder.add_argument(
                arg_name.node.as_str(),
                Value::from_ast(&ast_value.node),
            )?;
        }
        Ok(builder
            .selection_set(selection_set_from_ast(&field.selection_set.node)?)
            .build())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelectionBuilder {
    alias: Option<String>,
    arguments: IndexMap<String, Value>,
    def_location: loc::SourcePosition,
    name: String,
    selection_set: Vec<Selection>,
}
impl FieldSelectionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: IndexMap::new(),
            def_location: loc::SourcePosition::default(),
            name: name.into(),
            selection_set: vec![],
        }
    }

    /// Add an argument after any previously added arguments. Argument names
    /// must be unique within a selection.
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Result<Self> {
        let name = name.into();
        if self.arguments.contains_key(&name) {
            return Err(OperationBuildError::DuplicateFieldArgument {
                argument_name: name,
                field_name: self.name,
                location: self.def_location,
            });
        }
        self.arguments.insert(name, value);
        Ok(self)
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn build(self) -> FieldSelection {
        FieldSelection {
            alias: self.alias,
            arguments: self.arguments,
            def_location: self.def_location,
            name: self.name,
            selection_set: self.selection_set,
        }
    }

    pub fn def_location(mut self, def_location: loc::SourcePosition) -> Self {
        self.def_location = def_location;
        self
    }

    pub fn selection_set(mut self, selections: Vec<Selection>) -> Self {
        self.selection_set = selections;
        self
    }
}

/// `...FragmentName`. Fragments are kept for completeness but never expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadSelection {
    pub(super) def_location: loc::SourcePosition,
    pub(super) fragment_name: String,
}
impl FragmentSpreadSelection {
    pub fn def_location(&self) -> &loc::SourcePosition {
        &self.def_location
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub(super) def_location: loc::SourcePosition,
    pub(super) selection_set: Vec<Selection>,
    pub(super) type_condition: Option<String>,
}
impl InlineFragmentSelection {
    pub fn def_location(&self) -> &loc::SourcePosition {
        &self.def_location
    }

    pub fn selection_set(&self) -> &[Selection] {
        self.selection_set.as_slice()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
