use crate::ast;
use crate::loc;
use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::OperationKind;
use crate::operation::Selection;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// Incrementally assembles an [`Operation`], either by hand or from a parsed
/// [`ast::OperationDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    def_location: loc::SourcePosition,
    kind: OperationKind,
    name: Option<String>,
    selections: Vec<Selection>,
    variable_names: IndexSet<String>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            def_location: loc::SourcePosition::default(),
            kind,
            name: None,
            selections: vec![],
            variable_names: IndexSet::new(),
        }
    }

    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selections.push(selection.into());
        self
    }

    /// Declare a variable (without the leading `$`).
    pub fn add_variable(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if self.variable_names.contains(&name) {
            return Err(OperationBuildError::DuplicateVariableName {
                location: self.def_location,
                variable_name: name,
            });
        }
        self.variable_names.insert(name);
        Ok(self)
    }

    pub fn build(self) -> Operation {
        Operation {
            def_location: self.def_location,
            kind: self.kind,
            name: self.name,
            selections: self.selections,
            variable_names: self.variable_names,
        }
    }

    pub fn def_location(mut self, def_location: loc::SourcePosition) -> Self {
        self.def_location = def_location;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Produce an [`OperationBuilder`] from a parsed
    /// [`OperationDefinition`](ast::OperationDefinition). The parser keeps
    /// operation names outside of the definition, so the name is passed
    /// alongside it.
    pub fn from_ast(
        name: Option<&str>,
        ast: &ast::Positioned<ast::OperationDefinition>,
    ) -> Result<Self> {
        let op_def = &ast.node;
        let op_kind = match op_def.ty {
            ast::OperationType::Query => OperationKind::Query,
            ast::OperationType::Mutation => OperationKind::Mutation,
            ast::OperationType::Subscription => OperationKind::Subscription,
        };

        let mut builder = Self::new(op_kind)
            .def_location(loc::SourcePosition::from_ast_pos(&ast.pos));
        if let Some(name) = name {
            builder = builder.name(name);
        }

        for var_def in &op_def.variable_definitions {
            let var_name = var_def.node.name.node.as_str();
            if builder.variable_names.contains(var_name) {
                return Err(OperationBuildError::DuplicateVariableName {
                    location: loc::SourcePosition::from_ast_pos(&var_def.pos),
                    variable_name: var_name.to_string(),
                });
            }
            builder.variable_names.insert(var_name.to_string());
        }

        for ast_selection in &op_def.selection_set.node.items {
            builder.selections.push(Selection::from_ast(ast_selection)?);
        }

        log::trace!(
            "Loaded {} operation `{}` with {} top-level selections.",
            builder.kind,
            builder.name.as_deref().unwrap_or("<anonymous>"),
            builder.selections.len(),
        );

        Ok(builder)
    }
}
