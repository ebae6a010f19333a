use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use patchql::file_reader;
use patchql::provided_fields::ProvidedFieldsResolver;
use patchql::provided_fields::ResolverContext;
use patchql::Variables;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ProvidedFieldsCmd {
    #[arg(
        help="Only inspect these arguments. Inspects every input-object \
             argument when omitted.",
        long="argument",
        short='a',
        value_delimiter=',',
    )]
    arguments: Vec<String>,

    #[arg(
        help="Path to a file containing the GraphQL mutation document.",
        name="DOCUMENT",
    )]
    document: PathBuf,

    #[arg(
        help="Name of the mutation field whose arguments are inspected.",
        long,
        short='f',
    )]
    field: String,

    #[arg(
        help="Operation to inspect when the document defines several.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Fail when an argument references a variable that has no value \
             in the variables file.",
        long,
    )]
    require_bound_variables: bool,

    #[arg(
        help="Path to a JSON file with the variables sent alongside the document.",
        long,
    )]
    variables: Option<PathBuf>,
}
impl ProvidedFieldsCmd {
    fn provided_fields_json(&self) -> anyhow::Result<String> {
        let document = file_reader::read_executable_document(&self.document)?;
        let operation = document.operation(self.operation_name.as_deref())
            .with_context(|| format!("selecting operation in {:?}", self.document))?;

        let variables = match &self.variables {
            Some(path) => file_reader::read_variables(path)?,
            None => Variables::new(),
        };
        log::debug!(
            "Loaded {} variable bindings for a {} operation.",
            variables.len(),
            operation.kind(),
        );

        let ctx = ResolverContext::new(&variables)
            .with_operation(operation)
            .with_field_name(self.field.as_str());
        let provided =
            ProvidedFieldsResolver::new()
                .arguments(self.arguments.iter().map(String::as_str))
                .require_bound_variables(self.require_bound_variables)
                .resolve(&ctx)
                .with_context(|| format!("resolving provided fields of `{}`", self.field))?;

        Ok(serde_json::to_string_pretty(&provided)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for ProvidedFieldsCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        match self.provided_fields_json() {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(err) => CommandResult::failure(&err),
        }
    }
}
