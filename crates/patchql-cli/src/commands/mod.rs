mod execute;
mod provided_fields;

use crate::Cli;
use crate::CommandResult;
use execute::ExecuteCmd;
use provided_fields::ProvidedFieldsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "patchql")]
pub(crate) enum CommandEnum {
    /// Post a GraphQL query to an endpoint and print the returned data.
    Execute(Box<ExecuteCmd>),

    /// Print the input-object fields a mutation document provides for a field.
    ProvidedFields(Box<ProvidedFieldsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Execute(cmd) => cmd.run(cli).await,
            Self::ProvidedFields(cmd) => cmd.run(cli).await,
        }
    }
}
