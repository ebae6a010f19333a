use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use patchql::client::Client;
use patchql::client::ExecuteError;
use patchql::file_reader;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        help="Content type to send the request body with.",
        long,
        default_value=patchql::client::DEFAULT_CONTENT_TYPE,
    )]
    content_type: String,

    #[arg(
        help="URL of the GraphQL endpoint.",
        long,
        short='e',
    )]
    endpoint: String,

    #[arg(
        help="Extra request header as `NAME:VALUE`. May be repeated.",
        long="header",
        short='H',
    )]
    headers: Vec<String>,

    #[arg(
        help="Path to a file containing the GraphQL query.",
        name="QUERY_FILE",
    )]
    query: PathBuf,

    #[arg(
        help="Path to a JSON file with variables for the query.",
        long,
    )]
    variables: Option<PathBuf>,
}
impl ExecuteCmd {
    fn client(&self) -> anyhow::Result<Client> {
        let mut client = Client::new(self.endpoint.as_str())
            .with_content_type(self.content_type.as_str());
        for header in &self.headers {
            let (name, value) = header.split_once(':')
                .with_context(|| format!("header `{header}` is not of the form NAME:VALUE"))?;
            client = client.with_header(name.trim(), value.trim())?;
        }
        Ok(client)
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let prepared = self.client().and_then(|client| {
            let query = file_reader::read_content(&self.query)?;
            let variables = self.variables.as_ref()
                .map(file_reader::read_variables)
                .transpose()?;
            Ok((client, query, variables))
        });
        let (client, query, variables) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => return CommandResult::failure(&err),
        };

        let result = match &variables {
            Some(variables) =>
                client.execute_with_variables::<serde_json::Value>(&query, variables).await,
            None => client.execute::<serde_json::Value>(&query).await,
        };

        match result {
            Ok(data) => match serde_json::to_string_pretty(&data) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::failure(&err.into()),
            },

            Err(ExecuteError::GraphQL(errors)) => CommandResult::stderr(format_args!(
                "{} GraphQL endpoint returned {} error(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),

            Err(err @ ExecuteError::Transport(_)) =>
                CommandResult::failure(&anyhow::Error::new(err)
                    .context(format!("executing query against {}", self.endpoint))),
        }
    }
}
