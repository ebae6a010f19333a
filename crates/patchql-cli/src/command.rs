use crate::Cli;
use crate::CommandResult;

/// A `patchql` subcommand. Each one reports its outcome through a
/// [`CommandResult`] rather than printing directly, so `main` alone decides
/// what reaches stdout and stderr.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
