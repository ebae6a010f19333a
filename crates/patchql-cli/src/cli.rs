use clap::CommandFactory;
use crate::commands;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    name = "patchql",
    version,
    about = "Inspect which input-object fields a GraphQL mutation provides, \
             and run GraphQL operations against an HTTP endpoint.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log at DEBUG level, overriding the `LOG_LEVEL` environment \
              variable.",
        long,
        short='v',
        global=true,
    )]
    pub verbose: bool,
}
impl Cli {
    /// The log level requested by `--verbose` or the `LOG_LEVEL` environment
    /// variable, plus a warning to report once logging is up if `LOG_LEVEL`
    /// held something unrecognized.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        let Ok(env_val) = std::env::var("LOG_LEVEL") else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        match env_val.trim().to_ascii_lowercase().as_str() {
            "trace" => (tracing::Level::TRACE, None),
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "warn" => (tracing::Level::WARN, None),
            other => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                )),
            ),
        }
    }

    pub(crate) async fn run_default(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
