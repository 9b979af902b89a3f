use clap::CommandFactory;
use crate::commands;

/// Validates and executes GraphQL documents against a schema.
///
/// Diagnostics go to stderr. Set `GRAPHQL_LOG` to target directives (e.g.
/// `libgraphql_engine=debug,warn`) for finer control than `-v`.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        action=clap::ArgAction::Count,
        help="Log more detail to stderr. Repeat (-vv) to include engine traces.",
        long,
        short='v',
    )]
    pub verbose: u8,
}
impl Cli {
    /// With no subcommand there is nothing to validate or execute.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_long_help()?;
        Ok(())
    }
}
