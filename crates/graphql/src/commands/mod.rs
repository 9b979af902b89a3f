mod execute;
mod file_discovery;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::command::run_in_span;
use execute::ExecuteCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Execute one operation against a schema, resolving fields from a JSON
    /// root value.
    Execute(Box<ExecuteCmd>),

    /// Validate a schema and, optionally, executable documents against it.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Execute(cmd) => run_in_span("execute", *cmd, cli).await,
            Self::Validate(cmd) => run_in_span("validate", *cmd, cli).await,
        }
    }
}
