use crate::Cli;
use crate::CommandResult;
use tracing::Instrument;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

/// Runs one subcommand inside a `command` span so engine log records are
/// attributed to it, then logs how it ended.
pub(crate) async fn run_in_span(
    name: &'static str,
    cmd: impl RunnableCommand,
    cli: Cli,
) -> CommandResult {
    log::debug!("Running `{name}` with {cmd:?}");
    let started = std::time::Instant::now();
    let result = cmd.run(cli)
        .instrument(tracing::info_span!("command", name))
        .await;
    tracing::debug!(
        command = name,
        elapsed_ms = started.elapsed().as_millis() as u64,
        exit_code = ?result.exit_code,
        "command finished",
    );
    result
}
