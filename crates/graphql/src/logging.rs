use crate::Cli;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Overrides the `--verbose` levels with `tracing_subscriber` target
/// directives, e.g. `GRAPHQL_LOG=libgraphql_engine=trace,info`.
const LOG_FILTER_ENV_VAR: &str = "GRAPHQL_LOG";

const ENGINE_TARGET: &str = "libgraphql_engine";

/// Log levels for the CLI itself and for the engine it drives, picked from
/// the number of `-v` flags given.
///
/// The engine logs once per validated document and per executed field, so
/// it stays at `WARN` until the user asks for more.
fn verbosity_levels(verbose: u8) -> (LevelFilter, LevelFilter) {
    match verbose {
        0 => (LevelFilter::INFO, LevelFilter::WARN),
        1 => (LevelFilter::DEBUG, LevelFilter::DEBUG),
        _ => (LevelFilter::TRACE, LevelFilter::TRACE),
    }
}

/// Installs a stderr subscriber. Records from the `log` facade (which the
/// engine logs through) are forwarded into it, so engine and CLI output
/// interleave in one stream and never mix into the JSON written to stdout.
pub(crate) fn setup_logger(cli: &Cli) {
    let (cli_level, engine_level) = verbosity_levels(cli.verbose);
    let default_targets = Targets::new()
        .with_default(cli_level)
        .with_target(ENGINE_TARGET, engine_level);

    let mut filter_warning = None;
    let targets = match std::env::var(LOG_FILTER_ENV_VAR) {
        Ok(directives) => match directives.trim().parse::<Targets>() {
            Ok(targets) => targets,
            Err(e) => {
                filter_warning = Some(format!(
                    "Ignoring invalid `{LOG_FILTER_ENV_VAR}` value `{directives}`: {e}",
                ));
                default_targets
            },
        },
        Err(_) => default_targets,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(targets)
        .init();
    log::trace!("Logging initialized (cli: `{cli_level}`, engine: `{engine_level}`).");

    if let Some(warning) = filter_warning {
        log::warn!("{warning}");
    }
}
