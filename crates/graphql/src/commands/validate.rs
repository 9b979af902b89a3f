use crate::commands::file_discovery;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_engine::ast;
use libgraphql_engine::schema::Schema;
use libgraphql_engine::validation::ValidationError;
use libgraphql_engine::validation::Validator;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["graphql".to_string()],
        help="Set of file extensions to filter to when searching for \
             executable documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    document_file_exts: Vec<String>,

    #[arg(
        help="Paths to executable GraphQL documents (or directories \
             containing them) to validate against the schema.",
        name="DOCUMENT_PATHS",
    )]
    document_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing them.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    schema_file_exts: Vec<String>,
}

/// Loads and builds the schema found at or under `paths`. Shared with the
/// `execute` command.
pub(crate) fn load_schema(paths: &[PathBuf], exts: &[String]) -> anyhow::Result<(Schema, usize)> {
    let exts = file_discovery::normalize_exts(exts);
    let mut discovered = file_discovery::discover_files(paths, &exts);
    if let Some(err) = discovered.errors.pop() {
        return Err(err.context("Failed to scan schema paths"));
    }
    if discovered.file_paths.is_empty() {
        anyhow::bail!("No schema files found under {paths:?}");
    }

    let num_files = discovered.file_paths.len();
    let schema = Schema::builder()
        .load_files(discovered.file_paths)?
        .build()?;
    Ok((schema, num_files))
}

pub(crate) fn load_document(path: &Path) -> anyhow::Result<ast::Node> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    Ok(ast::parse_document(source.as_str(), Some(path))?)
}

fn format_validation_error(path: &Path, err: &ValidationError) -> String {
    let locations = err.locations.iter()
        .map(|loc| format!("{}:{}", loc.line, loc.column))
        .collect::<Vec<_>>()
        .join(", ");
    format!("  * {} ({locations}): {} [{}]", path.display(), err.message, err.rule)
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (schema, num_schema_files) =
            match load_schema(&self.schema, &self.schema_file_exts) {
                Ok(loaded) => loaded,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Errors validating schema: {e:#}",
                    output_utils::RED_X,
                )),
            };

        let document_exts = file_discovery::normalize_exts(&self.document_file_exts);
        let discovered = if self.document_paths.is_empty() {
            file_discovery::DiscoveredFiles::default()
        } else {
            file_discovery::discover_files(&self.document_paths, &document_exts)
        };

        let mut failures: Vec<String> = discovered.errors.iter()
            .map(|e| format!("  * {e:#}"))
            .collect();
        let mut num_operations = 0;
        let mut validator = Validator::new();
        for path in &discovered.file_paths {
            let document = match load_document(path) {
                Ok(document) => document,
                Err(e) => {
                    failures.push(format!("  * {e:#}"));
                    continue;
                },
            };
            num_operations += document.as_document()
                .map(|doc| doc.operations().count())
                .unwrap_or_default();

            let errors = validator.validate(&schema, &document);
            log::debug!("{} validation errors in {}.", errors.len(), path.display());
            failures.extend(errors.iter().map(|err| format_validation_error(path, err)));
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                failures.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} schema files.\n",
                "  * Analyzed {} document files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            num_schema_files,
            discovered.file_paths.len(),
            discovered.num_skipped,
            schema.all_types().len(),
            schema.all_directives().len(),
            num_operations,
        ))
    }
}
