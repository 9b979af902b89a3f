use crate::commands::validate::load_document;
use crate::commands::validate::load_schema;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_engine::execution::ExecutionInput;
use libgraphql_engine::execution::ExecutionResult;
use libgraphql_engine::instrumentation::TracingInstrumentation;
use libgraphql_engine::GraphQL;
use libgraphql_engine::Value;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        help="Path to the executable GraphQL document to run.",
        name="DOCUMENT_PATH",
    )]
    document_path: PathBuf,

    #[arg(
        help="Name of the operation to run when the document defines more \
             than one.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Path to a JSON file holding the root value fields are resolved \
             from.",
        long,
    )]
    root_value: Option<PathBuf>,

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

    #[arg(
        help="Emit a tracing span per resolved field.",
        long,
    )]
    trace_fields: bool,

    #[arg(
        help="Variable values, as a JSON object.",
        long,
    )]
    variables: Option<String>,
}
impl ExecuteCmd {
    fn build_input(&self) -> anyhow::Result<ExecutionInput> {
        let document = load_document(&self.document_path)?;
        let mut input = ExecutionInput::document(document);

        if let Some(name) = &self.operation_name {
            input = input.with_operation_name(name.as_str());
        }
        if let Some(variables) = &self.variables {
            let variables: IndexMap<String, Value> = serde_json::from_str(variables)
                .context("`--variables` must be a JSON object")?;
            input = input.with_variables(variables);
        }
        if let Some(path) = &self.root_value {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let root_value: Value = serde_json::from_str(json.as_str())
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            input = input.with_root_value(root_value);
        }
        Ok(input)
    }

    async fn execute(&self) -> anyhow::Result<ExecutionResult> {
        let (schema, _) = load_schema(&self.schema, &self.schema_file_exts)?;
        let input = self.build_input()?;

        let mut tracing_instrumentation = TracingInstrumentation::new();
        if self.trace_fields {
            tracing_instrumentation = tracing_instrumentation.with_field_spans();
        }
        let graphql = GraphQL::builder(schema)
            .instrumentation(tracing_instrumentation)
            .build();

        let pending = graphql.execute_async(input);
        tokio::task::spawn_blocking(move || pending.wait())
            .await?
            .context("Execution was abandoned before it completed")
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let result = match self.execute().await {
            Ok(result) => result,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to execute {}: {e:#}",
                output_utils::RED_X,
                self.document_path.display(),
            )),
        };

        let json = match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize the execution result: {e}",
                output_utils::RED_X,
            )),
        };

        log::debug!("Execution finished with {} errors.", result.errors.len());
        if result.is_ok() {
            CommandResult::stdout(format_args!("{json}"))
        } else {
            CommandResult::stdout_failure(format_args!("{json}"))
        }
    }
}
