use crate::ast;
use crate::ast::AstError;
use crate::execution::ExecutionResult;
use crate::execution::FieldError;
use crate::instrumentation::ExecuteOperationParameters;
use crate::instrumentation::ExecutionParameters;
use crate::instrumentation::FieldParameters;
use crate::instrumentation::Instrumentation;
use crate::instrumentation::InstrumentationContext;
use crate::instrumentation::ParseParameters;
use crate::instrumentation::ValidationParameters;
use crate::validation::ValidationError;
use crate::Value;
use std::time::Instant;

/// Emits a [`tracing`] span per request phase, with an event recording the
/// phase's duration and outcome when it completes.
///
/// Field spans are emitted at `TRACE` level and only when
/// [`TracingInstrumentation::with_field_spans()`] is enabled; every other
/// phase is emitted at `DEBUG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingInstrumentation {
    field_spans: bool,
}
impl TracingInstrumentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_spans(mut self) -> Self {
        self.field_spans = true;
        self
    }
}
impl Instrumentation for TracingInstrumentation {
    fn begin_execution(
        &self,
        params: &ExecutionParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        let span = tracing::debug_span!(
            "graphql.execution",
            operation_name = params.input().operation_name().unwrap_or_default(),
        );
        let start = Instant::now();
        InstrumentationContext::new(move |result: &ExecutionResult| {
            span.in_scope(|| tracing::debug!(
                elapsed_us = start.elapsed().as_micros() as u64,
                errors = result.errors.len(),
                has_data = result.data.is_some(),
                "execution completed",
            ));
        })
    }

    fn begin_parse(
        &self,
        params: &ParseParameters<'_>,
    ) -> InstrumentationContext<Result<ast::Node, AstError>> {
        let span = tracing::debug_span!("graphql.parse", query_len = params.query().len());
        let start = Instant::now();
        InstrumentationContext::new(move |result: &Result<ast::Node, AstError>| {
            span.in_scope(|| match result {
                Ok(_) => tracing::debug!(
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "parse completed",
                ),
                Err(err) => tracing::debug!(
                    elapsed_us = start.elapsed().as_micros() as u64,
                    error = %err,
                    "parse failed",
                ),
            });
        })
    }

    fn begin_validation(
        &self,
        _params: &ValidationParameters<'_>,
    ) -> InstrumentationContext<Vec<ValidationError>> {
        let span = tracing::debug_span!("graphql.validation");
        let start = Instant::now();
        InstrumentationContext::new(move |errors: &Vec<ValidationError>| {
            span.in_scope(|| tracing::debug!(
                elapsed_us = start.elapsed().as_micros() as u64,
                errors = errors.len(),
                "validation completed",
            ));
        })
    }

    fn begin_execute_operation(
        &self,
        params: &ExecuteOperationParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        let operation = params.operation();
        let span = tracing::debug_span!(
            "graphql.operation",
            operation_type = %operation.operation,
            operation_name = operation.name.as_deref().unwrap_or_default(),
        );
        let start = Instant::now();
        InstrumentationContext::new(move |result: &ExecutionResult| {
            span.in_scope(|| tracing::debug!(
                elapsed_us = start.elapsed().as_micros() as u64,
                errors = result.errors.len(),
                "operation completed",
            ));
        })
    }

    fn begin_field(
        &self,
        params: &FieldParameters<'_>,
    ) -> InstrumentationContext<Result<Value, FieldError>> {
        if !self.field_spans {
            return InstrumentationContext::noop();
        }
        let path = params.path().iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(".");
        let span = tracing::trace_span!(
            "graphql.field",
            parent_type = params.parent_type().name(),
            path = path.as_str(),
        );
        let start = Instant::now();
        InstrumentationContext::new(move |result: &Result<Value, FieldError>| {
            span.in_scope(|| tracing::trace!(
                elapsed_us = start.elapsed().as_micros() as u64,
                failed = result.is_err(),
                "field fetched",
            ));
        })
    }
}
