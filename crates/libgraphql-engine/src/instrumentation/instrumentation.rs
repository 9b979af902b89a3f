use crate::ast;
use crate::ast::AstError;
use crate::execution::ExecutionResult;
use crate::execution::FieldError;
use crate::instrumentation::ExecuteOperationParameters;
use crate::instrumentation::ExecutionParameters;
use crate::instrumentation::FieldCompleteParameters;
use crate::instrumentation::FieldParameters;
use crate::instrumentation::InstrumentationContext;
use crate::instrumentation::ParseParameters;
use crate::instrumentation::ValidationParameters;
use crate::validation::ValidationError;
use crate::Value;
use std::any::Any;

/// Per-request data owned by one [`Instrumentation`]. Created by
/// [`Instrumentation::create_state()`] at the start of each request and handed
/// back through the `state` of every parameter struct.
pub type InstrumentationState = Box<dyn Any + Send + Sync>;

/// Observes the phases of a request. Every hook defaults to doing nothing.
#[allow(unused_variables)]
pub trait Instrumentation: Send + Sync {
    fn create_state(&self) -> Option<InstrumentationState> {
        None
    }

    /// Wraps the whole request, from parsing to the final result.
    fn begin_execution(
        &self,
        params: &ExecutionParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        InstrumentationContext::noop()
    }

    fn begin_parse(
        &self,
        params: &ParseParameters<'_>,
    ) -> InstrumentationContext<Result<ast::Node, AstError>> {
        InstrumentationContext::noop()
    }

    fn begin_validation(
        &self,
        params: &ValidationParameters<'_>,
    ) -> InstrumentationContext<Vec<ValidationError>> {
        InstrumentationContext::noop()
    }

    /// Wraps the execution of the selected operation, once variables have
    /// been coerced.
    fn begin_execute_operation(
        &self,
        params: &ExecuteOperationParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        InstrumentationContext::noop()
    }

    /// Wraps the data fetch of one field. Completed with what the field's
    /// [`DataFetcher`](crate::execution::DataFetcher) produced.
    fn begin_field(
        &self,
        params: &FieldParameters<'_>,
    ) -> InstrumentationContext<Result<Value, FieldError>> {
        InstrumentationContext::noop()
    }

    /// Wraps the completion of one fetched field value against the field's
    /// type. Completed with the value written into the response, or `None`
    /// when the field's null propagated to its parent.
    fn begin_field_complete(
        &self,
        params: &FieldCompleteParameters<'_>,
    ) -> InstrumentationContext<Option<Value>> {
        InstrumentationContext::noop()
    }
}
