use crate::ast;
use crate::ast::AstError;
use crate::execution::ExecutionResult;
use crate::execution::FieldError;
use crate::instrumentation::ExecuteOperationParameters;
use crate::instrumentation::ExecutionParameters;
use crate::instrumentation::FieldCompleteParameters;
use crate::instrumentation::FieldParameters;
use crate::instrumentation::Instrumentation;
use crate::instrumentation::InstrumentationContext;
use crate::instrumentation::InstrumentationState;
use crate::instrumentation::ParseParameters;
use crate::instrumentation::ValidationParameters;
use crate::validation::ValidationError;
use crate::Value;
use std::any::Any;
use std::sync::Arc;

/// The states of every chained [`Instrumentation`], by position.
struct ChainedState {
    states: Vec<Option<InstrumentationState>>,
}

/// Runs several [`Instrumentation`]s as one.
///
/// The first instrumentation added is the outermost: its `begin_*` hooks run
/// first and its contexts are completed last. Each instrumentation sees only
/// the state it created itself.
#[derive(Clone, Default)]
pub struct ChainedInstrumentation {
    instrumentations: Vec<Arc<dyn Instrumentation>>,
}
impl ChainedInstrumentation {
    pub fn new(instrumentations: Vec<Arc<dyn Instrumentation>>) -> Self {
        Self { instrumentations }
    }

    pub fn with(mut self, instrumentation: impl Instrumentation + 'static) -> Self {
        self.instrumentations.push(Arc::new(instrumentation));
        self
    }

    pub fn instrumentations(&self) -> &[Arc<dyn Instrumentation>] {
        &self.instrumentations
    }

    pub fn is_empty(&self) -> bool {
        self.instrumentations.is_empty()
    }

    fn chain<T: 'static>(
        &self,
        chained_state: Option<&ChainedState>,
        mut begin: impl FnMut(
            &dyn Instrumentation,
            Option<&(dyn Any + Send + Sync)>,
        ) -> InstrumentationContext<T>,
    ) -> InstrumentationContext<T> {
        let contexts = self.instrumentations.iter()
            .enumerate()
            .map(|(idx, instrumentation)| {
                let state = chained_state
                    .and_then(|chained| chained.states.get(idx))
                    .and_then(|state| state.as_deref());
                begin(instrumentation.as_ref(), state)
            })
            .collect();
        InstrumentationContext::nested(contexts)
    }
}
impl Instrumentation for ChainedInstrumentation {
    fn create_state(&self) -> Option<InstrumentationState> {
        Some(Box::new(ChainedState {
            states: self.instrumentations.iter()
                .map(|instrumentation| instrumentation.create_state())
                .collect(),
        }))
    }

    fn begin_execution(
        &self,
        params: &ExecutionParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        self.chain(params.state::<ChainedState>(), |instrumentation, state| {
            instrumentation.begin_execution(&params.with_state(state))
        })
    }

    fn begin_parse(
        &self,
        params: &ParseParameters<'_>,
    ) -> InstrumentationContext<Result<ast::Node, AstError>> {
        self.chain(params.state::<ChainedState>(), |instrumentation, state| {
            instrumentation.begin_parse(&params.with_state(state))
        })
    }

    fn begin_validation(
        &self,
        params: &ValidationParameters<'_>,
    ) -> InstrumentationContext<Vec<ValidationError>> {
        self.chain(params.state::<ChainedState>(), |instrumentation, state| {
            instrumentation.begin_validation(&params.with_state(state))
        })
    }

    fn begin_execute_operation(
        &self,
        params: &ExecuteOperationParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        self.chain(params.state::<ChainedState>(), |instrumentation, state| {
            instrumentation.begin_execute_operation(&params.with_state(state))
        })
    }

    fn begin_field(
        &self,
        params: &FieldParameters<'_>,
    ) -> InstrumentationContext<Result<Value, FieldError>> {
        self.chain(params.state::<ChainedState>(), |instrumentation, state| {
            instrumentation.begin_field(&params.with_state(state))
        })
    }

    fn begin_field_complete(
        &self,
        params: &FieldCompleteParameters<'_>,
    ) -> InstrumentationContext<Option<Value>> {
        self.chain(params.state::<ChainedState>(), |instrumentation, state| {
            instrumentation.begin_field_complete(&params.with_state(state))
        })
    }
}
impl std::fmt::Debug for ChainedInstrumentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedInstrumentation")
            .field("len", &self.instrumentations.len())
            .finish()
    }
}
