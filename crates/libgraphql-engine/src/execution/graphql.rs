use crate::ast;
use crate::ast::AstError;
use crate::execution::Deferred;
use crate::execution::ErrorKind;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionInput;
use crate::execution::ExecutionResult;
use crate::execution::GraphQLError;
use crate::execution::RequestSource;
use crate::execution::execution_strategy::execute_operation;
use crate::instrumentation::ChainedInstrumentation;
use crate::instrumentation::ExecutionParameters;
use crate::instrumentation::Instrumentation;
use crate::instrumentation::InstrumentationState;
use crate::instrumentation::ParseParameters;
use crate::instrumentation::ValidationParameters;
use crate::schema::Schema;
use crate::validation::RuleFactory;
use crate::validation::ValidationError;
use crate::validation::Validator;
use crate::validation::rules::standard_rules;
use crate::wiring::RuntimeWiring;
use std::sync::Arc;

type RequestState = Arc<Option<InstrumentationState>>;

/// Executes requests against one [`Schema`].
///
/// A request is parsed (unless it already carries a document), validated,
/// and then executed. Each of those phases is wrapped by the configured
/// [`Instrumentation`]s. A [`GraphQL`] is immutable once built and may serve
/// any number of requests concurrently.
///
/// ```ignore
/// let graphql = GraphQL::builder(schema)
///     .runtime_wiring(wiring)
///     .instrumentation(TracingInstrumentation::new())
///     .build();
/// let result = graphql.execute(ExecutionInput::query("{ hello }"));
/// ```
#[derive(Clone)]
pub struct GraphQL {
    instrumentation: Arc<ChainedInstrumentation>,
    schema: Arc<Schema>,
    validation_rules: Vec<RuleFactory>,
    wiring: Arc<RuntimeWiring>,
}
impl GraphQL {
    pub fn builder(schema: impl Into<Arc<Schema>>) -> GraphQLBuilder {
        GraphQLBuilder::new(schema.into())
    }

    /// A [`GraphQL`] with the default [`RuntimeWiring`], the standard
    /// validation rules, and no instrumentation.
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self::builder(schema).build()
    }

    /// Executes `input` and blocks the current thread until every field has
    /// completed.
    pub fn execute(&self, input: ExecutionInput) -> ExecutionResult {
        self.execute_async(input).wait().unwrap_or_else(|| {
            ExecutionResult::from_errors(vec![GraphQLError::new(
                ErrorKind::ExecutionAborted,
                "Execution was abandoned before it completed",
            )])
        })
    }

    /// Executes `input`, completing the returned [`Deferred`] on whichever
    /// thread completes the last field.
    ///
    /// Dropping the returned [`Deferred`] does not cancel data fetches that
    /// are already in flight.
    pub fn execute_async(&self, input: ExecutionInput) -> Deferred<ExecutionResult> {
        let state: RequestState = Arc::new(self.instrumentation.create_state());
        let query = match input.source() {
            RequestSource::Query(query) => Some(query.as_str()),
            RequestSource::Document(_) => None,
        };
        let execution_ctx = self.instrumentation.begin_execution(&ExecutionParameters {
            input: &input,
            query,
            state: (*state).as_deref(),
        });

        self.execute_phases(&input, &state).map(move |result| {
            execution_ctx.on_completed(&result);
            result
        })
    }

    /// Shorthand for executing query text with no variables.
    pub fn execute_str(&self, query: &str) -> ExecutionResult {
        self.execute(ExecutionInput::query(query))
    }

    pub fn instrumentation(&self) -> &ChainedInstrumentation {
        &self.instrumentation
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn validation_rules(&self) -> &[RuleFactory] {
        &self.validation_rules
    }

    pub fn wiring(&self) -> &RuntimeWiring {
        &self.wiring
    }

    fn execute_phases(
        &self,
        input: &ExecutionInput,
        state: &RequestState,
    ) -> Deferred<ExecutionResult> {
        let document = match self.parse(input, state) {
            Ok(document) => document,
            Err(err) => return failed(GraphQLError::new(ErrorKind::InvalidSyntax, err.to_string())),
        };

        let validation_errors = self.validate(&document, state);
        if !validation_errors.is_empty() {
            return Deferred::completed(ExecutionResult::from_errors(
                validation_errors.into_iter().map(GraphQLError::from).collect(),
            ));
        }

        let instrumentation: Arc<dyn Instrumentation> = self.instrumentation.clone();
        let ctx = match ExecutionContext::new(
            Arc::clone(&self.schema),
            Arc::clone(&self.wiring),
            document,
            input,
            instrumentation,
            Arc::clone(state),
        ) {
            Ok(ctx) => Arc::new(ctx),
            Err(err) => return failed(err.into()),
        };

        execute_operation(&ctx).unwrap_or_else(|err| failed(err.into()))
    }

    fn parse(
        &self,
        input: &ExecutionInput,
        state: &RequestState,
    ) -> Result<Arc<ast::Node>, AstError> {
        let query = match input.source() {
            RequestSource::Document(document) => return Ok(Arc::clone(document)),
            RequestSource::Query(query) => query,
        };
        let parse_ctx = self.instrumentation.begin_parse(&ParseParameters {
            query,
            state: (**state).as_deref(),
        });
        let parsed = ast::parse_document(query, None);
        parse_ctx.on_completed(&parsed);
        parsed.map(Arc::new)
    }

    fn validate(&self, document: &ast::Node, state: &RequestState) -> Vec<ValidationError> {
        let validation_ctx = self.instrumentation.begin_validation(&ValidationParameters {
            document,
            schema: &self.schema,
            state: (**state).as_deref(),
        });
        let errors = Validator::with_rules(self.validation_rules.clone())
            .validate(&self.schema, document);
        validation_ctx.on_completed(&errors);
        errors
    }
}
impl std::fmt::Debug for GraphQL {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQL")
            .field("instrumentation", &self.instrumentation)
            .field("validation_rules", &self.validation_rules.len())
            .field("wiring", &self.wiring)
            .finish_non_exhaustive()
    }
}

fn failed(error: GraphQLError) -> Deferred<ExecutionResult> {
    Deferred::completed(ExecutionResult::from_errors(vec![error]))
}

pub struct GraphQLBuilder {
    instrumentation: ChainedInstrumentation,
    schema: Arc<Schema>,
    validation_rules: Option<Vec<RuleFactory>>,
    wiring: Option<Arc<RuntimeWiring>>,
}
impl GraphQLBuilder {
    pub fn build(self) -> GraphQL {
        GraphQL {
            instrumentation: Arc::new(self.instrumentation),
            schema: self.schema,
            validation_rules: self.validation_rules.unwrap_or_else(standard_rules),
            wiring: self.wiring.unwrap_or_default(),
        }
    }

    /// Appends an [`Instrumentation`]. The first one added wraps all the
    /// others.
    pub fn instrumentation(mut self, instrumentation: impl Instrumentation + 'static) -> Self {
        self.instrumentation = self.instrumentation.with(instrumentation);
        self
    }

    fn new(schema: Arc<Schema>) -> Self {
        Self {
            instrumentation: ChainedInstrumentation::default(),
            schema,
            validation_rules: None,
            wiring: None,
        }
    }

    pub fn runtime_wiring(mut self, wiring: impl Into<Arc<RuntimeWiring>>) -> Self {
        self.wiring = Some(wiring.into());
        self
    }

    /// Replaces the standard validation rules.
    pub fn validation_rules(mut self, rules: Vec<RuleFactory>) -> Self {
        self.validation_rules = Some(rules);
        self
    }
}
