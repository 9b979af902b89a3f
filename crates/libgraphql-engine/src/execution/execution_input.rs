use crate::ast;
use crate::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

/// What a request executes: source text still to be parsed, or an already
/// parsed document.
#[derive(Clone, Debug)]
pub enum RequestSource {
    Document(Arc<ast::Node>),
    Query(String),
}

/// One request to [`GraphQL::execute()`](crate::execution::GraphQL::execute).
#[derive(Clone)]
pub struct ExecutionInput {
    pub(crate) context: Arc<dyn Any + Send + Sync>,
    pub(crate) operation_name: Option<String>,
    pub(crate) root_value: Value,
    pub(crate) source: RequestSource,
    pub(crate) variables: IndexMap<String, Value>,
}
impl ExecutionInput {
    /// A request for an already parsed document.
    pub fn document(document: impl Into<Arc<ast::Node>>) -> Self {
        Self::new(RequestSource::Document(document.into()))
    }

    /// A request for query text, parsed as part of execution.
    pub fn query(query: impl Into<String>) -> Self {
        Self::new(RequestSource::Query(query.into()))
    }

    fn new(source: RequestSource) -> Self {
        Self {
            context: Arc::new(()),
            operation_name: None,
            root_value: Value::Null,
            source,
            variables: IndexMap::new(),
        }
    }

    /// Per-request data handed to every data fetcher and type resolver. See
    /// [`DataFetchingEnvironment::context()`](crate::execution::DataFetchingEnvironment::context).
    pub fn with_context(mut self, context: impl Any + Send + Sync) -> Self {
        self.context = Arc::new(context);
        self
    }

    /// Selects the operation to run. Required when the document defines more
    /// than one operation.
    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// The source value handed to the data fetchers of root fields.
    pub fn with_root_value(mut self, root_value: Value) -> Self {
        self.root_value = root_value;
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_variables(mut self, variables: IndexMap<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    pub fn context(&self) -> &(dyn Any + Send + Sync) {
        self.context.as_ref()
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn root_value(&self) -> &Value {
        &self.root_value
    }

    pub fn source(&self) -> &RequestSource {
        &self.source
    }

    /// Raw variable values, before coercion to their declared types.
    pub fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }
}
impl std::fmt::Debug for ExecutionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionInput")
            .field("operation_name", &self.operation_name)
            .field("root_value", &self.root_value)
            .field("source", &self.source)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}
