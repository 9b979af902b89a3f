use crate::ast;
use crate::execution::Deferred;
use crate::execution::PathSegment;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use crate::Value;
use indexmap::IndexMap;
use std::any::Any;

/// Resolves the value of one field for one parent object.
pub trait DataFetcher: Send + Sync {
    fn fetch(&self, env: &DataFetchingEnvironment<'_>) -> FetchedValue;
}
impl<F> DataFetcher for F
where
    F: Fn(&DataFetchingEnvironment<'_>) -> FetchedValue + Send + Sync,
{
    fn fetch(&self, env: &DataFetchingEnvironment<'_>) -> FetchedValue {
        self(env)
    }
}

/// Everything a [`DataFetcher`] may use to resolve a field.
pub struct DataFetchingEnvironment<'a> {
    pub(crate) arguments: &'a IndexMap<String, Value>,
    pub(crate) context: &'a (dyn Any + Send + Sync),
    pub(crate) field_definition: &'a Field,
    pub(crate) field_nodes: &'a [ast::Node],
    pub(crate) parent_type: &'a ObjectType,
    pub(crate) path: &'a [PathSegment],
    pub(crate) root_value: &'a Value,
    pub(crate) schema: &'a Schema,
    pub(crate) source: &'a Value,
    pub(crate) variables: &'a IndexMap<String, Value>,
}
impl<'a> DataFetchingEnvironment<'a> {
    pub fn argument(&self, name: &str) -> Option<&'a Value> {
        self.arguments.get(name)
    }

    /// Coerced argument values, with defaults applied.
    pub fn arguments(&self) -> &'a IndexMap<String, Value> {
        self.arguments
    }

    /// The per-request context given to the
    /// [`ExecutionInput`](crate::execution::ExecutionInput), if it is a `T`.
    pub fn context<T: Any>(&self) -> Option<&'a T> {
        self.context.downcast_ref::<T>()
    }

    pub fn field_definition(&self) -> &'a Field {
        self.field_definition
    }

    /// Every [`ast::Field`] node merged under this field's response key.
    pub fn field_nodes(&self) -> &'a [ast::Node] {
        self.field_nodes
    }

    pub fn parent_type(&self) -> &'a ObjectType {
        self.parent_type
    }

    pub fn path(&self) -> &'a [PathSegment] {
        self.path
    }

    pub fn root_value(&self) -> &'a Value {
        self.root_value
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// The already-resolved value of the parent object.
    pub fn source(&self) -> &'a Value {
        self.source
    }

    pub fn variables(&self) -> &'a IndexMap<String, Value> {
        self.variables
    }
}

/// The result of [`DataFetcher::fetch()`]: either available now or completed
/// later, possibly from another thread.
#[derive(Debug)]
pub enum FetchedValue {
    Ready(Result<Value, FieldError>),
    Pending(Deferred<Result<Value, FieldError>>),
}
impl FetchedValue {
    pub(crate) fn into_deferred(self) -> Deferred<Result<Value, FieldError>> {
        match self {
            Self::Ready(result) => Deferred::completed(result),
            Self::Pending(deferred) => deferred,
        }
    }
}
impl std::convert::From<Value> for FetchedValue {
    fn from(value: Value) -> Self {
        Self::Ready(Ok(value))
    }
}
impl std::convert::From<FieldError> for FetchedValue {
    fn from(value: FieldError) -> Self {
        Self::Ready(Err(value))
    }
}
impl std::convert::From<Result<Value, FieldError>> for FetchedValue {
    fn from(value: Result<Value, FieldError>) -> Self {
        Self::Ready(value)
    }
}
impl std::convert::From<Deferred<Result<Value, FieldError>>> for FetchedValue {
    fn from(value: Deferred<Result<Value, FieldError>>) -> Self {
        Self::Pending(value)
    }
}

/// A failure to resolve one field. Recorded in
/// [`ExecutionResult::errors`](crate::execution::ExecutionResult::errors) with
/// the field's path; the field itself resolves to `null`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
impl std::convert::From<&str> for FieldError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
impl std::convert::From<String> for FieldError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Reads the field's value from a same-named entry of the parent object.
/// Missing entries and non-object parents resolve to `null`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyDataFetcher;
impl DataFetcher for PropertyDataFetcher {
    fn fetch(&self, env: &DataFetchingEnvironment<'_>) -> FetchedValue {
        env.source()
            .as_object()
            .and_then(|entries| entries.get(env.field_definition().name()))
            .cloned()
            .unwrap_or(Value::Null)
            .into()
    }
}
