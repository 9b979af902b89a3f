use crate::loc::SourceLocation;
use crate::validation::ValidationError;
use crate::Value;
use indexmap::IndexMap;

/// The outcome of executing one operation.
///
/// `data` is `None` when execution never started (the request failed to parse,
/// failed validation, or named an unknown operation), and `Some` otherwise,
/// even if field errors nulled part or all of it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, Value>,
}
impl ExecutionResult {
    pub(crate) fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: None,
            errors,
            extensions: IndexMap::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ErrorKind {
    DataFetchingException,
    ExecutionAborted,
    InvalidSyntax,
    NullValueInNonNullableField,
    OperationNotSupported,
    ValidationError,
}

/// One entry of [`ExecutionResult::errors`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphQLError {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
}
impl GraphQLError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            locations: vec![],
            path: vec![],
        }
    }

    pub fn with_locations(mut self, locations: Vec<SourceLocation>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }
}
impl std::convert::From<ValidationError> for GraphQLError {
    fn from(value: ValidationError) -> Self {
        Self::new(ErrorKind::ValidationError, value.message)
            .with_locations(value.locations)
    }
}
impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.path.is_empty() {
            let path = self.path.iter()
                .map(|segment| segment.to_string())
                .collect::<Vec<_>>()
                .join(".");
            write!(f, " (at {path})")?;
        }
        Ok(())
    }
}

/// One step of the path from the response root to a field value.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}
