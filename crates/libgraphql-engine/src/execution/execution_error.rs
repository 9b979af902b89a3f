use crate::execution::ErrorKind;
use crate::execution::GraphQLError;
use crate::loc::SourceLocation;
use crate::types::CoercionError;
use thiserror::Error;

/// Request-level failures that prevent an operation from executing at all.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionError {
    #[error(
        "Variable `${variable_name}` of type `{type_annotation}` was given an \
        invalid value: {err}"
    )]
    InvalidVariableValue {
        err: CoercionError,
        location: Option<SourceLocation>,
        type_annotation: String,
        variable_name: String,
    },

    #[error(
        "The document defines {operation_count} operations, so an operation \
        name must be given"
    )]
    MissingOperationName {
        operation_count: usize,
    },

    #[error("The document does not define any operations")]
    NoOperations,

    #[error("`{root_type}` root operations are not supported by this schema")]
    RootOperationTypeNotDefined {
        location: Option<SourceLocation>,
        root_type: String,
    },

    #[error("Subscription operations are not supported")]
    SubscriptionsNotSupported {
        location: Option<SourceLocation>,
    },

    #[error("The document does not define an operation named `{operation_name}`")]
    UnknownOperation {
        operation_name: String,
    },

    #[error("Variable `${variable_name}` has an unknown or non-input type `{type_name}`")]
    UnknownVariableType {
        location: Option<SourceLocation>,
        type_name: String,
        variable_name: String,
    },
}
impl ExecutionError {
    fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::InvalidVariableValue { location, .. }
                | Self::RootOperationTypeNotDefined { location, .. }
                | Self::SubscriptionsNotSupported { location }
                | Self::UnknownVariableType { location, .. }
                => location.as_ref(),
            Self::MissingOperationName { .. }
                | Self::NoOperations
                | Self::UnknownOperation { .. }
                => None,
        }
    }
}
impl std::convert::From<ExecutionError> for GraphQLError {
    fn from(value: ExecutionError) -> Self {
        let kind = match value {
            ExecutionError::SubscriptionsNotSupported { .. } => ErrorKind::OperationNotSupported,
            _ => ErrorKind::ExecutionAborted,
        };
        let locations = value.location().into_iter().cloned().collect();
        GraphQLError::new(kind, value.to_string()).with_locations(locations)
    }
}
