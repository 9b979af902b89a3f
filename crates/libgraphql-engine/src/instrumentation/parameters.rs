use crate::ast;
use crate::execution::ExecutionInput;
use crate::execution::PathSegment;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use crate::Value;
use std::any::Any;

type StateRef<'a> = Option<&'a (dyn Any + Send + Sync)>;

macro_rules! state_accessors {
    ($params:ident) => {
        impl<'a> $params<'a> {
            /// The state this instrumentation created for the current
            /// request, if it is a `T`.
            pub fn state<T: Any>(&self) -> Option<&'a T> {
                self.state.and_then(|state| state.downcast_ref::<T>())
            }

            /// The same parameters carrying a different state.
            pub fn with_state(&self, state: StateRef<'a>) -> Self {
                Self { state, ..*self }
            }
        }
    };
}

#[derive(Clone, Copy)]
pub struct ExecutionParameters<'a> {
    pub(crate) input: &'a ExecutionInput,
    pub(crate) query: Option<&'a str>,
    pub(crate) state: StateRef<'a>,
}
impl<'a> ExecutionParameters<'a> {
    pub fn input(&self) -> &'a ExecutionInput {
        self.input
    }

    /// The query text, when the request started from source text rather than
    /// a parsed document.
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }
}
state_accessors!(ExecutionParameters);

#[derive(Clone, Copy)]
pub struct ParseParameters<'a> {
    pub(crate) query: &'a str,
    pub(crate) state: StateRef<'a>,
}
impl<'a> ParseParameters<'a> {
    pub fn query(&self) -> &'a str {
        self.query
    }
}
state_accessors!(ParseParameters);

#[derive(Clone, Copy)]
pub struct ValidationParameters<'a> {
    pub(crate) document: &'a ast::Node,
    pub(crate) schema: &'a Schema,
    pub(crate) state: StateRef<'a>,
}
impl<'a> ValidationParameters<'a> {
    pub fn document(&self) -> &'a ast::Node {
        self.document
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}
state_accessors!(ValidationParameters);

#[derive(Clone, Copy)]
pub struct ExecuteOperationParameters<'a> {
    pub(crate) operation: &'a ast::OperationDefinition,
    pub(crate) schema: &'a Schema,
    pub(crate) state: StateRef<'a>,
}
impl<'a> ExecuteOperationParameters<'a> {
    pub fn operation(&self) -> &'a ast::OperationDefinition {
        self.operation
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}
state_accessors!(ExecuteOperationParameters);

#[derive(Clone, Copy)]
pub struct FieldParameters<'a> {
    pub(crate) field_definition: &'a Field,
    pub(crate) parent_type: &'a ObjectType,
    pub(crate) path: &'a [PathSegment],
    pub(crate) state: StateRef<'a>,
}
impl<'a> FieldParameters<'a> {
    pub fn field_definition(&self) -> &'a Field {
        self.field_definition
    }

    pub fn parent_type(&self) -> &'a ObjectType {
        self.parent_type
    }

    pub fn path(&self) -> &'a [PathSegment] {
        self.path
    }
}
state_accessors!(FieldParameters);

#[derive(Clone, Copy)]
pub struct FieldCompleteParameters<'a> {
    pub(crate) field_definition: &'a Field,
    pub(crate) fetched_value: &'a Value,
    pub(crate) parent_type: &'a ObjectType,
    pub(crate) path: &'a [PathSegment],
    pub(crate) state: StateRef<'a>,
}
impl<'a> FieldCompleteParameters<'a> {
    pub fn field_definition(&self) -> &'a Field {
        self.field_definition
    }

    /// The value the field's data fetcher produced.
    pub fn fetched_value(&self) -> &'a Value {
        self.fetched_value
    }

    pub fn parent_type(&self) -> &'a ObjectType {
        self.parent_type
    }

    pub fn path(&self) -> &'a [PathSegment] {
        self.path
    }
}
state_accessors!(FieldCompleteParameters);
