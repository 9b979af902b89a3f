use crate::ast;
use crate::ast::Node;
use crate::execution::ExecutionError;
use crate::execution::ExecutionInput;
use crate::execution::FieldError;
use crate::execution::GraphQLError;
use crate::instrumentation::Instrumentation;
use crate::instrumentation::InstrumentationState;
use crate::schema::Schema;
use crate::types::CoercionError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::VariableValues;
use crate::types::coerce_input_value;
use crate::types::coerce_literal;
use crate::types::is_absent_variable;
use crate::wiring::RuntimeWiring;
use crate::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

type Result<T> = std::result::Result<T, ExecutionError>;

/// Everything shared by the fields of one executing operation. Field
/// completions may run on any thread, so this is held in an [`Arc`] and only
/// the error list is ever mutated.
pub(crate) struct ExecutionContext {
    context: Arc<dyn Any + Send + Sync>,
    document: Arc<Node>,
    errors: Mutex<Vec<GraphQLError>>,
    instrumentation: Arc<dyn Instrumentation>,
    instrumentation_state: Arc<Option<InstrumentationState>>,
    operation: ast::OperationDefinition,
    operation_node: Node,
    root_value: Value,
    schema: Arc<Schema>,
    variables: IndexMap<String, Value>,
    wiring: Arc<RuntimeWiring>,
}
impl ExecutionContext {
    /// Selects the operation `input` asks for and coerces its variables.
    pub(crate) fn new(
        schema: Arc<Schema>,
        wiring: Arc<RuntimeWiring>,
        document: Arc<Node>,
        input: &ExecutionInput,
        instrumentation: Arc<dyn Instrumentation>,
        instrumentation_state: Arc<Option<InstrumentationState>>,
    ) -> Result<Self> {
        let (operation_node, operation) = select_operation(&document, input.operation_name())?;
        let variables = coerce_variable_values(&schema, operation, input.variables())?;
        let operation_node = operation_node.clone();
        let operation = operation.clone();
        Ok(Self {
            context: Arc::clone(&input.context),
            document,
            errors: Mutex::new(vec![]),
            instrumentation,
            instrumentation_state,
            operation,
            operation_node,
            root_value: input.root_value.clone(),
            schema,
            variables,
            wiring,
        })
    }

    pub(crate) fn context(&self) -> &(dyn Any + Send + Sync) {
        self.context.as_ref()
    }

    pub(crate) fn fragment(&self, name: &str) -> Option<&ast::FragmentDefinition> {
        self.document.as_document()?
            .fragments()
            .find(|(_, frag)| frag.name == name)
            .map(|(_, frag)| frag)
    }

    pub(crate) fn instrumentation(&self) -> &dyn Instrumentation {
        self.instrumentation.as_ref()
    }

    pub(crate) fn instrumentation_state(&self) -> Option<&(dyn Any + Send + Sync)> {
        (*self.instrumentation_state).as_deref()
    }

    pub(crate) fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.schema.get_type(name).and_then(GraphQLType::as_object)
    }

    pub(crate) fn operation(&self) -> &ast::OperationDefinition {
        &self.operation
    }

    pub(crate) fn operation_node(&self) -> &Node {
        &self.operation_node
    }

    pub(crate) fn record_error(&self, error: GraphQLError) {
        log::debug!("field error: {error}");
        self.errors.lock().unwrap_or_else(PoisonError::into_inner).push(error);
    }

    pub(crate) fn root_value(&self) -> &Value {
        &self.root_value
    }

    pub(crate) fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn take_errors(&self) -> Vec<GraphQLError> {
        std::mem::take(&mut *self.errors.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }

    pub(crate) fn wiring(&self) -> &RuntimeWiring {
        &self.wiring
    }
}

/// Picks the operation named `operation_name`, or the document's only
/// operation when no name is given.
fn select_operation<'d>(
    document: &'d Node,
    operation_name: Option<&str>,
) -> Result<(&'d Node, &'d ast::OperationDefinition)> {
    let mut operations = document.as_document()
        .into_iter()
        .flat_map(|doc| doc.operations());
    match operation_name {
        Some(name) => operations
            .find(|(_, op)| op.name.as_deref() == Some(name))
            .ok_or_else(|| ExecutionError::UnknownOperation {
                operation_name: name.to_string(),
            }),

        None => {
            let first = operations.next().ok_or(ExecutionError::NoOperations)?;
            let remaining = operations.count();
            if remaining > 0 {
                return Err(ExecutionError::MissingOperationName {
                    operation_count: remaining + 1,
                });
            }
            Ok(first)
        },
    }
}

/// Coerces the raw variable values of a request to the types the operation
/// declares for them.
///
/// Variables that were not provided receive their default, if they have one,
/// and are otherwise left out. A missing non-null variable without a default
/// is an error.
fn coerce_variable_values(
    schema: &Schema,
    operation: &ast::OperationDefinition,
    raw_values: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>> {
    let mut coerced = IndexMap::new();
    for var_def_node in &operation.variable_definitions {
        let var_def = match var_def_node.as_variable_definition() {
            Some(var_def) => var_def,
            None => continue,
        };
        let location = var_def_node.location().cloned();
        let type_annot = TypeAnnotation::from_ast_node(&var_def.var_type)
            .filter(|type_annot| {
                type_annot.innermost_type(schema).is_some_and(GraphQLType::is_input_type)
            })
            .ok_or_else(|| ExecutionError::UnknownVariableType {
                location: location.clone(),
                type_name: ast::print_type(&var_def.var_type),
                variable_name: var_def.name.clone(),
            })?;
        let invalid_value = |err: CoercionError| ExecutionError::InvalidVariableValue {
            err,
            location: location.clone(),
            type_annotation: type_annot.to_string(),
            variable_name: var_def.name.clone(),
        };

        match (raw_values.get(&var_def.name), &var_def.default_value) {
            (Some(raw_value), _) => {
                let value = coerce_input_value(schema, raw_value, &type_annot)
                    .map_err(invalid_value)?;
                coerced.insert(var_def.name.clone(), value);
            },

            (None, Some(default_value)) => {
                let value = coerce_literal(
                    schema,
                    default_value,
                    &type_annot,
                    VariableValues::AssumeValid,
                ).map_err(invalid_value)?;
                coerced.insert(var_def.name.clone(), value);
            },

            (None, None) if !type_annot.nullable() => {
                return Err(invalid_value(CoercionError::NullForNonNull {
                    type_annotation: type_annot.to_string(),
                }));
            },

            (None, None) => (),
        }
    }
    Ok(coerced)
}

/// Coerces the arguments given to a field or directive against its declared
/// parameters.
///
/// An argument that is omitted, or that references a variable the request
/// did not provide, receives the parameter's default when there is one.
pub(crate) fn coerce_argument_values(
    schema: &Schema,
    parameters: &IndexMap<String, Parameter>,
    arguments: &[Node],
    variables: &IndexMap<String, Value>,
) -> std::result::Result<IndexMap<String, Value>, FieldError> {
    let provided: IndexMap<&str, &Node> = arguments.iter()
        .filter_map(|node| node.as_argument())
        .map(|arg| (arg.name.as_str(), arg.value.as_ref()))
        .collect();
    let variable_values = VariableValues::Provided(variables);

    let mut coerced = IndexMap::new();
    for (name, param) in parameters {
        let type_annot = param.type_annotation();
        let literal = provided.get(name.as_str())
            .copied()
            .filter(|literal| !is_absent_variable(literal, variable_values));
        let result = match (literal, param.default_value()) {
            (Some(literal), _) =>
                coerce_literal(schema, literal, type_annot, variable_values),
            (None, Some(default_value)) =>
                coerce_literal(schema, default_value, type_annot, VariableValues::AssumeValid),
            (None, None) if !type_annot.nullable() => Err(CoercionError::NullForNonNull {
                type_annotation: type_annot.to_string(),
            }),
            (None, None) => continue,
        };
        let value = result.map_err(|err| {
            FieldError::new(format!("Argument `{name}` has an invalid value: {err}"))
        })?;
        coerced.insert(name.clone(), value);
    }
    Ok(coerced)
}
