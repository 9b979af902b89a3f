use crate::ast;
use crate::ast::Node;
use crate::ast::OperationType;
use crate::execution::DataFetchingEnvironment;
use crate::execution::Deferred;
use crate::execution::ErrorKind;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionError;
use crate::execution::ExecutionResult;
use crate::execution::FieldError;
use crate::execution::GraphQLError;
use crate::execution::PathSegment;
use crate::execution::TypeResolutionEnvironment;
use crate::execution::execution_context::coerce_argument_values;
use crate::execution::field_collector::GroupedFields;
use crate::execution::field_collector::collect_fields;
use crate::instrumentation::ExecuteOperationParameters;
use crate::instrumentation::FieldCompleteParameters;
use crate::instrumentation::FieldParameters;
use crate::loc::SourceLocation;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// The completed value of one field. `None` means the field produced an error
/// that nulls its nearest nullable ancestor; the error is already recorded.
type Completed = Deferred<Option<Value>>;

/// Starts executing the operation selected by `ctx`.
///
/// Fails before anything runs if the operation's root type is not defined by
/// the schema, or if the operation is a subscription.
pub(crate) fn execute_operation(
    ctx: &Arc<ExecutionContext>,
) -> Result<Deferred<ExecutionResult>, ExecutionError> {
    let operation = ctx.operation();
    let location = ctx.operation_node().location().cloned();
    if operation.operation == OperationType::Subscription {
        return Err(ExecutionError::SubscriptionsNotSupported { location });
    }
    let root_type = ctx.schema()
        .root_operation_type(operation.operation)
        .ok_or_else(|| ExecutionError::RootOperationTypeNotDefined {
            location,
            root_type: operation.operation.as_str().to_string(),
        })?;

    let instrumentation_ctx = ctx.instrumentation().begin_execute_operation(
        &ExecuteOperationParameters {
            operation,
            schema: ctx.schema(),
            state: ctx.instrumentation_state(),
        },
    );

    let fields = collect_fields(ctx, root_type, [operation.selection_set.as_ref()]);
    let data = match operation.operation {
        OperationType::Mutation => execute_fields_serially(
            ctx,
            root_type.name().to_string(),
            ctx.root_value().clone(),
            fields,
        ),
        _ => execute_fields(ctx, root_type, ctx.root_value(), fields, &[]),
    };

    let ctx = Arc::clone(ctx);
    Ok(data.map(move |data| {
        let result = ExecutionResult {
            data: Some(data.unwrap_or(Value::Null)),
            errors: ctx.take_errors(),
            extensions: IndexMap::new(),
        };
        log::debug!(
            "executed `{}` operation with {} error(s)",
            ctx.operation().operation.as_str(),
            result.errors.len(),
        );
        instrumentation_ctx.on_completed(&result);
        result
    }))
}

/// Executes sibling fields concurrently. The object completes once every
/// field has, with its entries in selection order.
fn execute_fields(
    ctx: &Arc<ExecutionContext>,
    object_type: &ObjectType,
    source: &Value,
    fields: GroupedFields,
    path: &[PathSegment],
) -> Completed {
    let mut response_keys = Vec::with_capacity(fields.len());
    let mut pending = Vec::with_capacity(fields.len());
    for (response_key, field_nodes) in fields {
        let field_path = child_path(path, PathSegment::Field(response_key.clone()));
        if let Some(completed) = execute_field(ctx, object_type, source, field_nodes, field_path) {
            response_keys.push(response_key);
            pending.push(completed);
        }
    }

    Deferred::all(pending).map(move |values| {
        let mut entries = IndexMap::with_capacity(response_keys.len());
        for (response_key, value) in response_keys.into_iter().zip(values) {
            entries.insert(response_key, value?);
        }
        Some(Value::Object(entries))
    })
}

/// Executes the root fields of a mutation one at a time: each field starts
/// only once the previous one has completed. A null that propagates to the
/// root stops the remaining fields from running.
fn execute_fields_serially(
    ctx: &Arc<ExecutionContext>,
    root_type_name: String,
    source: Value,
    fields: GroupedFields,
) -> Completed {
    let mut result = Deferred::completed(Some(IndexMap::new()));
    for (response_key, field_nodes) in fields {
        let ctx = Arc::clone(ctx);
        let root_type_name = root_type_name.clone();
        let source = source.clone();
        result = result.then(move |entries: Option<IndexMap<String, Value>>| {
            let (mut entries, root_type) = match (entries, ctx.object_type(&root_type_name)) {
                (Some(entries), Some(root_type)) => (entries, root_type),
                _ => return Deferred::completed(None),
            };
            let field_path = vec![PathSegment::Field(response_key.clone())];
            match execute_field(&ctx, root_type, &source, field_nodes, field_path) {
                Some(completed) => completed.map(move |value| {
                    entries.insert(response_key, value?);
                    Some(entries)
                }),
                None => Deferred::completed(Some(entries)),
            }
        });
    }
    result.map(|entries| entries.map(Value::Object))
}

/// Fetches and completes one field. Returns `None` for a field the parent type
/// does not define, which is left out of the response.
fn execute_field(
    ctx: &Arc<ExecutionContext>,
    parent_type: &ObjectType,
    source: &Value,
    field_nodes: Vec<Node>,
    path: Vec<PathSegment>,
) -> Option<Completed> {
    let field = field_nodes.first()?.as_field()?;
    if field.name == "__typename" {
        return Some(Deferred::completed(Some(Value::String(parent_type.name().to_string()))));
    }
    let field_def = parent_type.field(field.name.as_str())?;
    let field_name = field.name.clone();

    let fetch_ctx = ctx.instrumentation().begin_field(&FieldParameters {
        field_definition: field_def,
        parent_type,
        path: &path,
        state: ctx.instrumentation_state(),
    });
    let fetched = match coerce_argument_values(
        ctx.schema(),
        field_def.parameters(),
        &field.arguments,
        ctx.variables(),
    ) {
        Ok(arguments) => {
            let env = DataFetchingEnvironment {
                arguments: &arguments,
                context: ctx.context(),
                field_definition: field_def,
                field_nodes: &field_nodes,
                parent_type,
                path: &path,
                root_value: ctx.root_value(),
                schema: ctx.schema(),
                source,
                variables: ctx.variables(),
            };
            ctx.wiring()
                .data_fetcher(parent_type, field_def)
                .fetch(&env)
                .into_deferred()
        },
        Err(err) => Deferred::completed(Err(err)),
    };

    let ctx = Arc::clone(ctx);
    let parent_type_name = parent_type.name().to_string();
    Some(fetched.then(move |fetched: Result<Value, FieldError>| {
        fetch_ctx.on_completed(&fetched);
        let (parent_type, field_def) = match ctx.object_type(&parent_type_name)
            .and_then(|parent_type| Some((parent_type, parent_type.field(&field_name)?))) {
            Some(found) => found,
            None => return Deferred::completed(Some(Value::Null)),
        };
        let field_type = field_def.type_annotation();

        let value = match fetched {
            Ok(value) => value,
            Err(err) => {
                ctx.record_error(
                    GraphQLError::new(ErrorKind::DataFetchingException, err.message)
                        .with_locations(field_locations(&field_nodes))
                        .with_path(path),
                );
                let value = if field_type.nullable() { Some(Value::Null) } else { None };
                return Deferred::completed(value);
            },
        };

        let complete_ctx = ctx.instrumentation().begin_field_complete(&FieldCompleteParameters {
            field_definition: field_def,
            fetched_value: &value,
            parent_type,
            path: &path,
            state: ctx.instrumentation_state(),
        });
        complete_value(&ctx, field_type, &field_nodes, path, value)
            .map(move |completed| {
                complete_ctx.on_completed(&completed);
                completed
            })
    }))
}

/// Completes `value` against `type_annot`, turning a `null` in a non-null
/// position into an error that propagates to the parent.
fn complete_value(
    ctx: &Arc<ExecutionContext>,
    type_annot: &TypeAnnotation,
    field_nodes: &[Node],
    path: Vec<PathSegment>,
    value: Value,
) -> Completed {
    let completed = complete_nullable_value(ctx, type_annot, field_nodes, &path, value);
    if type_annot.nullable() {
        return completed.map(|completed| Some(completed.unwrap_or(Value::Null)));
    }

    let ctx = Arc::clone(ctx);
    let locations = field_locations(field_nodes);
    let type_name = type_annot.to_string();
    completed.map(move |completed| match completed {
        Some(Value::Null) => {
            ctx.record_error(
                GraphQLError::new(
                    ErrorKind::NullValueInNonNullableField,
                    format!("Cannot return null for non-nullable type `{type_name}`"),
                ).with_locations(locations).with_path(path),
            );
            None
        },
        completed => completed,
    })
}

fn complete_nullable_value(
    ctx: &Arc<ExecutionContext>,
    type_annot: &TypeAnnotation,
    field_nodes: &[Node],
    path: &[PathSegment],
    value: Value,
) -> Completed {
    if value.is_null() {
        return Deferred::completed(Some(Value::Null));
    }

    let named_annot = match type_annot {
        TypeAnnotation::List(list_annot) => {
            let items = match value {
                Value::List(items) => items,
                value => return field_failure(ctx, field_nodes, path, format!(
                    "Expected a list for type `{type_annot}`, found {}",
                    value.kind_name(),
                )),
            };
            let item_annot = list_annot.inner_type_annotation();
            let pending = items.into_iter()
                .enumerate()
                .map(|(idx, item)| complete_value(
                    ctx,
                    item_annot,
                    field_nodes,
                    child_path(path, PathSegment::Index(idx)),
                    item,
                ))
                .collect();
            return Deferred::all(pending).map(|items| {
                items.into_iter().collect::<Option<Vec<_>>>().map(Value::List)
            });
        },
        TypeAnnotation::Named(named_annot) => named_annot,
    };

    let type_name = named_annot.graphql_type_name();
    match ctx.schema().get_type(type_name) {
        Some(GraphQLType::Scalar(scalar_type)) =>
            match serialize_scalar(ctx, scalar_type, &value) {
                Ok(serialized) => Deferred::completed(Some(serialized)),
                Err(message) => field_failure(ctx, field_nodes, path, message),
            },

        Some(GraphQLType::Enum(enum_type)) => match value.as_str() {
            Some(name) if enum_type.value(name).is_some() =>
                Deferred::completed(Some(Value::Enum(name.to_string()))),
            _ => field_failure(ctx, field_nodes, path, format!(
                "Expected a value of enum `{type_name}`, found {value}",
            )),
        },

        Some(GraphQLType::Object(object_type)) =>
            complete_object_value(ctx, object_type, field_nodes, path, &value),

        Some(abstract_type @ (GraphQLType::Interface(_) | GraphQLType::Union(_))) =>
            match resolve_abstract_type(ctx, abstract_type, &value) {
                Ok(object_type) =>
                    complete_object_value(ctx, object_type, field_nodes, path, &value),
                Err(message) => field_failure(ctx, field_nodes, path, message),
            },

        _ => field_failure(ctx, field_nodes, path, format!(
            "Type `{type_name}` is not an output type",
        )),
    }
}

fn complete_object_value(
    ctx: &Arc<ExecutionContext>,
    object_type: &ObjectType,
    field_nodes: &[Node],
    path: &[PathSegment],
    source: &Value,
) -> Completed {
    let selection_sets = field_nodes.iter()
        .filter_map(Node::as_field)
        .filter_map(|field| field.selection_set.as_deref());
    let fields = collect_fields(ctx, object_type, selection_sets);
    execute_fields(ctx, object_type, source, fields, path)
}

fn resolve_abstract_type<'c>(
    ctx: &'c ExecutionContext,
    abstract_type: &'c GraphQLType,
    value: &Value,
) -> Result<&'c ObjectType, String> {
    let env = TypeResolutionEnvironment {
        abstract_type,
        context: ctx.context(),
        schema: ctx.schema(),
        value,
    };
    let type_name = ctx.wiring()
        .type_resolver(abstract_type)
        .resolve_type(&env)
        .ok_or_else(|| format!(
            "Could not resolve the object type of a value of abstract type `{}`",
            abstract_type.name(),
        ))?;
    let object_type = ctx.object_type(&type_name).ok_or_else(|| format!(
        "Abstract type `{}` resolved to `{type_name}`, which is not an object type",
        abstract_type.name(),
    ))?;
    if !ctx.schema().is_possible_type(abstract_type, object_type) {
        return Err(format!(
            "Object type `{type_name}` is not a possible type of `{}`",
            abstract_type.name(),
        ));
    }
    Ok(object_type)
}

/// Serializes through the scalar's wired coercion when there is one, and
/// the schema's own otherwise.
fn serialize_scalar(
    ctx: &ExecutionContext,
    scalar_type: &ScalarType,
    value: &Value,
) -> Result<Value, String> {
    let serialized = match ctx.wiring().scalar_coercing(scalar_type) {
        Some(coercing) => coercing.serialize(value),
        None => scalar_type.coercing().serialize(value),
    };
    serialized.map_err(|err| format!(
        "Could not serialize {value} as `{}`: {}",
        scalar_type.name(),
        err.message,
    ))
}

fn field_failure(
    ctx: &ExecutionContext,
    field_nodes: &[Node],
    path: &[PathSegment],
    message: String,
) -> Completed {
    ctx.record_error(
        GraphQLError::new(ErrorKind::DataFetchingException, message)
            .with_locations(field_locations(field_nodes))
            .with_path(path.to_vec()),
    );
    Deferred::completed(None)
}

fn field_locations(field_nodes: &[Node]) -> Vec<SourceLocation> {
    field_nodes.first()
        .and_then(ast::Node::location)
        .into_iter()
        .cloned()
        .collect()
}

fn child_path(path: &[PathSegment], segment: PathSegment) -> Vec<PathSegment> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(segment);
    child
}
