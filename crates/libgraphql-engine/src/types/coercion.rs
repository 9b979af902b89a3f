use crate::ast;
use crate::ast::NodeKind;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CoercionError>;

/// How [`VariableReference`](ast::VariableReference)s inside a literal are
/// treated during [`coerce_literal`].
#[derive(Clone, Copy, Debug)]
pub enum VariableValues<'a> {
    /// Variables are assumed to hold valid values of the expected type. This
    /// is the mode validation runs in, before any variable values exist.
    AssumeValid,

    /// Variables resolve to these already-coerced values. A variable absent
    /// from the map is treated as `null`.
    Provided(&'a IndexMap<String, Value>),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CoercionError {
    #[error("Expected a list value for type `{type_annotation}`, found `{found}`")]
    ExpectedList {
        found: String,
        type_annotation: String,
    },

    #[error("Expected an input object value for type `{type_name}`, found `{found}`")]
    ExpectedInputObject {
        found: String,
        type_name: String,
    },

    #[error("Enum type `{enum_type}` has no value named `{value}`")]
    InvalidEnumValue {
        enum_type: String,
        value: String,
    },

    #[error("Invalid value for scalar type `{type_name}`: {message}")]
    InvalidScalar {
        message: String,
        type_name: String,
    },

    #[error(
        "Input object type `{type_name}` requires field `{field_name}`, but no \
        value was provided"
    )]
    MissingRequiredInputField {
        field_name: String,
        type_name: String,
    },

    #[error("Type `{type_name}` is an output type and cannot be used as an input")]
    NotAnInputType {
        type_name: String,
    },

    #[error("Expected a non-null value of type `{type_annotation}`, found null")]
    NullForNonNull {
        type_annotation: String,
    },

    #[error("Input object type `{type_name}` has no field named `{field_name}`")]
    UnknownInputField {
        field_name: String,
        type_name: String,
    },

    #[error("Unknown type `{type_name}`")]
    UnknownType {
        type_name: String,
    },
}

/// Coerces a literal value from a document into a runtime [`Value`] of the
/// given input type.
///
/// - A non-null type rejects a `null` literal.
/// - A list type coerces each element of a list literal. A non-list literal
///   is coerced as a single-element list, unless the list's item type is
///   itself a list.
/// - An input object requires every non-null field that has no default, and
///   rejects fields it does not declare. Omitted fields with a default receive
///   their default.
/// - Scalars defer to their [`Coercing::parse_literal`](crate::types::Coercing).
/// - Enums must name one of their declared values.
pub fn coerce_literal(
    schema: &Schema,
    literal: &ast::Node,
    type_annot: &TypeAnnotation,
    variables: VariableValues<'_>,
) -> Result<Value> {
    if let NodeKind::VariableReference(var_ref) = literal.kind() {
        return match variables {
            VariableValues::AssumeValid => Ok(Value::Null),
            VariableValues::Provided(values) => {
                let value = values.get(&var_ref.name).cloned().unwrap_or_default();
                if value.is_null() && !type_annot.nullable() {
                    Err(CoercionError::NullForNonNull {
                        type_annotation: type_annot.to_string(),
                    })
                } else {
                    Ok(value)
                }
            },
        };
    }

    if let NodeKind::NullValue(_) = literal.kind() {
        return if type_annot.nullable() {
            Ok(Value::Null)
        } else {
            Err(CoercionError::NullForNonNull {
                type_annotation: type_annot.to_string(),
            })
        };
    }

    match type_annot {
        TypeAnnotation::List(list_annot) => {
            let item_annot = list_annot.inner_type_annotation();
            if let NodeKind::ListValue(list) = literal.kind() {
                list.values.iter()
                    .map(|item| coerce_literal(schema, item, item_annot, variables))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            } else if item_annot.is_list() {
                Err(CoercionError::ExpectedList {
                    found: ast::print_value(literal),
                    type_annotation: type_annot.to_string(),
                })
            } else {
                Ok(Value::List(vec![
                    coerce_literal(schema, literal, item_annot, variables)?,
                ]))
            }
        },

        TypeAnnotation::Named(named_annot) => {
            let type_name = named_annot.graphql_type_name();
            match schema.get_type(type_name) {
                Some(GraphQLType::Scalar(scalar_type)) =>
                    scalar_type.coercing().parse_literal(literal).map_err(|err|
                        CoercionError::InvalidScalar {
                            message: err.message,
                            type_name: type_name.to_string(),
                        }
                    ),

                Some(GraphQLType::Enum(enum_type)) => match literal.kind() {
                    NodeKind::EnumValue(enum_val)
                        if enum_type.value(&enum_val.name).is_some()
                        => Ok(Value::Enum(enum_val.name.clone())),
                    _ => Err(CoercionError::InvalidEnumValue {
                        enum_type: type_name.to_string(),
                        value: ast::print_value(literal),
                    }),
                },

                Some(GraphQLType::InputObject(input_obj_type)) =>
                    coerce_input_object_literal(schema, literal, input_obj_type, variables),

                Some(_) => Err(CoercionError::NotAnInputType {
                    type_name: type_name.to_string(),
                }),

                None => Err(CoercionError::UnknownType {
                    type_name: type_name.to_string(),
                }),
            }
        },
    }
}

fn coerce_input_object_literal(
    schema: &Schema,
    literal: &ast::Node,
    input_obj_type: &InputObjectType,
    variables: VariableValues<'_>,
) -> Result<Value> {
    let obj = match literal.kind() {
        NodeKind::ObjectValue(obj) => obj,
        _ => return Err(CoercionError::ExpectedInputObject {
            found: ast::print_value(literal),
            type_name: input_obj_type.name().to_string(),
        }),
    };

    let literal_fields: IndexMap<&str, &ast::Node> = obj.field_entries().collect();
    if let Some(unknown_field_name) = literal_fields.keys()
        .find(|field_name| !input_obj_type.fields().contains_key(**field_name)) {
        return Err(CoercionError::UnknownInputField {
            field_name: unknown_field_name.to_string(),
            type_name: input_obj_type.name().to_string(),
        });
    }

    let mut coerced = IndexMap::new();
    for (field_name, input_field) in input_obj_type.fields() {
        let field_literal = literal_fields.get(field_name.as_str())
            .filter(|field_literal| !is_absent_variable(field_literal, variables));
        match (field_literal, input_field.default_value()) {
            (Some(field_literal), _) => {
                coerced.insert(
                    field_name.to_string(),
                    coerce_literal(schema, field_literal, input_field.type_annotation(), variables)?,
                );
            },

            (None, Some(default_value)) => {
                coerced.insert(
                    field_name.to_string(),
                    coerce_literal(
                        schema,
                        default_value,
                        input_field.type_annotation(),
                        VariableValues::AssumeValid,
                    )?,
                );
            },

            (None, None) if !input_field.type_annotation().nullable() =>
                return Err(CoercionError::MissingRequiredInputField {
                    field_name: field_name.to_string(),
                    type_name: input_obj_type.name().to_string(),
                }),

            (None, None) => (),
        }
    }
    Ok(Value::Object(coerced))
}

/// A reference to a variable that was not provided counts as an omitted
/// value, so defaults still apply.
pub(crate) fn is_absent_variable(literal: &ast::Node, variables: VariableValues<'_>) -> bool {
    match (literal.kind(), variables) {
        (NodeKind::VariableReference(var_ref), VariableValues::Provided(values))
            => !values.contains_key(&var_ref.name),
        _ => false,
    }
}

/// Whether `literal` is a valid value of the given input type.
///
/// This is [`coerce_literal`] run in [`VariableValues::AssumeValid`] mode, so
/// validation accepts exactly the literals execution is able to coerce.
pub fn is_valid_literal_value(
    schema: &Schema,
    literal: &ast::Node,
    type_annot: &TypeAnnotation,
) -> bool {
    coerce_literal(schema, literal, type_annot, VariableValues::AssumeValid).is_ok()
}

/// Coerces a runtime input [`Value`] (e.g. a provided variable value) to the
/// given input type, following the same rules as [`coerce_literal`].
pub fn coerce_input_value(
    schema: &Schema,
    value: &Value,
    type_annot: &TypeAnnotation,
) -> Result<Value> {
    if value.is_null() {
        return if type_annot.nullable() {
            Ok(Value::Null)
        } else {
            Err(CoercionError::NullForNonNull {
                type_annotation: type_annot.to_string(),
            })
        };
    }

    match type_annot {
        TypeAnnotation::List(list_annot) => {
            let item_annot = list_annot.inner_type_annotation();
            if let Value::List(items) = value {
                items.iter()
                    .map(|item| coerce_input_value(schema, item, item_annot))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            } else if item_annot.is_list() {
                Err(CoercionError::ExpectedList {
                    found: value.to_string(),
                    type_annotation: type_annot.to_string(),
                })
            } else {
                Ok(Value::List(vec![coerce_input_value(schema, value, item_annot)?]))
            }
        },

        TypeAnnotation::Named(named_annot) => {
            let type_name = named_annot.graphql_type_name();
            match schema.get_type(type_name) {
                Some(GraphQLType::Scalar(scalar_type)) =>
                    scalar_type.coercing().parse_value(value).map_err(|err|
                        CoercionError::InvalidScalar {
                            message: err.message,
                            type_name: type_name.to_string(),
                        }
                    ),

                Some(GraphQLType::Enum(enum_type)) => match value {
                    Value::String(name) | Value::Enum(name)
                        if enum_type.value(name).is_some()
                        => Ok(Value::Enum(name.clone())),
                    _ => Err(CoercionError::InvalidEnumValue {
                        enum_type: type_name.to_string(),
                        value: value.to_string(),
                    }),
                },

                Some(GraphQLType::InputObject(input_obj_type)) =>
                    coerce_input_object_value(schema, value, input_obj_type),

                Some(_) => Err(CoercionError::NotAnInputType {
                    type_name: type_name.to_string(),
                }),

                None => Err(CoercionError::UnknownType {
                    type_name: type_name.to_string(),
                }),
            }
        },
    }
}

fn coerce_input_object_value(
    schema: &Schema,
    value: &Value,
    input_obj_type: &InputObjectType,
) -> Result<Value> {
    let entries = value.as_object().ok_or_else(|| CoercionError::ExpectedInputObject {
        found: value.to_string(),
        type_name: input_obj_type.name().to_string(),
    })?;

    if let Some(unknown_field_name) = entries.keys()
        .find(|field_name| !input_obj_type.fields().contains_key(field_name.as_str())) {
        return Err(CoercionError::UnknownInputField {
            field_name: unknown_field_name.to_string(),
            type_name: input_obj_type.name().to_string(),
        });
    }

    let mut coerced = IndexMap::new();
    for (field_name, input_field) in input_obj_type.fields() {
        match (entries.get(field_name), input_field.default_value()) {
            (Some(field_value), _) => {
                coerced.insert(
                    field_name.to_string(),
                    coerce_input_value(schema, field_value, input_field.type_annotation())?,
                );
            },

            (None, Some(default_value)) => {
                coerced.insert(
                    field_name.to_string(),
                    coerce_literal(
                        schema,
                        default_value,
                        input_field.type_annotation(),
                        VariableValues::AssumeValid,
                    )?,
                );
            },

            (None, None) if !input_field.type_annotation().nullable() =>
                return Err(CoercionError::MissingRequiredInputField {
                    field_name: field_name.to_string(),
                    type_name: input_obj_type.name().to_string(),
                }),

            (None, None) => (),
        }
    }
    Ok(Value::Object(coerced))
}
