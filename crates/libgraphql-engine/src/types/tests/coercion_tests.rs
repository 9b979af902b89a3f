use crate::ast;
use crate::ast::Node;
use crate::execution::coerce_argument_values;
use crate::test_utils::pets_schema;
use crate::types::CoercionError;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::VariableValues;
use crate::types::coerce_input_value;
use crate::types::coerce_literal;
use crate::types::is_valid_literal_value;
use crate::Value;
use indexmap::IndexMap;
use proptest::prelude::*;

fn named(type_name: &str, nullable: bool) -> TypeAnnotation {
    TypeAnnotation::named(type_name, nullable)
}

/// Arbitrary value literals: every scalar kind, enum names (declared on
/// `DogCommand` or not), references to `$a` and `$b`, and nested lists and
/// objects whose field names mostly belong to `ComplexInput`.
fn literal_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::null_value()),
        (-3i64..3).prop_map(Node::int_value),
        any::<i64>().prop_map(Node::int_value),
        (-1.0e3f64..1.0e3).prop_map(Node::float_value),
        "[a-z]{0,3}".prop_map(|string| Node::string_value(&string)),
        any::<bool>().prop_map(Node::boolean_value),
        prop::sample::select(vec!["SIT", "HEEL", "DOWN", "JUMP"]).prop_map(Node::enum_value),
        prop::sample::select(vec!["a", "b"]).prop_map(Node::variable_reference),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| prop_oneof![
        prop::collection::vec(inner.clone(), 0..4).prop_map(Node::list_value),
        prop::collection::vec(
            (
                prop::sample::select(vec![
                    "requiredField",
                    "intField",
                    "stringField",
                    "stringListField",
                    "extra",
                ]),
                inner,
            ),
            0..4,
        ).prop_map(|fields| Node::object_value(fields)),
    ])
}

fn input_types() -> Vec<TypeAnnotation> {
    let int = named("Int", true);
    let list_of_ints = TypeAnnotation::list(int.clone(), true);
    vec![
        named("Int", false),
        list_of_ints.clone(),
        TypeAnnotation::list(list_of_ints, true),
        named("DogCommand", false),
        named("ComplexInput", true),
        named("Float", true),
        named("ID", true),
    ]
}

#[test]
fn null_is_rejected_only_for_non_null_types() {
    let schema = pets_schema();
    assert_eq!(
        coerce_literal(&schema, &Node::null_value(), &named("Int", true), VariableValues::AssumeValid),
        Ok(Value::Null),
    );
    assert_eq!(
        coerce_literal(&schema, &Node::null_value(), &named("Int", false), VariableValues::AssumeValid),
        Err(CoercionError::NullForNonNull { type_annotation: "Int!".to_string() }),
    );
    assert!(coerce_input_value(&schema, &Value::Null, &named("Int", false)).is_err());
}

#[test]
fn single_values_are_wrapped_into_lists() {
    let schema = pets_schema();
    let list_of_ints = TypeAnnotation::list(named("Int", true), true);
    assert_eq!(
        coerce_literal(&schema, &Node::int_value(1), &list_of_ints, VariableValues::AssumeValid),
        Ok(Value::List(vec![Value::Int(1)])),
    );
    assert_eq!(
        coerce_input_value(&schema, &Value::Int(1), &list_of_ints),
        Ok(Value::List(vec![Value::Int(1)])),
    );

    let nested = TypeAnnotation::list(list_of_ints, true);
    assert!(matches!(
        coerce_literal(&schema, &Node::int_value(1), &nested, VariableValues::AssumeValid),
        Err(CoercionError::ExpectedList { .. }),
    ));
}

#[test]
fn enum_literals_must_name_a_declared_value() {
    let schema = pets_schema();
    let command = named("DogCommand", false);
    assert_eq!(
        coerce_literal(&schema, &Node::enum_value("SIT"), &command, VariableValues::AssumeValid),
        Ok(Value::Enum("SIT".to_string())),
    );
    assert!(!is_valid_literal_value(&schema, &Node::enum_value("JUMP"), &command));
    assert!(!is_valid_literal_value(&schema, &Node::string_value("SIT"), &command));
    assert_eq!(
        coerce_input_value(&schema, &Value::from("HEEL"), &command),
        Ok(Value::Enum("HEEL".to_string())),
    );
}

#[test]
fn input_objects_apply_defaults_and_reject_unknown_fields() {
    let schema = pets_schema();
    let complex = named("ComplexInput", true);

    let coerced = coerce_literal(
        &schema,
        &Node::object_value([("requiredField", Node::boolean_value(true))]),
        &complex,
        VariableValues::AssumeValid,
    );
    assert_eq!(coerced, Ok(Value::object([("requiredField", Value::Boolean(true))])));

    assert_eq!(
        coerce_literal(
            &schema,
            &Node::object_value([("intField", Node::int_value(1))]),
            &complex,
            VariableValues::AssumeValid,
        ),
        Err(CoercionError::MissingRequiredInputField {
            field_name: "requiredField".to_string(),
            type_name: "ComplexInput".to_string(),
        }),
    );

    assert_eq!(
        coerce_input_value(
            &schema,
            &Value::object([("requiredField", Value::Boolean(true)), ("extra", Value::Int(1))]),
            &complex,
        ),
        Err(CoercionError::UnknownInputField {
            field_name: "extra".to_string(),
            type_name: "ComplexInput".to_string(),
        }),
    );
}

#[test]
fn output_types_cannot_be_coerced_as_inputs() {
    let schema = pets_schema();
    assert_eq!(
        coerce_input_value(&schema, &Value::object::<&str>([]), &named("Dog", true)),
        Err(CoercionError::NotAnInputType { type_name: "Dog".to_string() }),
    );
    assert_eq!(
        coerce_input_value(&schema, &Value::Int(1), &named("Nope", true)),
        Err(CoercionError::UnknownType { type_name: "Nope".to_string() }),
    );
}

#[test]
fn variables_resolve_from_provided_values() {
    let schema = pets_schema();
    let mut variables = IndexMap::new();
    variables.insert("count".to_string(), Value::Int(3));
    let provided = VariableValues::Provided(&variables);

    assert_eq!(
        coerce_literal(&schema, &Node::variable_reference("count"), &named("Int", false), provided),
        Ok(Value::Int(3)),
    );
    assert!(coerce_literal(
        &schema,
        &Node::variable_reference("absent"),
        &named("Int", false),
        provided,
    ).is_err());
    assert_eq!(
        coerce_literal(
            &schema,
            &Node::variable_reference("absent"),
            &named("Int", false),
            VariableValues::AssumeValid,
        ),
        Ok(Value::Null),
    );
}

#[test]
fn absent_variable_in_input_object_field_counts_as_omitted() {
    let schema = pets_schema();
    let variables = IndexMap::new();
    let coerced = coerce_literal(
        &schema,
        &Node::object_value([
            ("requiredField", Node::boolean_value(false)),
            ("intField", Node::variable_reference("absent")),
        ]),
        &named("ComplexInput", true),
        VariableValues::Provided(&variables),
    );
    assert_eq!(coerced, Ok(Value::object([("requiredField", Value::Boolean(false))])));
}

proptest! {
    #[test]
    fn int_literals_and_values_coerce_alike(value in any::<i64>()) {
        let schema = pets_schema();
        let int_type = named("Int", false);
        let from_literal = coerce_literal(
            &schema,
            &Node::int_value(value),
            &int_type,
            VariableValues::AssumeValid,
        );
        let from_value = coerce_input_value(&schema, &Value::Int(value), &int_type);

        prop_assert_eq!(from_literal.is_ok(), i32::try_from(value).is_ok());
        prop_assert_eq!(from_literal.ok(), from_value.ok());
    }

    #[test]
    fn string_lists_coerce_element_wise(items in proptest::collection::vec(".*", 0..8)) {
        let schema = pets_schema();
        let list_type = TypeAnnotation::list(named("String", false), false);
        let literal = Node::list_value(items.iter().map(|item| Node::string_value(item)).collect());
        let expected = Value::List(items.iter().map(|item| Value::from(item.as_str())).collect());

        prop_assert_eq!(
            coerce_literal(&schema, &literal, &list_type, VariableValues::AssumeValid),
            Ok(expected.clone()),
        );
        prop_assert_eq!(coerce_input_value(&schema, &expected, &list_type), Ok(expected));
    }

    #[test]
    fn literal_validity_agrees_with_execution_coercion(literal in literal_strategy()) {
        let schema = pets_schema();
        let mut variables = IndexMap::new();
        variables.insert("a".to_string(), Value::Int(1));
        variables.insert("b".to_string(), Value::from("b"));

        for type_annot in input_types() {
            let valid = is_valid_literal_value(&schema, &literal, &type_annot);
            let coerced = coerce_literal(
                &schema,
                &literal,
                &type_annot,
                VariableValues::Provided(&variables),
            );
            prop_assert_eq!(
                valid,
                coerced.is_ok(),
                "`{}` as `{}`",
                ast::print_value(&literal),
                type_annot,
            );

            let mut parameters = IndexMap::new();
            parameters.insert("arg".to_string(), Parameter::new("arg", type_annot.clone()));
            let arguments = vec![Node::argument("arg", literal.clone())];
            let from_arguments =
                coerce_argument_values(&schema, &parameters, &arguments, &variables);
            prop_assert_eq!(
                valid,
                from_arguments.is_ok(),
                "argument `{}` as `{}`",
                ast::print_value(&literal),
                type_annot,
            );
        }
    }
}
