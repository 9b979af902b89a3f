use crate::execution::ErrorKind;
use crate::execution::ExecutionInput;
use crate::execution::GraphQL;
use crate::schema::Schema;
use crate::test_utils::parse;
use crate::test_utils::pets_schema;
use crate::Value;
use std::sync::Arc;

fn pets_graphql() -> GraphQL {
    GraphQL::new(pets_schema())
}

#[test]
fn syntax_error_yields_no_data() {
    let result = pets_graphql().execute_str("{ dog { name ");
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::InvalidSyntax);
}

#[test]
fn validation_errors_yield_no_data() {
    let result = pets_graphql().execute_str("{ dog { unknownField } ...Missing }");
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.iter().all(|err| err.kind == ErrorKind::ValidationError));
}

#[test]
fn conflicting_selections_are_rejected_before_execution() {
    let result = pets_graphql().execute_str("{ dog { x: name x: barkVolume } }");
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::ValidationError);
    assert_eq!(result.errors[0].locations.len(), 2);
}

#[test]
fn operation_is_selected_by_name() {
    let query = "query A { dog { name } } query B { cat { name } }";
    let result = pets_graphql().execute(
        ExecutionInput::query(query).with_operation_name("B"),
    );
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([("cat", Value::Null)])));

    let result = pets_graphql().execute(ExecutionInput::query(query));
    assert_eq!(result.data, None);
    assert_eq!(result.errors[0].kind, ErrorKind::ExecutionAborted);
    assert!(result.errors[0].message.contains("2 operations"));

    let result = pets_graphql().execute(
        ExecutionInput::query(query).with_operation_name("C"),
    );
    assert_eq!(result.data, None);
    assert!(result.errors[0].message.contains("`C`"));
}

#[test]
fn parsed_documents_skip_the_parse_phase() {
    let document = Arc::new(parse("{ dog { name } }"));
    let result = pets_graphql().execute(ExecutionInput::document(document));
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([("dog", Value::Null)])));
}

#[test]
fn missing_non_null_variable_aborts_execution() {
    let result = pets_graphql().execute(ExecutionInput::query(
        "query Q($command: DogCommand!) { dog { doesKnowCommand(dogCommand: $command) } }",
    ));
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::ExecutionAborted);
    assert!(result.errors[0].message.contains("$command"));
    assert_eq!(result.errors[0].locations.len(), 1);
}

#[test]
fn variable_of_the_wrong_type_aborts_execution() {
    let result = pets_graphql().execute(
        ExecutionInput::query(
            "query Q($command: DogCommand!) { dog { doesKnowCommand(dogCommand: $command) } }",
        ).with_variable("command", "JUMP"),
    );
    assert_eq!(result.data, None);
    assert_eq!(result.errors[0].kind, ErrorKind::ExecutionAborted);
    assert!(result.errors[0].message.contains("JUMP"), "{}", result.errors[0].message);
}

#[test]
fn omitted_nullable_variable_leaves_the_argument_unset() {
    let result = pets_graphql().execute(ExecutionInput::query(
        "query Q($id: ID) { human(id: $id) { name } }",
    ));
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([("human", Value::Null)])));
}

#[test]
fn subscriptions_are_not_supported() {
    let schema = Schema::builder()
        .load_str(None, "type Query { a: Int } type Subscription { ticks: Int }")
        .unwrap()
        .build()
        .unwrap();
    let result = GraphQL::new(schema).execute_str("subscription { ticks }");
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::OperationNotSupported);
}
