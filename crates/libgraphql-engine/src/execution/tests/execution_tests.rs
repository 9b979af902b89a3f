use crate::execution::DataFetchingEnvironment;
use crate::execution::ErrorKind;
use crate::execution::ExecutionInput;
use crate::execution::ExecutionResult;
use crate::execution::FetchedValue;
use crate::execution::FieldError;
use crate::execution::GraphQL;
use crate::execution::PathSegment;
use crate::test_utils::pets_schema;
use crate::wiring::RuntimeWiring;
use crate::Value;

fn rex() -> Value {
    Value::object([
        ("__typename", Value::from("Dog")),
        ("name", Value::from("Rex")),
        ("nickname", Value::Null),
        ("barkVolume", Value::from(7)),
        ("owner", Value::object([("name", Value::from("Alice"))])),
    ])
}

fn tom() -> Value {
    Value::object([
        ("__typename", Value::from("Cat")),
        ("name", Value::from("Tom")),
        ("meows", Value::from(true)),
    ])
}

fn pets_root_value() -> Value {
    Value::object([
        ("dog", rex()),
        ("pet", tom()),
        ("catOrDog", tom()),
    ])
}

fn pets_graphql(wiring: RuntimeWiring) -> GraphQL {
    GraphQL::builder(pets_schema())
        .runtime_wiring(wiring)
        .build()
}

fn execute_with(wiring: RuntimeWiring, input: ExecutionInput) -> ExecutionResult {
    pets_graphql(wiring).execute(input.with_root_value(pets_root_value()))
}

fn execute(query: &str) -> ExecutionResult {
    execute_with(RuntimeWiring::new(), ExecutionInput::query(query))
}

fn path(segments: &[&str]) -> Vec<PathSegment> {
    segments.iter()
        .map(|segment| match segment.parse::<usize>() {
            Ok(idx) => PathSegment::Index(idx),
            Err(_) => PathSegment::Field(segment.to_string()),
        })
        .collect()
}

#[test]
fn resolves_fields_from_the_root_value() {
    let result = execute("{ dog { name barkVolume owner { name } } }");
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([
            ("name", Value::from("Rex")),
            ("barkVolume", Value::from(7)),
            ("owner", Value::object([("name", Value::from("Alice"))])),
        ])),
    ])));
}

#[test]
fn response_keys_follow_aliases_and_merge_repeated_fields() {
    let result = execute(
        "{
           dog {
             alias: name
             name
             ... on Dog { name barkVolume }
           }
         }",
    );
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([
            ("alias", Value::from("Rex")),
            ("name", Value::from("Rex")),
            ("barkVolume", Value::from(7)),
        ])),
    ])));
}

#[test]
fn fragment_spreads_and_type_conditions_apply_to_the_runtime_type() {
    let result = execute(
        "{
           catOrDog {
             __typename
             ... on Dog { barkVolume }
             ...CatFields
           }
           pet { ...on Pet { name } }
         }
         fragment CatFields on Cat { meows }",
    );
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("catOrDog", Value::object([
            ("__typename", Value::from("Cat")),
            ("meows", Value::from(true)),
        ])),
        ("pet", Value::object([("name", Value::from("Tom"))])),
    ])));
}

#[test]
fn skip_and_include_drop_fields() {
    let result = execute_with(
        RuntimeWiring::new(),
        ExecutionInput::query(
            "query Q($skipName: Boolean!) {
               dog {
                 name @skip(if: $skipName)
                 nickname @include(if: false)
                 barkVolume @include(if: true) @skip(if: false)
               }
             }",
        ).with_variable("skipName", true),
    );
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([("barkVolume", Value::from(7))])),
    ])));
}

#[test]
fn data_fetchers_receive_coerced_arguments_and_defaults() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "doesKnowCommand", |env: &DataFetchingEnvironment<'_>| {
            let command = env.argument("dogCommand").and_then(Value::as_str);
            FetchedValue::from(Value::from(command == Some("SIT")))
        })
        .data_fetcher("Dog", "isHousetrained", |env: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(env.argument("atOtherHomes").cloned().unwrap_or_default())
        })
        .build();
    let result = execute_with(
        wiring,
        ExecutionInput::query(
            "query Q($command: DogCommand!) {
               dog {
                 sits: doesKnowCommand(dogCommand: SIT)
                 heels: doesKnowCommand(dogCommand: HEEL)
                 fromVariable: doesKnowCommand(dogCommand: $command)
                 isHousetrained
               }
             }",
        ).with_variable("command", "SIT"),
    );
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([
            ("sits", Value::from(true)),
            ("heels", Value::from(false)),
            ("fromVariable", Value::from(true)),
            ("isHousetrained", Value::from(true)),
        ])),
    ])));
}

#[test]
fn data_fetchers_see_the_request_context() {
    struct Viewer(&'static str);
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "nickname", |env: &DataFetchingEnvironment<'_>| {
            let viewer = env.context::<Viewer>().map(|viewer| viewer.0);
            FetchedValue::from(viewer.map(Value::from).unwrap_or_default())
        })
        .build();
    let result = execute_with(
        wiring,
        ExecutionInput::query("{ dog { nickname } }").with_context(Viewer("Bob")),
    );
    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([("nickname", Value::from("Bob"))])),
    ])));
}

#[test]
fn failed_nullable_field_is_nulled_and_reported() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "nickname", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(FieldError::new("nickname service unavailable"))
        })
        .build();
    let result = execute_with(
        wiring,
        ExecutionInput::query(
            "{
               dog {
                 name
                 nickname
               }
             }",
        ),
    );

    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([
            ("name", Value::from("Rex")),
            ("nickname", Value::Null),
        ])),
    ])));
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.kind, ErrorKind::DataFetchingException);
    assert_eq!(error.message, "nickname service unavailable");
    assert_eq!(error.path, path(&["dog", "nickname"]));
    assert_eq!(error.locations.len(), 1);
    assert_eq!(error.locations[0].line, 4);
}

#[test]
fn null_in_non_null_field_nulls_the_parent() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "doesKnowCommand", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(Value::Null)
        })
        .build();
    let result = execute_with(
        wiring,
        ExecutionInput::query("{ dog { name doesKnowCommand(dogCommand: SIT) } cat { name } }"),
    );

    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::Null),
        ("cat", Value::Null),
    ])));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::NullValueInNonNullableField);
    assert_eq!(result.errors[0].path, path(&["dog", "doesKnowCommand"]));
}

#[test]
fn error_in_non_null_field_is_reported_once() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "isHousetrained", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(FieldError::new("unknown"))
        })
        .build();
    let result = execute_with(wiring, ExecutionInput::query("{ dog { isHousetrained } }"));

    assert_eq!(result.data, Some(Value::object([("dog", Value::Null)])));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::DataFetchingException);
    assert_eq!(result.errors[0].path, path(&["dog", "isHousetrained"]));
}

#[test]
fn values_that_fail_to_serialize_become_field_errors() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "barkVolume", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(Value::from("very loud"))
        })
        .build();
    let result = execute_with(wiring, ExecutionInput::query("{ dog { name barkVolume } }"));

    assert_eq!(result.data, Some(Value::object([
        ("dog", Value::object([
            ("name", Value::from("Rex")),
            ("barkVolume", Value::Null),
        ])),
    ])));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("Int"), "{}", result.errors[0].message);
}

#[test]
fn lists_complete_item_by_item() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Human", "pets", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(Value::List(vec![rex(), Value::Null, tom()]))
        })
        .data_fetcher("Query", "human", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(Value::object([("name", Value::from("Alice"))]))
        })
        .build();
    let result = execute_with(
        wiring,
        ExecutionInput::query("{ human { pets { __typename name } } }"),
    );

    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("human", Value::object([
            ("pets", Value::List(vec![
                Value::object([
                    ("__typename", Value::from("Dog")),
                    ("name", Value::from("Rex")),
                ]),
                Value::Null,
                Value::object([
                    ("__typename", Value::from("Cat")),
                    ("name", Value::from("Tom")),
                ]),
            ])),
        ])),
    ])));
}

#[test]
fn non_list_value_for_list_field_is_an_error() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Query", "human", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(Value::object([("pets", rex())]))
        })
        .build();
    let result = execute_with(wiring, ExecutionInput::query("{ human { pets { name } } }"));

    assert_eq!(result.data, Some(Value::object([
        ("human", Value::object([("pets", Value::Null)])),
    ])));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, path(&["human", "pets"]));
}

#[test]
fn unresolvable_abstract_type_is_a_field_error() {
    let wiring = RuntimeWiring::builder()
        .type_resolver("CatOrDog", |_: &crate::execution::TypeResolutionEnvironment<'_>| {
            Some("Human".to_string())
        })
        .build();
    let result = execute_with(wiring, ExecutionInput::query("{ catOrDog { __typename } }"));

    assert_eq!(result.data, Some(Value::object([("catOrDog", Value::Null)])));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("not a possible type"));
}

#[test]
fn root_fields_resolve_to_null_without_a_root_value() {
    let result = pets_graphql(RuntimeWiring::new()).execute_str("{ dog { name } }");
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([("dog", Value::Null)])));
}

#[test]
fn result_serializes_to_the_response_format() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "nickname", |_: &DataFetchingEnvironment<'_>| {
            FetchedValue::from(FieldError::new("boom"))
        })
        .build();
    let result = execute_with(wiring, ExecutionInput::query("{ dog { nickname } }"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["data"], serde_json::json!({ "dog": { "nickname": null } }));
    assert_eq!(json["errors"][0]["message"], "boom");
    assert_eq!(json["errors"][0]["path"], serde_json::json!(["dog", "nickname"]));
    assert!(json.get("extensions").is_none());
}
