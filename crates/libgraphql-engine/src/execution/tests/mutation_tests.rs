use crate::execution::DataFetchingEnvironment;
use crate::execution::Deferred;
use crate::execution::ErrorKind;
use crate::execution::ExecutionInput;
use crate::execution::FetchedValue;
use crate::execution::GraphQL;
use crate::schema::Schema;
use crate::wiring::RuntimeWiring;
use crate::Value;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

const COUNTER_SCHEMA_SDL: &str = "
type Query { count: Int! }
type Mutation {
  increment(by: Int = 1): Int!
  broken: Int!
}
";

fn counter_graphql(log: Arc<Mutex<Vec<String>>>) -> GraphQL {
    let schema = Schema::builder()
        .load_str(None, COUNTER_SCHEMA_SDL)
        .unwrap()
        .build()
        .unwrap();
    let total = Arc::new(Mutex::new(0i64));

    let increment_log = Arc::clone(&log);
    let broken_log = Arc::clone(&log);
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Mutation", "increment", move |env: &DataFetchingEnvironment<'_>| {
            let by = env.argument("by").and_then(Value::as_i64).unwrap_or_default();
            increment_log.lock().unwrap().push(format!("start {by}"));

            let deferred = Deferred::new();
            let completer = deferred.clone();
            let total = Arc::clone(&total);
            let log = Arc::clone(&increment_log);
            // Earlier increments take longer, so concurrent execution would
            // interleave the log.
            let delay = Duration::from_millis(30 / (by as u64).max(1));
            std::thread::spawn(move || {
                std::thread::sleep(delay);
                let mut total = total.lock().unwrap();
                *total += by;
                log.lock().unwrap().push(format!("end {by}"));
                completer.complete(Ok(Value::from(*total)));
            });
            FetchedValue::from(deferred)
        })
        .data_fetcher("Mutation", "broken", move |_: &DataFetchingEnvironment<'_>| {
            broken_log.lock().unwrap().push("broken".to_string());
            FetchedValue::from(Value::Null)
        })
        .build();

    GraphQL::builder(schema).runtime_wiring(wiring).build()
}

#[test]
fn root_mutation_fields_run_one_after_another() {
    let log = Arc::new(Mutex::new(vec![]));
    let result = counter_graphql(Arc::clone(&log)).execute_str(
        "mutation { first: increment(by: 1) second: increment(by: 10) third: increment(by: 30) }",
    );

    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("first", Value::from(1)),
        ("second", Value::from(11)),
        ("third", Value::from(41)),
    ])));
    assert_eq!(*log.lock().unwrap(), vec![
        "start 1", "end 1",
        "start 10", "end 10",
        "start 30", "end 30",
    ]);
}

#[test]
fn argument_defaults_apply_to_mutation_fields() {
    let log = Arc::new(Mutex::new(vec![]));
    let result = counter_graphql(log).execute_str("mutation { increment }");
    assert_eq!(result.data, Some(Value::object([("increment", Value::from(1))])));
}

#[test]
fn null_propagating_to_the_root_stops_later_mutation_fields() {
    let log = Arc::new(Mutex::new(vec![]));
    let result = counter_graphql(Arc::clone(&log)).execute_str(
        "mutation { broken increment }",
    );

    assert_eq!(result.data, Some(Value::Null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::NullValueInNonNullableField);
    assert_eq!(*log.lock().unwrap(), vec!["broken"]);
}

#[test]
fn mutation_against_schema_without_mutation_type_is_rejected() {
    let schema = Schema::builder()
        .load_str(None, "type Query { count: Int! }")
        .unwrap()
        .build()
        .unwrap();
    let graphql = GraphQL::builder(schema)
        .validation_rules(vec![])
        .build();

    let result = graphql.execute(ExecutionInput::query("mutation { increment }"));
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::ExecutionAborted);
    assert!(result.errors[0].message.contains("mutation"));
}
