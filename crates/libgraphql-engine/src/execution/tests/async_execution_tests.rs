use crate::execution::DataFetchingEnvironment;
use crate::execution::Deferred;
use crate::execution::ExecutionInput;
use crate::execution::FetchedValue;
use crate::execution::FieldError;
use crate::execution::GraphQL;
use crate::execution::PathSegment;
use crate::schema::Schema;
use crate::wiring::RuntimeWiring;
use crate::Value;
use std::time::Duration;

const CATALOG_SCHEMA_SDL: &str = "
type Query { products(count: Int!): [Product!]! }
type Product {
  id: ID!
  name: String
  price: Float!
}
";

/// Completes `result` on a new thread after `delay_ms`.
fn later(delay_ms: u64, result: Result<Value, FieldError>) -> FetchedValue {
    let deferred = Deferred::new();
    let completer = deferred.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(delay_ms));
        completer.complete(result);
    });
    FetchedValue::from(deferred)
}

fn catalog_graphql() -> GraphQL {
    let schema = Schema::builder()
        .load_str(None, CATALOG_SCHEMA_SDL)
        .unwrap()
        .build()
        .unwrap();
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Query", "products", |env: &DataFetchingEnvironment<'_>| {
            let count = env.argument("count").and_then(Value::as_i64).unwrap_or_default();
            let products = (0..count)
                .map(|idx| Value::object([("id", Value::from(idx))]))
                .collect::<Vec<_>>();
            later(5, Ok(Value::List(products)))
        })
        .data_fetcher("Product", "name", |env: &DataFetchingEnvironment<'_>| {
            let id = env.source().as_object()
                .and_then(|product| product.get("id"))
                .and_then(Value::as_i64)
                .unwrap_or_default();
            // Later products resolve first.
            later(20 - id as u64, Ok(Value::from(format!("product {id}"))))
        })
        .data_fetcher("Product", "price", |env: &DataFetchingEnvironment<'_>| {
            let id = env.source().as_object()
                .and_then(|product| product.get("id"))
                .and_then(Value::as_i64)
                .unwrap_or_default();
            if id == 3 {
                later(1, Err(FieldError::new("price unavailable")))
            } else {
                later(1, Ok(Value::from(id as f64 + 0.5)))
            }
        })
        .build();
    GraphQL::builder(schema).runtime_wiring(wiring).build()
}

fn product(id: i64) -> Value {
    Value::object([
        ("id", Value::from(id.to_string())),
        ("name", Value::from(format!("product {id}"))),
        ("price", Value::from(id as f64 + 0.5)),
    ])
}

#[test]
fn fields_completed_on_other_threads_keep_selection_order() {
    let result = catalog_graphql().execute_str("{ products(count: 3) { id name price } }");

    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("products", Value::List((0..3).map(product).collect())),
    ])));
}

#[test]
fn async_error_nulls_up_to_the_nearest_nullable_ancestor() {
    let result = catalog_graphql().execute_str("{ products(count: 5) { id price } }");

    // `price: Float!` nulls the product, `[Product!]!` nulls the list and then
    // the non-null list nulls the whole response.
    assert_eq!(result.data, Some(Value::Null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "price unavailable");
    assert_eq!(result.errors[0].path, vec![
        PathSegment::Field("products".to_string()),
        PathSegment::Index(3),
        PathSegment::Field("price".to_string()),
    ]);
}

#[test]
fn execute_async_completes_without_blocking_the_caller() {
    let deferred = catalog_graphql().execute_async(
        ExecutionInput::query("{ products(count: 2) { name } }"),
    );
    let result = deferred.wait().unwrap();
    assert_eq!(result.data, Some(Value::object([
        ("products", Value::List(vec![
            Value::object([("name", Value::from("product 0"))]),
            Value::object([("name", Value::from("product 1"))]),
        ])),
    ])));
}
