use crate::execution::GraphQL;
use crate::instrumentation::TracingInstrumentation;
use crate::test_utils::pets_schema;

#[test]
fn tracing_does_not_change_results() {
    let plain = GraphQL::new(pets_schema());
    let traced = GraphQL::builder(pets_schema())
        .instrumentation(TracingInstrumentation::new().with_field_spans())
        .build();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        for query in ["{ dog { name } cat { name } }", "{ dog {", "{ unknown }"] {
            assert_eq!(traced.execute_str(query), plain.execute_str(query), "{query}");
        }
    });
}
