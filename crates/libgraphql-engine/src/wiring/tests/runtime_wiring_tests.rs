use crate::ast;
use crate::execution::DataFetcher;
use crate::execution::DataFetchingEnvironment;
use crate::execution::ExecutionInput;
use crate::execution::ExecutionResult;
use crate::execution::FetchedValue;
use crate::execution::GraphQL;
use crate::execution::TypeResolutionEnvironment;
use crate::execution::TypeResolver;
use crate::schema::Schema;
use crate::types::Coercing;
use crate::types::CoercingError;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::InterfaceWiringEnvironment;
use crate::wiring::RuntimeWiring;
use crate::wiring::ScalarWiringEnvironment;
use crate::wiring::UnionWiringEnvironment;
use crate::wiring::WiringFactory;
use crate::Value;
use std::sync::Arc;

const SDL: &str = "
scalar Shout

interface Named {
  name: String
}

type Person implements Named {
  name: String
  motto: Shout
}

type Robot implements Named {
  name: String
  serial: Int
}

union Thing = Person | Robot

type Query {
  greeting: String
  named: Named
  person: Person
  thing: Thing
}
";

fn schema() -> Schema {
    Schema::builder()
        .load_str(None, SDL)
        .unwrap()
        .build()
        .unwrap()
}

fn root_value() -> Value {
    Value::object([
        ("greeting", Value::from("from root value")),
        ("named", Value::object([
            ("name", Value::from("R2")),
            ("serial", Value::from(2)),
        ])),
        ("person", Value::object([
            ("name", Value::from("Ann")),
            ("motto", Value::from("carpe diem")),
        ])),
        ("thing", Value::object([("name", Value::from("Ann"))])),
    ])
}

fn execute(wiring: RuntimeWiring, query: &str) -> ExecutionResult {
    GraphQL::builder(schema())
        .runtime_wiring(wiring)
        .build()
        .execute(ExecutionInput::query(query).with_root_value(root_value()))
}

fn constant(text: &'static str) -> impl DataFetcher {
    move |_env: &DataFetchingEnvironment<'_>| FetchedValue::from(Value::from(text))
}

struct Shout;
impl Coercing for Shout {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        value.as_str()
            .map(|s| Value::from(s.to_uppercase()))
            .ok_or_else(|| CoercingError::new("Shout must be a string"))
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        self.serialize(value)
    }

    fn parse_literal(&self, _literal: &ast::Node) -> Result<Value, CoercingError> {
        Err(CoercingError::new("Shout has no literal form"))
    }
}

/// Provides whatever its flags ask for, and otherwise nothing.
#[derive(Default)]
struct TestFactory {
    default_fetcher: bool,
    greeting_fetcher: bool,
    shout: bool,
    union_resolver: bool,
}
impl WiringFactory for TestFactory {
    fn provides_scalar(&self, env: &ScalarWiringEnvironment<'_>) -> bool {
        self.shout && env.scalar_type().name() == "Shout"
    }

    fn get_scalar(&self, _env: &ScalarWiringEnvironment<'_>) -> Arc<dyn Coercing> {
        Arc::new(Shout)
    }

    fn provides_type_resolver_for_interface(
        &self,
        _env: &InterfaceWiringEnvironment<'_>,
    ) -> bool {
        false
    }

    fn get_type_resolver_for_interface(
        &self,
        _env: &InterfaceWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver> {
        unreachable!()
    }

    fn provides_type_resolver_for_union(&self, env: &UnionWiringEnvironment<'_>) -> bool {
        self.union_resolver && env.union_type().name() == "Thing"
    }

    fn get_type_resolver_for_union(
        &self,
        _env: &UnionWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver> {
        Arc::new(|_env: &TypeResolutionEnvironment<'_>| Some("Person".to_string()))
    }

    fn provides_data_fetcher(&self, env: &FieldWiringEnvironment<'_>) -> bool {
        self.greeting_fetcher
            && env.parent_type().name() == "Query"
            && env.field_definition().name() == "greeting"
    }

    fn get_data_fetcher(&self, _env: &FieldWiringEnvironment<'_>) -> Arc<dyn DataFetcher> {
        Arc::new(constant("from factory"))
    }

    fn default_data_fetcher(
        &self,
        env: &FieldWiringEnvironment<'_>,
    ) -> Option<Arc<dyn DataFetcher>> {
        if self.default_fetcher && env.field_definition().name() == "greeting" {
            Some(Arc::new(constant("factory default")))
        } else {
            None
        }
    }
}

fn greeting(result: &ExecutionResult) -> Option<&Value> {
    result.data.as_ref()?.as_object()?.get("greeting")
}

#[test]
fn fields_default_to_reading_the_parent_value() {
    let result = execute(RuntimeWiring::new(), "{ greeting }");
    assert_eq!(result.errors, vec![]);
    assert_eq!(greeting(&result), Some(&Value::from("from root value")));
}

#[test]
fn explicit_data_fetchers_take_precedence_over_the_factory() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Query", "greeting", constant("explicit"))
        .wiring_factory(TestFactory {
            greeting_fetcher: true,
            ..Default::default()
        })
        .build();
    let result = execute(wiring, "{ greeting }");
    assert_eq!(greeting(&result), Some(&Value::from("explicit")));
}

#[test]
fn factory_data_fetchers_take_precedence_over_defaults() {
    let wiring = RuntimeWiring::builder()
        .default_data_fetcher(constant("builder default"))
        .wiring_factory(TestFactory {
            greeting_fetcher: true,
            default_fetcher: true,
            ..Default::default()
        })
        .build();
    let result = execute(wiring, "{ greeting }");
    assert_eq!(greeting(&result), Some(&Value::from("from factory")));
}

#[test]
fn factory_default_fetcher_precedes_the_builder_default() {
    let wiring = RuntimeWiring::builder()
        .default_data_fetcher(constant("builder default"))
        .wiring_factory(TestFactory {
            default_fetcher: true,
            ..Default::default()
        })
        .build();
    let result = execute(wiring, "{ greeting }");
    assert_eq!(greeting(&result), Some(&Value::from("factory default")));

    let wiring = RuntimeWiring::builder()
        .default_data_fetcher(constant("builder default"))
        .build();
    let result = execute(wiring, "{ greeting }");
    assert_eq!(greeting(&result), Some(&Value::from("builder default")));
}

#[test]
fn explicit_type_resolver_resolves_an_interface() {
    let query = "{ named { name ... on Robot { serial } } }";

    // Without a resolver the value carries no `__typename` to go by.
    let result = execute(RuntimeWiring::new(), query);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.data, Some(Value::object([("named", Value::Null)])));

    let wiring = RuntimeWiring::builder()
        .type_resolver("Named", |env: &TypeResolutionEnvironment<'_>| {
            let is_robot = env.value()
                .as_object()
                .is_some_and(|entries| entries.contains_key("serial"));
            Some(if is_robot { "Robot" } else { "Person" }.to_string())
        })
        .build();
    let result = execute(wiring, query);
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("named", Value::object([
            ("name", Value::from("R2")),
            ("serial", Value::from(2)),
        ])),
    ])));
}

#[test]
fn factory_type_resolver_resolves_a_union() {
    let wiring = RuntimeWiring::builder()
        .wiring_factory(TestFactory {
            union_resolver: true,
            ..Default::default()
        })
        .build();
    let result = execute(wiring, "{ thing { __typename ... on Person { name } } }");
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.data, Some(Value::object([
        ("thing", Value::object([
            ("__typename", Value::from("Person")),
            ("name", Value::from("Ann")),
        ])),
    ])));
}

#[test]
fn wired_scalar_coercion_serializes_results() {
    let query = "{ person { motto } }";
    let motto = |result: &ExecutionResult| -> Option<Value> {
        result.data.as_ref()?
            .as_object()?
            .get("person")?
            .as_object()?
            .get("motto")
            .cloned()
    };

    let result = execute(RuntimeWiring::new(), query);
    assert_eq!(motto(&result), Some(Value::from("carpe diem")));

    let explicit = RuntimeWiring::builder().scalar("Shout", Shout).build();
    assert_eq!(motto(&execute(explicit, query)), Some(Value::from("CARPE DIEM")));

    let from_factory = RuntimeWiring::builder()
        .wiring_factory(TestFactory {
            shout: true,
            ..Default::default()
        })
        .build();
    assert_eq!(motto(&execute(from_factory, query)), Some(Value::from("CARPE DIEM")));
}

#[test]
fn debug_output_lists_registrations() {
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Query", "greeting", constant("explicit"))
        .scalar("Shout", Shout)
        .build();
    let debug = format!("{wiring:?}");
    assert!(debug.contains("greeting"), "{debug}");
    assert!(debug.contains("Shout"), "{debug}");
}
