use crate::execution::DataFetchingEnvironment;
use crate::execution::Deferred;
use crate::execution::ExecutionInput;
use crate::execution::ExecutionResult;
use crate::execution::FetchedValue;
use crate::execution::FieldError;
use crate::execution::GraphQL;
use crate::instrumentation::ChainedInstrumentation;
use crate::instrumentation::ExecuteOperationParameters;
use crate::instrumentation::ExecutionParameters;
use crate::instrumentation::FieldCompleteParameters;
use crate::instrumentation::FieldParameters;
use crate::instrumentation::Instrumentation;
use crate::instrumentation::InstrumentationContext;
use crate::instrumentation::InstrumentationState;
use crate::instrumentation::NoopInstrumentation;
use crate::instrumentation::ParseParameters;
use crate::instrumentation::ValidationParameters;
use crate::ast;
use crate::ast::AstError;
use crate::test_utils::pets_schema;
use crate::validation::ValidationError;
use crate::wiring::RuntimeWiring;
use crate::Value;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Log = Arc<Mutex<Vec<String>>>;

/// Logs every begin and completion, prefixed with its name.
struct RecordingInstrumentation {
    log: Log,
    name: &'static str,
}
impl RecordingInstrumentation {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            log: Arc::clone(log),
            name,
        }
    }

    fn begin<T: 'static>(&self, phase: String) -> InstrumentationContext<T> {
        let name = self.name;
        self.log.lock().unwrap().push(format!("{name} begin {phase}"));
        let log = Arc::clone(&self.log);
        InstrumentationContext::new(move |_: &T| {
            log.lock().unwrap().push(format!("{name} end {phase}"));
        })
    }
}
impl Instrumentation for RecordingInstrumentation {
    fn begin_execution(
        &self,
        _: &ExecutionParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        self.begin("execution".to_string())
    }

    fn begin_parse(
        &self,
        _: &ParseParameters<'_>,
    ) -> InstrumentationContext<Result<ast::Node, AstError>> {
        self.begin("parse".to_string())
    }

    fn begin_validation(
        &self,
        _: &ValidationParameters<'_>,
    ) -> InstrumentationContext<Vec<ValidationError>> {
        self.begin("validation".to_string())
    }

    fn begin_execute_operation(
        &self,
        _: &ExecuteOperationParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        self.begin("operation".to_string())
    }

    fn begin_field(
        &self,
        params: &FieldParameters<'_>,
    ) -> InstrumentationContext<Result<Value, FieldError>> {
        self.begin(format!("field {}", join_path(params.path())))
    }

    fn begin_field_complete(
        &self,
        params: &FieldCompleteParameters<'_>,
    ) -> InstrumentationContext<Option<Value>> {
        self.begin(format!("complete {}", join_path(params.path())))
    }
}

fn join_path(path: &[crate::execution::PathSegment]) -> String {
    path.iter().map(|segment| segment.to_string()).collect::<Vec<_>>().join(".")
}

fn logged(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[test]
fn phases_are_wrapped_outermost_first() {
    let log = Log::default();
    let graphql = GraphQL::builder(pets_schema())
        .instrumentation(RecordingInstrumentation::new("a", &log))
        .instrumentation(RecordingInstrumentation::new("b", &log))
        .build();

    let result = graphql.execute(
        ExecutionInput::query("{ dog { name } }")
            .with_root_value(Value::object([("dog", Value::object([("name", Value::from("Rex"))]))])),
    );
    assert_eq!(result.errors, vec![]);

    assert_eq!(logged(&log), vec![
        "a begin execution", "b begin execution",
        "a begin parse", "b begin parse",
        "b end parse", "a end parse",
        "a begin validation", "b begin validation",
        "b end validation", "a end validation",
        "a begin operation", "b begin operation",
        "a begin field dog", "b begin field dog",
        "b end field dog", "a end field dog",
        "a begin complete dog", "b begin complete dog",
        "a begin field dog.name", "b begin field dog.name",
        "b end field dog.name", "a end field dog.name",
        "a begin complete dog.name", "b begin complete dog.name",
        "b end complete dog.name", "a end complete dog.name",
        "b end complete dog", "a end complete dog",
        "b end operation", "a end operation",
        "b end execution", "a end execution",
    ]);
}

#[test]
fn execution_ends_even_when_parsing_fails() {
    let log = Log::default();
    let graphql = GraphQL::builder(pets_schema())
        .instrumentation(RecordingInstrumentation::new("a", &log))
        .build();

    graphql.execute_str("{ dog {");
    assert_eq!(logged(&log), vec![
        "a begin execution",
        "a begin parse",
        "a end parse",
        "a end execution",
    ]);
}

#[test]
fn async_fields_complete_their_contexts_exactly_once() {
    let log = Log::default();
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Dog", "name", |_: &DataFetchingEnvironment<'_>| {
            let deferred = Deferred::new();
            let completer = deferred.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(5));
                completer.complete(Ok(Value::from("Rex")));
            });
            FetchedValue::from(deferred)
        })
        .build();
    let graphql = GraphQL::builder(pets_schema())
        .runtime_wiring(wiring)
        .instrumentation(RecordingInstrumentation::new("a", &log))
        .build();

    let result = graphql.execute(
        ExecutionInput::query("{ dog { name nickname } }")
            .with_root_value(Value::object([("dog", Value::object::<&str>([]))])),
    );
    assert_eq!(result.errors, vec![]);

    let log = logged(&log);
    for phase in ["field dog.name", "complete dog.name", "execution"] {
        let begins = log.iter().filter(|entry| **entry == format!("a begin {phase}")).count();
        let ends = log.iter().filter(|entry| **entry == format!("a end {phase}")).count();
        assert_eq!((begins, ends), (1, 1), "{phase}");
    }
    assert_eq!(log.last().map(String::as_str), Some("a end execution"));
}

/// Counts the fields it sees in a per-request state.
#[derive(Default)]
struct FieldCounter {
    totals: Arc<Mutex<Vec<usize>>>,
}
impl Instrumentation for FieldCounter {
    fn create_state(&self) -> Option<InstrumentationState> {
        Some(Box::new(Arc::new(AtomicUsize::new(0))))
    }

    fn begin_field(
        &self,
        params: &FieldParameters<'_>,
    ) -> InstrumentationContext<Result<Value, FieldError>> {
        if let Some(count) = params.state::<Arc<AtomicUsize>>() {
            count.fetch_add(1, Ordering::SeqCst);
        }
        InstrumentationContext::noop()
    }

    fn begin_execute_operation(
        &self,
        params: &ExecuteOperationParameters<'_>,
    ) -> InstrumentationContext<ExecutionResult> {
        let count = params.state::<Arc<AtomicUsize>>().cloned();
        let totals = Arc::clone(&self.totals);
        InstrumentationContext::new(move |_: &ExecutionResult| {
            if let Some(count) = count {
                totals.lock().unwrap().push(count.load(Ordering::SeqCst));
            }
        })
    }
}

#[test]
fn each_instrumentation_sees_only_its_own_state() {
    let first = FieldCounter::default();
    let second = FieldCounter::default();
    let first_totals = Arc::clone(&first.totals);
    let second_totals = Arc::clone(&second.totals);
    let graphql = GraphQL::builder(pets_schema())
        .instrumentation(first)
        .instrumentation(NoopInstrumentation)
        .instrumentation(second)
        .build();

    graphql.execute_str("{ dog { name } cat { name } }");
    graphql.execute_str("{ dog { name } }");

    assert_eq!(*first_totals.lock().unwrap(), vec![2, 1]);
    assert_eq!(*second_totals.lock().unwrap(), vec![2, 1]);
}

#[test]
fn chains_can_be_built_directly() {
    let log = Log::default();
    let chained = ChainedInstrumentation::default()
        .with(RecordingInstrumentation::new("a", &log))
        .with(NoopInstrumentation);
    assert!(!chained.is_empty());
    assert_eq!(chained.instrumentations().len(), 2);

    let graphql = GraphQL::builder(pets_schema())
        .instrumentation(chained)
        .build();
    graphql.execute_str("{ dog { name } }");
    assert_eq!(logged(&log).first().map(String::as_str), Some("a begin execution"));
}
