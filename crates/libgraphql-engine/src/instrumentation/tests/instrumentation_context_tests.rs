use crate::instrumentation::InstrumentationContext;
use std::sync::Arc;
use std::sync::Mutex;

fn recording(log: &Arc<Mutex<Vec<String>>>, name: &str) -> InstrumentationContext<i32> {
    let log = Arc::clone(log);
    let name = name.to_string();
    InstrumentationContext::new(move |result: &i32| {
        log.lock().unwrap().push(format!("{name}: {result}"));
    })
}

#[test]
fn noop_context_ignores_completion() {
    let ctx = InstrumentationContext::<i32>::noop();
    assert!(ctx.is_noop());
    ctx.on_completed(&1);
}

#[test]
fn nested_contexts_complete_in_reverse_order() {
    let log = Arc::new(Mutex::new(vec![]));
    let nested = InstrumentationContext::nested(vec![
        recording(&log, "outer"),
        InstrumentationContext::noop(),
        recording(&log, "inner"),
    ]);
    assert!(!nested.is_noop());

    nested.on_completed(&42);
    assert_eq!(*log.lock().unwrap(), vec!["inner: 42", "outer: 42"]);
}

#[test]
fn nesting_only_noops_is_a_noop() {
    let nested = InstrumentationContext::<i32>::nested(vec![
        InstrumentationContext::noop(),
        InstrumentationContext::default(),
    ]);
    assert!(nested.is_noop());
}
