use crate::execution::Deferred;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::Mutex;

#[test]
fn callback_registered_before_completion_runs_on_complete() {
    let deferred = Deferred::new();
    let received = Arc::new(Mutex::new(None));
    let received_clone = Arc::clone(&received);
    deferred.clone().on_complete(move |value: i32| {
        *received_clone.lock().unwrap() = Some(value);
    });
    assert!(received.lock().unwrap().is_none());

    assert!(deferred.complete(7));
    assert_eq!(*received.lock().unwrap(), Some(7));
}

#[test]
fn callback_registered_after_completion_runs_immediately() {
    let deferred = Deferred::completed("done");
    let received = Arc::new(Mutex::new(None));
    let received_clone = Arc::clone(&received);
    deferred.on_complete(move |value| {
        *received_clone.lock().unwrap() = Some(value);
    });
    assert_eq!(*received.lock().unwrap(), Some("done"));
}

#[test]
fn only_the_first_completion_wins() {
    let deferred = Deferred::new();
    assert!(deferred.complete(1));
    assert!(!deferred.complete(2));
    assert_eq!(deferred.wait(), Some(1));
}

#[test]
fn wait_returns_none_when_abandoned() {
    let deferred = Deferred::<i32>::new();
    let abandoned = deferred.clone();
    drop(deferred);
    let handle = std::thread::spawn(move || abandoned.wait());
    assert_eq!(handle.join().unwrap(), None);
}

#[test]
fn wait_blocks_until_another_thread_completes() {
    let deferred = Deferred::new();
    let completer = deferred.clone();
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(10));
        completer.complete(String::from("from thread"));
    });
    assert_eq!(deferred.wait().as_deref(), Some("from thread"));
}

#[test]
fn map_and_then_chain_in_order() {
    let first = Deferred::new();
    let chained = first.clone()
        .map(|value: i32| value * 2)
        .then(|value| {
            let next = Deferred::new();
            let completer = next.clone();
            std::thread::spawn(move || {
                completer.complete(value + 1);
            });
            next
        });
    assert!(!chained.is_completed());

    first.complete(20);
    assert_eq!(chained.wait(), Some(41));
}

#[test]
fn all_of_nothing_completes_immediately() {
    let all = Deferred::<i32>::all(vec![]);
    assert!(all.is_completed());
    assert_eq!(all.wait(), Some(vec![]));
}

#[test]
fn all_keeps_input_order_under_concurrent_completion() {
    let deferreds: Vec<Deferred<usize>> = (0..200).map(|_| Deferred::new()).collect();
    let all = Deferred::all(deferreds.clone());

    deferreds.into_par_iter()
        .enumerate()
        .rev()
        .for_each(|(idx, deferred)| {
            deferred.complete(idx);
        });

    assert_eq!(all.wait(), Some((0..200).collect::<Vec<_>>()));
}

#[test]
#[should_panic(expected = "only have one completion callback")]
fn second_callback_panics() {
    let deferred = Deferred::<i32>::new();
    deferred.clone().on_complete(|_| ());
    deferred.on_complete(|_| ());
}
