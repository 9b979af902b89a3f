use crate::reactive::NonBlockingMutexExecutor;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[test]
fn idle_executor_runs_task_inline_on_submitting_thread() {
    let executor = NonBlockingMutexExecutor::new();
    let submitting_thread = std::thread::current().id();
    let ran_on = Arc::new(Mutex::new(None));

    let ran_on_clone = Arc::clone(&ran_on);
    executor.execute(move || {
        *ran_on_clone.lock().unwrap() = Some(std::thread::current().id());
    });

    // No waiting: an idle executor has already run the task by the time
    // `execute()` returns.
    assert_eq!(*ran_on.lock().unwrap(), Some(submitting_thread));
}

#[test]
fn tasks_submitted_from_within_a_task_run_after_it() {
    let executor = Arc::new(NonBlockingMutexExecutor::new());
    let log = Arc::new(Mutex::new(vec![]));

    let executor_clone = Arc::clone(&executor);
    let log_clone = Arc::clone(&log);
    executor.execute(move || {
        log_clone.lock().unwrap().push("outer:start");
        let log_inner = Arc::clone(&log_clone);
        executor_clone.execute(move || {
            log_inner.lock().unwrap().push("inner");
        });
        log_clone.lock().unwrap().push("outer:end");
    });

    assert_eq!(*log.lock().unwrap(), vec!["outer:start", "outer:end", "inner"]);
}

#[test]
fn concurrent_submissions_never_overlap_and_none_are_lost() {
    const NUM_TASKS: usize = 10_000;

    let executor = Arc::new(NonBlockingMutexExecutor::new());
    let running = Arc::new(AtomicBool::new(false));
    let overlaps = Arc::new(AtomicUsize::new(0));
    // Only ever touched from inside executor tasks, so a `Vec` behind a
    // never-contended `Mutex` is enough to make it `Sync`.
    let task_log = Arc::new(Mutex::new(Vec::with_capacity(NUM_TASKS)));

    (0..NUM_TASKS).into_par_iter().for_each(|idx| {
        let running = Arc::clone(&running);
        let overlaps = Arc::clone(&overlaps);
        let task_log = Arc::clone(&task_log);
        executor.execute(move || {
            if running.swap(true, Ordering::SeqCst) {
                overlaps.fetch_add(1, Ordering::SeqCst);
            }
            task_log.try_lock()
                .expect("task bodies must never overlap")
                .push(idx);
            running.store(false, Ordering::SeqCst);
        });
    });

    // Every `execute()` call has returned, so every task is either run or
    // linked behind a task that a still-draining thread will reach. Once
    // rayon's `for_each` returns, all submitting threads are done, and the
    // last drainer only returns after emptying the queue.
    assert_eq!(overlaps.load(Ordering::SeqCst), 0);
    let mut task_log = task_log.lock().unwrap().clone();
    assert_eq!(task_log.len(), NUM_TASKS);
    task_log.sort_unstable();
    task_log.dedup();
    assert_eq!(task_log, (0..NUM_TASKS).collect::<Vec<_>>());
}

#[test]
fn panicking_task_is_routed_to_failure_handler_and_drain_continues() {
    let failures = Arc::new(Mutex::new(vec![]));
    let failures_clone = Arc::clone(&failures);
    let executor = Arc::new(NonBlockingMutexExecutor::with_failure_handler(
        Arc::new(move |payload| {
            let message = payload.downcast_ref::<&str>()
                .map(|s| s.to_string())
                .unwrap_or_default();
            failures_clone.lock().unwrap().push(message);
        }),
    ));
    let completed = Arc::new(AtomicUsize::new(0));

    let executor_clone = Arc::clone(&executor);
    let completed_clone = Arc::clone(&completed);
    executor.execute(move || {
        // Both of these are queued behind the running task.
        executor_clone.execute(|| panic!("task failed"));
        let completed_inner = Arc::clone(&completed_clone);
        executor_clone.execute(move || {
            completed_inner.fetch_add(1, Ordering::SeqCst);
        });
    });

    assert_eq!(*failures.lock().unwrap(), vec!["task failed".to_string()]);
    assert_eq!(completed.load(Ordering::SeqCst), 1);
}
