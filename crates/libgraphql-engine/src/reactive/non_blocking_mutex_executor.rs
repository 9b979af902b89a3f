use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::ptr;
use std::sync::Arc;
use std::sync::atomic::AtomicPtr;
use std::sync::atomic::Ordering;

type Task = Box<dyn FnOnce() + Send>;

/// Receives the panic payload of any task that panics while running inside a
/// [`NonBlockingMutexExecutor`].
pub type FailureHandler = Arc<dyn Fn(Box<dyn Any + Send>) + Send + Sync>;

struct RunNode {
    next: AtomicPtr<RunNode>,
    task: Option<Task>,
}
impl RunNode {
    fn new_raw(task: Task) -> *mut RunNode {
        Box::into_raw(Box::new(RunNode {
            next: AtomicPtr::new(ptr::null_mut()),
            task: Some(task),
        }))
    }
}

/// Runs submitted tasks one at a time, in submission order, without ever
/// blocking a submitting thread on a lock.
///
/// Pending tasks form a singly-linked queue whose tail is `last`. Submitting
/// into an idle executor runs the task (and anything queued behind it) inline
/// on the submitting thread. Submitting into a busy executor only links the
/// new task behind the current tail and returns; whichever thread is already
/// draining the queue will run it.
///
/// Tasks should be short. A task runs on whatever thread happened to start
/// the current drain.
pub struct NonBlockingMutexExecutor {
    failure_handler: FailureHandler,
    last: AtomicPtr<RunNode>,
}
impl NonBlockingMutexExecutor {
    pub fn new() -> Self {
        Self::with_failure_handler(Arc::new(log_task_panic))
    }

    pub fn with_failure_handler(failure_handler: FailureHandler) -> Self {
        Self {
            failure_handler,
            last: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub fn execute(&self, task: impl FnOnce() + Send + 'static) {
        let node = RunNode::new_raw(Box::new(task));
        let prev = self.last.swap(node, Ordering::AcqRel);
        if prev.is_null() {
            self.run_all(node);
        } else {
            // SAFETY: `prev` stays allocated until the draining thread has
            // observed this link. It spins on a null `next` rather than
            // freeing a node that is no longer the tail.
            unsafe { (*prev).next.store(node, Ordering::Release) };
        }
    }

    fn run_all(&self, mut current: *mut RunNode) {
        loop {
            // SAFETY: Only the draining thread dereferences `current` mutably,
            // and exactly one thread drains at a time.
            let task = unsafe { (*current).task.take() };
            if let Some(task) = task {
                self.run_task(task);
            }

            let mut next = unsafe { (*current).next.load(Ordering::Acquire) };
            if next.is_null() {
                if self.last.compare_exchange(
                    current,
                    ptr::null_mut(),
                    Ordering::AcqRel,
                    Ordering::Acquire,
                ).is_ok() {
                    // SAFETY: `current` was the tail and is now unreachable.
                    drop(unsafe { Box::from_raw(current) });
                    return;
                }

                // A submitter has swapped itself in as the new tail but has not
                // linked itself behind `current` yet.
                loop {
                    next = unsafe { (*current).next.load(Ordering::Acquire) };
                    if !next.is_null() {
                        break;
                    }
                    std::hint::spin_loop();
                }
            }

            // SAFETY: `next` is linked, so no submitter still refers to
            // `current`.
            drop(unsafe { Box::from_raw(current) });
            current = next;
        }
    }

    fn run_task(&self, task: Task) {
        if let Err(payload) = std::panic::catch_unwind(AssertUnwindSafe(task)) {
            (self.failure_handler)(payload);
        }
    }
}
impl Default for NonBlockingMutexExecutor {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for NonBlockingMutexExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonBlockingMutexExecutor")
            .field("idle", &self.last.load(Ordering::Acquire).is_null())
            .finish()
    }
}

fn log_task_panic(payload: Box<dyn Any + Send>) {
    let message = payload.downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "<non-string panic payload>".to_string());
    log::error!("Task panicked inside NonBlockingMutexExecutor: {message}");
}
