use crate::reactive::NonBlockingMutexExecutor;
use std::cell::UnsafeCell;
use std::sync::Arc;

/// State that is only ever read or written from tasks run by its own
/// [`NonBlockingMutexExecutor`].
///
/// Updates may be submitted from any thread. They never overlap and are
/// applied in submission order.
pub struct SerializedCell<T> {
    executor: NonBlockingMutexExecutor,
    state: UnsafeCell<T>,
}

// SAFETY: `state` is only accessed from tasks run by `executor`, which never
// runs two tasks at once.
unsafe impl<T: Send> Sync for SerializedCell<T> {}

impl<T: Send + 'static> SerializedCell<T> {
    pub fn new(state: T) -> Arc<Self> {
        Arc::new(Self {
            executor: NonBlockingMutexExecutor::new(),
            state: UnsafeCell::new(state),
        })
    }

    pub fn submit(
        self: &Arc<Self>,
        update: impl FnOnce(&mut T) + Send + 'static,
    ) {
        let this = Arc::clone(self);
        self.executor.execute(move || {
            // SAFETY: See the `Sync` impl above.
            let state = unsafe { &mut *this.state.get() };
            update(state);
        });
    }
}
