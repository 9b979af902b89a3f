use crate::reactive::SerializedCell;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

type Callback<T> = Box<dyn FnOnce(T) + Send>;

enum DeferredState<T> {
    Pending(Option<Callback<T>>),
    Completed(T),
    Delivered,
}

/// A one-shot handle to a value that may not exist yet.
///
/// Any clone of a [`Deferred`] may [complete](Deferred::complete) it, from any
/// thread. The value is delivered exactly once: either to the single callback
/// registered through [`Deferred::on_complete()`], or to a thread blocked in
/// [`Deferred::wait()`].
pub struct Deferred<T> {
    state: Arc<Mutex<DeferredState<T>>>,
}
impl<T: Send + 'static> Deferred<T> {
    /// Resolves once every one of `deferreds` has, yielding their values in the
    /// same order. Completions may arrive concurrently; they are collected
    /// through a [`SerializedCell`].
    pub fn all(deferreds: Vec<Deferred<T>>) -> Deferred<Vec<T>> {
        let remaining = deferreds.len();
        if remaining == 0 {
            return Deferred::completed(vec![]);
        }

        let all = Deferred::new();
        let slots = SerializedCell::new(AllSlots {
            remaining,
            values: (0..remaining).map(|_| None).collect(),
        });
        for (idx, deferred) in deferreds.into_iter().enumerate() {
            let all = all.clone();
            let slots = Arc::clone(&slots);
            deferred.on_complete(move |value| slots.submit(move |slots| {
                slots.values[idx] = Some(value);
                slots.remaining -= 1;
                if slots.remaining == 0 {
                    all.complete(slots.values.drain(..).flatten().collect());
                }
            }));
        }
        all
    }

    /// Completes this [`Deferred`]. Returns `false` (and drops `value`) if it
    /// was already completed.
    pub fn complete(&self, value: T) -> bool {
        let mut state = self.lock();
        match &mut *state {
            DeferredState::Pending(callback) => match callback.take() {
                Some(callback) => {
                    *state = DeferredState::Delivered;
                    drop(state);
                    callback(value);
                },
                None => *state = DeferredState::Completed(value),
            },
            DeferredState::Completed(_) | DeferredState::Delivered => return false,
        }
        true
    }

    pub fn completed(value: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(DeferredState::Completed(value))),
        }
    }

    pub fn is_completed(&self) -> bool {
        !matches!(&*self.lock(), DeferredState::Pending(_))
    }

    pub fn map<U: Send + 'static>(
        self,
        f: impl FnOnce(T) -> U + Send + 'static,
    ) -> Deferred<U> {
        let mapped = Deferred::new();
        let mapped_clone = mapped.clone();
        self.on_complete(move |value| {
            mapped_clone.complete(f(value));
        });
        mapped
    }

    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DeferredState::Pending(None))),
        }
    }

    /// Registers the callback that receives the value. Runs it immediately on
    /// the current thread when the value is already available, otherwise on
    /// whichever thread completes this [`Deferred`].
    ///
    /// Panics if a callback was already registered: a [`Deferred`] has exactly
    /// one consumer.
    pub fn on_complete(self, callback: impl FnOnce(T) + Send + 'static) {
        let mut state = self.lock();
        match std::mem::replace(&mut *state, DeferredState::Delivered) {
            DeferredState::Pending(None) =>
                *state = DeferredState::Pending(Some(Box::new(callback))),
            DeferredState::Completed(value) => {
                drop(state);
                callback(value);
            },
            DeferredState::Pending(Some(_)) | DeferredState::Delivered =>
                panic!("A Deferred may only have one completion callback"),
        }
    }

    /// Blocks the current thread until the value is available. Returns `None`
    /// if every other handle was dropped without completing.
    pub fn wait(self) -> Option<T> {
        let (sender, receiver) = std::sync::mpsc::channel();
        self.on_complete(move |value| {
            let _ = sender.send(value);
        });
        receiver.recv().ok()
    }

    /// Chains a step that itself completes later: the returned [`Deferred`]
    /// completes with the value of the one `f` returns.
    pub fn then<U: Send + 'static>(
        self,
        f: impl FnOnce(T) -> Deferred<U> + Send + 'static,
    ) -> Deferred<U> {
        let chained = Deferred::new();
        let chained_clone = chained.clone();
        self.on_complete(move |value| {
            f(value).on_complete(move |next| {
                chained_clone.complete(next);
            });
        });
        chained
    }

    fn lock(&self) -> MutexGuard<'_, DeferredState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
impl<T: Send + 'static> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T> std::fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &*self.state.lock().unwrap_or_else(PoisonError::into_inner) {
            DeferredState::Pending(_) => "pending",
            DeferredState::Completed(_) => "completed",
            DeferredState::Delivered => "delivered",
        };
        f.debug_struct("Deferred").field("state", &state).finish()
    }
}

struct AllSlots<T> {
    remaining: usize,
    values: Vec<Option<T>>,
}
