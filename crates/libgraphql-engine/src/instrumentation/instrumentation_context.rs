type OnCompleted<T> = Box<dyn FnOnce(&T) + Send>;

/// The completion handle returned by each `begin_*` hook of an
/// [`Instrumentation`](crate::instrumentation::Instrumentation).
///
/// [`on_completed()`](InstrumentationContext::on_completed) consumes the
/// context, so it runs at most once.
pub struct InstrumentationContext<T> {
    on_completed: Option<OnCompleted<T>>,
}
impl<T> InstrumentationContext<T> {
    pub fn new(on_completed: impl FnOnce(&T) + Send + 'static) -> Self {
        Self {
            on_completed: Some(Box::new(on_completed)),
        }
    }

    pub fn noop() -> Self {
        Self {
            on_completed: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.on_completed.is_none()
    }

    pub fn on_completed(self, result: &T) {
        if let Some(on_completed) = self.on_completed {
            on_completed(result);
        }
    }
}
impl<T: 'static> InstrumentationContext<T> {
    /// Combines contexts that were begun in order: completing the result
    /// completes them in reverse, so the first one begun is the last one
    /// completed.
    pub fn nested(contexts: Vec<InstrumentationContext<T>>) -> Self {
        let contexts: Vec<_> = contexts.into_iter()
            .filter(|ctx| !ctx.is_noop())
            .collect();
        if contexts.is_empty() {
            return Self::noop();
        }
        Self::new(move |result| {
            for ctx in contexts.into_iter().rev() {
                ctx.on_completed(result);
            }
        })
    }
}
impl<T> std::default::Default for InstrumentationContext<T> {
    fn default() -> Self {
        Self::noop()
    }
}
impl<T> std::fmt::Debug for InstrumentationContext<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentationContext")
            .field("noop", &self.is_noop())
            .finish()
    }
}
