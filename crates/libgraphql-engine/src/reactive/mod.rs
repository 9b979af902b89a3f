//! Non-blocking serialization of short tasks submitted from many threads.

mod non_blocking_mutex_executor;
mod serialized_cell;

pub use non_blocking_mutex_executor::FailureHandler;
pub use non_blocking_mutex_executor::NonBlockingMutexExecutor;
pub use serialized_cell::SerializedCell;

#[cfg(test)]
mod tests;
