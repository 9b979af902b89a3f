//! Observers wrapped around every phase of a request.
//!
//! Each `begin_*` hook of an [`Instrumentation`] is called as its phase starts
//! and returns an [`InstrumentationContext`] that the engine completes exactly
//! once, with the phase's outcome, when the phase ends. This holds for phases
//! that end asynchronously too: a field whose data fetcher returns a pending
//! value completes its context on whichever thread delivers the value.

mod chained_instrumentation;
mod instrumentation;
mod instrumentation_context;
mod noop_instrumentation;
mod parameters;
mod tracing_instrumentation;

pub use chained_instrumentation::ChainedInstrumentation;
pub use instrumentation::Instrumentation;
pub use instrumentation::InstrumentationState;
pub use instrumentation_context::InstrumentationContext;
pub use noop_instrumentation::NoopInstrumentation;
pub use parameters::ExecuteOperationParameters;
pub use parameters::ExecutionParameters;
pub use parameters::FieldCompleteParameters;
pub use parameters::FieldParameters;
pub use parameters::ParseParameters;
pub use parameters::ValidationParameters;
pub use tracing_instrumentation::TracingInstrumentation;

#[cfg(test)]
mod tests;
