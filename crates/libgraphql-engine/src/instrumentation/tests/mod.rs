mod chained_instrumentation_tests;
mod instrumentation_context_tests;
mod tracing_instrumentation_tests;
