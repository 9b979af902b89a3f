mod async_execution_tests;
mod deferred_tests;
mod execution_tests;
mod mutation_tests;
mod request_errors_tests;
