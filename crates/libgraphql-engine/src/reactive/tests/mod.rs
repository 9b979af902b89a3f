mod non_blocking_mutex_executor_tests;
mod serialized_cell_tests;
