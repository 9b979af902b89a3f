mod coercing_tests;
mod coercion_tests;
