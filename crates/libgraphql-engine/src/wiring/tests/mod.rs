mod noop_wiring_factory_tests;
mod runtime_wiring_tests;
