mod argument_rules_tests;
mod field_merging_tests;
mod field_rules_tests;
mod fragment_rules_tests;
mod operation_rules_tests;
mod variable_rules_tests;
