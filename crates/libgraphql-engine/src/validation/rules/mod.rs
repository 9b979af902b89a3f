mod arguments_of_correct_type;
mod fields_on_correct_type;
mod fragments_on_composite_type;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_operation_types;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_non_null_arguments;
mod scalar_leafs;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_fragment_names;
mod unique_operation_names;
mod unique_variable_names;
mod variable_default_values_of_correct_type;
mod variable_types_match;
mod variables_are_input_types;

pub use arguments_of_correct_type::ArgumentsOfCorrectType;
pub use fields_on_correct_type::FieldsOnCorrectType;
pub use fragments_on_composite_type::FragmentsOnCompositeType;
pub use known_argument_names::KnownArgumentNames;
pub use known_directives::KnownDirectives;
pub use known_fragment_names::KnownFragmentNames;
pub use known_operation_types::KnownOperationTypes;
pub use known_type_names::KnownTypeNames;
pub use lone_anonymous_operation::LoneAnonymousOperation;
pub use no_fragment_cycles::NoFragmentCycles;
pub use no_undefined_variables::NoUndefinedVariables;
pub use no_unused_fragments::NoUnusedFragments;
pub use no_unused_variables::NoUnusedVariables;
pub use overlapping_fields_can_be_merged::OverlappingFieldsCanBeMerged;
pub use possible_fragment_spreads::PossibleFragmentSpreads;
pub use provided_non_null_arguments::ProvidedNonNullArguments;
pub use scalar_leafs::ScalarLeafs;
pub use unique_argument_names::UniqueArgumentNames;
pub use unique_directives_per_location::UniqueDirectivesPerLocation;
pub use unique_fragment_names::UniqueFragmentNames;
pub use unique_operation_names::UniqueOperationNames;
pub use unique_variable_names::UniqueVariableNames;
pub use variable_default_values_of_correct_type::VariableDefaultValuesOfCorrectType;
pub use variable_types_match::VariableTypesMatch;
pub use variables_are_input_types::VariablesAreInputTypes;

use crate::validation::RuleFactory;

/// Factories for every built-in rule, in registration order.
pub fn standard_rules() -> Vec<RuleFactory> {
    let rules: [RuleFactory; 25] = [
        |_| Box::new(KnownOperationTypes),
        |_| Box::new(LoneAnonymousOperation::default()),
        |_| Box::new(UniqueOperationNames::default()),
        |_| Box::new(KnownTypeNames),
        |_| Box::new(FragmentsOnCompositeType),
        |_| Box::new(VariablesAreInputTypes),
        |_| Box::new(ScalarLeafs),
        |_| Box::new(FieldsOnCorrectType),
        |_| Box::new(UniqueFragmentNames::default()),
        |_| Box::new(KnownFragmentNames),
        |_| Box::new(NoUnusedFragments),
        |_| Box::new(PossibleFragmentSpreads),
        |_| Box::new(NoFragmentCycles::default()),
        |_| Box::new(UniqueVariableNames),
        |_| Box::new(NoUndefinedVariables),
        |_| Box::new(NoUnusedVariables),
        |_| Box::new(KnownDirectives),
        |_| Box::new(UniqueDirectivesPerLocation),
        |_| Box::new(KnownArgumentNames),
        |_| Box::new(UniqueArgumentNames),
        |_| Box::new(ArgumentsOfCorrectType),
        |_| Box::new(ProvidedNonNullArguments),
        |_| Box::new(VariableDefaultValuesOfCorrectType),
        |_| Box::new(VariableTypesMatch::default()),
        |_| Box::new(OverlappingFieldsCanBeMerged::default()),
    ];
    rules.to_vec()
}
