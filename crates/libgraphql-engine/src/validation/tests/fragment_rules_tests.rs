use crate::test_utils::error_kinds;
use crate::test_utils::validate;
use crate::validation::ValidationErrorType;

#[test]
fn spread_of_undefined_fragment() {
    let errors = validate("{ dog { ...Missing } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UndefinedFragment]);
}

#[test]
fn unused_fragment() {
    let errors = validate("{ dog { name } } fragment F on Dog { name }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnusedFragment]);
    assert_eq!(errors[0].message, "Fragment `F` is never used");
}

#[test]
fn fragments_used_only_transitively_are_used() {
    let errors = validate(
        "{ dog { ...A } }
         fragment A on Dog { ...B }
         fragment B on Dog { name }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn fragment_spreading_itself() {
    let errors = validate("{ dog { ...A } } fragment A on Dog { name ...A }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FragmentCycle]);
    assert_eq!(errors[0].message, "Fragment `A` can not spread itself");
}

#[test]
fn fragment_cycle_is_reported_once() {
    let errors = validate(
        "{ dog { ...A } }
         fragment A on Dog { ...B }
         fragment B on Dog { ...C }
         fragment C on Dog { ... on Dog { ...A } }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FragmentCycle]);
    assert_eq!(errors[0].message, "Fragment `A` can not spread itself via `B`, `C`");
}

#[test]
fn diamond_of_fragments_is_not_a_cycle() {
    let errors = validate(
        "{ dog { ...A } }
         fragment A on Dog { ...B ...C }
         fragment B on Dog { ...D }
         fragment C on Dog { ...D }
         fragment D on Dog { name }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn duplicate_fragment_names() {
    let errors = validate(
        "{ dog { ...F } }
         fragment F on Dog { name }
         fragment F on Dog { barkVolume }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::DuplicateFragmentName]);
    assert_eq!(errors[0].message, "There can be only one fragment named `F`");
    assert_eq!(errors[0].locations[0].line, 3);
}

#[test]
fn inline_fragment_on_an_unrelated_type_is_impossible() {
    let errors = validate("{ dog { ... on Cat { meows } } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::InvalidFragmentType]);
}

#[test]
fn fragment_spread_of_an_unrelated_type_is_impossible() {
    let errors = validate(
        "{ dog { ...CatFields } human { ... on Pet { name } } }
         fragment CatFields on Cat { meows }",
    );
    assert_eq!(error_kinds(&errors), vec![
        ValidationErrorType::InvalidFragmentType,
        ValidationErrorType::InvalidFragmentType,
    ]);
    assert_eq!(
        errors[0].message,
        "Fragment `CatFields` cannot be spread here as objects of type `Dog` can never \
         be of type `Cat`",
    );
}

#[test]
fn fragments_on_overlapping_abstract_types_are_possible() {
    let errors = validate(
        "{
           pet { ... on Dog { name } ...CatOrDogFields }
           catOrDog { ... on Pet { name } }
           dog { ... on Pet { name } ... on CatOrDog { __typename } }
         }
         fragment CatOrDogFields on CatOrDog { __typename }",
    );
    assert_eq!(errors, vec![]);
}
