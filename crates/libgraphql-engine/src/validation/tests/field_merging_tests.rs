use crate::test_utils::error_kinds;
use crate::test_utils::validate;
use crate::validation::ValidationErrorType;

#[test]
fn identical_fields_merge() {
    let errors = validate(
        "{
           dog {
             name
             name
             doesKnowCommand(dogCommand: SIT)
             doesKnowCommand(dogCommand: SIT)
             ... on Dog { name }
           }
         }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn same_alias_on_different_fields_conflicts() {
    let errors = validate("{ dog { x: name x: barkVolume } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldsConflict]);
    assert!(
        errors[0].message.contains("`name` and `barkVolume` are different fields"),
        "{}",
        errors[0].message,
    );
    assert_eq!(errors[0].locations.len(), 2);
    assert_eq!(errors[0].rule, "OverlappingFieldsCanBeMerged");
}

#[test]
fn same_field_with_different_arguments_conflicts() {
    let errors = validate(
        "{
           dog {
             doesKnowCommand(dogCommand: SIT)
             doesKnowCommand(dogCommand: HEEL)
           }
         }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldsConflict]);
    assert!(errors[0].message.contains("differing arguments"));
}

#[test]
fn fields_on_exclusive_object_types_may_differ() {
    let errors = validate(
        "{
           catOrDog {
             ... on Dog { volume: barkVolume }
             ... on Cat { volume: meowVolume }
           }
         }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn fields_on_exclusive_object_types_must_share_a_shape() {
    let errors = validate(
        "{
           catOrDog {
             ... on Dog { x: barkVolume }
             ... on Cat { x: name }
           }
         }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldsConflict]);
    assert!(errors[0].message.contains("conflicting types `Int` and `String`"));
}

#[test]
fn conflicting_subfields_are_reported_on_the_parent_fields() {
    let errors = validate("{ dog { name } dog { name: nickname } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldsConflict]);
    assert!(
        errors[0].message.contains(
            "subfields `name` conflict because `name` and `nickname` are different fields",
        ),
        "{}",
        errors[0].message,
    );
    assert_eq!(errors[0].locations.len(), 4);
}

#[test]
fn conflicts_through_fragment_spreads() {
    let errors = validate(
        "{ dog { name ...F } }
         fragment F on Dog { name: nickname }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldsConflict]);
}

#[test]
fn conflict_inside_a_shared_fragment_is_reported_once() {
    let errors = validate(
        "{ dog { ...F } pet { ...F } }
         fragment F on Dog { x: name x: nickname }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldsConflict]);
}
