use crate::test_utils::error_kinds;
use crate::test_utils::validate;
use crate::validation::ValidationErrorType;

#[test]
fn unknown_field_is_undefined() {
    let errors = validate("{ dog { meows } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldUndefined]);
    assert_eq!(errors[0].message, "Field `meows` is not defined on type `Dog`");
}

#[test]
fn typename_is_selectable_on_every_composite_type() {
    let errors = validate(
        "{ __typename dog { __typename } pet { __typename } catOrDog { __typename } }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn union_members_fields_need_a_fragment() {
    let errors = validate("{ catOrDog { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldUndefined]);

    assert_eq!(validate("{ catOrDog { ... on Dog { name } } }"), vec![]);
}

#[test]
fn interface_fields_are_selectable() {
    assert_eq!(validate("{ pet { name ... on Cat { meowVolume } } }"), vec![]);
}

#[test]
fn leaf_field_must_not_have_a_selection_set() {
    let errors = validate("{ dog { barkVolume { value } } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::SubSelectionNotAllowed]);
}

#[test]
fn composite_field_must_have_a_selection_set() {
    let errors = validate("{ dog { owner } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::SubSelectionRequired]);
    assert_eq!(errors[0].message, "Field `owner` of type `Human` must have a selection set");
}

#[test]
fn inline_fragment_must_condition_on_a_composite_type() {
    let errors = validate("{ dog { ... on Boolean { name } } }");
    assert_eq!(
        error_kinds(&errors),
        vec![ValidationErrorType::InlineFragmentTypeConditionInvalid],
    );
}

#[test]
fn fragment_must_condition_on_a_composite_type() {
    let errors = validate("{ dog { ...F } } fragment F on DogCommand { name }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FragmentTypeConditionInvalid]);
}

#[test]
fn fragment_on_unknown_type_is_an_unknown_type() {
    let errors = validate("{ dog { ...F } } fragment F on Wolf { name }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnknownType]);
}
