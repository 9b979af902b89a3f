use crate::test_utils::error_kinds;
use crate::test_utils::validate;
use crate::validation::ValidationErrorType;

#[test]
fn anonymous_operation_alone_is_valid() {
    assert_eq!(validate("{ dog { name } }"), vec![]);
}

#[test]
fn anonymous_operation_next_to_another_operation_is_invalid() {
    let errors = validate("{ dog { name } } query Q { cat { name } }");
    assert_eq!(
        error_kinds(&errors),
        vec![ValidationErrorType::LoneAnonymousOperationViolation],
    );
}

#[test]
fn operation_names_must_be_unique() {
    let errors = validate("query A { dog { name } } query A { cat { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::DuplicateOperationName]);
    assert_eq!(errors[0].locations[0].line, 1);
    assert!(errors[0].locations[0].column > 1);
}

#[test]
fn operation_must_have_a_root_type() {
    let errors = validate("subscription S { dog { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnknownOperation]);
}

#[test]
fn mutation_selects_from_mutation_root() {
    assert_eq!(validate("mutation M { renameDog(name: \"Rex\") { name } }"), vec![]);

    let errors = validate("mutation M { dog { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::FieldUndefined]);
}
