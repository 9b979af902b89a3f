use crate::test_utils::error_kinds;
use crate::test_utils::validate;
use crate::validation::ValidationErrorType;

#[test]
fn undefined_variable() {
    let errors = validate("query Q { complicatedArgs { intArgField(intArg: $x) } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UndefinedVariable]);
    assert_eq!(errors[0].message, "Variable `$x` is not defined by operation `Q`");
}

#[test]
fn undefined_variable_inside_a_spread_fragment() {
    let errors = validate(
        "query Q { complicatedArgs { ...F } }
         fragment F on ComplicatedArgs { intArgField(intArg: $x) }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UndefinedVariable]);
}

#[test]
fn variable_used_only_in_a_fragment_is_used() {
    let errors = validate(
        "query Q($x: Int) { complicatedArgs { ...F } }
         fragment F on ComplicatedArgs { intArgField(intArg: $x) }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn unused_variable() {
    let errors = validate("query Q($x: Int) { dog { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnusedVariable]);
}

#[test]
fn variable_of_output_type() {
    let errors = validate("query Q($x: Dog) { dog { name } }");
    let mut kinds = error_kinds(&errors);
    kinds.sort_by_key(|kind| format!("{kind:?}"));
    assert_eq!(kinds, vec![
        ValidationErrorType::NonInputTypeOnVariable,
        ValidationErrorType::UnusedVariable,
    ]);
}

#[test]
fn variable_of_mismatched_type() {
    let errors = validate(
        "query Q($x: String) { complicatedArgs { intArgField(intArg: $x) } }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::VariableTypeMismatch]);
    assert_eq!(
        errors[0].message,
        "Variable `$x` of type `String` used in position expecting type `Int`",
    );
}

#[test]
fn non_null_variable_in_nullable_position() {
    let errors = validate(
        "query Q($x: Int!) { complicatedArgs { intArgField(intArg: $x) } }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn nullable_variable_in_non_null_position() {
    let errors = validate(
        "query Q($x: Int) { complicatedArgs { nonNullIntArgField(nonNullIntArg: $x) } }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::VariableTypeMismatch]);
}

#[test]
fn nullable_variable_with_default_in_non_null_position() {
    let errors = validate(
        "query Q($x: Int = 1) { complicatedArgs { nonNullIntArgField(nonNullIntArg: $x) } }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn nullable_variable_in_non_null_position_with_default() {
    let errors = validate(
        "query Q($x: Int) { complicatedArgs { optionalNonNullIntArgField(intArg: $x) } }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn variable_inside_list_literal() {
    let errors = validate(
        "query Q($x: Int) { complicatedArgs { stringListArgField(stringListArg: [$x]) } }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::VariableTypeMismatch]);
}

#[test]
fn variable_inside_input_object_literal() {
    let errors = validate(
        "query Q($b: Boolean) {
           complicatedArgs { complexArgField(complexArg: {requiredField: $b}) }
         }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::VariableTypeMismatch]);

    let errors = validate(
        "query Q($b: Boolean!) {
           complicatedArgs { complexArgField(complexArg: {requiredField: $b}) }
         }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn mismatch_inside_fragment_is_checked_per_operation() {
    let errors = validate(
        "query A($x: String) { complicatedArgs { ...F } }
         query B($x: Int) { complicatedArgs { ...F } }
         fragment F on ComplicatedArgs { intArgField(intArg: $x) }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::VariableTypeMismatch]);
}

#[test]
fn duplicate_variable_names() {
    let errors = validate(
        "query Q($a: Int, $a: Int) { complicatedArgs { intArgField(intArg: $a) } }",
    );
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::DuplicateVariableName]);
    assert_eq!(errors[0].message, "There can be only one variable named `$a`");
}
