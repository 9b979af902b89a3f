use crate::test_utils::error_kinds;
use crate::test_utils::validate;
use crate::validation::ValidationErrorType;

#[test]
fn unknown_field_argument() {
    let errors = validate("{ dog { name(unknown: 1) } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnknownArgument]);
    assert_eq!(errors[0].message, "Unknown argument `unknown` on field `Dog.name`");
}

#[test]
fn unknown_directive_argument() {
    let errors = validate("{ dog @skip(if: true, unless: false) { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnknownArgument]);
    assert_eq!(errors[0].message, "Unknown argument `unless` on directive `@skip`");
}

#[test]
fn duplicate_argument_names() {
    let errors = validate("{ complicatedArgs { intArgField(intArg: 1, intArg: 2) } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::DuplicateArgumentNames]);
}

#[test]
fn missing_required_field_argument() {
    let errors = validate("{ complicatedArgs { multipleReqs(req1: 1) } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::MissingFieldArgument]);
    assert_eq!(
        errors[0].message,
        "Field `multipleReqs` is missing required argument `req2` of type `Int!`",
    );
}

#[test]
fn non_null_argument_with_default_is_optional() {
    assert_eq!(validate("{ complicatedArgs { optionalNonNullIntArgField } }"), vec![]);
}

#[test]
fn missing_required_directive_argument() {
    let errors = validate("{ dog @include { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::MissingDirectiveArgument]);
}

#[test]
fn literal_argument_of_wrong_type() {
    let errors = validate("{ complicatedArgs { intArgField(intArg: \"one\") } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::WrongType]);
}

#[test]
fn literal_arguments_of_correct_type() {
    let errors = validate(
        "{
           complicatedArgs {
             intArgField(intArg: 1)
             stringListArgField(stringListArg: [\"a\", null])
             complexArgField(complexArg: {requiredField: true, stringListField: \"x\"})
           }
           dog { doesKnowCommand(dogCommand: HEEL) }
         }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn enum_argument_given_as_string_is_wrong_type() {
    let errors = validate("{ dog { doesKnowCommand(dogCommand: \"HEEL\") } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::WrongType]);
}

#[test]
fn unknown_directive() {
    let errors = validate("{ dog @unknown { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::UnknownDirective]);
}

#[test]
fn misplaced_directive() {
    let errors = validate("query Q @include(if: true) { dog { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::MisplacedDirective]);
}

#[test]
fn repeated_directive_on_one_node() {
    let errors = validate("{ dog @include(if: true) @include(if: false) { name } }");
    assert_eq!(error_kinds(&errors), vec![ValidationErrorType::DuplicateDirectiveName]);
    assert_eq!(
        errors[0].message,
        "The directive `@include` can only be used once at this location",
    );
}

#[test]
fn same_directive_on_different_nodes() {
    let errors = validate("{ dog @skip(if: false) { name @skip(if: false) } }");
    assert_eq!(errors, vec![]);
}
