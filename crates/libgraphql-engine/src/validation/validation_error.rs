use crate::loc::SourceLocation;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ValidationErrorType {
    BadValueForDefaultArg,
    DuplicateArgumentNames,
    DuplicateDirectiveName,
    DuplicateFragmentName,
    DuplicateOperationName,
    DuplicateVariableName,
    FieldsConflict,
    FieldUndefined,
    FragmentCycle,
    FragmentTypeConditionInvalid,
    InlineFragmentTypeConditionInvalid,
    InvalidFragmentType,
    LoneAnonymousOperationViolation,
    MisplacedDirective,
    MissingDirectiveArgument,
    MissingFieldArgument,
    NonInputTypeOnVariable,
    SubSelectionNotAllowed,
    SubSelectionRequired,
    UndefinedFragment,
    UndefinedVariable,
    UnknownArgument,
    UnknownDirective,
    UnknownOperation,
    UnknownType,
    UnusedFragment,
    UnusedVariable,
    VariableTypeMismatch,
    WrongType,
}

/// A problem found in a document by one validation [`Rule`](crate::validation::Rule).
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorType,
    pub locations: Vec<SourceLocation>,
    pub message: String,

    /// The name of the rule that reported this error.
    pub rule: &'static str,
}
impl ValidationError {
    pub(crate) fn document_order_key(&self) -> Option<(usize, usize)> {
        self.locations.first().map(SourceLocation::document_order_key)
    }
}

/// Where rules report errors. Every error is stamped with the name of the rule
/// being run when it was added.
#[derive(Debug, Default)]
pub struct ValidationErrorCollector {
    current_rule: &'static str,
    errors: Vec<ValidationError>,
}
impl ValidationErrorCollector {
    pub fn add_error(
        &mut self,
        kind: ValidationErrorType,
        location: Option<&SourceLocation>,
        message: impl Into<String>,
    ) {
        self.add_error_at(kind, location.into_iter().cloned().collect(), message);
    }

    pub fn add_error_at(
        &mut self,
        kind: ValidationErrorType,
        locations: Vec<SourceLocation>,
        message: impl Into<String>,
    ) {
        self.errors.push(ValidationError {
            kind,
            locations,
            message: message.into(),
            rule: self.current_rule,
        });
    }

    pub fn contains_kind(&self, kind: ValidationErrorType) -> bool {
        self.errors.iter().any(|err| err.kind == kind)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub(crate) fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub(crate) fn set_current_rule(&mut self, rule: &'static str) {
        self.current_rule = rule;
    }
}
